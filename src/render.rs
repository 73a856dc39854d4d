use std::sync::Arc;

use log::{debug, info};
use tokio::task::JoinHandle;

use crate::{
    block::{extract_blocks, parse_block},
    config::parse_base_url,
    dispatch::{Dispatcher, Outcome},
    error::KenkuError,
};

/// Bound to a button. Spawns one request per call, so it must run inside a
/// tokio runtime.
pub type ClickHandler = Box<dyn Fn() -> JoinHandle<Outcome> + Send + Sync + 'static>;

/// Surface buttons are drawn on.
pub trait Renderer {
    fn create_button(&mut self, text: String, on_click: ClickHandler);
}

pub struct Button {
    pub text: String,
    on_click: ClickHandler,
}

impl Button {
    pub fn click(&self) -> JoinHandle<Outcome> {
        (self.on_click)()
    }

    /// Clicks and waits for the request. Fails only if the request task
    /// itself died; HTTP and transport failures are reported as [`Outcome`]s.
    pub async fn press(&self) -> Result<Outcome, KenkuError> {
        Ok(self.click().await?)
    }
}

/// Keeps rendered buttons in creation order.
#[derive(Default)]
pub struct ButtonList {
    buttons: Vec<Button>,
}

impl ButtonList {
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// 1-based lookup, as buttons are numbered when listed.
    pub fn get(&self, index: usize) -> Result<&Button, KenkuError> {
        index
            .checked_sub(1)
            .and_then(|i| self.buttons.get(i))
            .ok_or(KenkuError::NoSuchButton {
                index,
                count: self.buttons.len(),
            })
    }
}

impl Renderer for ButtonList {
    fn create_button(&mut self, text: String, on_click: ClickHandler) {
        self.buttons.push(Button { text, on_click });
    }
}

/// Renders one button per directive of a `kenku` block body and returns how
/// many were created. The base URL is parsed once here and captured by every
/// button, so later config changes only affect newly rendered blocks.
pub fn render_block(
    source: &str,
    renderer: &mut dyn Renderer,
    base_url: &str,
    dispatcher: &Arc<Dispatcher>,
) -> Result<usize, KenkuError> {
    let base_url = parse_base_url(base_url)?;
    let directives = parse_block(source);

    for directive in &directives {
        debug!("Creating Kenku button with params: {:?}", directive);

        let directive = directive.clone();
        let base_url = base_url.clone();
        let dispatcher = dispatcher.clone();
        let text = directive.button_text();

        renderer.create_button(
            text,
            Box::new(move || {
                info!("Kenku button clicked: {:?}", directive);
                let directive = directive.clone();
                let base_url = base_url.clone();
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move { dispatcher.dispatch(&directive, &base_url).await })
            }),
        );
    }

    Ok(directives.len())
}

/// Renders every `kenku` block of a markdown note into the same renderer.
pub fn render_note(
    markdown: &str,
    renderer: &mut dyn Renderer,
    base_url: &str,
    dispatcher: &Arc<Dispatcher>,
) -> Result<usize, KenkuError> {
    let mut count = 0;
    for block in extract_blocks(markdown) {
        count += render_block(&block, renderer, base_url, dispatcher)?;
    }
    Ok(count)
}
