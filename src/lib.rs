pub mod block;
pub mod config;
pub mod directive;
pub mod dispatch;
pub mod error;
pub mod notice;
pub mod render;

pub use block::{extract_blocks, parse_block, BLOCK_TAG};
pub use config::{Config, ConfigStore, JsonConfigStore};
pub use directive::{parse_directive, Action, Directive, MediaType};
pub use dispatch::{Dispatcher, Outcome};
pub use error::KenkuError;
pub use notice::{Notifier, RecordingNotifier, TerminalNotifier};
pub use render::{render_block, render_note, Button, ButtonList, Renderer};
