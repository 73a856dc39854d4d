use std::{fmt, sync::Arc};

use log::{debug, error, info};
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::{json, Value};

use crate::{
    directive::{Action, Directive, MediaType},
    notice::Notifier,
};

/// Verb appended after the media type. Playlists pause instead of stopping.
pub fn action_segment(directive: &Directive) -> &'static str {
    match (directive.kind, directive.action) {
        (MediaType::Playlist, Action::Stop) => "playback/pause",
        (_, action) => action.as_str(),
    }
}

#[derive(Clone, Debug)]
pub struct ControlRequest {
    pub method: Method,
    pub path: String,
    pub url: Url,
    pub body: Value,
}

impl ControlRequest {
    pub fn new(directive: &Directive, base_url: &Url) -> Self {
        let path = format!(
            "{}/{}/{}",
            base_url.path().trim_end_matches('/'),
            directive.kind,
            action_segment(directive)
        );

        let mut url = base_url.clone();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        Self {
            method: Method::PUT,
            path,
            url,
            body: json!({ "id": directive.id }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NotFound { path: String },
    ServerError { status: u16 },
    Played { kind: MediaType, id: String },
    Stopped { kind: MediaType, id: String },
    RequestFailed { message: String },
}

impl Outcome {
    pub fn from_status(status: StatusCode, path: &str, directive: &Directive) -> Self {
        match status {
            StatusCode::NOT_FOUND => Outcome::NotFound {
                path: path.to_string(),
            },
            StatusCode::OK | StatusCode::NO_CONTENT => match directive.action {
                Action::Play => Outcome::Played {
                    kind: directive.kind,
                    id: directive.id.clone(),
                },
                Action::Stop => Outcome::Stopped {
                    kind: directive.kind,
                    id: directive.id.clone(),
                },
            },
            status => Outcome::ServerError {
                status: status.as_u16(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Played { .. } | Outcome::Stopped { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotFound { path } => write!(f, "{} not found", path),
            Outcome::ServerError { status } => write!(f, "Error - {}", status),
            Outcome::Played { kind, id } => write!(f, "Playing {} {}", kind, id),
            Outcome::Stopped { kind, id } => write!(f, "Stopped {} {}", kind, id),
            Outcome::RequestFailed { message } => write!(f, "Request failed - {}", message),
        }
    }
}

/// Sends control requests to the Kenku FM remote API and reports the result
/// through a [`Notifier`].
pub struct Dispatcher {
    client: Client,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_client(Client::new(), notifier)
    }

    pub fn with_client(client: Client, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Issues one request. Every failure ends up as an [`Outcome`], never
    /// as an error.
    pub async fn dispatch(&self, directive: &Directive, base_url: &Url) -> Outcome {
        let request = ControlRequest::new(directive, base_url);
        debug!("{} {} {}", request.method, request.url, request.body);

        let response = self
            .client
            .request(request.method.clone(), request.url.clone())
            .json(&request.body)
            .send()
            .await;

        let outcome = match response {
            Ok(response) => {
                info!("{} responded {}", request.path, response.status());
                Outcome::from_status(response.status(), &request.path, directive)
            }
            Err(e) => {
                error!("Kenku request error: {}", e);
                Outcome::RequestFailed {
                    message: e.to_string(),
                }
            }
        };

        self.notifier.notify(&outcome.to_string());
        outcome
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    use std::{
        net::SocketAddr,
        sync::{Arc, Mutex},
    };

    use serde_json::Value;
    use tokio::sync::oneshot;
    use warp::{http::StatusCode, path::FullPath, Filter};

    #[derive(Clone, Debug)]
    pub struct Received {
        pub path: String,
        pub content_type: Option<String>,
        pub body: Value,
    }

    /// Fake Kenku FM server answering every `PUT` with one fixed status.
    /// Shuts down when dropped.
    pub struct TestServer {
        pub addr: SocketAddr,
        received: Arc<Mutex<Vec<Received>>>,
        _shutdown: oneshot::Sender<()>,
    }

    impl TestServer {
        pub fn base_url(&self) -> String {
            format!("http://{}/v1", self.addr)
        }

        pub fn received(&self) -> Vec<Received> {
            self.received.lock().unwrap().clone()
        }
    }

    pub fn respond_with(status: u16) -> TestServer {
        let status = StatusCode::from_u16(status).unwrap();
        let received = Arc::new(Mutex::new(Vec::new()));

        let log = received.clone();
        let routes = warp::put()
            .and(warp::path::full())
            .and(warp::header::optional::<String>("content-type"))
            .and(warp::body::json())
            .map(move |path: FullPath, content_type: Option<String>, body: Value| {
                log.lock().unwrap().push(Received {
                    path: path.as_str().to_string(),
                    content_type,
                    body,
                });
                warp::reply::with_status(warp::reply(), status)
            });

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (addr, server) =
            warp::serve(routes).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });
        tokio::spawn(server);

        TestServer {
            addr,
            received,
            _shutdown: shutdown_tx,
        }
    }
}
