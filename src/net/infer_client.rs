//! WebSocket inference channel to the Eternal host.
//!
//! `spawn_infer_client` owns the `/ws` connection lifecycle: it forwards
//! queued inference jobs as JSON text and applies inbound text to the
//! active chat turn. The host streams the accumulated response rendering
//! on every line, so inbound text replaces the turn's response rather than
//! appending to it.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are logged and absorbed by the reconnect loop;
//! `JobSender::send` reports a closed channel as `false` so callers can
//! log and continue.

#[cfg(test)]
#[path = "infer_client_test.rs"]
mod infer_client_test;

use super::types::InferenceJob;
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;

/// Handle for submitting inference jobs to the websocket channel.
///
/// The default value is disconnected; `send` on it reports failure.
#[derive(Clone, Default)]
pub struct JobSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl JobSender {
    /// Queue a job for the channel. Returns `false` when no connection
    /// task is running or the channel has closed.
    pub fn send(&self, job: &InferenceJob) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(tx) = self.tx.as_ref() else {
                return false;
            };
            let Some(payload) = encode_job(job) else {
                return false;
            };
            tx.unbounded_send(payload).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job;
            false
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_job(job: &InferenceJob) -> Option<String> {
    serde_json::to_string(job).ok()
}

#[cfg(any(test, feature = "hydrate"))]
fn infer_socket_url(page_href: &str, host: &str) -> String {
    let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}/ws")
}

/// Spawn the websocket lifecycle as a local async task and return the
/// sending handle.
///
/// The task connects to the host, forwards queued jobs, applies inbound
/// response snapshots, and reconnects on disconnect with exponential
/// backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_infer_client(chat: leptos::prelude::RwSignal<ChatState>) -> JobSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(infer_client_loop(chat, rx));

    JobSender { tx: Some(tx) }
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn infer_client_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        let page_href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:8080".to_owned());
        let url = infer_socket_url(&page_href, &host);

        match connect_and_run(&url, chat, &rx).await {
            Ok(()) => {
                leptos::logging::log!("inference socket closed");
            }
            Err(e) => {
                leptos::logging::warn!("inference socket error: {e}");
            }
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the websocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward queued jobs from our channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(payload) = rx_borrow.next().await {
            if ws_write.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: each text message is the latest response rendering.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    chat.update(|c| {
                        if !c.apply_snapshot(&text) {
                            leptos::logging::warn!("response snapshot with no active turn dropped");
                        }
                    });
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("inference socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
