use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use mate_logging::{mate_debug, mate_error};

use crate::client::{ConversionService, ReqwestConversionService, ServiceSettings};
use crate::{ConversionError, EngineEvent, FailureKind, RequestId};

enum EngineCommand {
    Convert { request_id: RequestId, url: String },
}

/// Runs conversion calls on a background tokio runtime.
///
/// Every `convert` is answered by exactly one `EngineEvent::ConversionCompleted`
/// with the same id. Calls are never cancelled; ordering between answers
/// follows completion order, not submission order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings) -> Self {
        Self::with_service(Arc::new(ReqwestConversionService::new(settings)))
    }

    pub fn with_service(service: Arc<dyn ConversionService>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    mate_error!("Failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, event_tx, err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(service.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn convert(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Convert {
            request_id,
            url: url.into(),
        });
    }

    /// Blocks until the next event. `None` once the worker is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    service: &dyn ConversionService,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Convert { request_id, url } => {
            mate_debug!("Engine converting request_id={}", request_id);
            let result = service.convert(&url).await;
            let _ = event_tx.send(EngineEvent::ConversionCompleted { request_id, result });
        }
    }
}

fn fail_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: String,
) {
    while let Ok(EngineCommand::Convert { request_id, .. }) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::ConversionCompleted {
            request_id,
            result: Err(ConversionError::new(FailureKind::Network, reason.clone())),
        });
    }
}
