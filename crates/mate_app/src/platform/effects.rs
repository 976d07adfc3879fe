use std::sync::mpsc;
use std::thread;

use mate_core::{ConversionFailure, ConversionResult, DownloadLocations, Effect, Msg};
use mate_engine::{ConversionError, EngineEvent, EngineHandle, FailureKind, ServiceSettings, VideoInfo};
use mate_logging::{mate_info, mate_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings, event_tx: mpsc::Sender<AppEvent>) -> Self {
        mate_info!("Conversion service endpoint {}", settings.endpoint);
        Self::with_engine(EngineHandle::new(settings), event_tx)
    }

    /// Runs effects on an already built engine, e.g. one backed by a fake service.
    pub fn with_engine(engine: EngineHandle, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestConversion { request_id, url } => {
                    self.engine.convert(request_id, url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || {
            while let Some(event) = engine.recv() {
                match event {
                    EngineEvent::ConversionCompleted { request_id, result } => {
                        let outcome = match result {
                            Ok(info) => Ok(map_video_info(info)),
                            Err(err) => {
                                mate_warn!("Request {} failed: {}", request_id, err);
                                Err(map_failure(err))
                            }
                        };
                        let msg = Msg::ConversionFinished {
                            request_id,
                            outcome,
                        };
                        if event_tx.send(AppEvent::Core(msg)).is_err() {
                            return;
                        }
                    }
                }
            }
            mate_warn!("Conversion engine stopped; no further completions");
        });
    }
}

fn map_video_info(info: VideoInfo) -> ConversionResult {
    ConversionResult {
        title: info.title,
        thumbnail_url: info.thumbnail,
        download_locations: DownloadLocations {
            mp3: info.download_url_mp3,
            mp4: info.download_url_mp4,
        },
    }
}

fn map_failure(err: ConversionError) -> ConversionFailure {
    if let Some(message) = err.service_message() {
        return ConversionFailure::service(message);
    }
    match err.kind {
        FailureKind::MalformedResponse => ConversionFailure::malformed(),
        FailureKind::Timeout => ConversionFailure::timeout(),
        FailureKind::ServiceReported { .. }
        | FailureKind::InvalidEndpoint
        | FailureKind::HttpStatus(_)
        | FailureKind::Network
        | FailureKind::TooLarge { .. } => ConversionFailure::transport(None),
    }
}
