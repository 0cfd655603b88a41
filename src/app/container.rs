use std::sync::Arc;

use crate::adapters::{ConsoleAdapter, FFmpegAdapter, FFprobeAdapter, FragcutConfig};
use crate::app::{clip_interactor::ClipInteractor, inspect_interactor::InspectInteractor};
use crate::ports::{ExecutePort, ProbePort, PromptPort};

pub trait AppContainer {
    fn clip_interactor(&self) -> Arc<ClipInteractor>;
    fn inspect_interactor(&self) -> Arc<InspectInteractor>;
}

/// Wires the ffprobe, ffmpeg and console adapters into the interactors
pub struct DefaultAppContainer {
    clip_interactor: Arc<ClipInteractor>,
    inspect_interactor: Arc<InspectInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &FragcutConfig, dry_run: bool) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(config.ffprobe_path.clone()));
        let execute_port = Arc::new(FFmpegAdapter::new(config.ffmpeg_path.clone()));
        let prompt_port = Arc::new(ConsoleAdapter::new());

        let clip_interactor = Arc::new(ClipInteractor::new(
            Arc::clone(&probe_port) as Arc<dyn ProbePort>,
            execute_port as Arc<dyn ExecutePort>,
            prompt_port as Arc<dyn PromptPort>,
            config.engine_config(),
            dry_run,
        ));

        let inspect_interactor = Arc::new(InspectInteractor::new(probe_port as Arc<dyn ProbePort>));

        Self {
            clip_interactor,
            inspect_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn clip_interactor(&self) -> Arc<ClipInteractor> {
        Arc::clone(&self.clip_interactor)
    }

    fn inspect_interactor(&self) -> Arc<InspectInteractor> {
        Arc::clone(&self.inspect_interactor)
    }
}
