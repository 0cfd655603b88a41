// Clip interactor - Orchestrates the fragment cutting use case

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::engine::{BuildResult, EngineConfig, StreamCopyClipper};
use crate::probe::ProbeStream;
use crate::ports::*;
use crate::streams::{CatalogBuilder, StreamCatalog};

const SEPARATOR: &str = "--------------------------------------------------------";

const TIME_EXAMPLES: &[&str] = &[
    "75 -> 75 seconds",
    "12.100 -> 12 seconds, 100 milliseconds",
    "1:12 -> 1 minute, 12 seconds",
    "1:12.50 -> 1 minute, 12 seconds, 500 milliseconds",
    "1:01:12.500 -> 1 hour, 1 minute, 12 seconds, 500 milliseconds",
];

/// What happened to a built command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipOutcome {
    pub command: BuildResult,
    /// `false` for dry runs
    pub executed: bool,
}

/// Interactor for the fragment cutting use case
pub struct ClipInteractor {
    probe_port: Arc<dyn ProbePort>,
    execute_port: Arc<dyn ExecutePort>,
    prompt_port: Arc<dyn PromptPort>,
    clipper: StreamCopyClipper,
    strict_selection: bool,
    dry_run: bool,
}

impl ClipInteractor {
    /// Create new clip interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        prompt_port: Arc<dyn PromptPort>,
        engine_config: EngineConfig,
        dry_run: bool,
    ) -> Self {
        Self {
            probe_port,
            execute_port,
            prompt_port,
            strict_selection: engine_config.strict_stream_selection,
            clipper: StreamCopyClipper::new(engine_config),
            dry_run,
        }
    }

    /// Ask for everything on the console, then cut.
    ///
    /// Probe failures are logged and degrade to a zero duration or an empty
    /// stream list; invalid answers are asked again.
    pub fn run_interactive(&self) -> Result<ClipOutcome, DomainError> {
        self.say("Examples of valid time input:");
        for example in TIME_EXAMPLES {
            self.say(example);
        }
        self.say(SEPARATOR);

        let input_path = self.ask_input_path()?;
        self.say(SEPARATOR);

        let duration = self.probe_duration(&input_path);
        self.say(&format!("Video duration: {}", duration));
        self.say(SEPARATOR);

        let start = self.ask_time("Enter the start time (leave empty for 0)")?;
        let end = self.ask_end_time(&start)?;
        self.say(SEPARATOR);

        if TimeRangeRules::starts_past_end(start.value, duration) {
            warn!(start = %start.value, %duration, "Start time lies past the end of the file");
            self.say(&format!(
                "Warning: start time {} is past the end of the video ({})",
                start.value, duration
            ));
        }

        let catalog = CatalogBuilder::build(&self.probe_streams(&input_path));

        let audio = if catalog.audio.is_empty() {
            Vec::new()
        } else {
            self.say(SEPARATOR);
            self.say("Audio streams:");
            self.list_streams(&catalog, StreamKind::Audio);
            self.ask_selection(
                "Select audio streams to save (Example: 0 1 2, leave empty to skip): ",
                StreamKind::Audio,
                &catalog,
            )?
        };

        let subtitles = if catalog.subtitles.is_empty() {
            Vec::new()
        } else {
            self.say(SEPARATOR);
            self.say("Subtitles:");
            self.list_streams(&catalog, StreamKind::Subtitle);
            let selection = self.ask_selection(
                "Select subtitles to save (Example: 0 1 2, leave empty to skip): ",
                StreamKind::Subtitle,
                &catalog,
            )?;
            self.say(SEPARATOR);
            selection
        };

        let request = FragmentRequest::new(input_path, start, end, audio, subtitles)?;
        self.cut(&request, &catalog)
    }

    /// Cut a fully specified request without asking anything.
    ///
    /// The file is only probed when strict stream selection needs the catalog.
    pub fn run(&self, request: &FragmentRequest) -> Result<ClipOutcome, DomainError> {
        let catalog = if self.strict_selection {
            CatalogBuilder::build(&self.probe_streams(&request.input_path))
        } else {
            StreamCatalog::default()
        };
        self.cut(request, &catalog)
    }

    fn cut(&self, request: &FragmentRequest, catalog: &StreamCatalog) -> Result<ClipOutcome, DomainError> {
        let command = self.clipper.build(request, catalog)?;
        let command_line = command.command_line(self.execute_port.program());

        if self.dry_run {
            info!(output = %command.output_path, "Dry run, not executing");
            self.say(&command_line);
            return Ok(ClipOutcome {
                command,
                executed: false,
            });
        }

        self.say(&format!("Executing command: {}", command_line));
        info!(input = %request.input_path, output = %command.output_path, "Cutting fragment");

        if let Err(e) = self.execute_port.execute(&command) {
            error!(error = %e, "Fragment cut failed");
            return Err(e);
        }

        self.say(&format!("Saved fragment to {}", command.output_path));
        Ok(ClipOutcome {
            command,
            executed: true,
        })
    }

    fn probe_duration(&self, input_path: &str) -> TimeSpec {
        match self.probe_port.probe_duration(input_path) {
            Ok(duration) => duration,
            Err(e) => {
                error!(path = %input_path, error = %e, "Could not probe duration");
                TimeSpec::ZERO
            }
        }
    }

    fn probe_streams(&self, input_path: &str) -> Vec<ProbeStream> {
        match self.probe_port.probe_streams(input_path) {
            Ok(streams) => {
                debug!(path = %input_path, count = streams.len(), "Probed streams");
                streams
            }
            Err(e) => {
                error!(path = %input_path, error = %e, "Could not probe streams");
                Vec::new()
            }
        }
    }

    fn ask_input_path(&self) -> Result<String, DomainError> {
        loop {
            let answer = self.prompt_port.ask("Enter the path to the video file: ")?;
            // Drag-and-drop on Windows wraps the path in quotes
            let path = answer.trim().trim_matches('"');
            if !path.is_empty() {
                return Ok(path.to_string());
            }
        }
    }

    fn ask_time(&self, prompt: &str) -> Result<TimeInput, DomainError> {
        loop {
            let answer = self.prompt_port.ask(&format!("{}: ", prompt))?;
            match TimeInput::parse(&answer) {
                Ok(time) => return Ok(time),
                Err(e) => {
                    debug!(error = %e, "Rejected time input");
                    self.say("Invalid input. Ensure the time format is correct (hh:mm:ss.mmm).");
                }
            }
        }
    }

    fn ask_end_time(&self, start: &TimeInput) -> Result<Option<TimeInput>, DomainError> {
        loop {
            let end = self.ask_time("Enter the end time (leave empty for the end of the video)")?;
            match TimeRangeRules::resolve_end(end) {
                Some(end) if end.value < start.value => {
                    self.say(&format!(
                        "The end time must not be earlier than the start time ({}).",
                        start.label
                    ));
                }
                end => return Ok(end),
            }
        }
    }

    fn ask_selection(
        &self,
        prompt: &str,
        kind: StreamKind,
        catalog: &StreamCatalog,
    ) -> Result<Vec<usize>, DomainError> {
        loop {
            let answer = self.prompt_port.ask(prompt)?;
            let selection = SelectionRules::parse_indices(&answer).and_then(|indices| {
                if self.strict_selection {
                    SelectionRules::validate(kind, &indices, catalog.streams(kind).len())?;
                }
                Ok(indices)
            });
            match selection {
                Ok(indices) => return Ok(indices),
                Err(e) => self.say(&e.to_string()),
            }
        }
    }

    fn list_streams(&self, catalog: &StreamCatalog, kind: StreamKind) {
        for stream in catalog.streams(kind) {
            self.say(&stream.to_string());
        }
    }

    fn say(&self, line: &str) {
        self.prompt_port.say(line);
    }
}
