//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::AppContainer;
use crate::cli::args::{ClipArgs, InspectArgs};
use crate::domain::model::{FragmentRequest, TimeInput};
use crate::domain::rules::TimeRangeRules;

/// Run the interactive session
pub fn interactive(container: &dyn AppContainer) -> Result<()> {
    info!("Starting interactive session");
    container
        .clip_interactor()
        .run_interactive()
        .context("Interactive cut failed")?;
    Ok(())
}

/// Execute the clip command
pub fn clip(args: ClipArgs, container: &dyn AppContainer) -> Result<()> {
    info!(input = %args.input, start = %args.start, end = ?args.end, "Starting clip operation");

    let request = build_request(args)?;
    container
        .clip_interactor()
        .run(&request)
        .context("Failed to cut fragment")?;

    info!("Clip operation completed successfully");
    Ok(())
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs, container: &dyn AppContainer) -> Result<()> {
    let interactor = container.inspect_interactor();
    let report = interactor
        .inspect(&args.input)
        .with_context(|| format!("Failed to inspect {}", args.input))?;

    let rendered = interactor.render(&report, args.format.into())?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Turn clip arguments into a request, with the same rules as the interactive session
pub fn build_request(args: ClipArgs) -> Result<FragmentRequest> {
    let start = TimeInput::parse(&args.start)
        .with_context(|| format!("Invalid start time '{}'", args.start))?;
    let end = match &args.end {
        Some(text) => TimeRangeRules::resolve_end(
            TimeInput::parse(text).with_context(|| format!("Invalid end time '{}'", text))?,
        ),
        None => None,
    };

    let input = args.input.trim().trim_matches('"').to_string();
    let request = FragmentRequest::new(input, start, end, args.audio, args.subs)
        .context("Invalid clip request")?;
    Ok(request)
}
