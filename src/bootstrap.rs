// src/bootstrap.rs
use std::process::ExitCode;

use linestat_infra::{ConsoleDiagnostics, ConsoleSink, FileLineSource, FileSink, FormatRenderer};
use linestat_ports::report::RunSummary;
use linestat_shared_kernel::{ApplicationError, LinestatError, PresentationError};
use linestat_usecase::{ComputeStatistics, ConvertNumbers, CountWords, PublishReport};
use tracing::{debug, error};

use crate::{
    cli::{build_config, parse_args},
    config::{RunConfig, Tool},
    logging,
};

const NO_VALID_DATA: &str = "The file contains no valid data. Cannot continue.";

/// Entry point shared by the three binaries.
pub fn main(tool: Tool) -> ExitCode {
    logging::init();

    let args = parse_args(tool);
    let config = match build_config(tool, args) {
        Ok(config) => config,
        Err(PresentationError::MissingInput) => {
            println!("{}", tool.usage());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run_with_config(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_no_valid_data(&err) => {
            debug!(error = %err, "run aborted");
            println!("{NO_VALID_DATA}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "run failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one utility end to end: read, aggregate, then publish to stdout and the results file.
pub fn run_with_config(config: &RunConfig) -> anyhow::Result<()> {
    let source = FileLineSource;
    let diagnostics = ConsoleDiagnostics;

    let summary: RunSummary = match config.tool {
        Tool::Statistics => ComputeStatistics::new(&source, &diagnostics).run(&config.input)?.into(),
        Tool::Conversion => {
            ConvertNumbers::new(&source, &diagnostics, config.conversion.clone()).run(&config.input)?.into()
        }
        Tool::WordCount => CountWords::new(&source, &diagnostics).run(&config.input)?.into(),
    };

    let renderer = FormatRenderer::new(config.format);
    let console = ConsoleSink;
    let file = FileSink::new(&config.output);
    PublishReport::new(&renderer, vec![&console, &file]).run(&summary)?;
    Ok(())
}

fn is_no_valid_data(err: &anyhow::Error) -> bool {
    err.downcast_ref::<LinestatError>()
        .is_some_and(|e| matches!(e.root(), LinestatError::Application(ApplicationError::NoValidData { .. })))
}
