mod args;
mod value_enum;

use clap::{CommandFactory, FromArgMatches};
use linestat_shared_kernel::{PresentationError, PresentationResult};

pub use args::Args;
pub use value_enum::CliOutputFormat;

use crate::config::{RunConfig, Tool};

/// Parse process arguments, presenting the command under the utility's own name.
pub fn parse_args(tool: Tool) -> Args {
    let command = Args::command().name(tool.program_name()).bin_name(tool.program_name()).about(tool.about());
    let matches = command.get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// Convert parsed CLI arguments into a run configuration.
pub fn build_config(tool: Tool, args: Args) -> PresentationResult<RunConfig> {
    let input = args.input.ok_or(PresentationError::MissingInput)?;

    // Only an explicit --output can collide; the default name is always overwritten.
    if args.output.as_deref() == Some(input.as_path()) {
        return Err(PresentationError::InvalidValue {
            flag: "--output".to_string(),
            value: input.display().to_string(),
            reason: "would overwrite the input file".to_string(),
        });
    }

    let mut config = RunConfig::new(tool, input);
    if let Some(output) = args.output {
        config.output = output;
    }
    config.format = args.format.into();
    Ok(config)
}
