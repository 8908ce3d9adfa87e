use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gdaloverviews::{
    ProgressSink, SilentProgress, TermProgress, build_overviews, general_cmd_line_processor,
    register_drivers,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("gdaloverviews=debug"))
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(argv: &[OsString]) -> Result<Option<CliArgs>, AppError> {
    match CliArgs::try_parse_from(argv) {
        Ok(args) => Ok(Some(args)),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", e);
                Ok(None)
            }
            ErrorKind::MissingRequiredArgument | ErrorKind::TooFewValues => Err(AppError::Usage),
            _ => Err(AppError::InvalidArguments(e.to_string())),
        },
    }
}

fn try_run(raw_args: Vec<OsString>) -> Result<(), AppError> {
    register_drivers();

    let Some(argv) = general_cmd_line_processor(&raw_args)? else {
        return Ok(());
    };
    let Some(args) = parse_args(&argv)? else {
        return Ok(());
    };

    if args.log {
        init_logging();
    }
    let invocation = args.invocation()?;
    debug!("Invocation: {:?}", invocation);

    let mut progress: Box<dyn ProgressSink> = if args.quiet {
        Box::new(SilentProgress)
    } else {
        Box::new(TermProgress)
    };

    let mut stdout = std::io::stdout().lock();
    let bands = build_overviews(&invocation, progress.as_mut(), &mut stdout)?;
    info!(
        "Reported {} band(s) for {}",
        bands.len(),
        invocation.dataset.display()
    );
    Ok(())
}

/// Run the CLI over the raw process arguments and map the outcome to an exit code.
pub fn run(raw_args: Vec<OsString>) -> ExitCode {
    match try_run(raw_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e.message());
            e.exit_code()
        }
    }
}
