use std::process::ExitCode;

use tracing::{error, info};

use csvxl::logging::init_cli_logging;
use csvxl::{ConvertParams, convert_csv_to_excel, validate_output_path};

use super::args::CliArgs;
use super::errors::AppError;

fn resolve_params(args: &CliArgs) -> Result<ConvertParams, AppError> {
    let mut params = match args.config.as_deref() {
        Some(path) => {
            info!("Loading config: {:?}", path);
            ConvertParams::from_json_file(path)?
        }
        None => ConvertParams::default(),
    };

    if let Some(rename) = &args.rename {
        params.rename = Some(rename.clone());
    }
    if args.no_dates {
        params.parse_dates = false;
    }
    if let Some(report) = &args.report {
        params.report = Some(report.clone());
    }
    Ok(params)
}

fn try_run(args: &CliArgs) -> Result<(), AppError> {
    if !args.input.exists() {
        return Err(AppError::InputMissing {
            path: args.input.clone(),
        });
    }
    validate_output_path(&args.output)?;

    let params = resolve_params(args)?;
    let report = convert_csv_to_excel(&args.input, &args.output, &params)?;
    info!(
        "Successfully converted: {:?} -> {:?} ({} rows, {} columns)",
        report.input,
        report.output,
        report.rows,
        report.columns.len()
    );
    Ok(())
}

pub fn run(args: CliArgs) -> ExitCode {
    init_cli_logging(args.verbose);

    match try_run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}
