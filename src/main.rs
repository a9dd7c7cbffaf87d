use std::process::ExitCode;

use cli::Cli;
use config::{ConvertConfig, SOURCE_FOLDER, SOURCE_SUFFIX};
use error::Error;

mod cli;
mod config;
mod convert;
mod error;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Error> {
    let cli: Cli = clap::Parser::parse();
    let config = ConvertConfig::from_current_dir()?;

    let report = match convert::run_convert(&config, cli.policy(), cli.verbose).await {
        Ok(report) => report,
        Err(Error::MissingSourceDirectory(_)) => {
            println!("Source folder '{SOURCE_FOLDER}' not found.");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };

    if !report.is_complete() {
        for failure in &report.failed {
            eprintln!("⚠️ Skipped {}: {}", failure.source_name, failure.error);
        }
        println!(
            "Converted {} of {} {SOURCE_SUFFIX} files from '{}' into '{}', {} skipped.",
            report.converted.len(),
            report.converted.len() + report.failed.len(),
            config.source_dir.display(),
            config.target_dir.display(),
            report.failed.len()
        );
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "All {SOURCE_SUFFIX} files from '{}' converted and saved to '{}'.",
        config.source_dir.display(),
        config.target_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}
