use std::path::{Path, PathBuf};

use tokio::fs::{create_dir_all, metadata, read_to_string, write};
use walkdir::WalkDir;

use crate::{
    config::ConvertConfig,
    error::Error,
    utils::{candidate::candidate_name, output_name::output_name},
};

/// What to do when a single file cannot be read or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    FailFast,
    SkipAndContinue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source_name: String,
    pub output_name: String,
}

#[derive(Debug)]
pub struct Failure {
    pub source_name: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<Conversion>,
    pub failed: Vec<Failure>,
}

impl ConversionReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Copy every candidate in `config.source_dir` into `config.target_dir` under
/// its new suffix:
/// 1. Bail out with `MissingSourceDirectory` before touching anything if the source is not a directory;
/// 2. Create the target directory with its parents;
/// 3. Convert candidates one at a time in file name order, overwriting existing outputs.
pub async fn run_convert(
    config: &ConvertConfig,
    policy: ErrorPolicy,
    verbose: bool,
) -> Result<ConversionReport, Error> {
    let source_is_dir = metadata(&config.source_dir)
        .await
        .is_ok_and(|meta| meta.is_dir());
    if !source_is_dir {
        return Err(Error::MissingSourceDirectory(config.source_dir.clone()));
    }

    create_dir_all(&config.target_dir)
        .await
        .map_err(|source| Error::Write {
            file: config.target_dir.clone(),
            source,
        })?;
    if verbose {
        println!("Writing into {}", config.target_dir.display());
    }

    let candidates = collect_candidates(config, verbose)?;
    let mut report = ConversionReport::default();

    for (path, name) in candidates {
        match convert_file(config, &path, &name).await {
            Ok(conversion) => {
                println!(
                    "Converted: {} → {}",
                    conversion.source_name, conversion.output_name
                );
                report.converted.push(conversion);
            }
            Err(error) if policy == ErrorPolicy::SkipAndContinue && error.is_per_file() => {
                if verbose {
                    println!("Skipping {name}: {error}");
                }
                report.failed.push(Failure {
                    source_name: name,
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    Ok(report)
}

/// Direct children of the source directory that carry the source suffix,
/// sorted by file name. The listing is taken once, up front.
fn collect_candidates(
    config: &ConvertConfig,
    verbose: bool,
) -> Result<Vec<(PathBuf, String)>, Error> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(&config.source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let path = entry?.into_path();
        match candidate_name(&path, &config.source_suffix) {
            Some(name) => candidates.push((path, name)),
            None if verbose => println!("Ignoring {}", path.display()),
            None => {}
        }
    }

    Ok(candidates)
}

async fn convert_file(
    config: &ConvertConfig,
    path: &Path,
    name: &str,
) -> Result<Conversion, Error> {
    let content = read_to_string(path).await.map_err(|source| Error::Read {
        file: path.to_path_buf(),
        source,
    })?;

    let output_name = output_name(name, &config.source_suffix, &config.target_suffix);
    let output_path = config.target_dir.join(&output_name);
    write(&output_path, content)
        .await
        .map_err(|source| Error::Write {
            file: output_path.clone(),
            source,
        })?;

    Ok(Conversion {
        source_name: name.to_string(),
        output_name,
    })
}
