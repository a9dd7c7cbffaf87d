use std::path::{Path, PathBuf};

use crate::error::Error;

pub const SOURCE_FOLDER: &str = "pages";
pub const TARGET_FOLDER: &str = "converted_pages";
pub const SOURCE_SUFFIX: &str = ".js";
pub const TARGET_SUFFIX: &str = ".txt";

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub source_suffix: String,
    pub target_suffix: String,
}

impl ConvertConfig {
    /// Resolve the fixed `pages` / `converted_pages` folders under `root`.
    pub fn from_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source_dir: root.join(SOURCE_FOLDER),
            target_dir: root.join(TARGET_FOLDER),
            source_suffix: SOURCE_SUFFIX.to_string(),
            target_suffix: TARGET_SUFFIX.to_string(),
        }
    }

    pub fn from_current_dir() -> Result<Self, Error> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_dir(cwd))
    }
}
