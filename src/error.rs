use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source folder {} not found", .0.display())]
    MissingSourceDirectory(PathBuf),
    #[error("Failed to read {}: {source}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to list source folder: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Per-file failures are the only ones a keep-going run may skip.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Error::Read { .. } | Error::Write { .. })
    }
}
