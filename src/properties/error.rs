use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to access {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
