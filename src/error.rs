//! Error type shared by option collection and path resolution

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop fontcustom from preparing a build.
///
/// Each variant carries the offending path or token so the message can be
/// shown to the user as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} doesn't seem to be installed. Please install {0} and make sure it is on your PATH")]
    ToolchainMissing(String),

    #[error("couldn't find a configuration file at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("couldn't read your configuration file {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    #[error("input should be a string or a hash containing a \"vectors\" key")]
    InvalidInputSpec,

    #[error("input {} should be a directory", .0.display())]
    InvalidInputPath(PathBuf),

    #[error("{} doesn't contain any vectors (*.svg or *.eps files)", .0.display())]
    EmptyInputDirectory(PathBuf),

    #[error("output should be a string or a hash containing a \"fonts\" key")]
    InvalidOutputSpec,

    #[error("output {} should be a directory, not a file", .0.display())]
    InvalidOutputPath(PathBuf),

    #[error("couldn't find the \"{token}\" template{}", searched_in(.search_dir))]
    TemplateNotFound {
        token: String,
        search_dir: Option<PathBuf>,
    },

    #[error("couldn't read {}", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("couldn't write manifest {}", .0.display())]
    Manifest(PathBuf, #[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The message followed by every underlying cause, `: `-separated.
    pub fn with_sources(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

fn searched_in(dir: &Option<PathBuf>) -> String {
    dir.as_ref()
        .map(|d| format!(" in {}", d.display()))
        .unwrap_or_default()
}
