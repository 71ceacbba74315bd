use std::io;
use std::path::PathBuf;
use derive_more::Display;

/// Failures that end the `spc` process. Calculator diagnostics are not
/// among them: those are reported per line and the run goes on.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("cannot open '{}': {}", _0.display(), _1)]
    Open(PathBuf, io::Error),
    #[display("cannot initialize logger: {_0}")]
    Logger(log::SetLoggerError),
    #[display("i/o: {_0}")]
    Io(io::Error),
    #[display("panic: {_0}")]
    Panic(String),
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Open(_, e) | AppError::Io(e) => Some(e),
            AppError::Logger(e) => Some(e),
            AppError::Panic(_) => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}
