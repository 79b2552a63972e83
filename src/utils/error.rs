use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The reader went away; nothing left to report to.
    Low,
    High,
}

impl ReportError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::IoError(e) if e.kind() == io::ErrorKind::BrokenPipe => ErrorSeverity::Low,
            ReportError::IoError(_) => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("Could not write the report to standard output: {}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_exits_cleanly() {
        let err = ReportError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_other_write_errors_fail() {
        let err = ReportError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("disk full"));
    }
}
