use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Option parsing failed: {}", .0.kind())]
    CliParseError(#[from] clap::Error),

    #[error("Rejected argument count: {count}")]
    ArgumentCountError { count: usize },

    #[error("Missing required value: {field}")]
    MissingValueError { field: String },

    #[error("Value for {field} must be positive, got {value}")]
    NonPositiveValueError { field: String, value: f32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Process exit code for this failure.
    ///
    /// Missing and non-positive values exit with 0 even though they are
    /// reported as errors; only the option parser and the argument-count
    /// check raise the error flag.
    pub fn exit_code(&self) -> u8 {
        match self {
            SolverError::CliParseError(_) | SolverError::ArgumentCountError { .. } => 1,
            SolverError::MissingValueError { .. } | SolverError::NonPositiveValueError { .. } => 0,
            SolverError::IoError(_) => 1,
        }
    }

    pub fn is_invalid_arguments(&self) -> bool {
        !matches!(self, SolverError::IoError(_))
    }

    pub fn user_friendly_message(&self) -> &'static str {
        if self.is_invalid_arguments() {
            "Error: invalid arguments"
        } else {
            "Error: failed to write output"
        }
    }
}
