use thiserror::Error;

/// Error type for invalid job configurations and calculator arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FracError {
    #[error("Invalid frac type '{0}'. Available frac types: 'conv', 'zip' or 'sim'")]
    InvalidFracType(String),
    #[error("Invalid value for {name}: {value} ({reason})")]
    InvalidArgument {
        name: String,
        value: f64,
        reason: &'static str,
    },
    #[error("Could not read scenario configuration: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, FracError>`.
pub type FracResult<T> = Result<T, FracError>;
