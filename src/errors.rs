use thiserror::Error;

#[derive(Error, Debug)]
pub enum NanoIdError {
    /// A character was requested from an alphabet with no characters in it
    #[error("Cannot draw from an empty alphabet")]
    EmptyAlphabet,
    #[error("Invalid identifier length: {0}")]
    InvalidLength(i64),
    #[error("Invalid generator config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NanoIdError>;
