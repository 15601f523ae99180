use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Difficulty Table: {0}")]
    InvalidDifficultyTable(String),

    #[error("Malformed Record '{level}': {reason}")]
    MalformedRecord { level: String, reason: String },

    #[error("No note count known for level '{0}'")]
    MissingNoteCount(String),

    #[error("Invalid Tier Threshold: {0}")]
    InvalidThreshold(String),

    #[error("Level '{0}' was folded into the same aggregate twice")]
    DuplicateLevel(String),

    #[error("Cannot render percentage for '{0}': total is zero")]
    ZeroTotal(String),
}

pub type StatsResult<T> = Result<T, StatsError>;
