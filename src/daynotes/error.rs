use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaynotesError {
    #[error("Invalid date: day {day} of month {month} in {year}", month = .month_index + 1)]
    InvalidDate {
        year: i32,
        month_index: u32,
        day: u32,
    },

    #[error("Malformed date key: {0:?} (expected DD/MM/YYYY)")]
    MalformedKey(String),

    #[error("Could not read stored notes: {0}")]
    StorageRead(String),

    #[error("Could not save notes: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DaynotesError>;
