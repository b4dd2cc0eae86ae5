use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid region code: {0:?}")]
    InvalidRegionCode(String),
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("invalid numbering plan for {region}: {reason}")]
    InvalidPlan { region: String, reason: String },
}
