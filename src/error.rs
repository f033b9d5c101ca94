use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CError {
    #[error("unknown element: `{0}`")]
    UnknownElement(String),
    #[error("malformed formula `{formula}`: cannot parse `{remainder}`")]
    MalformedFormula { formula: String, remainder: String },
    #[error("invalid count `{count}` for element `{symbol}`")]
    InvalidCount { symbol: String, count: String },
    #[error("too many `{0}` atoms: count does not fit in 64 bits")]
    CountOverflow(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Unsupported file format: `{0}`")]
    UnsupportedFileFormat(String),
    #[error("could not render figure: {0}")]
    Plot(String),
}
