use serde::{Deserialize, Serialize};
use std::io::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethanolError {
    InvalidInput(String),
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },
    DosageNotFound(u32),
    Terminal(String),
    Parse(String),
    Config(String),
    Format(String),
    IO(String),
}

impl std::fmt::Display for MethanolError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            MethanolError::InvalidInput(msg) => write!(f, "{}", msg),
            MethanolError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "{} [{}] is out of range [{} .. {}]",
                name, value, min, max
            ),
            MethanolError::DosageNotFound(dosage) => {
                write!(f, "No hydrate curve for [{}] gal/MMscf", dosage)
            }
            MethanolError::Terminal(msg) => write!(f, "Terminal registered an error: {}", msg),
            MethanolError::Parse(msg) => write!(f, "Unable to parse input: {}", msg),
            MethanolError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            MethanolError::Format(msg) => write!(f, "Invalid format: {}", msg),
            MethanolError::IO(msg) => write!(f, "Input / output error: {}", msg),
        }
    }
}

impl std::error::Error for MethanolError {}

impl std::convert::From<std::io::Error> for MethanolError {
    fn from(e: Error) -> Self {
        Self::IO(e.to_string())
    }
}

impl std::convert::From<csv::Error> for MethanolError {
    fn from(e: csv::Error) -> Self {
        Self::IO(e.to_string())
    }
}

impl std::convert::From<serde_json::Error> for MethanolError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}
