use thiserror::Error;

pub type PcResult<T> = Result<T, PcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Input outside the domain of a logarithmic formula.
    #[error("Value outside formula domain for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
