use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetError {
    #[error("unknown {facet} facet value: {value}")]
    UnknownValue { facet: &'static str, value: String },

    #[error("option index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}
