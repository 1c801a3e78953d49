use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid id length {length}; expected {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },
}
