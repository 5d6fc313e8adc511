use thiserror::Error;

/// Failure of a single line of J-Ada input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A `define` line that has no `=` to split on.
    #[error("malformed define, expected `name = value`: {line}")]
    MalformedDefine { line: String },
}
