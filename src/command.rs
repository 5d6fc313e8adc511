/// A single classified line of J-Ada input.
///
/// The set is closed: every line maps to exactly one variant, see
/// [`classify`](crate::classify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Echo the payload back. The payload is the line with its first `print`
    /// removed, trimmed.
    Print(String),
    /// Bind `name` to `value` in the execution context.
    Define { name: String, value: String },
    /// A `define` line without `=`. Executing it fails.
    MalformedDefine { line: String },
    /// Anything else, kept verbatim.
    Unknown(String),
}
