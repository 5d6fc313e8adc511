use crate::command::Command;
use crate::context::ExecutionContext;
use crate::error::ExecutionError;

/// Result of every line that is neither a print nor a define.
pub const UNKNOWN_COMMAND_RESPONSE: &str = "Code execution logic for J-Ada goes here.";

/// Apply a single command to `ctx` and return its textual result.
///
/// Only [`Command::Define`] mutates the context. Each call is independent of
/// the previous ones apart from the bindings left in `ctx`.
pub fn execute(cmd: Command, ctx: &mut ExecutionContext) -> Result<String, ExecutionError> {
    match cmd {
        Command::Print(payload) => Ok(payload),
        Command::Define { name, value } => {
            let message = format!("Defined {name} = {value}");
            ctx.set_var(name, value);
            Ok(message)
        }
        Command::MalformedDefine { line } => Err(ExecutionError::MalformedDefine { line }),
        Command::Unknown(_) => Ok(UNKNOWN_COMMAND_RESPONSE.to_string()),
    }
}
