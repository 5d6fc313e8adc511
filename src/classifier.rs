//! Classification of raw J-Ada lines into [`Command`]s.
//!
//! Keywords are recognised by substring containment anywhere in the line, not
//! as a prefix or whole word: `"please print this"` is a print command. `print`
//! takes precedence over `define`.

use crate::command::Command;

const PRINT_KEYWORD: &str = "print";
const DEFINE_KEYWORD: &str = "define";

/// Classify one line of input. Total: never fails, never has side effects.
pub fn classify(line: &str) -> Command {
    if line.contains(PRINT_KEYWORD) {
        Command::Print(strip_keyword(line, PRINT_KEYWORD))
    } else if line.contains(DEFINE_KEYWORD) {
        let definition = strip_keyword(line, DEFINE_KEYWORD);
        match definition.split_once('=') {
            Some((name, value)) => Command::Define {
                name: name.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Command::MalformedDefine {
                line: line.to_string(),
            },
        }
    } else {
        Command::Unknown(line.to_string())
    }
}

/// Remove the first occurrence of `keyword` and trim what is left.
fn strip_keyword(line: &str, keyword: &str) -> String {
    line.replacen(keyword, "", 1).trim().to_string()
}
