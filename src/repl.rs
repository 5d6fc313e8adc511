//! Drivers feeding lines into a [`LearningVm`]: an interactive prompt and a
//! batch runner over any buffered reader.

use crate::vm::LearningVm;
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "J-Ada> ";

/// Sample lines processed by `jada --demo`.
pub const DEMO_LINES: [&str; 2] = ["print Hello, World!", "define x = 10"];

/// Counters reported by [`run_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub processed: usize,
    pub failed: usize,
}

/// Process one line and write its result (or error) to `output`.
///
/// Returns `Ok(false)` when the line failed inside the VM. Only I/O errors on
/// `output` are returned as `Err`.
fn process_line(vm: &mut LearningVm, line: &str, output: &mut dyn Write) -> Result<bool> {
    match vm.process_and_learn(line) {
        Ok(result) => {
            tracing::debug!(feedback = %result, "learning from feedback");
            writeln!(output, "{result}")?;
            Ok(true)
        }
        Err(err) => {
            tracing::debug!(error = %err, "line failed");
            writeln!(output, "error: {err}")?;
            Ok(false)
        }
    }
}

/// Feed every non-blank line of `input` through `vm`, writing one result per
/// line to `output`.
pub fn run_lines(
    vm: &mut LearningVm,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<LineStats> {
    let mut stats = LineStats::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        stats.processed += 1;
        if !process_line(vm, &line, &mut output)? {
            stats.failed += 1;
        }
    }
    output.flush()?;
    Ok(stats)
}

/// Interactive prompt backed by rustyline.
pub struct Repl {
    prompt: String,
}

impl Repl {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Read lines until Ctrl-C or Ctrl-D, printing each result to stdout.
    pub fn run(&self, vm: &mut LearningVm) -> Result<()> {
        let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;
        let mut stdout = std::io::stdout();

        loop {
            match rl.readline(&self.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str())?;
                    process_line(vm, &line, &mut stdout)?;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => return Err(err).context("failed to read input"),
            }
        }

        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::UNKNOWN_COMMAND_RESPONSE;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(vm: &mut LearningVm, input: &str) -> (LineStats, String) {
        let mut out = Vec::new();
        let stats = run_lines(vm, Cursor::new(input), &mut out).unwrap();
        (stats, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn test_run_lines_writes_one_result_per_line() {
        let mut vm = LearningVm::default();
        let (stats, out) = run(&mut vm, "print Hello, World!\ndefine x = 10\nfoo bar\n");

        assert_eq!(
            out,
            format!("Hello, World!\nDefined x = 10\n{UNKNOWN_COMMAND_RESPONSE}\n")
        );
        assert_eq!(
            stats,
            LineStats {
                processed: 3,
                failed: 0
            }
        );
        assert_eq!(vm.context().get_var("x"), Some("10"));
        assert_eq!(vm.feedback().last(), Some(UNKNOWN_COMMAND_RESPONSE));
    }

    #[test]
    fn test_run_lines_reports_errors_and_continues() {
        let mut vm = LearningVm::default();
        let (stats, out) = run(&mut vm, "define y\nprint after\n");

        assert_eq!(
            out,
            "error: malformed define, expected `name = value`: define y\nafter\n"
        );
        assert_eq!(
            stats,
            LineStats {
                processed: 2,
                failed: 1
            }
        );
        assert_eq!(vm.feedback().last(), Some("after"));
    }

    #[test]
    fn test_run_lines_skips_blank_lines() {
        let mut vm = LearningVm::default();
        let (stats, out) = run(&mut vm, "\n   \nprint x\n\n");

        assert_eq!(out, "x\n");
        assert_eq!(stats.processed, 1);
    }

    #[test]
    fn test_demo_lines_produce_expected_output() {
        let mut vm = LearningVm::default();
        let (_, out) = run(&mut vm, &DEMO_LINES.join("\n"));

        assert_eq!(out, "Hello, World!\nDefined x = 10\n");
    }

    #[test]
    fn test_default_repl_uses_default_prompt() {
        assert_eq!(Repl::default().prompt, DEFAULT_PROMPT);
    }
}
