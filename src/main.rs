use anyhow::{Context, Result};
use argh::FromArgs;
use jada_vm::repl::{self, DEFAULT_PROMPT, DEMO_LINES, Repl};
use jada_vm::{Corpus, LearningVm};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Run J-Ada lines through the learning virtual machine.
struct Args {
    /// plain-text language corpus loaded as the VM's language data.
    #[argh(option)]
    corpus: Option<PathBuf>,

    /// process every line of this file and exit instead of starting the prompt.
    #[argh(option)]
    script: Option<PathBuf>,

    /// process the built-in sample lines before anything else.
    #[argh(switch)]
    demo: bool,

    /// prompt shown by the interactive session.
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    prompt: String,

    /// log at debug level unless JADA_LOG says otherwise.
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("JADA_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    let corpus = match &args.corpus {
        Some(path) => {
            let corpus = Corpus::load(path)?;
            tracing::info!(path = %path.display(), lines = corpus.line_count(), "loaded corpus");
            corpus
        }
        None => Corpus::empty(),
    };
    let mut vm = LearningVm::new(corpus);

    if args.demo {
        let demo = DEMO_LINES.join("\n");
        repl::run_lines(&mut vm, demo.as_bytes(), std::io::stdout())?;
    }

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script: {}", path.display()))?;
            let stats = repl::run_lines(&mut vm, BufReader::new(file), std::io::stdout())?;
            tracing::info!(processed = stats.processed, failed = stats.failed, "script finished");
        }
        None => Repl::new(args.prompt).run(&mut vm)?,
    }

    Ok(())
}
