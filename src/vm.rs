use crate::classifier::classify;
use crate::context::ExecutionContext;
use crate::corpus::Corpus;
use crate::error::ExecutionError;
use crate::executor::execute;
use crate::feedback::FeedbackStore;

/// Run one line through classify, execute and record.
///
/// On success the result is recorded in `store` and returned. On failure the
/// error is returned as is and `store` keeps its previous value.
pub fn process_and_learn(
    line: &str,
    ctx: &mut ExecutionContext,
    store: &mut FeedbackStore,
) -> Result<String, ExecutionError> {
    let result = execute(classify(line), ctx)?;
    store.record(result.as_str());
    Ok(result)
}

/// A J-Ada virtual machine owning its bindings and its feedback slot.
///
/// Example
/// ```
/// use jada_vm::LearningVm;
/// let mut vm = LearningVm::default();
/// assert_eq!(vm.process_and_learn("define x = 10").unwrap(), "Defined x = 10");
/// assert_eq!(vm.context().get_var("x"), Some("10"));
/// assert_eq!(vm.feedback().last(), Some("Defined x = 10"));
/// ```
#[derive(Debug, Default)]
pub struct LearningVm {
    corpus: Corpus,
    context: ExecutionContext,
    feedback: FeedbackStore,
}

impl LearningVm {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            context: ExecutionContext::new(),
            feedback: FeedbackStore::new(),
        }
    }

    /// See [`process_and_learn`].
    pub fn process_and_learn(&mut self, line: &str) -> Result<String, ExecutionError> {
        process_and_learn(line, &mut self.context, &mut self.feedback)
    }

    /// Push feedback that did not come from executing a line.
    pub fn record_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback.record(feedback);
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }
}
