/// Holder of the most recent execution result.
///
/// Despite feeding the "learning" loop this is plain last-write-wins storage:
/// every [`record`](Self::record) replaces the previous value and no history is
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackStore {
    last_feedback: Option<String>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored feedback with `result`.
    pub fn record(&mut self, result: impl Into<String>) {
        self.last_feedback = Some(result.into());
    }

    /// The most recently recorded value, or `None` before the first record.
    pub fn last(&self) -> Option<&str> {
        self.last_feedback.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackStore;

    #[test]
    fn test_empty_store_has_no_feedback() {
        assert_eq!(FeedbackStore::new().last(), None);
    }

    #[test]
    fn test_last_is_most_recent_record() {
        let mut store = FeedbackStore::new();
        for value in ["one", "two", "three"] {
            store.record(value);
            assert_eq!(store.last(), Some(value));
        }
        assert_eq!(store.last(), Some("three"));
    }

    #[test]
    fn test_record_accepts_empty_string() {
        let mut store = FeedbackStore::new();
        store.record("something");
        store.record("");
        assert_eq!(store.last(), Some(""));
    }
}
