use std::collections::HashMap;

/// Variable bindings of a single J-Ada interpreter instance.
///
/// Only `define` lines write into the context. Keys are unique and a second
/// definition of the same name silently replaces the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    vars: HashMap<String, String>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value bound to `name`, if any.
    pub fn get_var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Bind `name` to `value`, overriding any previous binding.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::ExecutionContext;

    #[test]
    fn test_context_set_and_get_var() {
        let mut ctx = ExecutionContext::new();

        // initially absent
        assert_eq!(ctx.get_var("x"), None);
        assert!(ctx.is_empty());

        ctx.set_var("x", "10");

        assert_eq!(ctx.get_var("x"), Some("10"));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_context_overwrites_existing_binding() {
        let mut ctx = ExecutionContext::new();
        ctx.set_var("x", "1");
        ctx.set_var("x", "2");

        assert_eq!(ctx.get_var("x"), Some("2"));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_context_iter_yields_all_bindings() {
        let mut ctx = ExecutionContext::new();
        ctx.set_var("a", "1");
        ctx.set_var("b", "2");

        let mut pairs: Vec<_> = ctx.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }
}
