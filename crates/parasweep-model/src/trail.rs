//! The running record of bound parameter expressions.

use std::collections::BTreeMap;

/// Mapping from parameter name to its current textual expression, for every
/// parameter bound on the current recursion path.
///
/// The expression string is preserved as the host reports it (it may carry
/// units), not just the numeric value. The sweep driver clones the trail on
/// descent, so any node's trail can be inspected or kept without seeing
/// later mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTrail {
    entries: BTreeMap<String, String>,
}

impl ValueTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the expression currently bound to `name`.
    pub fn record(&mut self, name: impl Into<String>, expression: impl Into<String>) {
        self.entries.insert(name.into(), expression.into());
    }

    /// The expression bound to `name` on this path, if any.
    #[must_use]
    pub fn expression(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human-readable `name=expression` listing, used to identify which
    /// combination an error occurred at.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (name, expr) in &self.entries {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(name);
            out.push('=');
            out.push_str(expr);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, expr)| (name.as_str(), expr.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_isolates_descent() {
        let mut outer = ValueTrail::new();
        outer.record("W", "2");
        let mut inner = outer.clone();
        inner.record("H", "10.5");
        inner.record("W", "3");
        assert_eq!(outer.expression("W"), Some("2"));
        assert_eq!(outer.expression("H"), None);
        assert_eq!(inner.expression("W"), Some("3"));
    }
}
