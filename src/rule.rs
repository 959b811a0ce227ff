//! The fix rule: which files to visit and which literal to rewrite.
//!
//! A previous code-generation pass emitted
//! `` await fetch`${BACKEND_URL}/api/chat`, { `` in the generated tool pages,
//! which parses as a tagged template call instead of a function call. The
//! rule restores the missing opening parenthesis.

/// A literal find-and-replace scoped to files matching a glob pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixRule {
    /// Glob pattern, relative to the run root
    pub pattern: &'static str,
    /// Exact text to find (no regex interpretation)
    pub search: &'static str,
    /// Text substituted for every occurrence of `search`
    pub replacement: &'static str,
}

/// Result of applying a [`FixRule`] to a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Rewrite carries the patched text"]
pub struct Rewrite {
    /// Full text after replacement
    pub text: String,
    /// Number of occurrences replaced
    pub replacements: usize,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

impl FixRule {
    /// The malformed `fetch` call left behind in `app/tools/*/page.tsx`.
    pub const FETCH_CALL: FixRule = FixRule {
        pattern: "app/tools/*/page.tsx",
        search: "await fetch`${BACKEND_URL}/api/chat`, {",
        replacement: "await fetch(`${BACKEND_URL}/api/chat`, {",
    };

    /// Replace every non-overlapping occurrence of `search`, left to right.
    pub fn apply(&self, text: &str) -> Rewrite {
        let replacements = text.matches(self.search).count();
        let text = if replacements == 0 {
            text.to_string()
        } else {
            text.replace(self.search, self.replacement)
        };
        Rewrite { text, replacements }
    }
}
