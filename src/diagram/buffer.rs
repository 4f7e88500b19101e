//! Versioned diagram source buffer

use serde::Serialize;

/// The diagram source text being edited, plus every text it replaced.
///
/// History is append-only for the lifetime of the session: each accepted edit
/// pushes the outgoing text before adopting the new one. Versions are
/// addressed from the end ("N edits ago").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramBuffer {
    current: String,
    history: Vec<String>,
}

impl DiagramBuffer {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            history: Vec::new(),
        }
    }

    /// The current diagram source text
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Previous versions, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Replace the current text, recording the previous one.
    ///
    /// Returns `false` (and records nothing) when `new` equals the current text.
    pub fn edit(&mut self, new: impl Into<String>) -> bool {
        let new = new.into();
        if new == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, new);
        self.history.push(previous);
        true
    }

    /// Replace the current text verbatim without recording a version.
    pub fn load(&mut self, code: impl Into<String>) {
        self.current = code.into();
    }

    /// The text as it was `n` edits ago; `0` is the current text.
    pub fn version_back(&self, n: usize) -> Option<&str> {
        if n == 0 {
            return Some(&self.current);
        }
        let len = self.history.len();
        if n > len {
            return None;
        }
        self.history.get(len - n).map(String::as_str)
    }
}

/// Human-readable label for a version offset
pub fn version_caption(n: usize) -> String {
    match n {
        0 => "This is the current version".to_string(),
        1 => "This is 1 edit ago".to_string(),
        n => format!("This is {} edits ago", n),
    }
}
