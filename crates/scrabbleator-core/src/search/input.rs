use crate::{Error, Result};

/// Shortest submittable query
pub const MIN_LETTERS: usize = 2;
/// Longest submittable query
pub const MAX_LETTERS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Accepted,
    /// The draft was left unchanged
    Rejected,
}

/// Holds the draft query and filters what may be typed into it.
///
/// Only the alphabet is enforced here; length is checked on submit.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    draft: String,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Propose a full new value for the input field
    pub fn on_keystroke(&mut self, proposed: &str) -> Keystroke {
        if !is_accepted(proposed) {
            return Keystroke::Rejected;
        }
        self.draft.clear();
        self.draft.push_str(proposed);
        Keystroke::Accepted
    }

    /// Append one typed character
    pub fn push_char(&mut self, c: char) -> Keystroke {
        let mut proposed = self.draft.clone();
        proposed.push(c);
        self.on_keystroke(&proposed)
    }

    /// Remove the last character
    pub fn pop_char(&mut self) -> Keystroke {
        let mut proposed = self.draft.clone();
        proposed.pop();
        self.on_keystroke(&proposed)
    }
}

/// Empty, or ASCII letters only
pub fn is_accepted(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn check_length(query: &str) -> Result<()> {
    let len = query.chars().count();
    if (MIN_LETTERS..=MAX_LETTERS).contains(&len) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            len,
            min: MIN_LETTERS,
            max: MAX_LETTERS,
        })
    }
}
