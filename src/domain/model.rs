/// Default cap on outbound dream text, in whitespace-delimited words.
pub const MAX_WORDS: usize = 200;

/// Number of whitespace-delimited tokens in `text`. The empty string counts 0.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The live user input plus its derived word count. Rebuilt on every edit.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub text: String,
    pub word_count: usize,
}

impl Submission {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = word_count(&text);
        Self { text, word_count }
    }

    pub fn exceeds(&self, max_words: usize) -> bool {
        self.word_count > max_words
    }
}

/// Outcome of the remote validation call. Transport failures are errors, not verdicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DreamVerdict {
    Valid,
    Rejected(String),
}

/// The single active UI mode. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Input,
    Loading,
    InvalidFeedback,
    Reveal,
}
