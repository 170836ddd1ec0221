use crate::domain::model::{DreamVerdict, FlowState, Submission};
use crate::domain::ports::DreamService;
use std::time::Duration;
use tokio::time::Instant;

/// How long an invalid-dream notice stays on screen before the flow
/// auto-returns to `Input`.
pub const FEEDBACK_DISMISS: Duration = Duration::from_millis(4000);

pub const INVALID_QUERY_NOTICE: &str = "Please enter a valid query";

/// A transient notice with the deadline at which it expires.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub message: String,
    pub deadline: Instant,
}

/// Drives the dream submission flow: collect input under a word cap, validate
/// remotely, generate a reflection on acceptance, and surface transient
/// feedback on rejection. Exactly one `FlowState` is active at a time, and no
/// network call is ever issued while the word cap is exceeded.
///
/// Remote failures are logged and return the flow to the prior interactive
/// state; there are no retries and nothing is persisted.
pub struct FlowController<D: DreamService> {
    service: D,
    max_words: usize,
    submission: Submission,
    flow_state: FlowState,
    reflection: Option<String>,
    feedback: Option<Feedback>,
}

impl<D: DreamService> FlowController<D> {
    pub fn new(service: D, max_words: usize) -> Self {
        Self {
            service,
            max_words,
            submission: Submission::default(),
            flow_state: FlowState::Input,
            reflection: None,
            feedback: None,
        }
    }

    pub fn service(&self) -> &D {
        &self.service
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn input_text(&self) -> &str {
        &self.submission.text
    }

    pub fn word_count(&self) -> usize {
        self.submission.word_count
    }

    pub fn is_exceeded(&self) -> bool {
        self.submission.exceeds(self.max_words)
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow_state
    }

    pub fn reflection(&self) -> Option<&str> {
        self.reflection.as_deref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Recomputes the word count for the edited text. No side effects beyond
    /// the state update.
    pub fn on_input_change(&mut self, text: &str) {
        self.submission = Submission::new(text);
    }

    /// Submits the current input. Guarded: an over-cap submission shows the
    /// word-limit notice and never reaches the network.
    pub async fn on_submit(&mut self) {
        if self.is_exceeded() {
            tracing::debug!(
                "Submission blocked at {} words (limit {})",
                self.submission.word_count,
                self.max_words
            );
            self.enter_feedback(format!(
                "Please limit your input to {} words.",
                self.max_words
            ));
            return;
        }

        self.flow_state = FlowState::Loading;
        self.feedback = None;

        match self.service.validate_dream(&self.submission.text).await {
            Ok(DreamVerdict::Valid) => {
                match self.service.generate_reflection(&self.submission.text).await {
                    Ok(reflection) => {
                        self.reflection = Some(reflection);
                        self.flow_state = FlowState::Reveal;
                    }
                    Err(e) => {
                        tracing::error!("❌ Error during dream reflection generation: {}", e);
                        self.flow_state = FlowState::Input;
                    }
                }
            }
            Ok(DreamVerdict::Rejected(reason)) => {
                tracing::info!("Dream validation failed: {}", reason);
                self.enter_feedback(INVALID_QUERY_NOTICE.to_string());
            }
            Err(e) => {
                tracing::error!("❌ Error during dream validation: {}", e);
                self.flow_state = FlowState::Input;
            }
        }
    }

    /// Fetches a candidate dream and prefills the input without changing the
    /// flow state. A transport failure leaves the input untouched. Returns
    /// whether the input was prefilled.
    pub async fn on_generate_random(&mut self) -> bool {
        if self.flow_state == FlowState::Loading {
            return false;
        }

        match self.service.random_dream().await {
            Ok(dream) => {
                tracing::debug!("Random dream response: {}", dream);
                self.on_input_change(&dream);
                true
            }
            Err(e) => {
                tracing::error!("❌ Error generating random dream: {}", e);
                false
            }
        }
    }

    /// Fully reinitializes the flow, equivalent to a hard reload.
    pub fn on_reset(&mut self) {
        self.submission = Submission::default();
        self.reflection = None;
        self.feedback = None;
        self.flow_state = FlowState::Input;
    }

    /// Waits out the current feedback notice, then returns to `Input`. The
    /// deadline is dropped by any other transition, which cancels the dismiss.
    pub async fn auto_dismiss_feedback(&mut self) {
        let Some(deadline) = self.feedback.as_ref().map(|f| f.deadline) else {
            return;
        };

        tokio::time::sleep_until(deadline).await;

        if self.flow_state == FlowState::InvalidFeedback {
            self.flow_state = FlowState::Input;
        }
        self.feedback = None;
    }

    fn enter_feedback(&mut self, message: String) {
        self.feedback = Some(Feedback {
            message,
            deadline: Instant::now() + FEEDBACK_DISMISS,
        });
        self.flow_state = FlowState::InvalidFeedback;
    }
}
