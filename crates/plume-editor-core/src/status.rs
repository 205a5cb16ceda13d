//! Submission status for the post button.

/// Where a submission stands. One tagged value instead of loose flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// `Idle -> Submitting`. Returns false (and changes nothing) from any other state.
    pub fn begin(&mut self) -> bool {
        if self.is_idle() {
            *self = SubmissionStatus::Submitting;
            true
        } else {
            tracing::debug!(status = ?self, "submission already in progress");
            false
        }
    }

    /// `Submitting -> Success | Error`. Ignored outside `Submitting`.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if !self.is_submitting() {
            tracing::warn!(status = ?self, "finish called while not submitting");
            return;
        }
        *self = match outcome {
            Ok(()) => SubmissionStatus::Success,
            Err(message) => SubmissionStatus::Error(message),
        };
    }

    /// Back to `Idle` after the status text has been shown.
    pub fn reset(&mut self) {
        *self = SubmissionStatus::Idle;
    }

    /// Button label; `editing` switches the idle label to "Update".
    pub fn label(&self, editing: bool) -> &'static str {
        match self {
            SubmissionStatus::Idle if editing => "Update",
            SubmissionStatus::Idle => "Post",
            SubmissionStatus::Submitting if editing => "Updating...",
            SubmissionStatus::Submitting => "Posting...",
            SubmissionStatus::Success if editing => "Updated!",
            SubmissionStatus::Success => "Posted!",
            SubmissionStatus::Error(_) => "Failed",
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut status = SubmissionStatus::default();
        assert!(status.begin());
        assert_eq!(status.label(false), "Posting...");
        status.finish(Ok(()));
        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(status.label(true), "Updated!");
        status.reset();
        assert!(status.is_idle());
    }

    #[test]
    fn begin_refused_while_busy() {
        let mut status = SubmissionStatus::Submitting;
        assert!(!status.begin());

        let mut status = SubmissionStatus::Error("boom".into());
        assert!(!status.begin());
        assert_eq!(status.error_message(), Some("boom"));
    }

    #[test]
    fn finish_outside_submitting_is_ignored() {
        let mut status = SubmissionStatus::Idle;
        status.finish(Err("late".into()));
        assert!(status.is_idle());
    }
}
