//! Submission state machine for category edits
//!
//! `Idle -> Submitting -> Succeeded | Failed`, and back to `Idle` once the
//! caller acknowledges the outcome. Validation failures never leave `Idle`.

use crate::error::{TreeError, TreeResult};
use crate::source::SourceError;

/// Which edit is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update(i64),
    Delete(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting(MutationKind),
    Succeeded(MutationKind),
    Failed { kind: MutationKind, message: String },
}

impl MutationState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    /// Submit controls are enabled whenever nothing is in flight
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Message of the last failure
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Return to `Idle` after the outcome was shown. No effect while submitting.
    pub fn acknowledge(&mut self) {
        if !self.is_submitting() {
            *self = Self::Idle;
        }
    }
}

/// In-flight submission; settles the state when the source answers.
///
/// Dropped before settling (the awaiting future was cancelled), it marks the
/// submission failed so the form can be resubmitted.
pub(crate) struct Submission<'a> {
    state: &'a mut MutationState,
    kind: MutationKind,
    settled: bool,
}

impl<'a> Submission<'a> {
    pub(crate) fn begin(state: &'a mut MutationState, kind: MutationKind) -> TreeResult<Self> {
        if state.is_submitting() {
            return Err(TreeError::MutationInFlight);
        }
        *state = MutationState::Submitting(kind);
        Ok(Self {
            state,
            kind,
            settled: false,
        })
    }

    pub(crate) fn settle<T>(mut self, result: &Result<T, SourceError>) {
        *self.state = match result {
            Ok(_) => MutationState::Succeeded(self.kind),
            Err(e) => MutationState::Failed {
                kind: self.kind,
                message: e.to_string(),
            },
        };
        self.settled = true;
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state = MutationState::Failed {
                kind: self.kind,
                message: "submission was cancelled".to_string(),
            };
        }
    }
}
