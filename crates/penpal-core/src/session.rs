//! One-shot submission gate.
//!
//! The conversation trigger fires at most once per page session. Instead
//! of a global mutable flag, the gate is an explicit session-scoped object
//! handed to the wiring layer; its single transition method
//! [`SessionGate::try_claim`] guarantees at-most-once semantics. It is
//! never reset short of rebuilding the whole session.

use serde::{Deserialize, Serialize};

/// At-most-once claim over the conversation trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGate {
    claimed: bool,
}

impl SessionGate {
    /// Create an unclaimed gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { claimed: false }
    }

    /// Claim the gate. Returns `true` exactly once.
    pub fn try_claim(&mut self) -> bool {
        if self.claimed {
            return false;
        }
        self.claimed = true;
        true
    }

    /// Whether the gate has been claimed.
    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.claimed
    }
}
