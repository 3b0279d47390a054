//! Settlement state machine for a one-shot completion.
//!
//! The following states exist:
//!
//! Pending   - initial state; the synchronous completion check did not pass at
//!             wrap time and neither notification channel has fired yet.
//! Fulfilled - the resource completed, either observed synchronously at wrap
//!             time or delivered later by the success channel. Success carries
//!             no payload in this domain.
//! Rejected  - the failure channel delivered a payload; the payload lives in
//!             the state itself so that late registrations and repeated polls
//!             can replay it.
//!
//! Fulfilled and Rejected are terminal. The first settlement wins and every
//! later notification is discarded as a no-op, never an error. A tri-state is
//! used rather than an "already called" boolean so that Pending can be told
//! apart from the two terminal outcomes.

use std::fmt;

pub(crate) enum Settlement<E> {
    Pending,
    Fulfilled,
    Rejected(E),
}

impl<E> Settlement<E> {
    /// Whether the state is terminal.
    pub(crate) fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl<E> Settlement<E>
where
    E: Clone,
{
    /// The terminal outcome, if there is one yet.
    ///
    /// The rejection payload is cloned out so the state itself never leaves
    /// the terminal variant it reached.
    pub(crate) fn outcome(&self) -> Option<Result<(), E>> {
        match self {
            Self::Pending => None,
            Self::Fulfilled => Some(Ok(())),
            Self::Rejected(failure) => Some(Err(failure.clone())),
        }
    }
}

// The payload is deliberately left out so `Debug` needs no bound on `E`.
impl<E> fmt::Debug for Settlement<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Pending",
            Self::Fulfilled => "Fulfilled",
            Self::Rejected(_) => "Rejected",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_has_no_outcome() {
        let settlement = Settlement::<String>::Pending;

        assert!(!settlement.is_settled());
        assert_eq!(settlement.outcome(), None);
    }

    #[test]
    fn terminal_states_report_their_outcome() {
        let fulfilled = Settlement::<String>::Fulfilled;
        assert!(fulfilled.is_settled());
        assert_eq!(fulfilled.outcome(), Some(Ok(())));

        let rejected = Settlement::Rejected("boom".to_string());
        assert!(rejected.is_settled());
        assert_eq!(rejected.outcome(), Some(Err("boom".to_string())));
    }

    #[test]
    fn outcome_leaves_the_state_intact() {
        let rejected = Settlement::Rejected("boom".to_string());

        // Reading the outcome twice must yield the same payload both times.
        assert_eq!(rejected.outcome(), rejected.outcome());
    }
}
