use std::error::Error;
use std::fmt::{self, Display};

/// Indicates that a resource failed to load.
///
/// This is the concrete failure payload used by
/// [`SimulatedResource`][crate::SimulatedResource] and available to any other
/// [`LoadableResource`][crate::LoadableResource] implementation that has no
/// richer payload of its own. [`CompletionFuture`][crate::CompletionFuture]
/// itself is generic over the payload type and merely relays whatever the
/// failure channel delivers.
///
/// The type is `Clone` so an already-rejected future can replay it to late
/// registrations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceLoadFailure {
    message: String,
}

impl ResourceLoadFailure {
    /// Creates a failure carrying the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message delivered by the resource.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Error for ResourceLoadFailure {}

impl Display for ResourceLoadFailure {
    #[cfg_attr(test, mutants::skip)] // No API contract for error message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource failed to load: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_writes_message() {
        let failure = ResourceLoadFailure::new("no pug for you");
        let display_output = failure.to_string();

        assert!(display_output.contains("no pug for you"));
    }

    #[test]
    fn message_is_preserved() {
        let failure = ResourceLoadFailure::new("timed out");

        assert_eq!(failure.message(), "timed out");
        assert_eq!(failure.clone(), failure);
    }
}
