//! Commentary collaborator surface.
//!
//! The engine only emits [`CommentaryEvent`]s. This module holds what a
//! caller needs to turn those into text:
//!
//! - [`Commentator`]: anything that can produce a line for an event
//! - [`commentary_or_fallback`]: never-failing wrapper used for display
//! - [`CommentaryPrompt`]: persona and per-event prompt text for a
//!   language-model backend
//! - [`CannedCommentator`]: offline stock lines, one per trigger
//!
//! No network code lives here. Wiring a prompt to an HTTP client is up to
//! the application.

mod canned;
mod prompt;

pub use canned::CannedCommentator;
pub use prompt::CommentaryPrompt;

use thiserror::Error;

use crate::events::CommentaryEvent;

/// Prefix of the line shown when commentary could not be produced.
pub const FALLBACK_PREFIX: &str = "System Glitch...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentaryError {
    #[error("{0}")]
    Unavailable(String),
    #[error("empty response")]
    Empty,
}

/// Produces commentary text for an event.
///
/// The returned text is opaque to the engine; any string is acceptable.
pub trait Commentator {
    fn commentate(&self, event: &CommentaryEvent) -> Result<String, CommentaryError>;
}

impl<F> Commentator for F
where
    F: Fn(&CommentaryEvent) -> Result<String, CommentaryError>,
{
    fn commentate(&self, event: &CommentaryEvent) -> Result<String, CommentaryError> {
        self(event)
    }
}

/// Fallback line for a failed commentary call.
#[must_use]
pub fn fallback_line(error: &CommentaryError) -> String {
    format!("{FALLBACK_PREFIX} (Error: {error})")
}

/// Ask `commentator` for a line, substituting the fallback line on failure.
///
/// A single attempt is made; there is no retry.
pub fn commentary_or_fallback<C: Commentator + ?Sized>(
    commentator: &C,
    event: &CommentaryEvent,
) -> String {
    match commentator.commentate(event) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("commentary for {} failed: {err}", event.trigger);
            fallback_line(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CommentaryTrigger;

    #[test]
    fn test_fallback_on_error() {
        let broken = |_: &CommentaryEvent| -> Result<String, CommentaryError> {
            Err(CommentaryError::Unavailable("timed out".into()))
        };
        let event = CommentaryEvent::new(CommentaryTrigger::AiWin, "x");

        assert_eq!(
            commentary_or_fallback(&broken, &event),
            "System Glitch... (Error: timed out)"
        );
    }

    #[test]
    fn test_success_passes_through_untouched() {
        let echo = |event: &CommentaryEvent| -> Result<String, CommentaryError> {
            Ok(format!("<<{}>>", event.context))
        };
        let event = CommentaryEvent::new(CommentaryTrigger::Draw, "tie");

        assert_eq!(commentary_or_fallback(&echo, &event), "<<tie>>");
    }

    #[test]
    fn test_empty_error_message() {
        assert_eq!(
            fallback_line(&CommentaryError::Empty),
            "System Glitch... (Error: empty response)"
        );
    }
}
