//! Commentary events emitted by the engine.
//!
//! ## Key Components
//!
//! - [`CommentaryTrigger`]: The six event tags a commentator reacts to
//! - [`CommentaryEvent`]: Trigger plus context and score
//! - [`EventQueue`]: Where the controller parks events for the caller
//!
//! Events are pushed synchronously after the state change they describe.
//! Turning them into text is the caller's business (see `commentary`), so a
//! slow or failing text service can never affect a match.

mod event;
mod queue;

pub use event::{CommentaryEvent, CommentaryTrigger};
pub use queue::EventQueue;
