//! Item filtering
//!
//! Predicates applied to each decoded item before it joins the result
//! set. Items failing a predicate are dropped; items a predicate cannot
//! evaluate are logged and skipped without aborting the fetch.

mod predicates;

pub use predicates::{AcceptAll, FieldAfterNow, FieldEquals, ItemFilter};
