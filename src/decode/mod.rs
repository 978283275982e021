//! The decode pipeline: envelope extraction, main-body scanning, and
//! remarks scanning, tied together by [`builder::build`].
//!
//! These stay free functions over a short-lived [`Envelope`](envelope::Envelope)
//! rather than a parser object hierarchy; there's no shared mutable state
//! that would justify one.

pub mod builder;
pub mod envelope;
pub mod main_body;
pub mod remarks_scan;
