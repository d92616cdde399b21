//! Compliance rules applied to extracted call text.
//!
//! Rules are pure functions of the call text: no I/O, no failure modes.

pub mod required_marker;

pub use required_marker::RequiredMarker;
