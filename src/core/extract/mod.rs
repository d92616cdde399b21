//! Argument-list extraction for located calls.

pub mod call_text;

pub use call_text::extract_call_text;
