//! Core data types produced by the audit pipeline.

pub mod callsite;

pub use callsite::Callsite;
