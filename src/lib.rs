//! Callaudit - call-site convention checker
//!
//! Callaudit is a CLI tool and library that statically audits source files
//! for a call-site convention: every call to a watched set of methods on a
//! watched receiver must explicitly pass a named argument. By default it
//! checks that Swift calls such as `mountManager.connect(...)` forward
//! `operationID:`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core audit engine (discovery, location, extraction, aggregation)
//! - `rules`: Compliance rules applied to call text

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
