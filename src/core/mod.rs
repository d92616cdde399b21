//! Core audit engine.
//!
//! The pipeline runs in a single synchronous pass:
//!
//! 1. `file_scanner`: discover source files under the root, sorted by path
//! 2. `collect`: locate watched calls in each file and build callsites
//!    (using `extract` to cut out each argument list)
//! 3. `audit`: aggregate callsites across files into an `AuditResult`
//!
//! ## Module Structure
//!
//! - `audit`: Run driver and aggregated result
//! - `collect`: Call-site locator and per-file collection
//! - `context`: Resolved configuration for a run
//! - `data`: Callsite data type
//! - `error`: Fatal scan errors
//! - `extract`: Balanced argument-list extraction
//! - `file_scanner`: Source file discovery

pub mod audit;
pub mod collect;
pub mod context;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;

pub use audit::{AuditResult, run_audit};
pub use context::AuditContext;
pub use data::Callsite;
pub use error::ScanError;
