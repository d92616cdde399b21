use std::process::ExitCode;

use crate::core::AuditResult;

/// Process outcome of an audit run.
///
/// | variant   | code | when                                            |
/// |-----------|------|-------------------------------------------------|
/// | `Success` | 0    | no watched callsites, or every one is compliant |
/// | `Failure` | 1    | at least one callsite is missing the marker     |
/// | `Error`   | 2    | root missing, unreadable file or bad config     |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

/// Verdict of a completed audit. `Error` is never produced here: it only
/// comes from runs that abort before a result exists.
impl From<&AuditResult> for ExitStatus {
    fn from(result: &AuditResult) -> Self {
        if result.passed() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
