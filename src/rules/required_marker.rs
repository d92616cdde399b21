/// Compliance rule: a call is compliant when its text contains the marker.
///
/// Matching is an exact, case-sensitive substring test. `operationID :` or
/// `operationId:` do not count as `operationID:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredMarker {
    marker: String,
}

impl RequiredMarker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_compliant(&self, call_text: &str) -> bool {
        call_text.contains(&self.marker)
    }
}
