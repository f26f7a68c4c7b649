//! Response types (Serialize)

use caramel_core::constants::VISITOR_UPDATE_FAILED;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Body of a failed visitor count update. `count` is the literal `"Error"`
/// so the page can render it in place of a number.
#[derive(Debug, Serialize)]
pub struct VisitorCountFailure {
    pub error: &'static str,
    pub count: &'static str,
}

impl Default for VisitorCountFailure {
    fn default() -> Self {
        Self { error: VISITOR_UPDATE_FAILED, count: "Error" }
    }
}
