use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of an orchestrated operation as seen by the caller.
///
/// `Error` means a storage fault was absorbed; request rejections never produce an envelope.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    Success,
    Error,
}

/// Uniform response envelope returned by every conversation operation.
///
/// The operation specific payload is flattened next to the common fields, e.g.
///
/// ```json
/// { "status": "success", "count": 3, "processing_time": 12, "cnvs_idt_id": "u1_..." }
/// { "status": "error", "count": 0, "processing_time": 3, "message": "Failed to save answer" }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OperationResult<P> {
    pub status: OperationStatus,
    /// Sum of the affected counts of every statement the operation ran.
    #[serde(rename = "count")]
    pub total_count: i64,
    /// Milliseconds between validation passing and the envelope being built.
    #[serde(rename = "processing_time")]
    pub elapsed_millis: i64,
    /// Reason for an `error` status. Absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> OperationResult<P> {
    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}

/// One write statement's affected-row count.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct StatementResultDto {
    pub statement_name: String,
    pub affected_count: i64,
}
