//! Error report parameters.

/// Validated parameters for filing an error report against one turn.
///
/// `error_codes` is non-empty and holds no blank entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveErrorReportParams {
    pub cnvs_id: i64,
    pub user_id: String,
    pub report_text: String,
    pub error_codes: Vec<String>,
}
