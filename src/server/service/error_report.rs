//! Error report orchestration.

use crate::{
    model::{
        envelope::OperationResult,
        error_report::{SaveErrorReportDto, SaveErrorReportPayload},
    },
    server::{
        data::store::ErrorReportStore,
        error::{auth::AuthError, request::RequestError},
        model::outcome::StatementOutcome,
        service::{envelope::EnvelopeBuilder, ownership::TurnOwnershipGuard},
        validation::error_report::validate_error_report,
    },
};

/// Statements written by an error report save.
pub const SAVE_ERROR_REPORT_STATEMENTS: usize = 2;

pub struct ErrorReportService<'a, S> {
    store: &'a S,
}

impl<'a, S: ErrorReportStore> ErrorReportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Files an error report and returns the codes stored for the turn and user.
    ///
    /// `saved_err_rpt_cd_list` is read back from storage after the write, so it reflects codes
    /// reported earlier as well as duplicates storage skipped.
    ///
    /// # Returns
    /// - `Ok(OperationResult)` - Per-statement results and the stored codes, or a storage
    ///   fault envelope with empty lists
    /// - `Err(RequestError::Validation)` - Required field missing, or the code list empty or
    ///   holding a blank code
    /// - `Err(RequestError::Denied)` - Turn is missing or was asked by another user
    pub async fn save_error_report(
        &self,
        dto: SaveErrorReportDto,
    ) -> Result<OperationResult<SaveErrorReportPayload>, RequestError> {
        let params = validate_error_report(dto)?;
        let envelope = EnvelopeBuilder::start("save_error_report");
        let fault_payload = SaveErrorReportPayload {
            cnvs_id: Some(params.cnvs_id),
            ..Default::default()
        };

        match TurnOwnershipGuard::new(self.store)
            .is_owner(params.cnvs_id, &params.user_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Err(AuthError::TurnAccessDenied {
                    cnvs_id: params.cnvs_id,
                    user_id: params.user_id.clone(),
                }
                .into())
            }
            Err(err) => {
                tracing::error!(
                    cnvs_id = params.cnvs_id,
                    user_id = %params.user_id,
                    error = %err,
                    "Failed to check turn ownership before saving error report"
                );
                return Ok(envelope.storage_fault(
                    "Failed to check turn ownership before saving error report",
                    fault_payload,
                ));
            }
        }

        let result = async {
            let outcomes = self.store.insert_error_report(&params).await?;
            let saved_codes = self
                .store
                .read_saved_error_codes(params.cnvs_id, &params.user_id)
                .await?;
            Ok::<_, sea_orm::DbErr>((outcomes, saved_codes))
        }
        .await;

        match result {
            Ok((outcomes, saved_codes)) => {
                let payload = SaveErrorReportPayload {
                    cnvs_id: Some(params.cnvs_id),
                    statement_results: outcomes
                        .iter()
                        .cloned()
                        .map(StatementOutcome::into_dto)
                        .collect(),
                    saved_err_rpt_cd_list: saved_codes,
                };
                Ok(envelope.aggregate(&outcomes, SAVE_ERROR_REPORT_STATEMENTS, payload))
            }
            Err(err) => {
                tracing::error!(
                    cnvs_id = params.cnvs_id,
                    user_id = %params.user_id,
                    error = %err,
                    "Failed to save error report"
                );
                Ok(envelope.storage_fault("Failed to save error report", fault_payload))
            }
        }
    }
}
