use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::envelope::StatementResultDto;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct SaveErrorReportDto {
    pub cnvs_id: Option<i64>,
    pub user_id: Option<String>,
    pub err_rpt_txt: Option<String>,
    /// Selected error codes. `null` entries are reported as blank codes.
    pub err_rpt_cd_list: Option<Vec<Option<String>>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct SaveErrorReportPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_id: Option<i64>,
    pub statement_results: Vec<StatementResultDto>,
    /// Codes stored for the turn and user after the write, read back from storage.
    pub saved_err_rpt_cd_list: Vec<String>,
}
