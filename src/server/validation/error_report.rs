//! Validator for error reports.

use crate::{
    model::error_report::SaveErrorReportDto,
    server::{
        error::validation::ValidationError,
        model::error_report::SaveErrorReportParams,
        validation::{non_blank, require, require_list, require_text},
    },
};

/// Validates an error report.
///
/// Requires `cnvs_id`, `user_id` and `err_rpt_txt`, then a non-empty `err_rpt_cd_list`
/// without blank codes.
pub fn validate_error_report(
    dto: SaveErrorReportDto,
) -> Result<SaveErrorReportParams, ValidationError> {
    let cnvs_id = require("cnvs_id", dto.cnvs_id)?;
    let user_id = require_text("user_id", dto.user_id)?;
    let report_text = require_text("err_rpt_txt", dto.err_rpt_txt)?;
    let error_codes = require_list("err_rpt_cd_list", dto.err_rpt_cd_list)?
        .into_iter()
        .map(|code| non_blank(code).ok_or(ValidationError::BlankEntry("err_rpt_cd_list")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SaveErrorReportParams {
        cnvs_id,
        user_id,
        report_text,
        error_codes,
    })
}
