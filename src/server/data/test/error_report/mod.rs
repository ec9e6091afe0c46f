use crate::server::{
    data::{error_report::ErrorReportRepository, store::ErrorReportStore},
    model::error_report::SaveErrorReportParams,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod insert_error_report;
mod is_turn_owned_by_user;
mod read_saved_error_codes;

fn report(cnvs_id: i64, user_id: &str, codes: &[&str]) -> SaveErrorReportParams {
    SaveErrorReportParams {
        cnvs_id,
        user_id: user_id.to_string(),
        report_text: "the answer cited the wrong policy".to_string(),
        error_codes: codes.iter().map(|code| code.to_string()).collect(),
    }
}
