//! Error report repository.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::store::ErrorReportStore,
    model::{error_report::SaveErrorReportParams, outcome::StatementOutcome},
};

pub const INSERT_ERROR_REPORT: &str = "insert-error-report";
pub const INSERT_ERROR_REPORT_CODES: &str = "insert-error-report-codes";

pub struct ErrorReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ErrorReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ErrorReportStore for ErrorReportRepository<'_> {
    /// Inserts the report row and its codes in one transaction.
    ///
    /// Codes are keyed by turn, user and code. A code the user already reported for the turn
    /// is skipped and does not count towards `insert-error-report-codes`.
    ///
    /// # Returns
    /// - `Ok(Vec<StatementOutcome>)` - `insert-error-report` and `insert-error-report-codes`
    /// - `Err(DbErr)` - Database error; nothing is written
    async fn insert_error_report(
        &self,
        params: &SaveErrorReportParams,
    ) -> Result<Vec<StatementOutcome>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        entity::error_report::ActiveModel {
            cnvs_id: ActiveValue::Set(params.cnvs_id),
            user_id: ActiveValue::Set(params.user_id.clone()),
            err_rpt_txt: ActiveValue::Set(params.report_text.clone()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut code_rows = 0u64;
        for code in &params.error_codes {
            code_rows += entity::prelude::ErrorReportCode::insert(
                entity::error_report_code::ActiveModel {
                    cnvs_id: ActiveValue::Set(params.cnvs_id),
                    user_id: ActiveValue::Set(params.user_id.clone()),
                    err_rpt_cd: ActiveValue::Set(code.clone()),
                    created_at: ActiveValue::Set(now),
                },
            )
            .on_conflict(
                OnConflict::columns([
                    entity::error_report_code::Column::CnvsId,
                    entity::error_report_code::Column::UserId,
                    entity::error_report_code::Column::ErrRptCd,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(vec![
            StatementOutcome::new(INSERT_ERROR_REPORT, 1),
            StatementOutcome::from_rows(INSERT_ERROR_REPORT_CODES, code_rows),
        ])
    }

    async fn is_turn_owned_by_user(&self, cnvs_id: i64, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ConversationTurn::find()
            .filter(entity::conversation_turn::Column::CnvsId.eq(cnvs_id))
            .filter(entity::conversation_turn::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn read_saved_error_codes(&self, cnvs_id: i64, user_id: &str) -> Result<Vec<String>, DbErr> {
        Ok(entity::prelude::ErrorReportCode::find()
            .filter(entity::error_report_code::Column::CnvsId.eq(cnvs_id))
            .filter(entity::error_report_code::Column::UserId.eq(user_id))
            .order_by_asc(entity::error_report_code::Column::ErrRptCd)
            .all(self.db)
            .await?
            .into_iter()
            .map(|code| code.err_rpt_cd)
            .collect())
    }
}
