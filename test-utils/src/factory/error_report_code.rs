//! Error report code factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a persisted error code for the given turn and user.
///
/// # Returns
/// - `Ok(Model)` - The created code row
/// - `Err(DbErr)` - Database error, including a duplicate (cnvs_id, user_id, code)
pub async fn create_error_report_code(
    db: &DatabaseConnection,
    cnvs_id: i64,
    user_id: &str,
    code: &str,
) -> Result<entity::error_report_code::Model, DbErr> {
    entity::error_report_code::ActiveModel {
        cnvs_id: ActiveValue::Set(cnvs_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        err_rpt_cd: ActiveValue::Set(code.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
