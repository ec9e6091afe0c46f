use super::*;
use crate::server::{
    data::{error_report::ErrorReportRepository, store::ErrorReportStore},
    model::error_report::SaveErrorReportParams,
};

fn error_report(cnvs_id: i64, codes: &[&str]) -> SaveErrorReportParams {
    SaveErrorReportParams {
        cnvs_id,
        user_id: "u1".to_string(),
        report_text: "wrong citation".to_string(),
        error_codes: codes.iter().map(|code| code.to_string()).collect(),
    }
}

/// Tests that resetting a room removes every dependent row and nothing else.
///
/// Expected: Ok with one outcome per delete statement and the other room untouched
#[tokio::test]
async fn deletes_room_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let first = repo.insert_query(&query_params("u1", "s1", "first")).await?;
    let second = repo
        .insert_query(&query_params("u1", "s1", "second"))
        .await?;
    repo.insert_answer_with_children(&answer_params(first.clone(), "u1", &[1, 2], &[1]))
        .await?;
    repo.insert_answer_with_children(&answer_params(second, "u1", &[1], &[1, 2]))
        .await?;
    let (kept_room, kept_turn) = factory::helpers::create_room_with_turn(db, "u1").await?;

    let reports = ErrorReportRepository::new(db);
    reports
        .insert_error_report(&error_report(first.cnvs_id, &["ERR001", "ERR002"]))
        .await?;
    reports
        .insert_error_report(&error_report(kept_turn.cnvs_id, &["ERR001"]))
        .await?;

    let outcomes = repo.delete_room(&first.cnvs_idt_id).await?;

    let counts: Vec<(&str, i64)> = outcomes
        .iter()
        .map(|o| (o.statement_name.as_str(), o.affected_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("delete-error-report-codes", 2),
            ("delete-error-reports", 1),
            ("delete-followup-questions", 3),
            ("delete-reference-docs", 3),
            ("delete-conversation-turns", 2),
            ("delete-conversation-room", 1),
        ]
    );

    assert!(repo.read_room_history(&first.cnvs_idt_id).await?.is_empty());
    assert!(repo.read_conversation_meta(&first.cnvs_idt_id).await?.is_none());
    assert_eq!(entity::prelude::ReferenceDocument::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FollowUpQuestion::find().count(db).await?, 0);
    assert!(reports.read_saved_error_codes(first.cnvs_id, "u1").await?.is_empty());

    assert!(repo.read_conversation_meta(&kept_room.cnvs_idt_id).await?.is_some());
    assert!(entity::prelude::ConversationTurn::find_by_id(kept_turn.cnvs_id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::ErrorReport::find().count(db).await?, 1);
    assert_eq!(
        reports.read_saved_error_codes(kept_turn.cnvs_id, "u1").await?,
        vec!["ERR001".to_string()]
    );

    Ok(())
}

/// Tests resetting a room that does not exist.
///
/// Expected: Ok with six zero-count outcomes
#[tokio::test]
async fn reports_zero_rows_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let outcomes = repo.delete_room("missing").await?;

    assert_eq!(outcomes.len(), 6);
    assert!(outcomes.iter().all(|o| o.affected_count == 0));

    Ok(())
}
