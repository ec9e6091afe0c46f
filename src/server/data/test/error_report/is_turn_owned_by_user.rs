use super::*;

/// Tests the turn check for the asker, another user and an unknown turn.
///
/// Expected: true only for the user who asked the turn
#[tokio::test]
async fn checks_asker() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, turn) = factory::helpers::create_room_with_turn(db, "u1").await?;

    let repo = ErrorReportRepository::new(db);
    assert!(repo.is_turn_owned_by_user(turn.cnvs_id, "u1").await?);
    assert!(!repo.is_turn_owned_by_user(turn.cnvs_id, "u2").await?);
    assert!(!repo.is_turn_owned_by_user(turn.cnvs_id + 1, "u1").await?);

    Ok(())
}
