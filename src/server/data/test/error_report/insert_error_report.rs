use super::*;

/// Tests inserting a report with two new codes.
///
/// Expected: Ok with the report counted once and both codes inserted
#[tokio::test]
async fn inserts_report_and_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ErrorReportRepository::new(db);
    let outcomes = repo
        .insert_error_report(&report(100, "u1", &["ERR001", "ERR002"]))
        .await?;

    let counts: Vec<(&str, i64)> = outcomes
        .iter()
        .map(|o| (o.statement_name.as_str(), o.affected_count))
        .collect();
    assert_eq!(
        counts,
        vec![("insert-error-report", 1), ("insert-error-report-codes", 2)]
    );
    assert_eq!(entity::prelude::ErrorReport::find().count(db).await?, 1);

    Ok(())
}

/// Tests that codes already stored for the turn and user are skipped.
///
/// Expected: Ok with only the new code counted and no duplicate rows
#[tokio::test]
async fn skips_codes_already_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_error_report_code(db, 100, "u1", "ERR001").await?;

    let repo = ErrorReportRepository::new(db);
    let outcomes = repo
        .insert_error_report(&report(100, "u1", &["ERR001", "ERR002", "ERR002"]))
        .await?;

    assert_eq!(outcomes[1].affected_count, 1);
    assert_eq!(entity::prelude::ErrorReportCode::find().count(db).await?, 2);

    Ok(())
}

/// Tests that the same code reported by another user is stored separately.
///
/// Expected: Ok with the code inserted for the second user
#[tokio::test]
async fn keeps_codes_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_error_report_code(db, 100, "u1", "ERR001").await?;

    let repo = ErrorReportRepository::new(db);
    let outcomes = repo
        .insert_error_report(&report(100, "u2", &["ERR001"]))
        .await?;

    assert_eq!(outcomes[1].affected_count, 1);

    Ok(())
}
