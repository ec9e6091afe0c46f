use super::*;

/// Tests that codes are read back in ascending order for the turn and user only.
///
/// Expected: Ok with the sorted codes of `u1` on turn 100
#[tokio::test]
async fn reads_codes_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_error_report_code(db, 100, "u1", "ERR003").await?;
    factory::create_error_report_code(db, 100, "u1", "ERR001").await?;
    factory::create_error_report_code(db, 100, "u2", "ERR002").await?;
    factory::create_error_report_code(db, 101, "u1", "ERR004").await?;

    let repo = ErrorReportRepository::new(db);
    let codes = repo.read_saved_error_codes(100, "u1").await?;

    assert_eq!(codes, vec!["ERR001", "ERR003"]);

    Ok(())
}

/// Tests that two reads without an intervening write agree.
///
/// Expected: Ok with identical lists
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_error_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ErrorReportRepository::new(db);
    repo.insert_error_report(&report(100, "u1", &["ERR002", "ERR001"]))
        .await?;

    let first = repo.read_saved_error_codes(100, "u1").await?;
    let second = repo.read_saved_error_codes(100, "u1").await?;

    assert_eq!(first, vec!["ERR001", "ERR002"]);
    assert_eq!(first, second);

    Ok(())
}
