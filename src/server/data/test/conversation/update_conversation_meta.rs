use super::*;

/// Tests renaming a room without touching its use flag.
///
/// Expected: Ok with one updated row and the new name read back
#[tokio::test]
async fn updates_display_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db, "u1").await?;

    let repo = ConversationRepository::new(db);
    let outcomes = repo
        .update_conversation_meta(&UpdateConversationMetaParams {
            cnvs_idt_id: room.cnvs_idt_id.clone(),
            display_name: Some("renamed".to_string()),
            is_active: None,
        })
        .await?;

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].statement_name, "update-conversation-meta");
    assert_eq!(outcomes[0].affected_count, 1);

    let meta = repo.read_conversation_meta(&room.cnvs_idt_id).await?.unwrap();
    assert_eq!(meta.display_name, "renamed");
    assert_eq!(meta.is_active, YesNo::Yes);

    Ok(())
}

/// Tests deactivating a room without renaming it.
///
/// Expected: Ok with the original name and `N` read back
#[tokio::test]
async fn updates_use_flag_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::conversation_room::RoomFactory::new(db, "u1")
        .rep_cnvs_nm("original")
        .build()
        .await?;

    let repo = ConversationRepository::new(db);
    repo.update_conversation_meta(&UpdateConversationMetaParams {
        cnvs_idt_id: room.cnvs_idt_id.clone(),
        display_name: None,
        is_active: Some(YesNo::No),
    })
    .await?;

    let meta = repo.read_conversation_meta(&room.cnvs_idt_id).await?.unwrap();
    assert_eq!(meta.display_name, "original");
    assert_eq!(meta.is_active, YesNo::No);

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Ok with zero affected rows and no metadata to read back
#[tokio::test]
async fn reports_zero_rows_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let outcomes = repo
        .update_conversation_meta(&UpdateConversationMetaParams {
            cnvs_idt_id: "missing".to_string(),
            display_name: Some("renamed".to_string()),
            is_active: None,
        })
        .await?;

    assert_eq!(outcomes[0].affected_count, 0);
    assert!(repo.read_conversation_meta("missing").await?.is_none());

    Ok(())
}
