use super::*;

/// Tests the ownership check for the owner, another user and an unknown room.
///
/// Expected: true only for the owner
#[tokio::test]
async fn checks_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db, "u1").await?;

    let repo = ConversationRepository::new(db);
    assert!(repo.is_room_owned_by_user(&room.cnvs_idt_id, "u1").await?);
    assert!(!repo.is_room_owned_by_user(&room.cnvs_idt_id, "u2").await?);
    assert!(!repo.is_room_owned_by_user("missing", "u1").await?);

    Ok(())
}

/// Tests that an inactive room still belongs to its owner.
///
/// Expected: true
#[tokio::test]
async fn ignores_use_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::conversation_room::RoomFactory::new(db, "u1")
        .use_yn("N")
        .build()
        .await?;

    let repo = ConversationRepository::new(db);
    assert!(repo.is_room_owned_by_user(&room.cnvs_idt_id, "u1").await?);

    Ok(())
}
