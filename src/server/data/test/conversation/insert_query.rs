use super::*;

/// Tests that the first query of a session creates an active room named after the query.
///
/// Expected: Ok with a room key prefixed by the user id and one turn in the room
#[tokio::test]
async fn creates_room_on_first_query() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let identity = repo
        .insert_query(&query_params("u1", "s1", "hello"))
        .await?;

    assert!(identity.cnvs_idt_id.starts_with("u1_"));
    assert_eq!(identity.cnvs_idt_id.len(), "u1_".len() + 17);

    let room = entity::prelude::ConversationRoom::find_by_id(identity.cnvs_idt_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(room.rep_cnvs_nm, "hello");
    assert_eq!(room.use_yn, "Y");
    assert_eq!(room.session_id, "s1");

    let turn = entity::prelude::ConversationTurn::find_by_id(identity.cnvs_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(turn.cnvs_idt_id, identity.cnvs_idt_id);
    assert_eq!(turn.query_text, "hello");
    assert!(turn.answer_text.is_none());

    Ok(())
}

/// Tests that later queries of the same session reuse the room key.
///
/// Expected: Ok with the same key, distinct turn ids and a single room row
#[tokio::test]
async fn reuses_room_for_same_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let first = repo
        .insert_query(&query_params("u1", "s1", "first"))
        .await?;
    let second = repo
        .insert_query(&query_params("u1", "s1", "second"))
        .await?;

    assert_eq!(first.cnvs_idt_id, second.cnvs_idt_id);
    assert_ne!(first.cnvs_id, second.cnvs_id);

    let rooms = entity::prelude::ConversationRoom::find().count(db).await?;
    assert_eq!(rooms, 1);

    let room = entity::prelude::ConversationRoom::find_by_id(first.cnvs_idt_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(room.rep_cnvs_nm, "first");

    Ok(())
}

/// Tests that a different session of the same user gets a room of its own.
///
/// Expected: Ok with two distinct room keys
#[tokio::test]
async fn creates_separate_room_per_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let first = repo.insert_query(&query_params("u1", "s1", "a")).await?;
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = repo.insert_query(&query_params("u1", "s2", "b")).await?;

    assert_ne!(first.cnvs_idt_id, second.cnvs_idt_id);

    Ok(())
}

/// Tests that a long first query is cut to 100 characters for the room name.
///
/// Expected: Ok with a 100 character display name
#[tokio::test]
async fn truncates_room_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let long_query = "q".repeat(250);
    let repo = ConversationRepository::new(db);
    let identity = repo
        .insert_query(&query_params("u1", "s1", &long_query))
        .await?;

    let room = entity::prelude::ConversationRoom::find_by_id(identity.cnvs_idt_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(room.rep_cnvs_nm.chars().count(), 100);

    Ok(())
}
