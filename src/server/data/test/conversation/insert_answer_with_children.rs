use super::*;

/// Tests saving an answer with two reference documents and one follow-up question.
///
/// Expected: Ok with one outcome per write and the answer columns populated
#[tokio::test]
async fn saves_answer_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, turn) = factory::helpers::create_room_with_turn(db, "u1").await?;
    let identity = ConversationIdentity {
        cnvs_idt_id: room.cnvs_idt_id,
        cnvs_id: turn.cnvs_id,
    };

    let repo = ConversationRepository::new(db);
    let outcomes = repo
        .insert_answer_with_children(&answer_params(identity, "u1", &[1, 2], &[1]))
        .await?;

    let counts: Vec<(&str, i64)> = outcomes
        .iter()
        .map(|o| (o.statement_name.as_str(), o.affected_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("update-conversation-summary", 1),
            ("insert-reference-docs", 2),
            ("insert-followup-questions", 1),
        ]
    );

    let saved = entity::prelude::ConversationTurn::find_by_id(turn.cnvs_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(saved.answer_text.as_deref(), Some("answer"));
    assert_eq!(saved.abort_yn.as_deref(), Some("N"));
    assert_eq!(saved.token_use_count, Some(300));
    assert!(saved.answered_at.is_some());

    Ok(())
}

/// Tests that saving the answer of a turn again replaces its children.
///
/// Expected: Ok with only the second save's children stored
#[tokio::test]
async fn replaces_existing_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, turn) = factory::helpers::create_room_with_turn(db, "u1").await?;
    let identity = ConversationIdentity {
        cnvs_idt_id: room.cnvs_idt_id,
        cnvs_id: turn.cnvs_id,
    };

    let repo = ConversationRepository::new(db);
    repo.insert_answer_with_children(&answer_params(identity.clone(), "u1", &[1, 2, 3], &[1, 2]))
        .await?;
    repo.insert_answer_with_children(&answer_params(identity, "u1", &[1], &[1]))
        .await?;

    let docs = entity::prelude::ReferenceDocument::find()
        .filter(entity::reference_document::Column::CnvsId.eq(turn.cnvs_id))
        .count(db)
        .await?;
    let questions = entity::prelude::FollowUpQuestion::find()
        .filter(entity::follow_up_question::Column::CnvsId.eq(turn.cnvs_id))
        .count(db)
        .await?;
    assert_eq!(docs, 1);
    assert_eq!(questions, 1);

    Ok(())
}

/// Tests that a turn id that does not belong to the given room is not updated.
///
/// Expected: Ok with zero rows for every write and no children stored
#[tokio::test]
async fn does_not_update_turn_of_other_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, turn) = factory::helpers::create_room_with_turn(db, "u1").await?;
    let other_room = factory::create_room(db, "u1").await?;
    let identity = ConversationIdentity {
        cnvs_idt_id: other_room.cnvs_idt_id,
        cnvs_id: turn.cnvs_id,
    };

    let repo = ConversationRepository::new(db);
    let outcomes = repo
        .insert_answer_with_children(&answer_params(identity, "u1", &[1], &[1]))
        .await?;

    assert!(outcomes.iter().all(|o| o.affected_count == 0));
    assert_eq!(entity::prelude::ReferenceDocument::find().count(db).await?, 0);

    let saved = entity::prelude::ConversationTurn::find_by_id(turn.cnvs_id)
        .one(db)
        .await?
        .unwrap();
    assert!(saved.answer_text.is_none());

    Ok(())
}

/// Tests that a child insert failure rolls back the whole answer.
///
/// Duplicate `ref_seq` values violate the reference document key.
///
/// Expected: Err and the turn left unanswered without children
#[tokio::test]
async fn rolls_back_on_child_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, turn) = factory::helpers::create_room_with_turn(db, "u1").await?;
    let identity = ConversationIdentity {
        cnvs_idt_id: room.cnvs_idt_id,
        cnvs_id: turn.cnvs_id,
    };

    let repo = ConversationRepository::new(db);
    let result = repo
        .insert_answer_with_children(&answer_params(identity, "u1", &[1, 1], &[1]))
        .await;

    assert!(result.is_err());

    let saved = entity::prelude::ConversationTurn::find_by_id(turn.cnvs_id)
        .one(db)
        .await?
        .unwrap();
    assert!(saved.answer_text.is_none());

    let docs = entity::prelude::ReferenceDocument::find().count(db).await?;
    assert_eq!(docs, 0);

    Ok(())
}
