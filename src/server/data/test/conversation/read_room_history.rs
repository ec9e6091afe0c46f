use super::*;

/// Tests reading a room with an answered and an unanswered turn.
///
/// Expected: Ok with turns in id order and children ordered by sequence
#[tokio::test]
async fn reads_turns_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    let first = repo.insert_query(&query_params("u1", "s1", "first")).await?;
    let second = repo
        .insert_query(&query_params("u1", "s1", "second"))
        .await?;
    repo.insert_answer_with_children(&answer_params(first.clone(), "u1", &[2, 1], &[3, 1, 2]))
        .await?;

    let history = repo.read_room_history(&first.cnvs_idt_id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].cnvs_id, first.cnvs_id);
    assert_eq!(history[0].answer_text.as_deref(), Some("answer"));
    assert_eq!(history[0].aborted, Some(YesNo::No));
    assert_eq!(
        history[0]
            .reference_docs
            .iter()
            .map(|d| d.ref_seq)
            .collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(
        history[0]
            .follow_up_questions
            .iter()
            .map(|q| q.seq)
            .collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    assert_eq!(history[1].cnvs_id, second.cnvs_id);
    assert_eq!(history[1].query_text, "second");
    assert!(history[1].answer_text.is_none());
    assert!(history[1].aborted.is_none());
    assert!(history[1].reference_docs.is_empty());

    Ok(())
}

/// Tests reading the history of an unknown room.
///
/// Expected: Ok with no turns
#[tokio::test]
async fn returns_empty_history_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conversation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    assert!(repo.read_room_history("missing").await?.is_empty());

    Ok(())
}
