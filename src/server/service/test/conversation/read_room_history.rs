use super::*;

/// Tests reading the history of an owned room.
///
/// Expected: success with the turns and the count matching
#[tokio::test]
async fn reads_turns() {
    let store = FakeStore {
        turns: vec![turn(1), turn(2)],
        ..FakeStore::new()
    };

    let result = ConversationService::new(&store)
        .read_room_history("u1", "u1_20250101000000000".to_string())
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.total_count, 2);
    assert_eq!(result.payload.turns[1].txn_nm, "query 2");
    assert_eq!(
        store.calls(),
        vec!["is_room_owned_by_user", "read_room_history"]
    );
}

/// Tests reading a room owned by another user.
///
/// Expected: authorization error and no history read
#[tokio::test]
async fn denies_room_of_other_user() {
    let store = FakeStore::new();

    let err = ConversationService::new(&store)
        .read_room_history("u2", "u1_20250101000000000".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RequestError::Denied(AuthError::RoomAccessDenied { .. })
    ));
    assert_eq!(store.calls(), vec!["is_room_owned_by_user"]);
}

/// Tests a blank room key.
///
/// Expected: validation error and no storage calls
#[tokio::test]
async fn rejects_blank_room_key() {
    let store = FakeStore::new();

    let err = ConversationService::new(&store)
        .read_room_history("u1", " ".to_string())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "cnvs_idt_id is required");
    assert!(store.calls().is_empty());
}
