use super::*;

/// Tests resetting an owned room.
///
/// Expected: success with one result per delete statement summed into the count
#[tokio::test]
async fn deletes_room() {
    let store = FakeStore::new();

    let result = ConversationService::new(&store)
        .reset_room("u1", "u1_20250101000000000".to_string())
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.total_count, 10);
    assert_eq!(result.payload.statement_results.len(), 6);
    assert_eq!(
        result.payload.cnvs_idt_id.as_deref(),
        Some("u1_20250101000000000")
    );
}

/// Tests resetting a room owned by another user.
///
/// Expected: authorization error and no delete issued
#[tokio::test]
async fn denies_room_of_other_user() {
    let store = FakeStore {
        room_owner: Some("u2".to_string()),
        ..FakeStore::new()
    };

    let err = ConversationService::new(&store)
        .reset_room("u1", "u2_20250101000000000".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Denied(_)));
    assert!(!store.calls().contains(&"delete_room"));
}

/// Tests a storage fault while deleting.
///
/// Expected: Ok with status error and no statement results
#[tokio::test]
async fn absorbs_storage_fault() {
    let store = FakeStore {
        fail_storage: true,
        ..FakeStore::new()
    };

    let result = ConversationService::new(&store)
        .reset_room("u1", "u1_20250101000000000".to_string())
        .await
        .unwrap();

    assert_eq!(result.status, OperationStatus::Error);
    assert_eq!(result.message.as_deref(), Some("Failed to reset room"));
    assert_eq!(result.total_count, 0);
    assert!(result.payload.statement_results.is_empty());
}
