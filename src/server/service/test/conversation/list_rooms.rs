use super::*;

/// Tests listing rooms.
///
/// Expected: success with one entry per room and the count matching
#[tokio::test]
async fn lists_rooms() {
    let store = FakeStore {
        rooms: vec![room("b"), room("a")],
        ..FakeStore::new()
    };

    let result = ConversationService::new(&store)
        .list_rooms("u1")
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.total_count, 2);
    assert_eq!(result.payload.rooms[0].cnvs_idt_id, "b");
    assert_eq!(result.payload.rooms[0].use_yn, "Y");
}

/// Tests a storage fault while listing.
///
/// Expected: Ok with status error and an empty list
#[tokio::test]
async fn absorbs_storage_fault() {
    let store = FakeStore {
        rooms: vec![room("a")],
        fail_storage: true,
        ..FakeStore::new()
    };

    let result = ConversationService::new(&store)
        .list_rooms("u1")
        .await
        .unwrap();

    assert_eq!(result.status, OperationStatus::Error);
    assert_eq!(result.message.as_deref(), Some("Failed to list rooms"));
    assert!(result.payload.rooms.is_empty());
}
