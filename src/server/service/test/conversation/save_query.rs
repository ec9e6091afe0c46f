use super::*;

/// Tests saving the first query of a session.
///
/// Expected: success with the storage-assigned room key and turn id echoed
#[tokio::test]
async fn echoes_assigned_identity() {
    let store = FakeStore::new();

    let result = ConversationService::new(&store)
        .save_query(query_dto())
        .await
        .unwrap();

    assert_eq!(result.status, OperationStatus::Success);
    assert_eq!(result.total_count, 1);
    assert!(result.elapsed_millis >= 0);
    assert_eq!(
        result.payload.cnvs_idt_id.as_deref(),
        Some("u1_20250101000000000")
    );
    assert_eq!(result.payload.cnvs_id, Some(100));
    assert_eq!(result.payload.txn_nm.as_deref(), Some("hello"));
    assert_eq!(result.payload.session_id.as_deref(), Some("s1"));
    assert_eq!(result.payload.menu_key.as_deref(), Some("m1"));
    assert_eq!(result.payload.recommended_yn.as_deref(), Some("Y"));
    assert_eq!(store.calls(), vec!["insert_query"]);
}

/// Tests that a missing field stops the request before storage.
///
/// Expected: validation error naming the field and no storage calls
#[tokio::test]
async fn rejects_missing_menu_key_without_storage_calls() {
    let store = FakeStore::new();
    let dto = SaveQueryDto {
        menu_key: None,
        ..query_dto()
    };

    let err = ConversationService::new(&store)
        .save_query(dto)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RequestError::Validation(ValidationError::MissingField("menu_key"))
    ));
    assert_eq!(err.to_string(), "menu_key is required");
    assert!(store.calls().is_empty());
}

/// Tests that a storage fault becomes an error envelope.
///
/// Expected: Ok with status error, zero count and no identifiers
#[tokio::test]
async fn absorbs_storage_fault() {
    let store = FakeStore {
        fail_storage: true,
        ..FakeStore::new()
    };

    let result = ConversationService::new(&store)
        .save_query(query_dto())
        .await
        .unwrap();

    assert_eq!(result.status, OperationStatus::Error);
    assert_eq!(result.message.as_deref(), Some("Failed to save query"));
    assert_eq!(result.total_count, 0);
    assert!(result.payload.cnvs_idt_id.is_none());
    assert!(result.payload.cnvs_id.is_none());
}
