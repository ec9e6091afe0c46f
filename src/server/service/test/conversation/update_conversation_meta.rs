use super::*;

/// Tests renaming a room.
///
/// Expected: success with the stored name and flag read back
#[tokio::test]
async fn reads_back_updated_values() {
    let store = FakeStore::new();

    let result = ConversationService::new(&store)
        .update_conversation_meta("u1", meta_dto(Some("renamed"), None))
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.total_count, 1);
    assert_eq!(result.payload.updated_rep_cnvs_nm.as_deref(), Some("renamed"));
    assert_eq!(result.payload.updated_use_yn.as_deref(), Some("Y"));
    assert_eq!(
        store.calls(),
        vec![
            "is_room_owned_by_user",
            "update_conversation_meta",
            "read_conversation_meta"
        ]
    );
}

/// Tests that name only, flag only and both are accepted.
///
/// Expected: success for each request
#[tokio::test]
async fn accepts_each_kind_of_change() {
    let store = FakeStore::new();
    let service = ConversationService::new(&store);

    for dto in [
        meta_dto(Some("renamed"), None),
        meta_dto(None, Some("y")),
        meta_dto(Some("renamed"), Some("N")),
    ] {
        let result = service.update_conversation_meta("u1", dto).await.unwrap();
        assert!(result.is_success());
    }
}

/// Tests a request that changes nothing.
///
/// Expected: validation error and no storage calls
#[tokio::test]
async fn rejects_request_without_change() {
    let store = FakeStore::new();

    let err = ConversationService::new(&store)
        .update_conversation_meta("u1", meta_dto(None, None))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RequestError::Validation(ValidationError::NoMetaChange)
    ));
    assert!(store.calls().is_empty());
}

/// Tests a use flag outside the `Y`/`N` domain.
///
/// Expected: validation error with the documented message
#[tokio::test]
async fn rejects_invalid_use_flag() {
    let store = FakeStore::new();

    let err = ConversationService::new(&store)
        .update_conversation_meta("u1", meta_dto(None, Some("X")))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "use_yn must be 'Y' or 'N'");
    assert!(store.calls().is_empty());
}

/// Tests a room that disappeared before the read-back.
///
/// Expected: success with the updated fields unset
#[tokio::test]
async fn leaves_fields_unset_when_room_vanished() {
    let store = FakeStore {
        meta: None,
        ..FakeStore::new()
    };

    let result = ConversationService::new(&store)
        .update_conversation_meta("u1", meta_dto(Some("renamed"), None))
        .await
        .unwrap();

    assert_eq!(result.status, OperationStatus::Success);
    assert!(result.payload.updated_rep_cnvs_nm.is_none());
    assert!(result.payload.updated_use_yn.is_none());
}

/// Tests updating a room the user does not own.
///
/// Expected: authorization error and no update issued
#[tokio::test]
async fn denies_room_of_other_user() {
    let store = FakeStore {
        room_owner: None,
        ..FakeStore::new()
    };

    let err = ConversationService::new(&store)
        .update_conversation_meta("u1", meta_dto(Some("renamed"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Denied(_)));
    assert_eq!(store.calls(), vec!["is_room_owned_by_user"]);
}
