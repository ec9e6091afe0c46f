//! Conversation orchestration.
//!
//! Every operation validates its request, checks room ownership when it is room-scoped, runs
//! its storage operations and folds the outcomes into an `OperationResult`. Validation and
//! ownership failures are returned as `RequestError`; storage faults are logged and returned
//! as `status = "error"` envelopes.

use crate::{
    model::{
        conversation::{
            ResetRoomPayload, RoomHistoryPayload, RoomListPayload, SaveAnswerDto,
            SaveAnswerPayload, SaveQueryDto, SaveQueryPayload, UpdateConversationMetaDto,
            UpdateConversationMetaPayload,
        },
        envelope::OperationResult,
    },
    server::{
        data::store::ConversationStore,
        error::{auth::AuthError, request::RequestError},
        model::{
            conversation::{ConversationTurn, RoomSummary, SavedQuery},
            outcome::StatementOutcome,
        },
        service::{envelope::EnvelopeBuilder, ownership::RoomOwnershipGuard},
        validation::conversation::{
            validate_answer_save, validate_conversation_meta, validate_query_save,
            validate_room_key,
        },
    },
};

/// Statements written by an answer save.
pub const SAVE_ANSWER_STATEMENTS: usize = 3;
/// Statements written by a metadata update.
pub const UPDATE_META_STATEMENTS: usize = 1;
/// Statements written by a room reset.
pub const RESET_ROOM_STATEMENTS: usize = 6;

pub struct ConversationService<'a, S> {
    store: &'a S,
}

impl<'a, S: ConversationStore> ConversationService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Saves a user query, creating the session's room on its first query.
    ///
    /// # Returns
    /// - `Ok(OperationResult)` - Room key and turn id with the saved fields echoed, or a
    ///   storage fault envelope
    /// - `Err(RequestError::Validation)` - Required field missing or flag invalid
    pub async fn save_query(
        &self,
        dto: SaveQueryDto,
    ) -> Result<OperationResult<SaveQueryPayload>, RequestError> {
        let params = validate_query_save(dto)?;
        let envelope = EnvelopeBuilder::start("save_query");

        match self.store.insert_query(&params).await {
            Ok(identity) => Ok(envelope.success(
                1,
                SavedQuery::from_params(params, identity).into_payload(),
            )),
            Err(err) => {
                tracing::error!(
                    user_id = %params.user_id,
                    session_id = %params.session_id,
                    error = %err,
                    "Failed to save query"
                );
                Ok(envelope.storage_fault("Failed to save query", SaveQueryPayload::default()))
            }
        }
    }

    /// Saves an answer with its reference documents and follow-up questions.
    ///
    /// # Returns
    /// - `Ok(OperationResult)` - Per-statement results summed into the count, or a storage
    ///   fault envelope with empty lists
    /// - `Err(RequestError::Validation)` - Required field missing, flag invalid or a child
    ///   collection empty
    /// - `Err(RequestError::Denied)` - Room is not owned by the user
    pub async fn save_answer(
        &self,
        dto: SaveAnswerDto,
    ) -> Result<OperationResult<SaveAnswerPayload>, RequestError> {
        let params = validate_answer_save(dto)?;
        let envelope = EnvelopeBuilder::start("save_answer");
        let identity = &params.identity;

        let fault_payload = SaveAnswerPayload {
            cnvs_idt_id: Some(identity.cnvs_idt_id.clone()),
            cnvs_id: Some(identity.cnvs_id),
            ..Default::default()
        };

        match RoomOwnershipGuard::new(self.store)
            .is_owner(&identity.cnvs_idt_id, &params.user_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Err(AuthError::RoomAccessDenied {
                    room_key: identity.cnvs_idt_id.clone(),
                    user_id: params.user_id.clone(),
                }
                .into())
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %identity.cnvs_idt_id,
                    user_id = %params.user_id,
                    error = %err,
                    "Failed to check room ownership before saving answer"
                );
                return Ok(envelope.storage_fault(
                    "Failed to check room ownership before saving answer",
                    fault_payload,
                ));
            }
        }

        match self.store.insert_answer_with_children(&params).await {
            Ok(outcomes) => {
                let payload = SaveAnswerPayload {
                    cnvs_idt_id: Some(identity.cnvs_idt_id.clone()),
                    cnvs_id: Some(identity.cnvs_id),
                    statement_results: outcomes
                        .iter()
                        .cloned()
                        .map(StatementOutcome::into_dto)
                        .collect(),
                    saved_ref_seq_list: params.ref_seq_list(),
                    saved_follow_up_seq_list: params.follow_up_seq_list(),
                };
                Ok(envelope.aggregate(&outcomes, SAVE_ANSWER_STATEMENTS, payload))
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %identity.cnvs_idt_id,
                    cnvs_id = identity.cnvs_id,
                    user_id = %params.user_id,
                    error = %err,
                    "Failed to save answer"
                );
                Ok(envelope.storage_fault("Failed to save answer", fault_payload))
            }
        }
    }

    /// Renames and/or (de)activates a room, then reads the stored values back.
    ///
    /// A room that vanished between the update and the read-back leaves the `updated_*`
    /// fields unset without changing the status.
    pub async fn update_conversation_meta(
        &self,
        user_id: &str,
        dto: UpdateConversationMetaDto,
    ) -> Result<OperationResult<UpdateConversationMetaPayload>, RequestError> {
        let params = validate_conversation_meta(dto)?;
        let envelope = EnvelopeBuilder::start("update_conversation_meta");

        let fault_payload = UpdateConversationMetaPayload {
            cnvs_idt_id: Some(params.cnvs_idt_id.clone()),
            ..Default::default()
        };

        match RoomOwnershipGuard::new(self.store)
            .is_owner(&params.cnvs_idt_id, user_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Err(AuthError::RoomAccessDenied {
                    room_key: params.cnvs_idt_id.clone(),
                    user_id: user_id.to_string(),
                }
                .into())
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %params.cnvs_idt_id,
                    user_id = %user_id,
                    error = %err,
                    "Failed to check room ownership before updating metadata"
                );
                return Ok(envelope.storage_fault(
                    "Failed to check room ownership before updating metadata",
                    fault_payload,
                ));
            }
        }

        let result = async {
            let outcomes = self.store.update_conversation_meta(&params).await?;
            let meta = self
                .store
                .read_conversation_meta(&params.cnvs_idt_id)
                .await?;
            Ok::<_, sea_orm::DbErr>((outcomes, meta))
        }
        .await;

        match result {
            Ok((outcomes, meta)) => {
                let payload = UpdateConversationMetaPayload {
                    cnvs_idt_id: Some(params.cnvs_idt_id.clone()),
                    statement_results: outcomes
                        .iter()
                        .cloned()
                        .map(StatementOutcome::into_dto)
                        .collect(),
                    updated_rep_cnvs_nm: meta.as_ref().map(|meta| meta.display_name.clone()),
                    updated_use_yn: meta.map(|meta| meta.is_active.as_str().to_string()),
                };
                Ok(envelope.aggregate(&outcomes, UPDATE_META_STATEMENTS, payload))
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %params.cnvs_idt_id,
                    user_id = %user_id,
                    error = %err,
                    "Failed to update conversation metadata"
                );
                Ok(envelope.storage_fault("Failed to update conversation metadata", fault_payload))
            }
        }
    }

    /// Lists the user's active rooms, most recently updated first.
    ///
    /// # Returns
    /// - `Ok(OperationResult)` - Rooms with `total_count` set to their number, or a storage
    ///   fault envelope with an empty list
    pub async fn list_rooms(
        &self,
        user_id: &str,
    ) -> Result<OperationResult<RoomListPayload>, RequestError> {
        let envelope = EnvelopeBuilder::start("list_rooms");

        match self.store.list_rooms(user_id).await {
            Ok(rooms) => Ok(envelope.success(
                count_of(rooms.len()),
                RoomListPayload {
                    rooms: rooms.into_iter().map(RoomSummary::into_dto).collect(),
                },
            )),
            Err(err) => {
                tracing::error!(user_id = %user_id, error = %err, "Failed to list rooms");
                Ok(envelope.storage_fault("Failed to list rooms", RoomListPayload::default()))
            }
        }
    }

    /// Reads every turn of a room owned by the user.
    ///
    /// # Returns
    /// - `Ok(OperationResult)` - Turns in question order with `total_count` set to their
    ///   number, or a storage fault envelope with an empty list
    /// - `Err(RequestError::Validation)` - Room key blank
    /// - `Err(RequestError::Denied)` - Room missing or owned by another user
    pub async fn read_room_history(
        &self,
        user_id: &str,
        cnvs_idt_id: String,
    ) -> Result<OperationResult<RoomHistoryPayload>, RequestError> {
        let cnvs_idt_id = validate_room_key(cnvs_idt_id)?;
        let envelope = EnvelopeBuilder::start("read_room_history");

        let fault_payload = RoomHistoryPayload {
            cnvs_idt_id: Some(cnvs_idt_id.clone()),
            turns: Vec::new(),
        };

        match RoomOwnershipGuard::new(self.store)
            .is_owner(&cnvs_idt_id, user_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Err(AuthError::RoomAccessDenied {
                    room_key: cnvs_idt_id,
                    user_id: user_id.to_string(),
                }
                .into())
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %cnvs_idt_id,
                    user_id = %user_id,
                    error = %err,
                    "Failed to check room ownership before reading history"
                );
                return Ok(envelope.storage_fault(
                    "Failed to check room ownership before reading history",
                    fault_payload,
                ));
            }
        }

        match self.store.read_room_history(&cnvs_idt_id).await {
            Ok(turns) => Ok(envelope.success(
                count_of(turns.len()),
                RoomHistoryPayload {
                    cnvs_idt_id: Some(cnvs_idt_id),
                    turns: turns.into_iter().map(ConversationTurn::into_dto).collect(),
                },
            )),
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %cnvs_idt_id,
                    user_id = %user_id,
                    error = %err,
                    "Failed to read room history"
                );
                Ok(envelope.storage_fault("Failed to read room history", fault_payload))
            }
        }
    }

    /// Deletes a room owned by the user together with all of its turns and the error reports
    /// filed against them.
    ///
    /// # Returns
    /// - `Ok(OperationResult)` - One result per delete statement summed into `total_count`,
    ///   or a storage fault envelope with no results
    /// - `Err(RequestError::Validation)` - Room key blank
    /// - `Err(RequestError::Denied)` - Room missing or owned by another user
    pub async fn reset_room(
        &self,
        user_id: &str,
        cnvs_idt_id: String,
    ) -> Result<OperationResult<ResetRoomPayload>, RequestError> {
        let cnvs_idt_id = validate_room_key(cnvs_idt_id)?;
        let envelope = EnvelopeBuilder::start("reset_room");

        let fault_payload = ResetRoomPayload {
            cnvs_idt_id: Some(cnvs_idt_id.clone()),
            statement_results: Vec::new(),
        };

        match RoomOwnershipGuard::new(self.store)
            .is_owner(&cnvs_idt_id, user_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Err(AuthError::RoomAccessDenied {
                    room_key: cnvs_idt_id,
                    user_id: user_id.to_string(),
                }
                .into())
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %cnvs_idt_id,
                    user_id = %user_id,
                    error = %err,
                    "Failed to check room ownership before reset"
                );
                return Ok(envelope.storage_fault(
                    "Failed to check room ownership before reset",
                    fault_payload,
                ));
            }
        }

        match self.store.delete_room(&cnvs_idt_id).await {
            Ok(outcomes) => {
                let payload = ResetRoomPayload {
                    cnvs_idt_id: Some(cnvs_idt_id),
                    statement_results: outcomes
                        .iter()
                        .cloned()
                        .map(StatementOutcome::into_dto)
                        .collect(),
                };
                Ok(envelope.aggregate(&outcomes, RESET_ROOM_STATEMENTS, payload))
            }
            Err(err) => {
                tracing::error!(
                    cnvs_idt_id = %cnvs_idt_id,
                    user_id = %user_id,
                    error = %err,
                    "Failed to reset room"
                );
                Ok(envelope.storage_fault("Failed to reset room", fault_payload))
            }
        }
    }
}

fn count_of(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
