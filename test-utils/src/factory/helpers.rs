//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room owned by `user_id` with a single unanswered turn.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the created room
///
/// # Returns
/// - `Ok((room, turn))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_turn(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<
    (
        entity::conversation_room::Model,
        entity::conversation_turn::Model,
    ),
    DbErr,
> {
    let room = crate::factory::conversation_room::create_room(db, user_id).await?;
    let turn = crate::factory::conversation_turn::TurnFactory::new(db, &room.cnvs_idt_id)
        .user_id(user_id)
        .build()
        .await?;

    Ok((room, turn))
}
