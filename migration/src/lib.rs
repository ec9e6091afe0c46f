pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_conversation_room_table;
mod m20250101_000002_create_conversation_turn_table;
mod m20250101_000003_create_reference_document_table;
mod m20250101_000004_create_follow_up_question_table;
mod m20250102_000005_create_error_report_table;
mod m20250102_000006_create_error_report_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_conversation_room_table::Migration),
            Box::new(m20250101_000002_create_conversation_turn_table::Migration),
            Box::new(m20250101_000003_create_reference_document_table::Migration),
            Box::new(m20250101_000004_create_follow_up_question_table::Migration),
            Box::new(m20250102_000005_create_error_report_table::Migration),
            Box::new(m20250102_000006_create_error_report_code_table::Migration),
        ]
    }
}
