pub use super::conversation_room::Entity as ConversationRoom;
pub use super::conversation_turn::Entity as ConversationTurn;
pub use super::error_report::Entity as ErrorReport;
pub use super::error_report_code::Entity as ErrorReportCode;
pub use super::follow_up_question::Entity as FollowUpQuestion;
pub use super::reference_document::Entity as ReferenceDocument;
