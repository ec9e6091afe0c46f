use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, conversation, error_report},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "chatdesk",
        description = "Conversation persistence API for the document-search assistant"
    ),
    tags(
        (name = "auth", description = "Session identity"),
        (name = "conversation", description = "Conversation rooms and turns"),
        (name = "error_report", description = "Error reports filed against answers")
    )
)]
struct ApiDoc;

/// Builds the API router together with its OpenAPI document.
///
/// The document is served at `/api-docs/openapi.json` and browsable at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(conversation::save_query))
        .routes(routes!(conversation::save_answer))
        .routes(routes!(conversation::update_conversation_meta))
        .routes(routes!(conversation::list_rooms))
        .routes(routes!(conversation::read_room_history))
        .routes(routes!(conversation::reset_room))
        .routes(routes!(error_report::save_error_report))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
