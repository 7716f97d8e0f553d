use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::home::home,
        api::health::health_check,
        api::chat::text_to_text_chat,
        api::navigation::navigation,
    ),
    tags(
        (name = "naviguard", description = "NaviGuard AI Chatbot API")
    )
)]
pub struct ApiDoc;
