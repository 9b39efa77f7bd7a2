use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for mindwave-back.
#[openapi(
    paths(
        crate::routes::root::greeting,
        crate::routes::game::get_game_data,
        crate::routes::game::update_game_data,
    ),
    components(
        schemas(
            crate::dto::game::GameState,
            crate::dto::game::GameResult,
            crate::dto::game::GameDataPayload,
            crate::dto::game::UpdateResponse,
        )
    ),
    tags(
        (name = "game", description = "Shared game-state record operations"),
    )
)]
pub struct ApiDoc;
