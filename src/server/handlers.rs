use super::{ApiError, AppState};
use crate::models::{
    HealthResponse, IdeaRequest, IdeasResponse, ImageRequest, ImagesResponse, Status,
};
use axum::{
    extract::{FromRequest, State},
    Json,
};
use tracing::{info, Instrument};
use uuid::Uuid;

/// `Json` extractor whose rejections use the `{"detail": ...}` error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Creos AI API is running".to_string(),
        status: Status::Success,
    })
}

pub async fn generate_ideas(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<IdeaRequest>,
) -> Result<Json<IdeasResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_ideas", %request_id);

    async move {
        info!("Idea generation started (num_ideas: {})", request.num_ideas);
        let ideas = state
            .app
            .generate_ideas(&request.product_data, request.num_ideas)
            .await?;
        info!("Idea generation finished");

        Ok::<_, ApiError>(Json(IdeasResponse {
            ideas,
            status: Status::Success,
        }))
    }
    .instrument(span)
    .await
}

pub async fn generate_images(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ImageRequest>,
) -> Result<Json<ImagesResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_images", %request_id);

    async move {
        info!(
            "Image generation started ({} ideas, num_images: {})",
            request.ideas.len(),
            request.num_images
        );
        let images = state
            .app
            .generate_images(&request.ideas, request.num_images)
            .await?;
        info!("Image generation finished");

        Ok::<_, ApiError>(Json(ImagesResponse {
            images,
            status: Status::Success,
        }))
    }
    .instrument(span)
    .await
}
