use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use msru_content::ArticleRepo;

use crate::error::AppResult;
use crate::middleware::lifecycle::Serving;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/articles
///
/// Journal articles, most recently created first.
pub async fn list_articles(
    _ready: Serving,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::get_all_articles(state.content.as_ref()).await;
    Ok(Json(DataResponse { data: articles }))
}
