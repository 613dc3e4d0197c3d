use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{CatalogQuery, Item, ItemId, PreferenceProfile, Progress, ProgressRecord},
    services::{
        analyzer, catalog_filter,
        recommendations::{self, RecommendationFeed, DEFAULT_LIMIT},
        soundtrack, stats,
    },
};

use super::AppState;

/// File name offered when downloading an export
pub const EXPORT_FILE_NAME: &str = "disney-movie-progress.json";

// Request/Response types

/// A catalog item together with the user's record for it
#[derive(Debug, Serialize)]
pub struct MovieEntry {
    #[serde(flatten)]
    pub item: Item,
    pub progress: Option<ProgressRecord>,
}

impl MovieEntry {
    fn new(item: &Item, progress: &Progress) -> Self {
        Self {
            item: item.clone(),
            progress: progress.get(item.id).copied(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Filtered and sorted catalog grid
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<MovieEntry>> {
    let progress = state.snapshot().await;
    let movies = catalog_filter::select(state.catalog.items(), &progress, &query)
        .into_iter()
        .map(|item| MovieEntry::new(item, &progress))
        .collect();
    Json(movies)
}

/// Single movie with its progress record
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<MovieEntry>> {
    let item = find_movie(&state, id)?;
    let progress = state.snapshot().await;
    Ok(Json(MovieEntry::new(item, &progress)))
}

/// Flip the watched flag of a movie
pub async fn toggle_watched(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<ProgressRecord>> {
    find_movie(&state, id)?;
    let record = state.update(|progress| Ok(progress.toggle_watched(id))).await?;

    tracing::info!(movie_id = id, watched = record.watched, "Watched status toggled");
    Ok(Json(record))
}

/// Rate a movie; repeating the current rating clears it
pub async fn set_rating(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(request): Json<RatingRequest>,
) -> AppResult<Json<ProgressRecord>> {
    find_movie(&state, id)?;
    let record = state
        .update(|progress| progress.set_rating(id, request.rating))
        .await?;

    tracing::info!(movie_id = id, rating = record.rating, "Rating updated");
    Ok(Json(record))
}

/// Current preference profile
pub async fn get_profile(State(state): State<AppState>) -> Json<PreferenceProfile> {
    let progress = state.snapshot().await;
    Json(analyzer::analyze(state.catalog.items(), &progress))
}

/// Ranked recommendations for unwatched movies
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Json<RecommendationFeed> {
    let progress = state.snapshot().await;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    Json(recommendations::recommend(
        state.catalog.items(),
        &progress,
        limit,
    ))
}

/// Watch and rating counters
pub async fn get_stats(State(state): State<AppState>) -> Json<stats::ProgressStats> {
    let progress = state.snapshot().await;
    Json(stats::summarize(state.catalog.items(), &progress))
}

/// Playlist of songs from rated movies, 204 when nothing is rated
pub async fn get_soundtrack(State(state): State<AppState>) -> Response {
    let progress = state.snapshot().await;
    match soundtrack::build_playlist(state.catalog.items(), &progress) {
        Some(playlist) => Json(playlist).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Download the raw progress map
pub async fn export_progress(State(state): State<AppState>) -> AppResult<Response> {
    let body = state.snapshot().await.to_json_pretty()?;
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// Replace the progress map with an uploaded export
pub async fn import_progress(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<ImportResponse>> {
    let progress = Progress::from_json(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected progress import");
        e
    })?;
    let imported = progress.len();
    state.replace(progress).await?;

    tracing::info!(records = imported, "Progress imported");
    Ok(Json(ImportResponse { imported }))
}

fn find_movie(state: &AppState, id: ItemId) -> AppResult<&Item> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))
}
