use crate::birthdays::build_dashboard;
use crate::errors::AppError;
use crate::models::{DashboardResponse, Friend, FriendDetail, NewFriend, UpdateFriend};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

/// Wishes returned alongside a single friend.
const WISH_LIMIT: usize = 5;

pub async fn dashboard_page() -> Html<String> {
    Html(ui::dashboard_page())
}

pub async fn friends_page() -> Html<String> {
    Html(ui::friends_page())
}

pub async fn add_friend_page() -> Html<String> {
    Html(ui::add_friend_page())
}

pub async fn edit_friend_page(Path(id): Path<i64>) -> Html<String> {
    Html(ui::edit_friend_page(id))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let store = state.store.lock().await;
    let friends = store.friend_summaries()?;
    Ok(Json(build_dashboard(&friends)))
}

pub async fn list_friends(State(state): State<AppState>) -> Result<Json<Vec<Friend>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.list_friends()?))
}

pub async fn create_friend(
    State(state): State<AppState>,
    Json(payload): Json<NewFriend>,
) -> Result<(StatusCode, Json<Friend>), AppError> {
    payload.validate().map_err(AppError::validation)?;
    let store = state.store.lock().await;
    let friend = store.insert_friend(&payload)?;
    Ok((StatusCode::CREATED, Json(friend)))
}

pub async fn get_friend(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FriendDetail>, AppError> {
    let store = state.store.lock().await;
    let friend = store
        .get_friend(id)?
        .ok_or_else(|| AppError::not_found("friend not found"))?;
    let wishes = store.wishes_for(id, WISH_LIMIT)?;
    Ok(Json(FriendDetail { friend, wishes }))
}

pub async fn update_friend(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFriend>,
) -> Result<Json<Friend>, AppError> {
    payload.validate().map_err(AppError::validation)?;
    let store = state.store.lock().await;
    let friend = store
        .update_friend(id, &payload)?
        .ok_or_else(|| AppError::not_found("friend not found"))?;
    Ok(Json(friend))
}

pub async fn delete_friend(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let store = state.store.lock().await;
    if !store.delete_friend(id)? {
        return Err(AppError::not_found("friend not found"));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
