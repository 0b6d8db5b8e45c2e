use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/friends", get(handlers::friends_page))
        .route("/friends/add", get(handlers::add_friend_page))
        .route("/friends/:id/edit", get(handlers::edit_friend_page))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/friends",
            get(handlers::list_friends).post(handlers::create_friend),
        )
        .route(
            "/api/friends/:id",
            get(handlers::get_friend)
                .put(handlers::update_friend)
                .delete(handlers::delete_friend),
        )
        .with_state(state)
}
