use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/widget", get(handlers::get_widget))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/todos", get(handlers::list_todos).post(handlers::add_todo))
        .route("/api/todos/:id", delete(handlers::delete_todo))
        .route("/api/todos/:id/toggle", post(handlers::toggle_todo))
        .route("/api/todos/:id/detail", post(handlers::open_detail))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/calendar/navigate", post(handlers::navigate))
        .route("/api/calendar/select", post(handlers::select_date))
        .route("/api/input/toggle", post(handlers::toggle_input))
        .route("/api/input/dismiss", post(handlers::dismiss_input))
        .route("/api/input/key", post(handlers::submit_key))
        .route("/api/detail/close", post(handlers::close_detail))
        .route("/api/detail/delete", post(handlers::delete_detail))
        .route("/api/detail/edit", post(handlers::edit_detail))
        .with_state(state)
}
