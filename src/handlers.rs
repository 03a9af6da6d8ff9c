use crate::calendar::YearMonth;
use crate::errors::AppError;
use crate::models::{
    AddTodoRequest, CATEGORIES, Category, CategoryId, KeyEvent, NavigateRequest, SelectDateRequest,
    SummaryQuery, SummaryResponse, TodoId, TodoItem, TodoQuery, ToggleInputRequest, WidgetSnapshot,
};
use crate::state::{AppState, Widget};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, error};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let widget = state.widget.lock().await;
    Html(render_index(&widget.snapshot(today())))
}

pub async fn get_widget(State(state): State<AppState>) -> Json<WidgetSnapshot> {
    let widget = state.widget.lock().await;
    Json(widget.snapshot(today()))
}

pub async fn get_categories() -> Json<[Category; 4]> {
    Json(CATEGORIES)
}

pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<TodoQuery>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    ensure_category(query.category_id)?;
    let widget = state.widget.lock().await;
    let date = query.date.unwrap_or(widget.selected_date);
    let items = widget
        .todos
        .items_for_category_and_date(query.category_id, date)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(items))
}

pub async fn add_todo(
    State(state): State<AppState>,
    Json(payload): Json<AddTodoRequest>,
) -> Result<Json<Option<TodoItem>>, AppError> {
    ensure_category(payload.category_id)?;
    let mut widget = state.widget.lock().await;
    let created = widget.add_todo(payload.category_id, &payload.text, payload.date);
    if let Some(item) = &created {
        debug!(id = item.id, date = %item.date, "added todo");
        persist(&state, &widget).await;
    }
    Ok(Json(created))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Json<Option<TodoItem>> {
    let mut widget = state.widget.lock().await;
    let toggled = widget.todos.toggle_completed(id).cloned();
    if let Some(item) = &toggled {
        debug!(id, completed = item.completed, "toggled todo");
        persist(&state, &widget).await;
    }
    Json(toggled)
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Json<Option<TodoItem>> {
    let mut widget = state.widget.lock().await;
    let removed = widget.todos.delete_todo(id);
    if removed.is_some() {
        debug!(id, "deleted todo");
        persist(&state, &widget).await;
    }
    Json(removed)
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let widget = state.widget.lock().await;
    let month = match query.month {
        Some(month) => month
            .parse::<YearMonth>()
            .map_err(|err| AppError::bad_request(err.to_string()))?,
        None => YearMonth::of(widget.selected_date),
    };

    Ok(Json(SummaryResponse {
        month: month.to_string(),
        achieved_count: widget.todos.achieved_count_for_month(month),
        today_unachieved: widget.todos.today_unachieved_count(today()),
        unachieved_by_date: widget.todos.unachieved_count_by_date(),
    }))
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Json<WidgetSnapshot> {
    let today = today();
    let mut widget = state.widget.lock().await;
    widget.navigate(payload.direction, today);
    Json(widget.snapshot(today))
}

pub async fn select_date(
    State(state): State<AppState>,
    Json(payload): Json<SelectDateRequest>,
) -> Json<WidgetSnapshot> {
    let mut widget = state.widget.lock().await;
    widget.select_date(payload.date);
    Json(widget.snapshot(today()))
}

pub async fn toggle_input(
    State(state): State<AppState>,
    Json(payload): Json<ToggleInputRequest>,
) -> Result<Json<WidgetSnapshot>, AppError> {
    ensure_category(payload.category_id)?;
    let mut widget = state.widget.lock().await;
    widget.input.toggle(payload.category_id);
    Ok(Json(widget.snapshot(today())))
}

pub async fn dismiss_input(State(state): State<AppState>) -> Json<WidgetSnapshot> {
    let mut widget = state.widget.lock().await;
    widget.input.dismiss();
    Json(widget.snapshot(today()))
}

pub async fn submit_key(
    State(state): State<AppState>,
    Json(event): Json<KeyEvent>,
) -> Json<Option<TodoItem>> {
    let mut widget = state.widget.lock().await;
    let created = widget.submit_key(&event);
    if let Some(item) = &created {
        debug!(id = item.id, category_id = item.category_id, "added todo from input");
        persist(&state, &widget).await;
    }
    Json(created)
}

pub async fn open_detail(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Json<Option<TodoItem>> {
    let mut widget = state.widget.lock().await;
    Json(widget.todos.select_for_detail(id).cloned())
}

pub async fn close_detail(State(state): State<AppState>) -> StatusCode {
    let mut widget = state.widget.lock().await;
    widget.todos.close_detail();
    StatusCode::NO_CONTENT
}

pub async fn delete_detail(State(state): State<AppState>) -> Json<Option<TodoItem>> {
    let mut widget = state.widget.lock().await;
    let selected = widget.todos.selected_for_detail().map(|item| item.id);
    widget.todos.close_detail();

    let removed = selected.and_then(|id| widget.todos.delete_todo(id));
    if let Some(item) = &removed {
        debug!(id = item.id, "deleted todo from detail sheet");
        persist(&state, &widget).await;
    }
    Json(removed)
}

pub async fn edit_detail() -> AppError {
    AppError::not_implemented("editing a to-do is not supported")
}

/// The in-memory widget stays authoritative when the write fails.
async fn persist(state: &AppState, widget: &Widget) {
    if let Err(err) = state.storage.persist_todos(widget.todos.items()).await {
        error!("failed to persist todos to {}: {err}", state.storage.path().display());
    }
}

fn ensure_category(category_id: CategoryId) -> Result<(), AppError> {
    match Category::find(category_id) {
        Some(_) => Ok(()),
        None => Err(AppError::bad_request(format!("unknown category {category_id}"))),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
