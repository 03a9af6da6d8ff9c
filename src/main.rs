use calendar_todo::{router, AppState, Config, LocalStorage, TodoStore, Widget};
use chrono::Local;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let storage = LocalStorage::new(config.data_path.clone());
    let todos = TodoStore::from_items(storage.load_todos().await);
    info!(count = todos.len(), path = %config.data_path.display(), "widget mounted");

    let state = AppState::new(storage, Widget::new(todos, Local::now().date_naive()));
    let app = router(state);

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("widget unmounted");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
