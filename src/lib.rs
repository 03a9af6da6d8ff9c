pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod todo_list;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::{AppState, Widget};
pub use storage::LocalStorage;
pub use store::TodoStore;
