mod error;
mod http;
mod state;

pub use error::ApiError;
pub use http::router;
pub use state::{AppState, create_app_state};
