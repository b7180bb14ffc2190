mod session;

pub use session::{ServiceError, SessionRepository};
