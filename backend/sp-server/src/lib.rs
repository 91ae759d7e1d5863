pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use crate::error::{Result as ServerResult, ServerError};
pub use crate::routes::build_router;
pub use crate::state::{build_app_state, build_jwt_validator};
