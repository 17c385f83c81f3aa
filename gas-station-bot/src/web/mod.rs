//! Web layer: health check and stats endpoints.

mod routes;
mod state;

pub use routes::{StatsResponse, create_router};
pub use state::AppState;
