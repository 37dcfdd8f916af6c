//! Axum web front-end for bchelper.
//!
//! Three JSON endpoints (`/api/download`, `/api/shuffle_all`, `/health`)
//! plus an embedded single-page UI on `/`. Handlers delegate to the port
//! traits from `bchelper-core`; the composition root in [`bootstrap`] wires
//! the concrete adapters in.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod index;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
