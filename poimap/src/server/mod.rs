//! In-memory development server for the POI API.

mod handlers;
mod poi_server;
mod routes;

pub use poi_server::*;
pub use routes::build_router;
