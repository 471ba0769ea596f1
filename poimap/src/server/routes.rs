//! Router of the development API.

use super::handlers::{ApiState, create_poi, delete_poi, error_json, get_poi, list_pois, status};
use axum::{Router, http::StatusCode, routing::get};

pub fn build_router(store: ApiState) -> Router {
	Router::new()
		.route("/api/status", get(status))
		.route("/api/pois", get(list_pois).post(create_poi))
		.route("/api/pois/{id}", get(get_poi).delete(delete_poi))
		.fallback(|| async { error_json(StatusCode::NOT_FOUND, "Not Found") })
		.with_state(store)
}
