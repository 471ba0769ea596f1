//! Handlers of the development API and their response helpers.
//!
//! Errors are answered as `{"error": "..."}` with a fitting status, the same
//! shape the client turns into error messages.

use axum::{
	Json,
	body::Bytes,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use poimap_client::{PoiBackend, PoiNotFound, PoiStoreMemory};
use poimap_core::NewPoi;
use serde_json::json;
use std::sync::Arc;

pub type ApiState = Arc<PoiStoreMemory>;

pub fn error_json(status: StatusCode, message: &str) -> Response {
	(status, Json(json!({ "error": message }))).into_response()
}

fn error_not_found() -> Response {
	error_json(StatusCode::NOT_FOUND, "POI not found")
}

fn error_backend(err: &anyhow::Error) -> Response {
	if err.downcast_ref::<PoiNotFound>().is_some() {
		return error_not_found();
	}
	log::error!("request failed: {err:#}");
	error_json(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}

pub async fn status(State(store): State<ApiState>) -> Response {
	Json(json!({ "status": "ready", "pois": store.len() })).into_response()
}

pub async fn list_pois(State(store): State<ApiState>) -> Response {
	log::debug!("handle list request");
	match store.list_pois().await {
		Ok(collection) => Json(collection).into_response(),
		Err(err) => error_backend(&err),
	}
}

pub async fn get_poi(Path(id): Path<u64>, State(store): State<ApiState>) -> Response {
	log::debug!("handle get request for POI {id}");
	match store.get_poi(id).await {
		Ok(feature) => Json(feature).into_response(),
		Err(err) => error_backend(&err),
	}
}

pub async fn create_poi(State(store): State<ApiState>, body: Bytes) -> Response {
	let poi: NewPoi = match serde_json::from_slice(&body) {
		Ok(poi) => poi,
		Err(err) => {
			log::debug!("rejecting invalid POI: {err}");
			return error_json(StatusCode::BAD_REQUEST, &format!("invalid POI: {err}"));
		}
	};

	let id = match store.create_poi(&poi).await {
		Ok(Some(id)) => id,
		Ok(None) => return error_json(StatusCode::INTERNAL_SERVER_ERROR, "no id assigned"),
		Err(err) => return error_backend(&err),
	};
	log::info!("created POI {id}");

	match store.get_poi(id).await {
		Ok(feature) => (StatusCode::CREATED, Json(feature)).into_response(),
		Err(err) => error_backend(&err),
	}
}

pub async fn delete_poi(Path(id): Path<u64>, State(store): State<ApiState>) -> Response {
	match store.delete_poi(id).await {
		Ok(()) => {
			log::info!("deleted POI {id}");
			Json(json!({ "message": "POI deleted", "id": id })).into_response()
		}
		Err(err) => error_backend(&err),
	}
}
