use anyhow::Result;
use async_trait::async_trait;
use poimap_core::{NewPoi, PoiCollection, PoiFeature};
use std::fmt::{Debug, Display};

/// The backend has no POI with this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoiNotFound(pub u64);

impl Display for PoiNotFound {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "POI {} not found", self.0)
	}
}

impl std::error::Error for PoiNotFound {}

/// The POI REST surface.
///
/// | operation                  | request                  |
/// |----------------------------|--------------------------|
/// | [`list_pois`](Self::list_pois)   | `GET /api/pois`          |
/// | [`get_poi`](Self::get_poi)       | `GET /api/pois/{id}`     |
/// | [`create_poi`](Self::create_poi) | `POST /api/pois`         |
/// | [`delete_poi`](Self::delete_poi) | `DELETE /api/pois/{id}`  |
///
/// Every non-2xx answer is an error. Nothing is retried.
#[async_trait]
pub trait PoiBackend: Debug + Send + Sync {
	/// Fetches every POI.
	async fn list_pois(&self) -> Result<PoiCollection>;

	/// Fetches a single POI.
	async fn get_poi(&self, id: u64) -> Result<PoiFeature>;

	/// Stores a new POI and returns the id the backend assigned, if the answer carries one.
	async fn create_poi(&self, poi: &NewPoi) -> Result<Option<u64>>;

	/// Deletes a POI.
	async fn delete_poi(&self, id: u64) -> Result<()>;

	/// A human readable name of the backend, e.g. its base URL.
	fn get_name(&self) -> &str;
}
