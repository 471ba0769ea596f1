//! An in-memory POI backend.
//!
//! `PoiStoreMemory` behaves like the real server: it assigns increasing ids,
//! tags each geometry with its `ST_*` kind and answers unknown ids with an error.
//! A store built with [`PoiStoreMemory::recording`] also keeps a log of every
//! request it receives, so tests can check exactly which requests a user action
//! caused. Any store can be told to fail.

use super::{PoiBackend, PoiNotFound};
use anyhow::{Result, bail};
use async_trait::async_trait;
use parking_lot::Mutex;
use poimap_core::{NewPoi, PoiCollection, PoiFeature};
use std::collections::BTreeMap;

/// A request as received by [`PoiStoreMemory`].
#[derive(Clone, Debug, PartialEq)]
pub enum BackendRequest {
	List,
	Get(u64),
	Create(NewPoi),
	Delete(u64),
}

#[derive(Debug)]
struct StoreState {
	next_id: u64,
	features: BTreeMap<u64, PoiFeature>,
	requests: Vec<BackendRequest>,
	failure: Option<String>,
}

#[derive(Debug)]
pub struct PoiStoreMemory {
	state: Mutex<StoreState>,
	record: bool,
}

impl Default for PoiStoreMemory {
	fn default() -> Self {
		Self::new()
	}
}

impl PoiStoreMemory {
	/// A store that keeps no request log.
	pub fn new() -> PoiStoreMemory {
		PoiStoreMemory::with_recording(false)
	}

	/// A store that logs every request, see [`requests`](Self::requests).
	pub fn recording() -> PoiStoreMemory {
		PoiStoreMemory::with_recording(true)
	}

	fn with_recording(record: bool) -> PoiStoreMemory {
		PoiStoreMemory {
			state: Mutex::new(StoreState {
				next_id: 1,
				features: BTreeMap::new(),
				requests: Vec::new(),
				failure: None,
			}),
			record,
		}
	}

	/// Adds a POI without recording a request and returns its id.
	pub fn insert(&self, poi: NewPoi) -> u64 {
		let mut state = self.state.lock();
		let id = state.next_id;
		state.next_id = id.saturating_add(1);
		state.features.insert(id, poi.into_feature(id));
		id
	}

	/// Adds existing features, keeping their ids where they have one.
	pub fn insert_features(&self, features: Vec<PoiFeature>) {
		let mut state = self.state.lock();
		for mut feature in features {
			let id = match feature.id {
				Some(id) => id,
				None => state.next_id,
			};
			state.next_id = state.next_id.max(id.saturating_add(1));
			feature.id = Some(id);
			state.features.insert(id, feature);
		}
	}

	pub fn features(&self) -> Vec<PoiFeature> {
		self.state.lock().features.values().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.state.lock().features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Every request received so far, oldest first. Always empty unless the store is
	/// [`recording`](Self::recording).
	pub fn requests(&self) -> Vec<BackendRequest> {
		self.state.lock().requests.clone()
	}

	/// Forgets the recorded requests.
	pub fn clear_requests(&self) {
		self.state.lock().requests.clear();
	}

	/// Makes every following request fail with `message`, until [`recover`](Self::recover).
	pub fn fail_with(&self, message: &str) {
		self.state.lock().failure = Some(message.to_string());
	}

	pub fn recover(&self) {
		self.state.lock().failure = None;
	}

	/// Records `request` if recording and applies `f` to the state, unless failures are switched on.
	fn handle<T>(&self, request: BackendRequest, f: impl FnOnce(&mut StoreState) -> Result<T>) -> Result<T> {
		let mut state = self.state.lock();
		log::trace!("memory store received {request:?}");
		if self.record {
			state.requests.push(request);
		}
		if let Some(message) = &state.failure {
			bail!("{message}");
		}
		f(&mut state)
	}
}

#[async_trait]
impl PoiBackend for PoiStoreMemory {
	async fn list_pois(&self) -> Result<PoiCollection> {
		self.handle(BackendRequest::List, |state| {
			Ok(PoiCollection::from(state.features.values().cloned().collect()))
		})
	}

	async fn get_poi(&self, id: u64) -> Result<PoiFeature> {
		self.handle(BackendRequest::Get(id), |state| {
			state
				.features
				.get(&id)
				.cloned()
				.ok_or_else(|| PoiNotFound(id).into())
		})
	}

	async fn create_poi(&self, poi: &NewPoi) -> Result<Option<u64>> {
		self.handle(BackendRequest::Create(poi.clone()), |state| {
			let id = state.next_id;
			state.next_id = id.saturating_add(1);
			state.features.insert(id, poi.clone().into_feature(id));
			Ok(Some(id))
		})
	}

	async fn delete_poi(&self, id: u64) -> Result<()> {
		self.handle(BackendRequest::Delete(id), |state| match state.features.remove(&id) {
			Some(_) => Ok(()),
			None => Err(PoiNotFound(id).into()),
		})
	}

	fn get_name(&self) -> &str {
		"memory"
	}
}
