//! This module provides the HTTP implementation of [`PoiBackend`].
//!
//! # Overview
//!
//! `PoiClientHttp` sends JSON requests to the `/api/pois` endpoints below a base URL
//! using the `reqwest` library. The base URL must use the `http` or `https` scheme.
//! Failed responses are turned into errors that carry the HTTP status and, when the
//! backend answers with `{"error": "..."}`, its message.
//!
//! # Examples
//!
//! ```rust,no_run
//! use poimap_client::{PoiBackend, PoiClientHttp};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PoiClientHttp::new("http://localhost:5000/", None)?;
//!     let pois = client.list_pois().await?;
//!     println!("{} POIs", pois.len());
//!     Ok(())
//! }
//! ```

use super::{PoiBackend, PoiNotFound};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use poimap_core::{NewPoi, PoiCollection, PoiFeature};
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value as JsonValue;
use std::time::Duration;

const ENDPOINT: &str = "api/pois";

/// A [`PoiBackend`] that talks to a POI server over HTTP(S).
#[derive(Debug)]
pub struct PoiClientHttp {
	client: Client,
	name: String,
	base_url: Url,
}

impl PoiClientHttp {
	/// Creates a client for the server at `base_url`.
	///
	/// # Arguments
	///
	/// * `base_url` - URL under which `api/pois` is served, e.g. `http://localhost:5000/`.
	/// * `timeout` - Optional limit for a whole request. Without one, a request only ends
	///   when the transport gives up.
	pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<PoiClientHttp> {
		let url = Url::parse(base_url).with_context(|| format!("invalid base URL '{base_url}'"))?;
		PoiClientHttp::from_url(url, timeout)
	}

	pub fn from_url(mut base_url: Url, timeout: Option<Duration>) -> Result<PoiClientHttp> {
		match base_url.scheme() {
			"http" | "https" => (),
			other => bail!("unsupported URL scheme '{other}' in '{base_url}', expected 'http' or 'https'"),
		}

		// joining relative paths needs a trailing slash
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		let mut builder = Client::builder().tcp_keepalive(Duration::from_secs(600));
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		Ok(PoiClientHttp {
			client: builder.build()?,
			name: base_url.to_string(),
			base_url,
		})
	}

	pub fn collection_url(&self) -> Result<Url> {
		Ok(self.base_url.join(ENDPOINT)?)
	}

	pub fn item_url(&self, id: u64) -> Result<Url> {
		Ok(self.base_url.join(&format!("{ENDPOINT}/{id}"))?)
	}
}

/// Passes successful responses through and turns every other status into an error.
async fn check_response(response: Response) -> Result<Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	let body = response.text().await.unwrap_or_default();
	bail!("{}", describe_failure(status, &body))
}

fn describe_failure(status: StatusCode, body: &str) -> String {
	let message = serde_json::from_str::<JsonValue>(body)
		.ok()
		.and_then(|v| v.get("error").and_then(JsonValue::as_str).map(String::from));
	match message {
		Some(message) => format!("HTTP request failed with status {status}: {message}"),
		None => format!("HTTP request failed with status {status}"),
	}
}

/// Finds the id in a creation answer, either a feature or a plain record.
fn extract_created_id(value: &JsonValue) -> Option<u64> {
	value
		.get("id")
		.and_then(JsonValue::as_u64)
		.or_else(|| value.pointer("/properties/id").and_then(JsonValue::as_u64))
}

#[async_trait]
impl PoiBackend for PoiClientHttp {
	async fn list_pois(&self) -> Result<PoiCollection> {
		let url = self.collection_url()?;
		log::debug!("GET {url}");
		let response = check_response(self.client.get(url.clone()).send().await?).await?;
		let text = response.text().await?;
		PoiCollection::from_json_str(&text).with_context(|| format!("parsing POIs from '{url}'"))
	}

	async fn get_poi(&self, id: u64) -> Result<PoiFeature> {
		let url = self.item_url(id)?;
		log::debug!("GET {url}");
		let response = self.client.get(url.clone()).send().await?;
		if response.status() == StatusCode::NOT_FOUND {
			return Err(PoiNotFound(id).into());
		}
		let text = check_response(response).await?.text().await?;
		PoiFeature::from_json_str(&text).with_context(|| format!("parsing POI from '{url}'"))
	}

	async fn create_poi(&self, poi: &NewPoi) -> Result<Option<u64>> {
		let url = self.collection_url()?;
		log::debug!("POST {url}");
		let response = check_response(self.client.post(url).json(poi).send().await?).await?;
		let text = response.text().await?;
		let id = serde_json::from_str::<JsonValue>(&text)
			.ok()
			.as_ref()
			.and_then(extract_created_id);
		if id.is_none() {
			log::warn!("backend did not report an id for the new POI");
		}
		Ok(id)
	}

	async fn delete_poi(&self, id: u64) -> Result<()> {
		let url = self.item_url(id)?;
		log::debug!("DELETE {url}");
		check_response(self.client.delete(url).send().await?).await?;
		Ok(())
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
