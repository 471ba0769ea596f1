//! Access to the POI backend.
//!
//! [`PoiBackend`] is the REST surface the map consumes (`/api/pois`).
//! [`PoiClientHttp`] talks to a real server, [`PoiStoreMemory`] keeps everything
//! in memory and can record each request, which makes it the backend of choice
//! for tests and for the development server.

mod backend;
mod http;
mod memory;

pub use backend::*;
pub use http::*;
pub use memory::*;
