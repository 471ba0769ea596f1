//! Configuration of the POI map.
//!
//! - [`Config`]: top-level configuration loader and YAML parser
//! - [`ApiConfig`]: where the POI backend lives
//! - [`MapConfig`]: initial view, viewport, base tiles and editor mode
//! - [`ServerConfig`]: address of the development API server
//!
//! Every section and field is optional; missing values fall back to defaults.

mod api;
mod main;
mod map;
mod server;

pub use api::ApiConfig;
pub use main::Config;
pub use map::{MapConfig, TileConfig};
pub use server::ServerConfig;
