//! Lifecycle of the development API server.
//!
//! The handlers live in `handlers`, the routing in `routes`. This file owns
//! binding, spawning and graceful shutdown. Binding to port 0 picks a free port;
//! [`PoiServer::local_addr`] tells which one.

use super::routes;
use crate::config::ServerConfig;
use anyhow::{Context, Result};
use poimap_client::PoiStoreMemory;
use std::{
	net::{IpAddr, SocketAddr},
	sync::Arc,
	time::Duration,
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// Serves `/api/pois` from a [`PoiStoreMemory`].
pub struct PoiServer {
	ip: IpAddr,
	port: u16,
	store: Arc<PoiStoreMemory>,
	/// Tells the serving task to shut down gracefully.
	exit_signal: Option<oneshot::Sender<()>>,
	join: Option<JoinHandle<()>>,
	local_addr: Option<SocketAddr>,
}

impl PoiServer {
	pub fn new(ip: IpAddr, port: u16, store: Arc<PoiStoreMemory>) -> PoiServer {
		PoiServer {
			ip,
			port,
			store,
			exit_signal: None,
			join: None,
			local_addr: None,
		}
	}

	pub fn from_config(config: &ServerConfig, store: Arc<PoiStoreMemory>) -> PoiServer {
		PoiServer::new(config.ip(), config.port(), store)
	}

	pub fn store(&self) -> &Arc<PoiStoreMemory> {
		&self.store
	}

	/// The bound address while running.
	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.local_addr
	}

	/// Base URL for clients while running, e.g. `http://127.0.0.1:5000/`.
	pub fn base_url(&self) -> Option<String> {
		self.local_addr.map(|addr| format!("http://{addr}/"))
	}

	/// Starts listening. A running instance is stopped first.
	pub async fn start(&mut self) -> Result<SocketAddr> {
		if self.exit_signal.is_some() || self.join.is_some() {
			self.stop().await;
		}

		log::info!("starting server");
		let router = routes::build_router(Arc::clone(&self.store));

		let addr = SocketAddr::new(self.ip, self.port);
		let listener = TcpListener::bind(addr)
			.await
			.with_context(|| format!("binding server to {addr}"))?;
		let local_addr = listener.local_addr()?;
		log::info!("server listening on {local_addr}");

		let (tx, rx) = oneshot::channel::<()>();
		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await
			{
				log::error!("server task exited with error: {err}");
			}
		});

		self.exit_signal = Some(tx);
		self.join = Some(handle);
		self.local_addr = Some(local_addr);
		Ok(local_addr)
	}

	/// Shuts down gracefully and waits for the serving task. Does nothing when not running.
	pub async fn stop(&mut self) {
		if self.exit_signal.is_none() && self.join.is_none() {
			return;
		}

		log::info!("stopping server");
		if let Some(tx) = self.exit_signal.take() {
			let _ = tx.send(());
		}
		if let Some(handle) = self.join.take() {
			match tokio::time::timeout(Duration::from_secs(10), handle).await {
				Ok(Err(join_err)) => log::warn!("server task join error: {join_err}"),
				Ok(Ok(())) => (),
				Err(_) => log::warn!("server task did not shut down within timeout"),
			}
		}
		self.local_addr = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::net::Ipv4Addr;

	#[tokio::test]
	async fn start_and_stop() -> Result<()> {
		let store = Arc::new(PoiStoreMemory::new());
		let mut server = PoiServer::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0, store);
		assert_eq!(server.base_url(), None);

		let addr = server.start().await?;
		assert_ne!(addr.port(), 0);
		assert_eq!(server.base_url(), Some(format!("http://{addr}/")));

		let status = reqwest::get(format!("http://{addr}/api/status")).await?;
		assert_eq!(status.status(), 200);

		// restarting replaces the running instance
		server.start().await?;
		server.stop().await;
		server.stop().await;
		assert_eq!(server.local_addr(), None);
		Ok(())
	}
}
