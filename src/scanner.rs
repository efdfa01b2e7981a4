use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use get_if_addrs::{get_if_addrs, IfAddr};
use tracing::debug;

use crate::config::{DiscoveryConfig, EndpointConfig};
use crate::discovery::DiscoveryController;
use crate::endpoint::{DeviceEndpoint, HostCollaborator};
use crate::error::EndpointError;

/// Returns the local, non-loopback IPv4 addresses this host can bind a Discovery Controller to.
pub fn local_ipv4_addrs() -> Result<Vec<Ipv4Addr>, EndpointError> {
	let addrs = get_if_addrs().map_err(EndpointError::Transport)?;
	Ok(addrs
		.into_iter()
		.filter_map(|iface| {
			if iface.ip().is_loopback() {
				return None;
			}
			match iface.addr {
				IfAddr::V4(v4) => Some(v4.ip),
				_ => None,
			}
		})
		.collect())
}

struct SeenFlag(Arc<AtomicBool>);

impl HostCollaborator for SeenFlag {
	fn register(&self, _endpoint: &DeviceEndpoint) {
		self.0.store(true, Ordering::SeqCst);
	}
	fn unregister(&self, _endpoint: &DeviceEndpoint) {}
}

/// Runs one Discovery Controller per local IPv4 interface concurrently for `timeout`, and
/// returns the interfaces on which any device answered.
pub async fn scan(timeout: Duration) -> Result<Vec<Ipv4Addr>, EndpointError> {
	let interfaces = local_ipv4_addrs()?;
	let mut controllers = Vec::new();
	let mut flags = Vec::new();

	for ip in &interfaces {
		let seen = Arc::new(AtomicBool::new(false));
		let host = Arc::new(SeenFlag(seen.clone()));
		let bind_addr = SocketAddr::new(IpAddr::V4(*ip), 0);
		match DiscoveryController::bind(
			bind_addr,
			DiscoveryConfig::default(),
			EndpointConfig::default(),
			rand_source_id(),
			host,
		)
		.await
		{
			Ok(controller) => {
				controller.rediscover_now();
				controllers.push(controller);
				flags.push((*ip, seen));
			}
			Err(e) => debug!(%ip, error = %e, "failed to bind scanner interface"),
		}
	}

	tokio::time::sleep(timeout).await;

	for controller in &controllers {
		controller.cleanup().await;
	}

	Ok(flags
		.into_iter()
		.filter(|(_, seen)| seen.load(Ordering::SeqCst))
		.map(|(ip, _)| ip)
		.collect())
}

/// A simple, non-cryptographic per-run client identifier; devices merely echo it back.
fn rand_source_id() -> u32 {
	use std::time::{SystemTime, UNIX_EPOCH};
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.subsec_nanos())
		.unwrap_or(0x5a5a_5a5a);
	nanos | 1
}
