use std::collections::HashMap;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use lifx_core::{BuildOptions, Message, RawMessage, Service};
use tokio::net::UdpSocket;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::{DiscoveryConfig, EndpointConfig};
use crate::endpoint::{DeviceEndpoint, HostCollaborator};
use crate::error::EndpointError;

pub const UDP_BROADCAST_PORT: u16 = 56700;

type EndpointTable = HashMap<u64, (Arc<DeviceEndpoint>, JoinHandle<()>)>;

/// Synthesizes a link-local-style IPv6 address for a device's MAC under `prefix`, via EUI-64:
/// flip the universal/local bit of the first octet, splice `FF:FE` between octets 3 and 4.
///
/// `mac_to_ipv6("12:34:56:78:9a:bc", "fe80::") == "fe80::1034:56ff:fe78:9abc"`.
pub fn mac_to_ipv6(mac: [u8; 6], prefix: Ipv6Addr) -> Ipv6Addr {
	let mut eui64 = [0u8; 8];
	eui64[0] = mac[0] ^ 0b0000_0010;
	eui64[1] = mac[1];
	eui64[2] = mac[2];
	eui64[3] = 0xff;
	eui64[4] = 0xfe;
	eui64[5] = mac[3];
	eui64[6] = mac[4];
	eui64[7] = mac[5];

	let prefix_segments = prefix.segments();
	let mut segments = [0u16; 8];
	segments[0] = prefix_segments[0];
	segments[1] = prefix_segments[1];
	segments[2] = prefix_segments[2];
	segments[3] = prefix_segments[3];
	segments[4] = u16::from_be_bytes([eui64[0], eui64[1]]);
	segments[5] = u16::from_be_bytes([eui64[2], eui64[3]]);
	segments[6] = u16::from_be_bytes([eui64[4], eui64[5]]);
	segments[7] = u16::from_be_bytes([eui64[6], eui64[7]]);
	Ipv6Addr::from(segments)
}

fn mac_bytes(target: u64) -> [u8; 6] {
	let le = target.to_le_bytes();
	[le[0], le[1], le[2], le[3], le[4], le[5]]
}

fn is_broadcast_mac(target: u64) -> bool {
	target & 0xffff_ffff_ffff == 0
}

/// Holds every known Device Endpoint and runs the periodic discovery broadcast.
///
/// One UDP socket bound to `0.0.0.0` with broadcast enabled; a wall-clock-independent countdown
/// drives re-broadcasts (SPEC_FULL.md §4.4).
pub struct DiscoveryController {
	socket: Arc<UdpSocket>,
	config: DiscoveryConfig,
	endpoint_config: EndpointConfig,
	source_id: u32,
	host: Arc<dyn HostCollaborator>,
	endpoints: Mutex<EndpointTable>,
	countdown_ms: AtomicI64,
	tick_task: Mutex<Option<JoinHandle<()>>>,
	recv_task: Mutex<Option<JoinHandle<()>>>,
}

impl DiscoveryController {
	pub async fn bind(
		bind_addr: SocketAddr,
		config: DiscoveryConfig,
		endpoint_config: EndpointConfig,
		source_id: u32,
		host: Arc<dyn HostCollaborator>,
	) -> Result<Arc<DiscoveryController>, EndpointError> {
		let socket = UdpSocket::bind(bind_addr).await?;
		socket.set_broadcast(true)?;

		let controller = Arc::new(DiscoveryController {
			socket: Arc::new(socket),
			config,
			endpoint_config,
			source_id,
			host,
			endpoints: Mutex::new(HashMap::new()),
			countdown_ms: AtomicI64::new(0),
			tick_task: Mutex::new(None),
			recv_task: Mutex::new(None),
		});

		let tick_controller = controller.clone();
		let tick_handle = tokio::spawn(async move { tick_controller.tick_loop().await });
		*controller.tick_task.lock().await = Some(tick_handle);

		let recv_controller = controller.clone();
		let recv_handle = tokio::spawn(async move { recv_controller.recv_loop().await });
		*controller.recv_task.lock().await = Some(recv_handle);

		Ok(controller)
	}

	/// Forces the next tick to broadcast immediately, enabling on-demand rediscovery.
	pub fn rediscover_now(&self) {
		self.countdown_ms.store(0, Ordering::SeqCst);
	}

	async fn tick_loop(self: Arc<Self>) {
		let step = self.config.discovery_step;
		loop {
			let remaining = self.countdown_ms.load(Ordering::SeqCst);
			if remaining <= 0 {
				if let Err(e) = self.broadcast_get_service().await {
					warn!(error = %e, "failed to send discovery broadcast");
				}
				self.countdown_ms
					.store(self.config.discovery_interval.as_millis() as i64, Ordering::SeqCst);
			} else {
				self.countdown_ms
					.store(remaining - step.as_millis() as i64, Ordering::SeqCst);
			}
			tokio::time::sleep(step).await;
		}
	}

	async fn broadcast_get_service(&self) -> Result<(), EndpointError> {
		let opts = BuildOptions {
			target: None,
			ack_required: false,
			res_required: false,
			sequence: 0,
			source: self.source_id,
		};
		let bytes = RawMessage::build(&opts, Message::GetService)?.pack()?;
		let dest = SocketAddr::new(IpAddr::V4(self.config.broadcast_ip), UDP_BROADCAST_PORT);
		debug!(%dest, "sending GetService broadcast");
		self.socket.send_to(&bytes, dest).await?;
		Ok(())
	}

	async fn recv_loop(self: Arc<Self>) {
		let mut buf = [0u8; 2048];
		loop {
			match self.socket.recv_from(&mut buf).await {
				Ok((len, addr)) => self.on_datagram(&buf[..len], addr).await,
				Err(e) => warn!(error = %e, "discovery socket error"),
			}
		}
	}

	async fn on_datagram(&self, bytes: &[u8], from: SocketAddr) {
		let raw = match RawMessage::unpack(bytes) {
			Ok(raw) => raw,
			Err(e) => {
				debug!(error = %e, "discovery decode error");
				return;
			}
		};
		let target = raw.frame_addr.target;
		if is_broadcast_mac(target) {
			return;
		}

		let msg = match Message::from_raw(&raw) {
			Ok(m) => m,
			Err(e) => {
				debug!(error = %e, "discovery decode error");
				return;
			}
		};

		let port = match msg {
			Message::StateService {
				service: Service::UDP,
				port,
			} => port as u16,
			Message::LightState { .. } => UDP_BROADCAST_PORT,
			_ => return,
		};

		let ip = match self.config.ipv6_prefix {
			Some(prefix) => IpAddr::V6(mac_to_ipv6(mac_bytes(target), prefix)),
			None => from.ip(),
		};
		let remote = SocketAddr::new(ip, port);

		self.register_or_rebind(target, remote).await;
	}

	async fn register_or_rebind(&self, target: u64, remote: SocketAddr) {
		let existing = {
			let endpoints = self.endpoints.lock().await;
			endpoints.get(&target).map(|(ep, _)| ep.clone())
		};

		if let Some(endpoint) = existing {
			if endpoint.is_registered() {
				return;
			}
			info!(mac = %endpoint.mac_string(), %remote, "re-registering known device");
			endpoint.rebind(remote).await;
			return;
		}

		let spawned = DeviceEndpoint::spawn(
			target,
			remote,
			self.source_id,
			self.endpoint_config.clone(),
			self.host.clone(),
		)
		.await;

		let (endpoint, handle) = match spawned {
			Ok(pair) => pair,
			Err(e) => {
				warn!(error = %e, "failed to create device endpoint");
				return;
			}
		};

		info!(mac = %endpoint.mac_string(), %remote, "discovered new device");
		let fetch_endpoint = endpoint.clone();
		tokio::spawn(async move {
			if let Err(e) = fetch_endpoint.request_with_response(Message::GetVersion, 33).await {
				debug!(error = %e, "GetVersion failed for newly discovered device");
			}
		});

		self.endpoints
			.lock()
			.await
			.insert(target, (endpoint, handle));
	}

	pub async fn endpoint(&self, target: u64) -> Option<Arc<DeviceEndpoint>> {
		self.endpoints
			.lock()
			.await
			.get(&target)
			.map(|(ep, _)| ep.clone())
	}

	pub async fn endpoints(&self) -> Vec<Arc<DeviceEndpoint>> {
		self.endpoints
			.lock()
			.await
			.values()
			.map(|(ep, _)| ep.clone())
			.collect()
	}

	/// Cancels the discovery task and every endpoint's background tasks, and closes the
	/// broadcast socket.
	pub async fn cleanup(&self) {
		if let Some(task) = self.tick_task.lock().await.take() {
			task.abort();
		}
		if let Some(task) = self.recv_task.lock().await.take() {
			task.abort();
		}
		for (_, handle) in self.endpoints.lock().await.drain() {
			handle.1.abort();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::endpoint::NoopHost;

	#[test]
	fn eui64_synthesis_matches_known_vector() {
		let mac = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc];
		let prefix: Ipv6Addr = "fe80::".parse().unwrap();
		let ip = mac_to_ipv6(mac, prefix);
		assert_eq!(ip, "fe80::1034:56ff:fe78:9abc".parse::<Ipv6Addr>().unwrap());
	}

	#[tokio::test]
	async fn discovers_one_bulb_from_state_service() {
		let controller = DiscoveryController::bind(
			"127.0.0.1:0".parse().unwrap(),
			DiscoveryConfig {
				discovery_step: std::time::Duration::from_secs(3600),
				..DiscoveryConfig::default()
			},
			EndpointConfig::default(),
			0x1234_5678,
			Arc::new(NoopHost),
		)
		.await
		.unwrap();

		let bulb_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
		let discovery_addr = controller.socket.local_addr().unwrap();

		let target = u64::from_le_bytes([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0, 0]);
		let state_service = RawMessage::build(
			&BuildOptions {
				target: Some(target),
				ack_required: false,
				res_required: false,
				sequence: 0,
				source: 0,
			},
			Message::StateService {
				service: Service::UDP,
				port: UDP_BROADCAST_PORT as u32,
			},
		)
		.unwrap()
		.pack()
		.unwrap();
		bulb_socket
			.send_to(&state_service, discovery_addr)
			.await
			.unwrap();

		for _ in 0..50 {
			if controller.endpoint(target).await.is_some() {
				break;
			}
			tokio::time::sleep(std::time::Duration::from_millis(20)).await;
		}

		let endpoint = controller
			.endpoint(target)
			.await
			.expect("endpoint should have been registered");
		assert_eq!(endpoint.mac_string(), "aa:bb:cc:dd:ee:ff");

		controller.cleanup().await;
	}
}
