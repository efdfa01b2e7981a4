use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lifx_core::{BuildOptions, Message, RawMessage};
use tokio::net::UdpSocket;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::capability::Capabilities;
use crate::config::EndpointConfig;
use crate::error::EndpointError;

/// Wire ID of [`Message::Acknowledgement`], used as the expected reply kind for
/// request-with-ack sends.
const ACK_KIND: u16 = 45;

/// Wire IDs of the two replies a zone query may receive (SPEC_FULL.md §6): a device answers
/// with `StateZone` when only one zone is in range, or one or more `StateMultiZone` otherwise.
const STATE_ZONE_KIND: u16 = 503;
const STATE_MULTI_ZONE_KIND: u16 = 506;

/// Synchronous hooks a consumer supplies so it learns about an endpoint's lifecycle.
///
/// Both methods are invoked from the endpoint's own tasks, never spawned off; keep
/// implementations cheap (queue work elsewhere if it's expensive).
pub trait HostCollaborator: Send + Sync {
	fn register(&self, endpoint: &DeviceEndpoint);
	fn unregister(&self, endpoint: &DeviceEndpoint);
}

/// A `HostCollaborator` that does nothing, for callers that only want the awaitable API.
pub struct NoopHost;

impl HostCollaborator for NoopHost {
	fn register(&self, _endpoint: &DeviceEndpoint) {}
	fn unregister(&self, _endpoint: &DeviceEndpoint) {}
}

/// Mutable attributes learned from `StateFoo` replies, cached on the endpoint.
///
/// Populated by [`DeviceEndpoint::apply_state_to_cache`] strictly before the corresponding
/// user callback or waiter fires (see SPEC_FULL.md §5 ordering guarantees).
#[derive(Debug, Clone, Default)]
pub struct DeviceCache {
	pub label: Option<String>,
	pub location: Option<[u8; 16]>,
	pub group: Option<[u8; 16]>,
	pub power_level: Option<u16>,
	pub vendor: Option<u32>,
	pub product: Option<u32>,
	pub version: Option<u32>,
	pub host_firmware_version: Option<u32>,
	pub host_firmware_build: Option<u64>,
	pub wifi_firmware_version: Option<u32>,
	pub wifi_firmware_build: Option<u64>,
	pub capabilities: Option<Capabilities>,
	/// Zone colors learned from `StateMultiZone`/`StateZone`, indexed by zone number. `None`
	/// entries are zones not yet reported.
	pub color_zones: Vec<Option<lifx_core::HSBK>>,
}

/// When a pending entry is considered satisfied by a correlated reply.
#[derive(Debug, Clone, Copy)]
enum Completion {
	/// Satisfied by the first correlated reply (the common case: acks, single-reply gets).
	FirstReply,
	/// Satisfied once every zone in `start_index..=end_index` has an entry in the cache — a
	/// zone query may take several `StateMultiZone` replies to cover the requested range.
	ZoneRange { start_index: u8, end_index: u8 },
}

struct PendingEntry {
	expected_kinds: Vec<u16>,
	completion: Completion,
	waiter: oneshot::Sender<Option<Message>>,
}

/// One UDP conversation with a single remote device.
///
/// Owns its socket, pending-request table, sequence counter and cache exclusively; the only
/// other task that touches it is the receive loop spawned alongside it in [`DeviceEndpoint::spawn`].
pub struct DeviceEndpoint {
	socket: UdpSocket,
	mac: u64,
	remote: Mutex<SocketAddr>,
	source_id: u32,
	config: EndpointConfig,
	seq: Mutex<u8>,
	pending: Mutex<HashMap<u8, PendingEntry>>,
	cache: Mutex<DeviceCache>,
	registered: AtomicBool,
	last_inbound: Mutex<Instant>,
	host: Arc<dyn HostCollaborator>,
}

impl DeviceEndpoint {
	/// Binds a fresh UDP socket to `remote` and spawns its receive loop.
	///
	/// Returns the endpoint and the `JoinHandle` for the receive task; the caller is
	/// responsible for retaining the handle (per SPEC_FULL.md §5, a dropped `JoinHandle` must
	/// not silently cancel in-flight work the caller still expects).
	pub async fn spawn(
		mac: u64,
		remote: SocketAddr,
		source_id: u32,
		config: EndpointConfig,
		host: Arc<dyn HostCollaborator>,
	) -> Result<(Arc<DeviceEndpoint>, JoinHandle<()>), EndpointError> {
		let socket = UdpSocket::bind("0.0.0.0:0").await?;
		let endpoint = Arc::new(DeviceEndpoint {
			socket,
			mac,
			remote: Mutex::new(remote),
			source_id,
			config,
			seq: Mutex::new(0),
			pending: Mutex::new(HashMap::new()),
			cache: Mutex::new(DeviceCache::default()),
			registered: AtomicBool::new(false),
			last_inbound: Mutex::new(Instant::now()),
			host,
		});

		let recv_endpoint = endpoint.clone();
		let handle = tokio::spawn(async move {
			recv_endpoint.recv_loop().await;
		});

		Ok((endpoint, handle))
	}

	pub fn mac(&self) -> u64 {
		self.mac
	}

	/// Canonicalized, lowercase, colon-separated MAC address.
	pub fn mac_string(&self) -> String {
		let bytes = self.mac.to_le_bytes();
		format!(
			"{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
			bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
		)
	}

	pub fn source_id(&self) -> u32 {
		self.source_id
	}

	pub fn is_registered(&self) -> bool {
		self.registered.load(Ordering::SeqCst)
	}

	pub async fn cache(&self) -> DeviceCache {
		self.cache.lock().await.clone()
	}

	/// Rebinds the remote (ip, port) this endpoint talks to, per the "known-but-deregistered
	/// MAC" discovery path (SPEC_FULL.md §4.4).
	pub async fn rebind(&self, remote: SocketAddr) {
		*self.remote.lock().await = remote;
	}

	async fn next_seq(&self) -> u8 {
		let mut seq = self.seq.lock().await;
		*seq = (*seq + 1) % 128;
		*seq
	}

	fn mark_contacted(&self) {
		if !self.registered.swap(true, Ordering::SeqCst) {
			self.host.register(self);
		}
	}

	async fn deregister_if_silent(&self) {
		let silent = self.last_inbound.lock().await.elapsed() >= self.config.unregister_timeout;
		if silent && self.registered.swap(false, Ordering::SeqCst) {
			self.host.unregister(self);
		}
	}

	/// Sends the same datagram `retry_count` times, pacing 50ms between sends, and discards the
	/// result. No reply is expected or awaited.
	pub async fn fire_and_forget(&self, msg: Message) -> Result<(), EndpointError> {
		let opts = BuildOptions {
			target: Some(self.mac),
			ack_required: false,
			res_required: false,
			sequence: 0,
			source: self.source_id,
		};
		let bytes = RawMessage::build(&opts, msg)?.pack()?;
		let remote = *self.remote.lock().await;

		let repeats = self.config.retry_count.max(1);
		for i in 0..repeats {
			self.socket.send_to(&bytes, remote).await?;
			self.mark_contacted();
			if i + 1 < repeats {
				tokio::time::sleep(std::time::Duration::from_millis(50)).await;
			}
		}
		Ok(())
	}

	/// Sends `msg` with `ack_required=1`, retrying until an `Acknowledgement` correlates or
	/// retries are exhausted.
	pub async fn request_with_ack(&self, msg: Message) -> Result<Message, EndpointError> {
		self.request(msg, vec![ACK_KIND], Completion::FirstReply, true)
			.await
	}

	/// Sends `msg` with `response_requested=1`, retrying until `expected_kind` correlates or
	/// retries are exhausted. `expected_kind` is the wire ID of the declared state reply (e.g.
	/// 25 for `StateLabel`).
	pub async fn request_with_response(
		&self,
		msg: Message,
		expected_kind: u16,
	) -> Result<Message, EndpointError> {
		self.request(msg, vec![expected_kind], Completion::FirstReply, false)
			.await
	}

	/// Sends a zone query (`GetColorZones`) and accumulates every correlated `StateZone` or
	/// `StateMultiZone` reply into the cache until all zones in `start_index..=end_index` are
	/// filled (SPEC_FULL.md §8 scenario 5): a device with more than one zone in range answers
	/// with one or more `StateMultiZone` messages, not a single `StateZone`.
	pub async fn request_zone_range(
		&self,
		msg: Message,
		start_index: u8,
		end_index: u8,
	) -> Result<Message, EndpointError> {
		self.request(
			msg,
			vec![STATE_ZONE_KIND, STATE_MULTI_ZONE_KIND],
			Completion::ZoneRange {
				start_index,
				end_index,
			},
			false,
		)
		.await
	}

	async fn request(
		&self,
		msg: Message,
		expected_kinds: Vec<u16>,
		completion: Completion,
		ack_required: bool,
	) -> Result<Message, EndpointError> {
		let seq = self.next_seq().await;
		let remote = *self.remote.lock().await;
		let opts = BuildOptions {
			target: Some(self.mac),
			ack_required,
			res_required: !ack_required,
			sequence: seq,
			source: self.source_id,
		};
		let bytes = RawMessage::build(&opts, msg)?.pack()?;

		for attempt in 0..self.config.retry_count.max(1) {
			let (tx, rx) = oneshot::channel();
			self.pending.lock().await.insert(
				seq,
				PendingEntry {
					expected_kinds: expected_kinds.clone(),
					completion,
					waiter: tx,
				},
			);

			self.socket.send_to(&bytes, remote).await?;
			self.mark_contacted();

			let outcome = tokio::time::timeout(self.config.timeout, rx).await;
			self.pending.lock().await.remove(&seq);

			match outcome {
				Ok(Ok(Some(reply))) => return Ok(reply),
				Ok(Ok(None)) | Ok(Err(_)) | Err(_) => {
					if attempt + 1 == self.config.retry_count.max(1) {
						break;
					}
					debug!(mac = %self.mac_string(), seq, attempt, "retrying request");
				}
			}
		}

		self.deregister_if_silent().await;
		Err(EndpointError::Exhausted)
	}

	async fn recv_loop(self: Arc<Self>) {
		let mut buf = [0u8; 2048];
		loop {
			match self.socket.recv_from(&mut buf).await {
				Ok((len, _addr)) => self.on_datagram(&buf[..len]).await,
				Err(e) => {
					warn!(mac = %self.mac_string(), error = %e, "transport error; flushing pending requests");
					self.flush_pending().await;
				}
			}
		}
	}

	/// Flushes every non-acknowledgement pending entry, delivering a null result to its waiter
	/// (SPEC_FULL.md §4.2/§7). Acknowledgement-only entries are left in place: a dropped ack is
	/// still recoverable by the retry loop without the transport layer's help.
	async fn flush_pending(&self) {
		let mut pending = self.pending.lock().await;
		let stale: Vec<u8> = pending
			.iter()
			.filter(|(_, entry)| entry.expected_kinds.as_slice() != [ACK_KIND])
			.map(|(seq, _)| *seq)
			.collect();
		for seq in stale {
			if let Some(entry) = pending.remove(&seq) {
				let _ = entry.waiter.send(None);
			}
		}
	}

	async fn on_datagram(&self, bytes: &[u8]) {
		*self.last_inbound.lock().await = Instant::now();
		self.mark_contacted();

		let raw = match RawMessage::unpack(bytes) {
			Ok(raw) => raw,
			Err(e) => {
				debug!(mac = %self.mac_string(), error = %e, "decode error");
				return;
			}
		};
		let seq = raw.frame_addr.sequence;
		let source = raw.frame.source;

		let msg = match Message::from_raw(&raw) {
			Ok(m) => m,
			Err(e) => {
				debug!(mac = %self.mac_string(), error = %e, "decode error");
				return;
			}
		};

		let entry = { self.pending.lock().await.remove(&seq) };
		let Some(entry) = entry else {
			debug!(mac = %self.mac_string(), seq, "unsolicited message, routed to default sink");
			return;
		};

		if source != self.source_id {
			// Wrong source_id. Drop the entry; the retry loop observes its absence and proceeds
			// to the next attempt.
			return;
		}

		let got_kind = msg.get_num();
		if entry.expected_kinds.contains(&got_kind) {
			self.apply_state_to_cache(&msg).await;
			let complete = match entry.completion {
				Completion::FirstReply => true,
				Completion::ZoneRange {
					start_index,
					end_index,
				} => {
					let cache = self.cache.lock().await;
					(start_index..=end_index).all(|i| {
						cache
							.color_zones
							.get(i as usize)
							.is_some_and(Option::is_some)
					})
				}
			};
			if complete {
				let _ = entry.waiter.send(Some(msg));
			} else {
				// More replies still expected to cover the requested range; keep the entry
				// alive instead of deleting it on this first match.
				self.pending.lock().await.insert(seq, entry);
			}
		} else if got_kind == ACK_KIND && !entry.expected_kinds.contains(&ACK_KIND) {
			// Intermediate ack for a response-requested flow: keep waiting for the real reply.
			self.pending.lock().await.insert(seq, entry);
		}
		// Otherwise: kind mismatch. Drop the entry; the retry loop observes its absence and
		// proceeds to the next attempt.
	}

	async fn apply_state_to_cache(&self, msg: &Message) {
		let mut cache = self.cache.lock().await;
		match msg {
			Message::StateLabel { label } => cache.label = Some(label.0.clone()),
			Message::StatePower { level } => cache.power_level = Some(*level as u16),
			Message::LightStatePower { level } => cache.power_level = Some(*level),
			Message::StateLocation { location, .. } => cache.location = Some(location.0),
			Message::StateGroup { group, .. } => cache.group = Some(group.0),
			Message::StateVersion {
				vendor,
				product,
				version,
			} => {
				cache.vendor = Some(*vendor);
				cache.product = Some(*product);
				cache.version = Some(*version);
				cache.capabilities = crate::capability::resolve(*vendor, *product);
			}
			Message::StateHostFirmware { build, version, .. } => {
				cache.host_firmware_build = Some(*build);
				cache.host_firmware_version = Some(*version);
			}
			Message::StateWifiFirmware { build, version, .. } => {
				cache.wifi_firmware_build = Some(*build);
				cache.wifi_firmware_version = Some(*version);
			}
			Message::StateZone { count, index, color } => {
				ensure_zone_capacity(&mut cache.color_zones, *count);
				if let Some(slot) = cache.color_zones.get_mut(*index as usize) {
					*slot = Some(*color);
				}
			}
			Message::StateMultiZone {
				count,
				index,
				color0,
				color1,
				color2,
				color3,
				color4,
				color5,
				color6,
				color7,
			} => {
				ensure_zone_capacity(&mut cache.color_zones, *count);
				for (offset, color) in [
					color0, color1, color2, color3, color4, color5, color6, color7,
				]
				.iter()
				.enumerate()
				{
					if let Some(slot) = cache.color_zones.get_mut(*index as usize + offset) {
						*slot = Some(**color);
					}
				}
			}
			_ => {}
		}
	}
}

fn ensure_zone_capacity(zones: &mut Vec<Option<lifx_core::HSBK>>, count: u8) {
	if zones.len() < count as usize {
		zones.resize(count as usize, None);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lifx_core::PowerLevel;
	use std::sync::Mutex as StdMutex;

	fn target(mac: &str) -> u64 {
		let parts: Vec<u8> = mac
			.split(':')
			.map(|p| u8::from_str_radix(p, 16).unwrap())
			.collect();
		let mut bytes = [0u8; 8];
		bytes[..6].copy_from_slice(&parts);
		u64::from_le_bytes(bytes)
	}

	struct RecordingHost {
		registered: StdMutex<Vec<String>>,
		unregistered: StdMutex<Vec<String>>,
	}

	impl HostCollaborator for RecordingHost {
		fn register(&self, endpoint: &DeviceEndpoint) {
			self.registered.lock().unwrap().push(endpoint.mac_string());
		}
		fn unregister(&self, endpoint: &DeviceEndpoint) {
			self.unregistered
				.lock()
				.unwrap()
				.push(endpoint.mac_string());
		}
	}

	async fn make_endpoint(
		config: EndpointConfig,
	) -> (Arc<DeviceEndpoint>, JoinHandle<()>, UdpSocket, Arc<RecordingHost>) {
		let device_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
		let device_addr = device_socket.local_addr().unwrap();
		let host = Arc::new(RecordingHost {
			registered: StdMutex::new(Vec::new()),
			unregistered: StdMutex::new(Vec::new()),
		});
		let (endpoint, handle) = DeviceEndpoint::spawn(
			target("aa:bb:cc:dd:ee:ff"),
			device_addr,
			0xdead_beef,
			config,
			host.clone(),
		)
		.await
		.unwrap();
		(endpoint, handle, device_socket, host)
	}

	#[tokio::test]
	async fn set_power_with_ack_happy_path() {
		let (endpoint, _handle, device_socket, host) =
			make_endpoint(EndpointConfig::default()).await;

		let endpoint2 = endpoint.clone();
		let client = tokio::spawn(async move {
			endpoint2
				.request_with_ack(Message::SetPower {
					level: PowerLevel::Enabled,
				})
				.await
		});

		let mut buf = [0u8; 1024];
		let (len, from) = device_socket.recv_from(&mut buf).await.unwrap();
		let raw = RawMessage::unpack(&buf[..len]).unwrap();
		assert!(raw.frame_addr.ack_required);
		assert!(!raw.frame_addr.res_required);
		assert_eq!(raw.frame_addr.sequence, 1);

		let ack = RawMessage::build(
			&BuildOptions {
				target: None,
				ack_required: false,
				res_required: false,
				sequence: 1,
				source: 0xdead_beef,
			},
			Message::Acknowledgement { seq: 1 },
		)
		.unwrap()
		.pack()
		.unwrap();
		device_socket.send_to(&ack, from).await.unwrap();

		let result = client.await.unwrap();
		assert!(result.is_ok());
		assert!(!host.registered.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn request_with_response_recovers_after_loss() {
		let config = EndpointConfig {
			timeout: std::time::Duration::from_millis(50),
			retry_count: 3,
			..EndpointConfig::default()
		};
		let (endpoint, _handle, device_socket, _host) = make_endpoint(config).await;

		let endpoint2 = endpoint.clone();
		let client = tokio::spawn(async move { endpoint2.request_with_response(Message::GetLabel, 25).await });

		let mut buf = [0u8; 1024];
		// First two attempts: drop them (time out).
		let (_len, from) = device_socket.recv_from(&mut buf).await.unwrap();
		let (_len, _from) = device_socket.recv_from(&mut buf).await.unwrap();
		let (len, _from) = device_socket.recv_from(&mut buf).await.unwrap();
		let raw = RawMessage::unpack(&buf[..len]).unwrap();

		let reply = RawMessage::build(
			&BuildOptions {
				target: None,
				ack_required: false,
				res_required: false,
				sequence: raw.frame_addr.sequence,
				source: 0xdead_beef,
			},
			Message::StateLabel {
				label: lifx_core::LifxString::new("Kitchen"),
			},
		)
		.unwrap()
		.pack()
		.unwrap();
		device_socket.send_to(&reply, from).await.unwrap();

		let result = client.await.unwrap().unwrap();
		match result {
			Message::StateLabel { label } => assert_eq!(label.0, "Kitchen"),
			other => panic!("unexpected reply: {:?}", other),
		}
		assert_eq!(endpoint.cache().await.label.as_deref(), Some("Kitchen"));
	}

	#[tokio::test]
	async fn request_exhaustion_deregisters() {
		let config = EndpointConfig {
			timeout: std::time::Duration::from_millis(20),
			retry_count: 2,
			unregister_timeout: std::time::Duration::from_millis(1),
		};
		let (endpoint, _handle, device_socket, host) = make_endpoint(config).await;

		let result = endpoint.request_with_response(Message::GetLabel, 25).await;
		assert!(matches!(result, Err(EndpointError::Exhausted)));
		assert!(!host.unregistered.lock().unwrap().is_empty());
		drop(device_socket);
	}

	#[tokio::test]
	async fn wrong_source_id_is_dropped_without_cache_update() {
		let (endpoint, _handle, device_socket, _host) = make_endpoint(EndpointConfig {
			timeout: std::time::Duration::from_millis(50),
			retry_count: 2,
			..EndpointConfig::default()
		})
		.await;

		let endpoint2 = endpoint.clone();
		let client =
			tokio::spawn(async move { endpoint2.request_with_response(Message::GetLabel, 25).await });

		let mut buf = [0u8; 1024];
		let (len, from) = device_socket.recv_from(&mut buf).await.unwrap();
		let raw = RawMessage::unpack(&buf[..len]).unwrap();

		let wrong_source = RawMessage::build(
			&BuildOptions {
				target: None,
				ack_required: false,
				res_required: false,
				sequence: raw.frame_addr.sequence,
				source: 0x1234_5678,
			},
			Message::StateLabel {
				label: lifx_core::LifxString::new("Wrong"),
			},
		)
		.unwrap()
		.pack()
		.unwrap();
		device_socket.send_to(&wrong_source, from).await.unwrap();

		let result = client.await.unwrap();
		assert!(result.is_err());
		assert_eq!(endpoint.cache().await.label, None);
	}

	#[tokio::test]
	async fn apply_state_to_cache_accumulates_multizone_halves() {
		let (endpoint, _handle, _device_socket, _host) =
			make_endpoint(EndpointConfig::default()).await;

		let c = |k: u16| lifx_core::HSBK {
			hue: 0,
			saturation: 0,
			brightness: 0,
			kelvin: k,
		};
		let low = Message::StateMultiZone {
			count: 16,
			index: 0,
			color0: c(0),
			color1: c(1),
			color2: c(2),
			color3: c(3),
			color4: c(4),
			color5: c(5),
			color6: c(6),
			color7: c(7),
		};
		let high = Message::StateMultiZone {
			count: 16,
			index: 8,
			color0: c(8),
			color1: c(9),
			color2: c(10),
			color3: c(11),
			color4: c(12),
			color5: c(13),
			color6: c(14),
			color7: c(15),
		};
		endpoint.apply_state_to_cache(&low).await;
		endpoint.apply_state_to_cache(&high).await;

		let zones = endpoint.cache().await.color_zones;
		assert_eq!(zones.len(), 16);
		for (i, zone) in zones.iter().enumerate() {
			assert_eq!(zone.unwrap().kelvin, i as u16);
		}
	}

	#[tokio::test]
	async fn zone_range_request_accumulates_across_replies() {
		let (endpoint, _handle, device_socket, _host) =
			make_endpoint(EndpointConfig::default()).await;

		let c = |k: u16| lifx_core::HSBK {
			hue: 0,
			saturation: 0,
			brightness: 0,
			kelvin: k,
		};

		let endpoint2 = endpoint.clone();
		let client = tokio::spawn(async move {
			endpoint2
				.request_zone_range(
					Message::GetColorZones {
						start_index: 0,
						end_index: 15,
					},
					0,
					15,
				)
				.await
		});

		let mut buf = [0u8; 1024];
		let (len, from) = device_socket.recv_from(&mut buf).await.unwrap();
		let raw = RawMessage::unpack(&buf[..len]).unwrap();
		let seq = raw.frame_addr.sequence;

		let build = |msg: Message| {
			RawMessage::build(
				&BuildOptions {
					target: None,
					ack_required: false,
					res_required: false,
					sequence: seq,
					source: 0xdead_beef,
				},
				msg,
			)
			.unwrap()
			.pack()
			.unwrap()
		};

		let low = Message::StateMultiZone {
			count: 16,
			index: 0,
			color0: c(0),
			color1: c(1),
			color2: c(2),
			color3: c(3),
			color4: c(4),
			color5: c(5),
			color6: c(6),
			color7: c(7),
		};
		device_socket.send_to(&build(low), from).await.unwrap();

		// Only the first half has landed; the request must still be outstanding.
		tokio::time::sleep(std::time::Duration::from_millis(30)).await;
		assert!(!client.is_finished());
		assert!(endpoint.cache().await.color_zones[8..].iter().all(Option::is_none));

		let high = Message::StateMultiZone {
			count: 16,
			index: 8,
			color0: c(8),
			color1: c(9),
			color2: c(10),
			color3: c(11),
			color4: c(12),
			color5: c(13),
			color6: c(14),
			color7: c(15),
		};
		device_socket.send_to(&build(high), from).await.unwrap();

		let result = client.await.unwrap().unwrap();
		assert!(matches!(result, Message::StateMultiZone { index: 8, .. }));

		let zones = endpoint.cache().await.color_zones;
		assert_eq!(zones.len(), 16);
		for (i, zone) in zones.iter().enumerate() {
			assert_eq!(zone.unwrap().kelvin, i as u16);
		}
	}

	#[tokio::test]
	async fn light_group_set_power_emits_light_set_power() {
		let (endpoint, _handle, device_socket, _host) =
			make_endpoint(EndpointConfig::default()).await;

		let caps = Capabilities {
			color: true,
			infrared: false,
			multizone: false,
			extended_multizone: false,
			chain: false,
			matrix: false,
			relays: false,
			buttons: false,
			hev: false,
			min_kelvin: 2500,
			max_kelvin: 9000,
		};

		let endpoint2 = endpoint.clone();
		let client = tokio::spawn(async move {
			let light = crate::groups::Light::new(&endpoint2, caps);
			light.set_power(true, 0).await
		});

		let mut buf = [0u8; 1024];
		let (len, from) = device_socket.recv_from(&mut buf).await.unwrap();
		let raw = RawMessage::unpack(&buf[..len]).unwrap();
		let msg = Message::from_raw(&raw).unwrap();
		match msg {
			Message::LightSetPower { level, duration } => {
				assert_eq!(level, 65535);
				assert_eq!(duration, 0);
			}
			other => panic!("expected LightSetPower, got {:?}", other),
		}
		assert_eq!(msg.get_num(), 117);

		let ack = RawMessage::build(
			&BuildOptions {
				target: None,
				ack_required: false,
				res_required: false,
				sequence: raw.frame_addr.sequence,
				source: 0xdead_beef,
			},
			Message::Acknowledgement {
				seq: raw.frame_addr.sequence,
			},
		)
		.unwrap()
		.pack()
		.unwrap();
		device_socket.send_to(&ack, from).await.unwrap();

		assert!(client.await.unwrap().is_ok());
	}
}
