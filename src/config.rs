use std::net::Ipv6Addr;
use std::time::Duration;

/// Policy knobs for a single [`crate::endpoint::DeviceEndpoint`].
#[derive(Debug, Clone)]
pub struct EndpointConfig {
	/// Number of attempts made for a request-with-ack or request-with-response send, and the
	/// number of repetitions used for fire-and-forget.
	pub retry_count: u8,
	/// How long a single attempt waits for a reply before retrying.
	pub timeout: Duration,
	/// How long without an inbound message before a silent, retry-exhausted endpoint is
	/// deregistered.
	pub unregister_timeout: Duration,
}

impl Default for EndpointConfig {
	fn default() -> Self {
		EndpointConfig {
			retry_count: 3,
			timeout: Duration::from_millis(500),
			unregister_timeout: Duration::from_secs(45),
		}
	}
}

/// Parameters for the discovery broadcast loop.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
	/// Countdown reset value between broadcasts, once a device is already known.
	pub discovery_interval: Duration,
	/// Tick granularity of the countdown.
	pub discovery_step: Duration,
	/// Destination address for `GetService` broadcasts.
	pub broadcast_ip: std::net::Ipv4Addr,
	/// When set, inbound IPv4 source addresses are rewritten to an IPv6 address under this
	/// `/64` prefix via EUI-64 synthesis (see [`crate::discovery::mac_to_ipv6`]).
	pub ipv6_prefix: Option<Ipv6Addr>,
}

impl Default for DiscoveryConfig {
	fn default() -> Self {
		DiscoveryConfig {
			discovery_interval: Duration::from_secs(180),
			discovery_step: Duration::from_secs(5),
			broadcast_ip: std::net::Ipv4Addr::new(255, 255, 255, 255),
			ipv6_prefix: None,
		}
	}
}
