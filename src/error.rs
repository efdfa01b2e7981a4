use thiserror::Error;

/// Errors surfaced by the device-endpoint conversation engine.
///
/// Mirrors the shape of [`lifx_core::Error`]: a small `thiserror`-derived enum wrapping
/// lower-layer failures plus a couple of engine-specific unit variants.
#[derive(Debug, Error)]
pub enum EndpointError {
	/// The codec rejected an inbound or outbound message.
	#[error("codec error: {0}")]
	Decode(#[from] lifx_core::Error),

	/// The UDP socket reported a send/receive failure.
	#[error("transport error: {0}")]
	Transport(#[from] std::io::Error),

	/// Every retry attempt elapsed without a correlated reply. The only user-visible
	/// "device unreachable" signal.
	#[error("request exhausted its retries without a reply")]
	Exhausted,

	/// The operation requires a capability this device's product does not report.
	#[error("operation not supported by this device's capabilities")]
	CapabilityMismatch,
}
