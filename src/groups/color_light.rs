use lifx_core::{HSBK, Message, Waveform};

use crate::capability::Capabilities;
use crate::endpoint::DeviceEndpoint;
use crate::error::EndpointError;

/// HSBK color operations, gated on `Capabilities::color`.
///
/// Grounded on aiolifx's `Light.set_color`/`set_waveform` (`examples/original_source/aiolifx/__init__.py`).
pub struct ColorLight<'a> {
	endpoint: &'a DeviceEndpoint,
}

impl<'a> ColorLight<'a> {
	pub fn new(endpoint: &'a DeviceEndpoint, caps: Capabilities) -> Option<Self> {
		caps.color.then_some(ColorLight { endpoint })
	}

	pub async fn get_color(&self) -> Result<HSBK, EndpointError> {
		match self.endpoint.request_with_response(Message::LightGet, 107).await? {
			Message::LightState { color, .. } => Ok(color),
			other => unreachable!("LightGet correlated to {:?}", other),
		}
	}

	pub async fn set_color(&self, color: HSBK, duration_ms: u32) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::LightSetColor {
				reserved: 0,
				color,
				duration: duration_ms,
			})
			.await
			.map(|_| ())
	}

	#[allow(clippy::too_many_arguments)]
	pub async fn set_waveform(
		&self,
		transient: bool,
		color: HSBK,
		period_ms: u32,
		cycles: f32,
		skew_ratio: i16,
		waveform: Waveform,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetWaveform {
				reserved: 0,
				transient,
				color,
				period: period_ms,
				cycles,
				skew_ratio,
				waveform,
			})
			.await
			.map(|_| ())
	}
}
