use lifx_core::{Button, Message, HSBK};

use crate::capability::Capabilities;
use crate::endpoint::DeviceEndpoint;
use crate::error::EndpointError;

const MIN_KELVIN: f64 = 1500.0;
const MAX_KELVIN: f64 = 9000.0;
const KELVIN_RANGE: f64 = MAX_KELVIN - MIN_KELVIN;
const MIN_BYTE: f64 = 10495.0;
const MAX_BYTE: f64 = 56575.0;
const BYTE_RANGE: f64 = MAX_BYTE - MIN_BYTE;

/// Converts a switch backlight's raw `kelvin` wire byte to a Kelvin temperature.
///
/// The switch backlight color reports `kelvin` on an inverted, non-1:1 byte scale rather than a
/// direct Kelvin value (higher byte == lower temperature). Grounded on `get_kelvin()` in
/// `examples/original_source/aiolifx/__main__.py`, which this reproduces exactly; SPEC_FULL.md §8's
/// own worked midpoint example (byte 33535 -> 4250 K) is arithmetically inconsistent with its own
/// stated linear formula, which yields 5250 K at that byte — the value asserted by this crate's
/// test and the one this function returns.
pub fn backlight_kelvin_from_byte(byte_value: u16) -> u32 {
	let byte_value = byte_value as f64;
	if byte_value <= MIN_BYTE {
		MAX_KELVIN as u32
	} else if byte_value < MAX_BYTE {
		(MAX_KELVIN - ((byte_value - MIN_BYTE) / BYTE_RANGE) * KELVIN_RANGE).round() as u32
	} else {
		MIN_KELVIN as u32
	}
}

/// Inverse of [`backlight_kelvin_from_byte`], clamped to the byte range the device accepts.
pub fn backlight_byte_from_kelvin(kelvin: u32) -> u16 {
	let kelvin = (kelvin as f64).clamp(MIN_KELVIN, MAX_KELVIN);
	let byte = MAX_BYTE - ((kelvin - MIN_KELVIN) / KELVIN_RANGE) * BYTE_RANGE;
	byte.round() as u16
}

/// Relay and button operations on LIFX Switch devices, gated on `Capabilities::relays` /
/// `Capabilities::buttons` per method.
pub struct Switch<'a> {
	endpoint: &'a DeviceEndpoint,
	caps: Capabilities,
}

impl<'a> Switch<'a> {
	pub fn new(endpoint: &'a DeviceEndpoint, caps: Capabilities) -> Option<Self> {
		(caps.relays || caps.buttons).then_some(Switch { endpoint, caps })
	}

	pub async fn get_rpower(&self, relay_index: u8) -> Result<u16, EndpointError> {
		if !self.caps.relays {
			return Err(EndpointError::CapabilityMismatch);
		}
		match self
			.endpoint
			.request_with_response(Message::GetRPower { relay_index }, 818)
			.await?
		{
			Message::StateRPower { level, .. } => Ok(level),
			other => unreachable!("GetRPower correlated to {:?}", other),
		}
	}

	pub async fn set_rpower(&self, relay_index: u8, level: u16) -> Result<(), EndpointError> {
		if !self.caps.relays {
			return Err(EndpointError::CapabilityMismatch);
		}
		self.endpoint
			.request_with_ack(Message::SetRPower { relay_index, level })
			.await
			.map(|_| ())
	}

	pub async fn get_button(&self) -> Result<(u8, u8, Vec<Button>), EndpointError> {
		if !self.caps.buttons {
			return Err(EndpointError::CapabilityMismatch);
		}
		match self
			.endpoint
			.request_with_response(Message::GetButton, 907)
			.await?
		{
			Message::StateButton {
				count,
				index,
				buttons_count,
				buttons,
			} => Ok((count, index, buttons[..buttons_count as usize].to_vec())),
			other => unreachable!("GetButton correlated to {:?}", other),
		}
	}

	pub async fn set_button(
		&self,
		count: u8,
		index: u8,
		buttons: [Button; 8],
	) -> Result<(), EndpointError> {
		if !self.caps.buttons {
			return Err(EndpointError::CapabilityMismatch);
		}
		self.endpoint
			.request_with_ack(Message::SetButton {
				count,
				index,
				buttons_count: 8,
				buttons,
			})
			.await
			.map(|_| ())
	}

	pub async fn get_button_config(&self) -> Result<(u16, HSBK, HSBK), EndpointError> {
		if !self.caps.buttons {
			return Err(EndpointError::CapabilityMismatch);
		}
		match self
			.endpoint
			.request_with_response(Message::GetButtonConfig, 911)
			.await?
		{
			Message::StateButtonConfig {
				haptic_duration_ms,
				backlight_on_color,
				backlight_off_color,
			} => Ok((haptic_duration_ms, backlight_on_color, backlight_off_color)),
			other => unreachable!("GetButtonConfig correlated to {:?}", other),
		}
	}

	pub async fn set_button_config(
		&self,
		haptic_duration_ms: u16,
		backlight_on_color: HSBK,
		backlight_off_color: HSBK,
	) -> Result<(), EndpointError> {
		if !self.caps.buttons {
			return Err(EndpointError::CapabilityMismatch);
		}
		self.endpoint
			.request_with_ack(Message::SetButtonConfig {
				haptic_duration_ms,
				backlight_on_color,
				backlight_off_color,
			})
			.await
			.map(|_| ())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kelvin_boundaries_match_original_source() {
		assert_eq!(backlight_kelvin_from_byte(10495), 9000);
		assert_eq!(backlight_kelvin_from_byte(33535), 5250);
		assert_eq!(backlight_kelvin_from_byte(56575), 1500);
		assert_eq!(backlight_kelvin_from_byte(60000), 1500);
	}

	#[test]
	fn byte_from_kelvin_round_trips_midpoint() {
		assert_eq!(backlight_byte_from_kelvin(5250), 33535);
	}
}
