use lifx_core::{
	ApplicationRequest, Message, MultiZoneDirection, MultiZoneEffectSettings, MultiZoneEffectType,
	HSBK,
};

use crate::capability::Capabilities;
use crate::endpoint::DeviceEndpoint;
use crate::error::EndpointError;

const EXTENDED_ZONE_CAPACITY: usize = 82;

/// Multi-zone (strip/beam) operations, gated on `Capabilities::multizone`.
///
/// The extended (whole-strip-in-one-message) zone operations additionally require
/// `Capabilities::extended_multizone` and fail with `CapabilityMismatch` otherwise.
pub struct MultizoneLight<'a> {
	endpoint: &'a DeviceEndpoint,
	caps: Capabilities,
}

impl<'a> MultizoneLight<'a> {
	pub fn new(endpoint: &'a DeviceEndpoint, caps: Capabilities) -> Option<Self> {
		caps.multizone.then_some(MultizoneLight { endpoint, caps })
	}

	pub async fn set_color_zones(
		&self,
		start_index: u8,
		end_index: u8,
		color: HSBK,
		duration_ms: u32,
		apply: ApplicationRequest,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetColorZones {
				start_index,
				end_index,
				color,
				duration: duration_ms,
				apply,
			})
			.await
			.map(|_| ())
	}

	/// Requests the zone range; the device replies with one or more `StateZone`/`StateMultiZone`
	/// messages, each folded into the cache as it arrives. The call only resolves once every
	/// zone in `start_index..=end_index` has landed (SPEC_FULL.md §8 scenario 5) — callers read
	/// the accumulated result from `DeviceCache::color_zones`.
	pub async fn get_color_zones(
		&self,
		start_index: u8,
		end_index: u8,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_zone_range(
				Message::GetColorZones {
					start_index,
					end_index,
				},
				start_index,
				end_index,
			)
			.await
			.map(|_| ())
	}

	pub async fn get_multizone_effect(&self) -> Result<MultiZoneEffectSettings, EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetMultiZoneEffect, 509)
			.await?
		{
			Message::StateMultiZoneEffect { settings } => Ok(settings),
			other => unreachable!("GetMultiZoneEffect correlated to {:?}", other),
		}
	}

	#[allow(clippy::too_many_arguments)]
	pub async fn set_multizone_effect(
		&self,
		effect: MultiZoneEffectType,
		direction: MultiZoneDirection,
		speed_ms: u32,
		duration_ns: u64,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetMultiZoneEffect {
				settings: MultiZoneEffectSettings {
					instance_id: 0,
					effect,
					speed: speed_ms,
					duration: duration_ns,
					direction,
				},
			})
			.await
			.map(|_| ())
	}

	pub async fn get_extended_color_zones(&self) -> Result<(), EndpointError> {
		if !self.caps.extended_multizone {
			return Err(EndpointError::CapabilityMismatch);
		}
		self.endpoint
			.request_with_response(Message::GetExtendedColorZones, 512)
			.await
			.map(|_| ())
	}

	pub async fn set_extended_color_zones(
		&self,
		duration_ms: u32,
		apply: ApplicationRequest,
		zone_index: u16,
		colors: &[HSBK],
	) -> Result<(), EndpointError> {
		if !self.caps.extended_multizone {
			return Err(EndpointError::CapabilityMismatch);
		}
		let colors_count = colors.len().min(EXTENDED_ZONE_CAPACITY) as u8;
		let mut padded = [HSBK {
			hue: 0,
			saturation: 0,
			brightness: 0,
			kelvin: 0,
		}; EXTENDED_ZONE_CAPACITY];
		for (slot, color) in padded.iter_mut().zip(colors.iter()) {
			*slot = *color;
		}
		self.endpoint
			.request_with_ack(Message::SetExtendedColorZones {
				duration: duration_ms,
				apply,
				zone_index,
				colors_count,
				colors: padded,
			})
			.await
			.map(|_| ())
	}
}
