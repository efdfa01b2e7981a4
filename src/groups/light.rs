use lifx_core::{LifxIdent, LifxString, Message, PowerLevel};

use crate::capability::Capabilities;
use crate::endpoint::DeviceEndpoint;
use crate::error::EndpointError;

/// Operations available on every LIFX device, independent of product capability.
///
/// Grounded on aiolifx's `Light` base class (label, device power, location/group, firmware,
/// infrared): `examples/original_source/aiolifx/__init__.py`.
pub struct Light<'a> {
	endpoint: &'a DeviceEndpoint,
	caps: Capabilities,
}

impl<'a> Light<'a> {
	pub fn new(endpoint: &'a DeviceEndpoint, caps: Capabilities) -> Self {
		Light { endpoint, caps }
	}

	pub async fn get_label(&self) -> Result<String, EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetLabel, 25)
			.await?
		{
			Message::StateLabel { label } => Ok(label.0),
			other => unreachable!("GetLabel correlated to {:?}", other),
		}
	}

	pub async fn set_label(&self, label: &str) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetLabel {
				label: LifxString::new(label),
			})
			.await
			.map(|_| ())
	}

	/// Device standby/power-on, independent of any attached light. Distinct from the
	/// light-specific [`Light::get_power`]/[`Light::set_power`], which is the canonical power
	/// control for a light (SPEC_FULL.md §8 scenario 2) and the one aiolifx's `Light` class
	/// overrides its base `Device.get_power`/`set_power` with.
	pub async fn get_device_power(&self) -> Result<bool, EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetPower, 22)
			.await?
		{
			Message::StatePower { level } => Ok(level != PowerLevel::Standby),
			other => unreachable!("GetPower correlated to {:?}", other),
		}
	}

	pub async fn set_device_power(&self, on: bool) -> Result<(), EndpointError> {
		let level = if on {
			PowerLevel::Enabled
		} else {
			PowerLevel::Standby
		};
		self.endpoint
			.request_with_ack(Message::SetPower { level })
			.await
			.map(|_| ())
	}

	/// Canonical light power, with a transition `duration_ms`. Grounded on aiolifx's `Light`
	/// class override of `get_power`/`set_power`
	/// (`examples/original_source/aiolifx/aiolifx.py:411-434`), which sends `LightGetPower`/
	/// `LightSetPower` rather than the base `Device` class's `GetPower`/`SetPower`.
	pub async fn get_power(&self) -> Result<bool, EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::LightGetPower, 118)
			.await?
		{
			Message::LightStatePower { level } => Ok(level != 0),
			other => unreachable!("LightGetPower correlated to {:?}", other),
		}
	}

	pub async fn set_power(&self, on: bool, duration_ms: u32) -> Result<(), EndpointError> {
		let level = if on { 65535 } else { 0 };
		self.endpoint
			.request_with_ack(Message::LightSetPower {
				level,
				duration: duration_ms,
			})
			.await
			.map(|_| ())
	}

	pub async fn get_version(&self) -> Result<(u32, u32, u32), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetVersion, 33)
			.await?
		{
			Message::StateVersion {
				vendor,
				product,
				version,
			} => Ok((vendor, product, version)),
			other => unreachable!("GetVersion correlated to {:?}", other),
		}
	}

	pub async fn get_host_firmware(&self) -> Result<(u64, u32), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetHostFirmware, 15)
			.await?
		{
			Message::StateHostFirmware { build, version, .. } => Ok((build, version)),
			other => unreachable!("GetHostFirmware correlated to {:?}", other),
		}
	}

	pub async fn get_wifi_firmware(&self) -> Result<(u64, u32), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetWifiFirmware, 19)
			.await?
		{
			Message::StateWifiFirmware { build, version, .. } => Ok((build, version)),
			other => unreachable!("GetWifiFirmware correlated to {:?}", other),
		}
	}

	pub async fn get_location(&self) -> Result<([u8; 16], String), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetLocation, 50)
			.await?
		{
			Message::StateLocation { location, label, .. } => Ok((location.0, label.0)),
			other => unreachable!("GetLocation correlated to {:?}", other),
		}
	}

	pub async fn set_location(
		&self,
		location: [u8; 16],
		label: &str,
		updated_at: u64,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetLocation {
				location: LifxIdent(location),
				label: LifxString::new(label),
				updated_at,
			})
			.await
			.map(|_| ())
	}

	pub async fn get_group(&self) -> Result<([u8; 16], String), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetGroup, 53)
			.await?
		{
			Message::StateGroup { group, label, .. } => Ok((group.0, label.0)),
			other => unreachable!("GetGroup correlated to {:?}", other),
		}
	}

	pub async fn set_group(
		&self,
		group: [u8; 16],
		label: &str,
		updated_at: u64,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetGroup {
				group: LifxIdent(group),
				label: LifxString::new(label),
				updated_at,
			})
			.await
			.map(|_| ())
	}

	/// Maximum infrared channel brightness. `Err(CapabilityMismatch)` on devices without an IR
	/// emitter.
	pub async fn get_infrared(&self) -> Result<u16, EndpointError> {
		if !self.caps.infrared {
			return Err(EndpointError::CapabilityMismatch);
		}
		match self
			.endpoint
			.request_with_response(Message::LightGetInfrared, 121)
			.await?
		{
			Message::LightStateInfrared { brightness } => Ok(brightness),
			other => unreachable!("LightGetInfrared correlated to {:?}", other),
		}
	}

	pub async fn set_infrared(&self, brightness: u16) -> Result<(), EndpointError> {
		if !self.caps.infrared {
			return Err(EndpointError::CapabilityMismatch);
		}
		self.endpoint
			.request_with_ack(Message::LightSetInfrared { brightness })
			.await
			.map(|_| ())
	}
}
