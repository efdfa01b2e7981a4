use lifx_core::{HevLastResult, Message};

use crate::capability::Capabilities;
use crate::endpoint::DeviceEndpoint;
use crate::error::EndpointError;

/// HEV (germicidal UV) cycle operations, gated on `Capabilities::hev`.
pub struct HevLight<'a> {
	endpoint: &'a DeviceEndpoint,
}

impl<'a> HevLight<'a> {
	pub fn new(endpoint: &'a DeviceEndpoint, caps: Capabilities) -> Option<Self> {
		caps.hev.then_some(HevLight { endpoint })
	}

	pub async fn get_hev_cycle(&self) -> Result<(u32, u32, bool), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetHevCycle, 144)
			.await?
		{
			Message::StateHevCycle {
				duration,
				remaining,
				last_power,
			} => Ok((duration, remaining, last_power)),
			other => unreachable!("GetHevCycle correlated to {:?}", other),
		}
	}

	pub async fn set_hev_cycle(&self, enable: bool, duration_s: u32) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetHevCycle {
				enable,
				duration: duration_s,
			})
			.await
			.map(|_| ())
	}

	pub async fn get_hev_cycle_configuration(&self) -> Result<(bool, u32), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetHevCycleConfiguration, 147)
			.await?
		{
			Message::StateHevCycleConfiguration {
				indication,
				duration,
			} => Ok((indication, duration)),
			other => unreachable!("GetHevCycleConfiguration correlated to {:?}", other),
		}
	}

	pub async fn set_hev_cycle_configuration(
		&self,
		indication: bool,
		duration_s: u32,
	) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetHevCycleConfiguration {
				indication,
				duration: duration_s,
			})
			.await
			.map(|_| ())
	}

	pub async fn get_last_hev_cycle_result(&self) -> Result<HevLastResult, EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetLastHevCycleResult, 149)
			.await?
		{
			Message::StateLastHevCycleResult { result } => Ok(result),
			other => unreachable!("GetLastHevCycleResult correlated to {:?}", other),
		}
	}
}
