use lifx_core::{Message, TileDevice, TileEffectSettings, HSBK};

use crate::capability::Capabilities;
use crate::endpoint::DeviceEndpoint;
use crate::error::EndpointError;

const TILE_COLOR_CAPACITY: usize = 64;

/// Matrix (2-D pixel grid: Tile, Candle, Ceiling) operations, gated on `Capabilities::matrix`.
pub struct MatrixLight<'a> {
	endpoint: &'a DeviceEndpoint,
}

impl<'a> MatrixLight<'a> {
	pub fn new(endpoint: &'a DeviceEndpoint, caps: Capabilities) -> Option<Self> {
		caps.matrix.then_some(MatrixLight { endpoint })
	}

	pub async fn get_device_chain(&self) -> Result<(u8, Vec<TileDevice>), EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetDeviceChain, 702)
			.await?
		{
			Message::StateDeviceChain {
				start_index,
				tile_devices,
				tile_devices_count,
			} => Ok((
				start_index,
				tile_devices[..tile_devices_count as usize].to_vec(),
			)),
			other => unreachable!("GetDeviceChain correlated to {:?}", other),
		}
	}

	pub async fn get64(
		&self,
		tile_index: u8,
		x: u8,
		y: u8,
		width: u8,
	) -> Result<Vec<HSBK>, EndpointError> {
		match self
			.endpoint
			.request_with_response(
				Message::Get64 {
					tile_index,
					length: 1,
					x,
					y,
					width,
				},
				711,
			)
			.await?
		{
			Message::State64 { colors, .. } => Ok(colors.to_vec()),
			other => unreachable!("Get64 correlated to {:?}", other),
		}
	}

	pub async fn set64(
		&self,
		tile_index: u8,
		x: u8,
		y: u8,
		width: u8,
		duration_ms: u32,
		colors: &[HSBK],
	) -> Result<(), EndpointError> {
		let mut padded = [HSBK {
			hue: 0,
			saturation: 0,
			brightness: 0,
			kelvin: 0,
		}; TILE_COLOR_CAPACITY];
		for (slot, color) in padded.iter_mut().zip(colors.iter()) {
			*slot = *color;
		}
		self.endpoint
			.request_with_ack(Message::Set64 {
				tile_index,
				length: 1,
				x,
				y,
				width,
				duration: duration_ms,
				colors: padded,
			})
			.await
			.map(|_| ())
	}

	pub async fn get_tile_effect(&self) -> Result<TileEffectSettings, EndpointError> {
		match self
			.endpoint
			.request_with_response(Message::GetTileEffect, 720)
			.await?
		{
			Message::StateTileEffect { settings } => Ok(settings),
			other => unreachable!("GetTileEffect correlated to {:?}", other),
		}
	}

	pub async fn set_tile_effect(&self, settings: TileEffectSettings) -> Result<(), EndpointError> {
		self.endpoint
			.request_with_ack(Message::SetTileEffect { settings })
			.await
			.map(|_| ())
	}
}
