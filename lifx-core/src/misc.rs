use std::{io, convert::TryFrom};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{
	error::Error,
	read_write::{LittleEndianReader, LittleEndianWriter},
};

#[derive(Debug, Clone, PartialEq)]
pub struct LifxIdent(pub [u8; 16]);

impl<R: ReadBytesExt> LittleEndianReader<LifxIdent> for R {
	fn read_val(&mut self) -> Result<LifxIdent, io::Error> {
		let mut val = [0; 16];
		for v in &mut val {
			*v = self.read_val()?;
		}
		Ok(LifxIdent(val))
	}
}

impl<T> LittleEndianWriter<LifxIdent> for T
where
	T: WriteBytesExt,
{
	fn write_val(&mut self, v: LifxIdent) -> Result<(), io::Error> {
		for idx in 0..16 {
			self.write_u8(v.0[idx])?;
		}
		Ok(())
	}
}

#[derive(Copy, Clone)]
pub struct EchoPayload(pub [u8; 64]);

impl std::fmt::Debug for EchoPayload {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
		write!(f, "<EchoPayload>")
	}
}

impl<R: ReadBytesExt> LittleEndianReader<EchoPayload> for R {
	fn read_val(&mut self) -> Result<EchoPayload, io::Error> {
		let mut val = [0; 64];
		for v in val.iter_mut() {
			*v = self.read_val()?;
		}
		Ok(EchoPayload(val))
	}
}

impl<T> LittleEndianWriter<EchoPayload> for T
where
	T: WriteBytesExt,
{
	fn write_val(&mut self, v: EchoPayload) -> Result<(), io::Error> {
		for idx in 0..64 {
			self.write_u8(v.0[idx])?;
		}
		Ok(())
	}
}

#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PowerLevel {
	Standby = 0,
	Enabled = 65535,
}

impl<T> LittleEndianWriter<PowerLevel> for T
where
	T: WriteBytesExt,
{
	fn write_val(&mut self, v: PowerLevel) -> Result<(), io::Error> {
		self.write_u16::<LittleEndian>(v as u16)
	}
}

impl TryFrom<u16> for PowerLevel {
	type Error = Error;
	fn try_from(val: u16) -> Result<PowerLevel, Error> {
		match val {
			x if x == PowerLevel::Enabled as u16 => Ok(PowerLevel::Enabled),
			x if x == PowerLevel::Standby as u16 => Ok(PowerLevel::Standby),
			x => Err(Error::ProtocolError(format!("Unknown power level {}", x))),
		}
	}
}

/// What services are exposed by the device.
///
/// LIFX only documents the UDP service, though bulbs may support other undocumented services.
/// Since these other services are unsupported by the lifx-core library, a message with a non-UDP
/// service cannot be constructed.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Service {
	UDP = 1,
}

impl TryFrom<u8> for Service {
	type Error = Error;
	fn try_from(val: u8) -> Result<Service, Error> {
		if val != Service::UDP as u8 {
			Err(Error::ProtocolError(format!(
				"Unknown service value {}",
				val
			)))
		} else {
			Ok(Service::UDP)
		}
	}
}

/// Describes one tile in a chain of matrix (tile) devices.
///
/// See also [Message::StateDeviceChain].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileDevice {
	pub accel_meas_x: i16,
	pub accel_meas_y: i16,
	pub accel_meas_z: i16,
	pub user_x: f32,
	pub user_y: f32,
	pub width: u8,
	pub height: u8,
	pub device_version_vendor: u32,
	pub device_version_product: u32,
	pub firmware_build: u64,
	pub firmware_version_minor: u16,
	pub firmware_version_major: u16,
}

impl<R: ReadBytesExt> LittleEndianReader<TileDevice> for R {
	fn read_val(&mut self) -> Result<TileDevice, io::Error> {
		let accel_meas_x = self.read_val()?;
		let accel_meas_y = self.read_val()?;
		let accel_meas_z = self.read_val()?;
		let _reserved: i16 = self.read_val()?;
		let user_x = self.read_val()?;
		let user_y = self.read_val()?;
		let width = self.read_val()?;
		let height = self.read_val()?;
		let _reserved: u8 = self.read_val()?;
		let device_version_vendor = self.read_val()?;
		let device_version_product = self.read_val()?;
		let _reserved: u32 = self.read_val()?;
		let firmware_build = self.read_val()?;
		let _reserved: u64 = self.read_val()?;
		let firmware_version_minor = self.read_val()?;
		let firmware_version_major = self.read_val()?;
		let _reserved: u16 = self.read_val()?;
		Ok(TileDevice {
			accel_meas_x,
			accel_meas_y,
			accel_meas_z,
			user_x,
			user_y,
			width,
			height,
			device_version_vendor,
			device_version_product,
			firmware_build,
			firmware_version_minor,
			firmware_version_major,
		})
	}
}
