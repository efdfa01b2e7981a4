use std::{
	convert::{TryFrom, TryInto},
	io::Write,
};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::Error;

/// What kind of press was performed on a hardware button/switch relay.
///
/// See also [Message::StateButton].
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ButtonGesture {
	None = 0,
	Press = 1,
	Hold = 2,
	PressPress = 3,
	PressHold = 4,
	HoldHold = 5,
}

impl TryFrom<u16> for ButtonGesture {
	type Error = Error;
	fn try_from(val: u16) -> Result<ButtonGesture, Error> {
		match val {
			0 => Ok(ButtonGesture::None),
			1 => Ok(ButtonGesture::Press),
			2 => Ok(ButtonGesture::Hold),
			3 => Ok(ButtonGesture::PressPress),
			4 => Ok(ButtonGesture::PressHold),
			5 => Ok(ButtonGesture::HoldHold),
			x => Err(Error::ProtocolError(format!("Unknown button gesture {}", x))),
		}
	}
}

/// What kind of thing a [ButtonTarget] refers to.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ButtonTargetType {
	Reserved = 0,
	Reserved1 = 1,
	Relays = 2,
	Device = 3,
	Location = 4,
	Group = 5,
	Scene = 6,
	DeviceRelays = 7,
}

impl TryFrom<u16> for ButtonTargetType {
	type Error = Error;
	fn try_from(val: u16) -> Result<ButtonTargetType, Error> {
		match val {
			0 => Ok(ButtonTargetType::Reserved),
			1 => Ok(ButtonTargetType::Reserved1),
			2 => Ok(ButtonTargetType::Relays),
			3 => Ok(ButtonTargetType::Device),
			4 => Ok(ButtonTargetType::Location),
			5 => Ok(ButtonTargetType::Group),
			6 => Ok(ButtonTargetType::Scene),
			7 => Ok(ButtonTargetType::DeviceRelays),
			x => Err(Error::ProtocolError(format!(
				"Unknown button target type {}",
				x
			))),
		}
	}
}

/// What a button gesture is bound to. Always occupies 16 bytes on the wire, regardless of
/// variant, with unused trailing bytes reserved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ButtonTarget {
	Reserved,
	Reserved1,
	Relays { relays_count: u8, relays: [u8; 15] },
	Device { serial: [u8; 6], reserved: [u8; 10] },
	Location { location_id: [u8; 16] },
	Group { group_id: [u8; 16] },
	Scene { scene_id: [u8; 16] },
	DeviceRelays {
		serial: [u8; 6],
		relays_count: u8,
		relays: [u8; 9],
	},
}

impl ButtonTarget {
	fn target_type(&self) -> ButtonTargetType {
		match self {
			ButtonTarget::Reserved => ButtonTargetType::Reserved,
			ButtonTarget::Reserved1 => ButtonTargetType::Reserved1,
			ButtonTarget::Relays { .. } => ButtonTargetType::Relays,
			ButtonTarget::Device { .. } => ButtonTargetType::Device,
			ButtonTarget::Location { .. } => ButtonTargetType::Location,
			ButtonTarget::Group { .. } => ButtonTargetType::Group,
			ButtonTarget::Scene { .. } => ButtonTargetType::Scene,
			ButtonTarget::DeviceRelays { .. } => ButtonTargetType::DeviceRelays,
		}
	}

	fn unpack<R: ReadBytesExt>(c: &mut R, target_type: ButtonTargetType) -> Result<Self, Error> {
		let mut buf = [0u8; 16];
		c.read_exact(&mut buf)?;
		Ok(match target_type {
			ButtonTargetType::Reserved => ButtonTarget::Reserved,
			ButtonTargetType::Reserved1 => ButtonTarget::Reserved1,
			ButtonTargetType::Relays => {
				let mut relays = [0u8; 15];
				relays.copy_from_slice(&buf[1..16]);
				ButtonTarget::Relays {
					relays_count: buf[0],
					relays,
				}
			}
			ButtonTargetType::Device => {
				let mut serial = [0u8; 6];
				let mut reserved = [0u8; 10];
				serial.copy_from_slice(&buf[0..6]);
				reserved.copy_from_slice(&buf[6..16]);
				ButtonTarget::Device { serial, reserved }
			}
			ButtonTargetType::Location => {
				let mut location_id = [0u8; 16];
				location_id.copy_from_slice(&buf);
				ButtonTarget::Location { location_id }
			}
			ButtonTargetType::Group => {
				let mut group_id = [0u8; 16];
				group_id.copy_from_slice(&buf);
				ButtonTarget::Group { group_id }
			}
			ButtonTargetType::Scene => {
				let mut scene_id = [0u8; 16];
				scene_id.copy_from_slice(&buf);
				ButtonTarget::Scene { scene_id }
			}
			ButtonTargetType::DeviceRelays => {
				let mut serial = [0u8; 6];
				let mut relays = [0u8; 9];
				serial.copy_from_slice(&buf[0..6]);
				relays.copy_from_slice(&buf[7..16]);
				ButtonTarget::DeviceRelays {
					serial,
					relays_count: buf[6],
					relays,
				}
			}
		})
	}

	fn pack(&self, v: &mut Vec<u8>) -> Result<(), Error> {
		let mut buf = [0u8; 16];
		match self {
			ButtonTarget::Reserved | ButtonTarget::Reserved1 => {}
			ButtonTarget::Relays {
				relays_count,
				relays,
			} => {
				buf[0] = *relays_count;
				buf[1..16].copy_from_slice(relays);
			}
			ButtonTarget::Device { serial, reserved } => {
				buf[0..6].copy_from_slice(serial);
				buf[6..16].copy_from_slice(reserved);
			}
			ButtonTarget::Location { location_id } => buf.copy_from_slice(location_id),
			ButtonTarget::Group { group_id } => buf.copy_from_slice(group_id),
			ButtonTarget::Scene { scene_id } => buf.copy_from_slice(scene_id),
			ButtonTarget::DeviceRelays {
				serial,
				relays_count,
				relays,
			} => {
				buf[0..6].copy_from_slice(serial);
				buf[6] = *relays_count;
				buf[7..16].copy_from_slice(relays);
			}
		}
		v.write_all(&buf)?;
		Ok(())
	}
}

/// A single gesture-to-target binding. Always 20 bytes on the wire (2 + 2 + 16).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonAction {
	pub gesture: ButtonGesture,
	pub target: ButtonTarget,
}

impl ButtonAction {
	fn unpack<R: ReadBytesExt>(c: &mut R) -> Result<Self, Error> {
		let gesture = ButtonGesture::try_from(c.read_u16::<LittleEndian>()?)?;
		let target_type = ButtonTargetType::try_from(c.read_u16::<LittleEndian>()?)?;
		let target = ButtonTarget::unpack(c, target_type)?;
		Ok(ButtonAction { gesture, target })
	}

	fn pack(&self, v: &mut Vec<u8>) -> Result<(), Error> {
		v.write_u16::<LittleEndian>(self.gesture as u16)?;
		v.write_u16::<LittleEndian>(self.target.target_type() as u16)?;
		self.target.pack(v)?;
		Ok(())
	}
}

/// A hardware button/relay and the (up to 5) gestures bound to it. Always 101 bytes on the wire
/// (1 + 5 * 20).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
	pub actions_count: u8,
	pub actions: [ButtonAction; 5],
}

impl Button {
	pub(crate) fn unpack<R: ReadBytesExt>(c: &mut R) -> Result<Self, Error> {
		let actions_count = c.read_u8()?;
		let mut actions = Vec::with_capacity(5);
		for _ in 0..5 {
			actions.push(ButtonAction::unpack(c)?);
		}
		let actions: [ButtonAction; 5] = match actions.try_into() {
			Ok(a) => a,
			Err(_) => unreachable!("pushed exactly 5 actions"),
		};
		Ok(Button {
			actions_count,
			actions,
		})
	}

	pub(crate) fn pack(&self, v: &mut Vec<u8>) -> Result<(), Error> {
		v.write_u8(self.actions_count)?;
		for action in self.actions.iter() {
			action.pack(v)?;
		}
		Ok(())
	}
}
