use lifx_core::get_product_info;

/// Which typed operation group(s) a resolved product supports.
///
/// Re-expresses the Python source's mixin inheritance (each product class grants itself
/// capability-specific methods) as a tagged set: a device can be more than one `DeviceKind` at
/// once (every device is at least `Light`; a color multi-zone strip is also `ColorLight` and
/// `MultizoneLight`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
	Light,
	ColorLight,
	MultizoneLight,
	MatrixLight,
	HevLight,
	Switch,
}

/// Feature record resolved from `(vendor, product)`, per SPEC_FULL.md §4.3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capabilities {
	pub color: bool,
	pub infrared: bool,
	pub multizone: bool,
	pub extended_multizone: bool,
	pub chain: bool,
	pub matrix: bool,
	pub relays: bool,
	pub buttons: bool,
	pub hev: bool,
	pub min_kelvin: u32,
	pub max_kelvin: u32,
}

impl Capabilities {
	/// Which typed operation groups this device supports, in addition to the always-present
	/// `Light` group.
	pub fn kinds(&self) -> Vec<DeviceKind> {
		let mut kinds = vec![DeviceKind::Light];
		if self.color {
			kinds.push(DeviceKind::ColorLight);
		}
		if self.multizone {
			kinds.push(DeviceKind::MultizoneLight);
		}
		if self.matrix {
			kinds.push(DeviceKind::MatrixLight);
		}
		if self.hev {
			kinds.push(DeviceKind::HevLight);
		}
		if self.relays || self.buttons {
			kinds.push(DeviceKind::Switch);
		}
		kinds
	}

	pub fn supports(&self, kind: DeviceKind) -> bool {
		self.kinds().contains(&kind)
	}
}

/// Look up the capability record for a `(vendor, product)` pair reported in a `StateVersion`.
///
/// A pure lookup against the static product catalogue; returns `None` for unrecognized
/// products, same as [`lifx_core::get_product_info`].
pub fn resolve(vendor: u32, product: u32) -> Option<Capabilities> {
	get_product_info(vendor, product).map(|info| Capabilities {
		color: info.color,
		infrared: info.infrared,
		multizone: info.multizone,
		extended_multizone: info.extended_multizone,
		chain: info.chain,
		matrix: info.matrix,
		relays: info.relays,
		buttons: info.buttons,
		hev: info.hev,
		min_kelvin: info.min_kelvin,
		max_kelvin: info.max_kelvin,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tile_is_matrix_and_chain_capable() {
		let caps = resolve(1, 55).expect("LIFX Tile is in the catalogue");
		assert!(caps.matrix);
		assert!(caps.chain);
		assert!(caps.kinds().contains(&DeviceKind::MatrixLight));
	}

	#[test]
	fn switch_is_relay_and_button_capable_but_not_a_light() {
		let caps = resolve(1, 70).expect("LIFX Switch is in the catalogue");
		assert!(caps.relays);
		assert!(caps.buttons);
		assert!(!caps.color);
		assert!(caps.kinds().contains(&DeviceKind::Switch));
	}

	#[test]
	fn unknown_product_resolves_to_none() {
		assert!(resolve(9999, 9999).is_none());
	}
}
