#[derive(Clone, Debug)]
pub struct ProductInfo {
	pub name: &'static str,
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

/// Look up info about what a LIFX product supports.
///
/// You can get the vendor and product IDs from a bulb by receiving a [Message::StateVersion] message
///
/// Data is taken from https://github.com/LIFX/products/blob/master/products.json. This catalogue
/// is a representative subset covering each capability combination, not the full product line.
#[rustfmt::skip]
pub fn get_product_info(vendor: u32, product: u32) -> Option<&'static ProductInfo> {
	match (vendor, product) {
		(1,  1) => Some(&ProductInfo { name: "Original 1000",                color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1,  3) => Some(&ProductInfo { name: "Color 650",                    color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 10) => Some(&ProductInfo { name: "White 800 (Low Voltage)",      color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2700, max_kelvin: 6500}),
		(1, 11) => Some(&ProductInfo { name: "White 800 (High Voltage)",     color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2700, max_kelvin: 6500}),
		(1, 18) => Some(&ProductInfo { name: "White 900 BR30 (Low Voltage)", color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2700, max_kelvin: 6500}),
		(1, 20) => Some(&ProductInfo { name: "Color 1000 BR30",              color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 22) => Some(&ProductInfo { name: "Color 1000",                   color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 27) => Some(&ProductInfo { name: "LIFX A19",                     color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 28) => Some(&ProductInfo { name: "LIFX BR30",                    color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 29) => Some(&ProductInfo { name: "LIFX+ A19",                    color: true,  infrared: true,  multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 30) => Some(&ProductInfo { name: "LIFX+ BR30",                   color: true,  infrared: true,  multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 31) => Some(&ProductInfo { name: "LIFX Z",                       color: true,  infrared: false, multizone: true,  extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 32) => Some(&ProductInfo { name: "LIFX Z 2",                     color: true,  infrared: false, multizone: true,  extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 36) => Some(&ProductInfo { name: "LIFX Downlight",               color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 37) => Some(&ProductInfo { name: "LIFX Downlight",               color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 38) => Some(&ProductInfo { name: "LIFX Beam",                    color: true,  infrared: false, multizone: true,  extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 43) => Some(&ProductInfo { name: "LIFX A19",                     color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 44) => Some(&ProductInfo { name: "LIFX BR30",                    color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 45) => Some(&ProductInfo { name: "LIFX+ A19",                    color: true,  infrared: true,  multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 46) => Some(&ProductInfo { name: "LIFX+ BR30",                   color: true,  infrared: true,  multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 49) => Some(&ProductInfo { name: "LIFX Mini",                    color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 50) => Some(&ProductInfo { name: "LIFX Mini Day and Dusk",       color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 1500, max_kelvin: 4000}),
		(1, 51) => Some(&ProductInfo { name: "LIFX Mini White",              color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2700, max_kelvin: 2700}),
		(1, 52) => Some(&ProductInfo { name: "LIFX GU10",                    color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 55) => Some(&ProductInfo { name: "LIFX Tile",                    color: true,  infrared: false, multizone: false, extended_multizone: false, chain: true,  matrix: true,  relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 59) => Some(&ProductInfo { name: "LIFX Mini Color",              color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2500, max_kelvin: 9000}),
		(1, 60) => Some(&ProductInfo { name: "LIFX Mini Day and Dusk",       color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 1500, max_kelvin: 4000}),
		(1, 61) => Some(&ProductInfo { name: "LIFX Mini White",              color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 2700, max_kelvin: 2700}),
		(1, 68) => Some(&ProductInfo { name: "LIFX Candle",                  color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: true,  relays: false, buttons: false, hev: false, min_kelvin: 1500, max_kelvin: 9000}),
		(1, 70) => Some(&ProductInfo { name: "LIFX Switch",                  color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: true,  buttons: true,  hev: false, min_kelvin: 0,    max_kelvin: 0}),
		(1, 81) => Some(&ProductInfo { name: "LIFX Candle White to Warm",    color: false, infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: true,  relays: false, buttons: false, hev: false, min_kelvin: 2200, max_kelvin: 6500}),
		(1, 90) => Some(&ProductInfo { name: "LIFX Clean",                   color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: true,  min_kelvin: 1500, max_kelvin: 9000}),
		(1, 91) => Some(&ProductInfo { name: "LIFX Color",                   color: true,  infrared: false, multizone: false, extended_multizone: false, chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 1500, max_kelvin: 9000}),
		(1, 117) => Some(&ProductInfo { name: "LIFX Beam",                   color: true,  infrared: false, multizone: true,  extended_multizone: true,  chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 1500, max_kelvin: 9000}),
		(1, 137) => Some(&ProductInfo { name: "LIFX Neon",                   color: true,  infrared: false, multizone: true,  extended_multizone: true,  chain: false, matrix: false, relays: false, buttons: false, hev: false, min_kelvin: 1500, max_kelvin: 9000}),
		(_, _)  => None
	}
}
