//! Capability-gated typed operation groups (SPEC_FULL.md §9 "Polymorphism over capability").
//!
//! Each group is a thin wrapper borrowing `&DeviceEndpoint`; all but [`Light`] are only
//! constructible when the resolved [`crate::capability::Capabilities`] allow it, so a capability
//! mismatch is a compile-time non-issue rather than a runtime check at most call sites.

mod color_light;
mod hev_light;
mod light;
mod matrix_light;
mod multizone_light;
mod switch;

pub use color_light::ColorLight;
pub use hev_light::HevLight;
pub use light::Light;
pub use matrix_light::MatrixLight;
pub use multizone_light::MultizoneLight;
pub use switch::{backlight_byte_from_kelvin, backlight_kelvin_from_byte, Switch};
