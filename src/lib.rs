//! Async client for controlling LIFX bulbs over the LAN protocol.
//!
//! Built on [`lifx_core`] for the wire codec; this crate adds the per-device conversation engine,
//! discovery, capability resolution, and typed operation-group façades described in
//! `SPEC_FULL.md`.

mod capability;
mod config;
mod discovery;
mod endpoint;
mod error;
pub mod groups;
mod scanner;

pub use capability::{resolve as resolve_capabilities, Capabilities, DeviceKind};
pub use config::{DiscoveryConfig, EndpointConfig};
pub use discovery::{mac_to_ipv6, DiscoveryController, UDP_BROADCAST_PORT};
pub use endpoint::{DeviceCache, DeviceEndpoint, HostCollaborator, NoopHost};
pub use error::EndpointError;
pub use scanner::{local_ipv4_addrs, scan};

pub use lifx_core as core;
