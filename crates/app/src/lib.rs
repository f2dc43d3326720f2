//! # vektiva-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **driven/outbound ports** that adapters and hosts implement:
//!   - [`ports::VendorApi`] — one HTTP round-trip to the vendor cloud
//!   - [`ports::HostBridge`] — identity generation and accessory
//!     registration provided by the host bridge
//! - Define the **driving/inbound port** a host bridge invokes:
//!   - [`ports::DynamicPlatform`] — restore, ready signal, characteristic
//!     access
//! - Provide the platform adapter ([`platform::VektivaPlatform`]), the
//!   switch accessory controller ([`switch::VektivaSwitch`]), and the
//!   shared request chokepoint ([`api::ApiClient`])
//!
//! ## Dependency rule
//! Depends on `vektiva-domain` only (plus `tracing`). Never imports
//! adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod api;
pub mod platform;
pub mod ports;
pub mod switch;
