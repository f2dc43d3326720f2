//! # vektiva-domain
//!
//! Pure domain model for the vektiva-bridge accessory adapter.
//!
//! ## Responsibilities
//! - Platform configuration (`remoteId` / `apiKey` / `deviceId`) and the
//!   vendor base URL derived from it
//! - The closed set of vendor commands (`on`, `off`, `status`)
//! - Stable accessory identity derived from the device id
//! - Accessory boundary records the host bridge caches and restores
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and imports no IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod accessory;
pub mod command;
pub mod config;
pub mod error;
pub mod id;
