//! Port definitions — traits at the boundaries of the application core.
//!
//! Ports are the seams between this crate and the outside world: the
//! vendor cloud on one side, the host bridge runtime on the other. They
//! are defined here so both the use-case layer and the adapter layer can
//! depend on them without creating circular dependencies.

pub mod bridge;
pub mod cloud;
pub mod platform;

pub use bridge::HostBridge;
pub use cloud::VendorApi;
pub use platform::DynamicPlatform;
