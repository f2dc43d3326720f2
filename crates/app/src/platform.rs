//! Platform adapter — owns vendor connectivity and accessory bookkeeping.
//!
//! One instance per configured device set (currently always one device).
//! The host bridge drives it through the [`DynamicPlatform`] port: cached
//! accessories arrive first, then the ready signal triggers discovery,
//! then user actions arrive as characteristic calls.

use std::sync::Arc;

use vektiva_domain::accessory::Accessory;
use vektiva_domain::command::Command;
use vektiva_domain::config::PlatformConfig;
use vektiva_domain::error::{NotFoundError, ValidationError, VektivaError};
use vektiva_domain::id::AccessoryId;

use crate::api::ApiClient;
use crate::ports::{DynamicPlatform, HostBridge, VendorApi};
use crate::switch::{DISPLAY_NAME, VektivaSwitch};

/// Plugin identifier used when registering accessories with the host.
pub const PLUGIN_NAME: &str = "vektiva-bridge";

/// Platform identifier used when registering accessories with the host.
pub const PLATFORM_NAME: &str = "VektivaPlatform";

/// The platform adapter, generic over the host bridge and the vendor
/// transport so both can be substituted with test doubles.
pub struct VektivaPlatform<B, C> {
    bridge: B,
    config: PlatformConfig,
    api: Arc<ApiClient<C>>,
    accessories: Vec<Accessory>,
    switches: Vec<VektivaSwitch<C>>,
}

impl<B: HostBridge, C: VendorApi> VektivaPlatform<B, C> {
    /// Create a platform from configuration and injected capabilities.
    ///
    /// No network IO happens here; the first vendor round-trip is the
    /// first characteristic call after discovery.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when any configuration field is
    /// empty. A missing credential is a fatal startup condition.
    pub fn new(config: PlatformConfig, bridge: B, vendor: C) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            bridge,
            config,
            api: Arc::new(ApiClient::new(vendor)),
            accessories: Vec::new(),
            switches: Vec::new(),
        })
    }

    /// The accessories currently known to the platform, in registration
    /// order.
    #[must_use]
    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    /// Issue a vendor command through the shared chokepoint.
    ///
    /// `true` iff the vendor confirmed with the exact body `"OK"`;
    /// failures are logged and reported as `false`, never raised.
    pub async fn make_api_request(&self, command: Command) -> bool {
        self.api.make_request(command).await
    }

    /// Run device discovery for the configured device.
    ///
    /// Restores the accessory from the known list when its identity
    /// matches (exact match only), otherwise creates and registers a new
    /// one. Either way exactly one controller is attached per run.
    ///
    /// # Errors
    ///
    /// Propagates [`VektivaError::Bridge`] when the host rejects the
    /// registration of a newly created accessory.
    #[tracing::instrument(skip(self), fields(device_id = %self.config.device_id))]
    pub fn discover_devices(&mut self) -> Result<(), VektivaError> {
        let id = self.bridge.accessory_id(&self.config.device_id);

        if let Some(accessory) = self.accessories.iter_mut().find(|a| a.id == id) {
            tracing::info!(
                name = %accessory.display_name,
                "Restoring existing accessory from cache"
            );
            let switch = VektivaSwitch::attach(Arc::clone(&self.api), accessory);
            self.switches.push(switch);
        } else {
            tracing::info!("Adding new accessory");
            let mut accessory = Accessory::new(DISPLAY_NAME, id);
            let switch = VektivaSwitch::attach(Arc::clone(&self.api), &mut accessory);
            self.bridge
                .register_accessories(PLUGIN_NAME, PLATFORM_NAME, vec![accessory.clone()])?;
            self.accessories.push(accessory);
            self.switches.push(switch);
        }

        Ok(())
    }

    fn switch(&self, id: AccessoryId) -> Result<&VektivaSwitch<C>, NotFoundError> {
        self.switches
            .iter()
            .find(|switch| switch.accessory_id() == id)
            .ok_or_else(|| NotFoundError {
                entity: "Accessory",
                id: id.to_string(),
            })
    }

    #[cfg(test)]
    fn controller_count(&self) -> usize {
        self.switches.len()
    }
}

impl<B: HostBridge, C: VendorApi> DynamicPlatform for VektivaPlatform<B, C> {
    fn configure_accessory(&mut self, accessory: Accessory) {
        self.accessories.push(accessory);
    }

    fn did_finish_launching(&mut self) -> Result<(), VektivaError> {
        self.discover_devices()
    }

    async fn get_on(&self, id: AccessoryId) -> Result<bool, VektivaError> {
        let switch = self.switch(id)?;
        Ok(switch.get_on().await)
    }

    async fn set_on(&self, id: AccessoryId, value: bool) -> Result<(), VektivaError> {
        let switch = self.switch(id)?;
        switch.set_on(value).await?;
        Ok(())
    }
}
