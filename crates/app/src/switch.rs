//! Switch accessory controller — binds one accessory's power
//! characteristic to the platform's request chokepoint.
//!
//! The controller holds no power state of its own: every read re-queries
//! the vendor, every write re-issues a vendor command. A write either
//! fully succeeds or fails with a communication error; there is no
//! pending state in between.

use std::sync::Arc;

use vektiva_domain::accessory::Accessory;
use vektiva_domain::command::Command;
use vektiva_domain::error::CharacteristicError;
use vektiva_domain::id::AccessoryId;

use crate::api::ApiClient;
use crate::ports::VendorApi;

/// Display name given to the accessory and its switch service.
pub const DISPLAY_NAME: &str = "Vektiva Switch";

const MANUFACTURER: &str = "Vektiva";
const MODEL: &str = "Switch";
const SERIAL_NUMBER: &str = "Default-Serial";

/// One switch accessory controller.
pub struct VektivaSwitch<C> {
    api: Arc<ApiClient<C>>,
    accessory_id: AccessoryId,
}

impl<C: VendorApi> VektivaSwitch<C> {
    /// Attach a controller to an accessory record.
    ///
    /// Sets the static identification metadata, ensures a switch service
    /// exists (reusing one restored from the cache if present), and names
    /// it [`DISPLAY_NAME`]. The accessory record is mutated in place; the
    /// controller keeps only its identity.
    pub fn attach(api: Arc<ApiClient<C>>, accessory: &mut Accessory) -> Self {
        accessory.information.manufacturer = Some(MANUFACTURER.to_string());
        accessory.information.model = Some(MODEL.to_string());
        accessory.information.serial_number = Some(SERIAL_NUMBER.to_string());

        accessory.switch_service_mut().name = DISPLAY_NAME.to_string();

        Self {
            api,
            accessory_id: accessory.id,
        }
    }

    /// Identity of the accessory this controller is bound to.
    #[must_use]
    pub fn accessory_id(&self) -> AccessoryId {
        self.accessory_id
    }

    /// Write the power characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`CharacteristicError::ServiceCommunicationFailure`] when
    /// the vendor does not confirm the command. No retry, and no state to
    /// roll back.
    pub async fn set_on(&self, value: bool) -> Result<(), CharacteristicError> {
        let command = Command::for_power(value);
        if self.api.make_request(command).await {
            Ok(())
        } else {
            Err(CharacteristicError::ServiceCommunicationFailure)
        }
    }

    /// Read the power characteristic.
    ///
    /// Returns the raw chokepoint result for `status`: a vendor `"OK"`
    /// reads as on; anything else, including a failed round-trip, reads
    /// as off.
    pub async fn get_on(&self) -> bool {
        self.api.make_request(Command::Status).await
    }
}
