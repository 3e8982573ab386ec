use serde::Serialize;

use crate::backend::mathphysics::{
    Decibel, DecibelHertz, DecibelMilliwatt, DecibelMilliwattPerHertz,
    FrequencyBand, Kelvin
};

use super::LinkQuality;


#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinkBudgetResult {
    pub(super) eirp_dbm: DecibelMilliwatt,
    pub(super) free_space_path_loss_db: Decibel,
    pub(super) total_link_loss_db: Decibel,
    pub(super) received_carrier_power_dbm: DecibelMilliwatt,
    pub(super) system_noise_temperature_k: Kelvin,
    pub(super) noise_power_density_dbm_per_hz: DecibelMilliwattPerHertz,
    pub(super) noise_power_dbm: DecibelMilliwatt,
    pub(super) carrier_to_noise_db: Decibel,
    pub(super) carrier_to_noise_density_dbhz: DecibelHertz,
    pub(super) energy_per_bit_to_noise_density_db: Decibel,
    pub(super) required_eb_n0_db: Decibel,
    pub(super) link_margin_db: Decibel,
    pub(super) frequency_band: FrequencyBand,
    pub(super) link_quality: LinkQuality,
}

impl LinkBudgetResult {
    #[must_use]
    pub fn eirp_dbm(&self) -> DecibelMilliwatt {
        self.eirp_dbm
    }

    #[must_use]
    pub fn free_space_path_loss_db(&self) -> Decibel {
        self.free_space_path_loss_db
    }

    #[must_use]
    pub fn total_link_loss_db(&self) -> Decibel {
        self.total_link_loss_db
    }

    #[must_use]
    pub fn received_carrier_power_dbm(&self) -> DecibelMilliwatt {
        self.received_carrier_power_dbm
    }

    #[must_use]
    pub fn system_noise_temperature_k(&self) -> Kelvin {
        self.system_noise_temperature_k
    }

    #[must_use]
    pub fn noise_power_density_dbm_per_hz(&self) -> DecibelMilliwattPerHertz {
        self.noise_power_density_dbm_per_hz
    }

    // Noise power integrated over the receiver bandwidth.
    #[must_use]
    pub fn noise_power_dbm(&self) -> DecibelMilliwatt {
        self.noise_power_dbm
    }

    #[must_use]
    pub fn carrier_to_noise_db(&self) -> Decibel {
        self.carrier_to_noise_db
    }

    #[must_use]
    pub fn carrier_to_noise_density_dbhz(&self) -> DecibelHertz {
        self.carrier_to_noise_density_dbhz
    }

    #[must_use]
    pub fn energy_per_bit_to_noise_density_db(&self) -> Decibel {
        self.energy_per_bit_to_noise_density_db
    }

    #[must_use]
    pub fn required_eb_n0_db(&self) -> Decibel {
        self.required_eb_n0_db
    }

    #[must_use]
    pub fn link_margin_db(&self) -> Decibel {
        self.link_margin_db
    }

    #[must_use]
    pub fn frequency_band(&self) -> FrequencyBand {
        self.frequency_band
    }

    #[must_use]
    pub fn link_quality(&self) -> LinkQuality {
        self.link_quality
    }

    /// # Errors
    ///
    /// Will return `Err` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self)
    }
}
