use derive_more::Display;

use crate::backend::linkbudget::LinkBudgetInput;
use crate::backend::mathphysics::{
    dbw_to_dbm, km_to_m, BitsPerSecond, Decibel, DecibelIsotropic,
    DecibelWatt, Hertz, Kilometer, ReceiverNoise
};

use super::config::ScenarioConfig;


pub const DEFAULT_DISTANCE: Kilometer       = 100.0;
pub const DEFAULT_NOISE_FIGURE: Decibel     = 3.0;
pub const DEFAULT_BANDWIDTH: Hertz          = 1e6;
pub const DEFAULT_DATA_RATE: BitsPerSecond  = 1e6;
pub const DEFAULT_RAIN_FADE: Decibel        = 3.0;
pub const DEFAULT_MISC_LOSSES: Decibel      = 2.0;
pub const DEFAULT_REQUIRED_EB_N0: Decibel   = 10.0;

const HANDHELD_RADIO: RadioProfile = RadioProfile {
    tx_power: 5.0,
    tx_antenna_gain: 2.0,
    rx_antenna_gain: 2.0,
    frequency: 300e6,
};
const MANPACK_RADIO: RadioProfile = RadioProfile {
    tx_power: 10.0,
    tx_antenna_gain: 10.0,
    rx_antenna_gain: 10.0,
    frequency: 8.4e9,
};
const VEHICLE_RADIO: RadioProfile = RadioProfile {
    tx_power: 15.0,
    tx_antenna_gain: 15.0,
    rx_antenna_gain: 15.0,
    frequency: 2.2e9,
};


struct RadioProfile {
    tx_power: DecibelWatt,
    tx_antenna_gain: DecibelIsotropic,
    rx_antenna_gain: DecibelIsotropic,
    frequency: Hertz,
}


#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Preset {
    // Manpack radio with every other field at its default.
    #[default]
    #[display("custom")]
    Custom,
    #[display("handheld")]
    Handheld,
    #[display("manpack")]
    Manpack,
    #[display("vehicle")]
    Vehicle,
}

impl Preset {
    #[must_use]
    pub fn scenario(&self) -> ScenarioConfig {
        let radio = match self {
            Self::Custom | Self::Manpack => &MANPACK_RADIO,
            Self::Handheld               => &HANDHELD_RADIO,
            Self::Vehicle                => &VEHICLE_RADIO,
        };

        let link = LinkBudgetInput::builder()
            .set_tx_power_dbm(dbw_to_dbm(radio.tx_power))
            .set_tx_antenna_gain_dbi(radio.tx_antenna_gain)
            .set_rx_antenna_gain_dbi(radio.rx_antenna_gain)
            .set_frequency_hz(radio.frequency)
            .set_distance_m(km_to_m(DEFAULT_DISTANCE))
            .set_additional_losses_db(DEFAULT_RAIN_FADE + DEFAULT_MISC_LOSSES)
            .set_noise(ReceiverNoise::Figure(DEFAULT_NOISE_FIGURE))
            .set_bandwidth_hz(DEFAULT_BANDWIDTH)
            .set_data_rate_bps(DEFAULT_DATA_RATE)
            .build();

        ScenarioConfig::new(link, DEFAULT_REQUIRED_EB_N0)
    }
}
