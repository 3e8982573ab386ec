use std::f64::consts::PI;


pub use frequency::{FrequencyBand, FrequencyUnit};
pub use noise::{ReceiverNoise, REFERENCE_NOISE_TEMPERATURE};
pub use unit::*;


pub mod frequency;
pub mod noise;
pub mod unit;


// Meters per second.
pub const SPEED_OF_LIGHT: MeterPerSecond = 299_792_458.0;
// Joules per kelvin.
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

const MILLIWATTS_IN_WATT: f64 = 1_000.0;
const DBM_DBW_OFFSET: Decibel = 30.0;


#[must_use]
pub fn power_ratio_to_db(ratio: f64) -> Decibel {
    10.0 * ratio.log10()
}

#[must_use]
pub fn db_to_power_ratio(db: Decibel) -> f64 {
    10.0_f64.powf(db / 10.0)
}

#[must_use]
pub fn amplitude_ratio_to_db(ratio: f64) -> Decibel {
    20.0 * ratio.log10()
}

#[must_use]
pub fn dbw_to_dbm(power: DecibelWatt) -> DecibelMilliwatt {
    power + DBM_DBW_OFFSET
}

#[must_use]
pub fn dbm_to_dbw(power: DecibelMilliwatt) -> DecibelWatt {
    power - DBM_DBW_OFFSET
}

#[must_use]
pub fn wavelength_in_meters(frequency: Hertz) -> Meter {
    SPEED_OF_LIGHT / frequency
}

// FSPL = 20log(d) + 20log(f) + 20log(4pi/c). Both arguments must be positive.
#[must_use]
pub fn free_space_path_loss(distance: Meter, frequency: Hertz) -> Decibel {
    amplitude_ratio_to_db(distance)
        + amplitude_ratio_to_db(frequency)
        + amplitude_ratio_to_db(4.0 * PI / SPEED_OF_LIGHT)
}

// Thermal noise power spectral density k*T, referenced to one milliwatt.
#[must_use]
pub fn noise_power_density(
    noise_temperature: Kelvin
) -> DecibelMilliwattPerHertz {
    power_ratio_to_db(
        BOLTZMANN_CONSTANT * noise_temperature * MILLIWATTS_IN_WATT
    )
}
