use serde::{Deserialize, Serialize};

use super::{db_to_power_ratio, Decibel, Kelvin};


pub const REFERENCE_NOISE_TEMPERATURE: Kelvin = 290.0;


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverNoise {
    Temperature(Kelvin),
    Figure(Decibel),
}

impl ReceiverNoise {
    // A noise figure is referred to the standard 290 K so that k*T*B
    // reproduces the kT0B + NF noise floor.
    #[must_use]
    pub fn system_temperature(&self) -> Kelvin {
        match self {
            Self::Temperature(temperature) => *temperature,
            Self::Figure(noise_figure)     =>
                REFERENCE_NOISE_TEMPERATURE * db_to_power_ratio(*noise_figure),
        }
    }
}

impl Default for ReceiverNoise {
    fn default() -> Self {
        Self::Temperature(REFERENCE_NOISE_TEMPERATURE)
    }
}
