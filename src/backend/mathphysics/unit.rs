use serde::{Deserialize, Serialize};


pub type BitsPerSecond = f64;
pub type Decibel = f64;
pub type DecibelHertz = f64;
pub type DecibelIsotropic = f64;
pub type DecibelMilliwatt = f64;
pub type DecibelMilliwattPerHertz = f64;
pub type DecibelWatt = f64;
pub type Hertz = f64;
pub type Kelvin = f64;
pub type Kilometer = f64;
pub type Meter = f64;
pub type MeterPerSecond = f64;

const METERS_IN_KILOMETER: f64 = 1_000.0;


#[must_use]
pub fn km_to_m(distance: Kilometer) -> Meter {
    distance * METERS_IN_KILOMETER
}


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Meter,
    Kilometer,
}

impl DistanceUnit {
    #[must_use]
    pub fn to_meters(&self, value: f64) -> Meter {
        match self {
            Self::Meter     => value,
            Self::Kilometer => km_to_m(value),
        }
    }
}


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUnit {
    #[default]
    DecibelMilliwatt,
    DecibelWatt,
}

impl PowerUnit {
    #[must_use]
    pub fn to_dbm(&self, value: f64) -> DecibelMilliwatt {
        match self {
            Self::DecibelMilliwatt => value,
            Self::DecibelWatt      => super::dbw_to_dbm(value),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn distance_unit_conversion() {
        assert_eq!(250.0, DistanceUnit::Meter.to_meters(250.0));
        assert_eq!(100_000.0, DistanceUnit::Kilometer.to_meters(100.0));
    }

    #[test]
    fn power_unit_conversion() {
        assert_eq!(40.0, PowerUnit::DecibelMilliwatt.to_dbm(40.0));
        assert_eq!(40.0, PowerUnit::DecibelWatt.to_dbm(10.0));
        assert_eq!(25.0, PowerUnit::DecibelWatt.to_dbm(-5.0));
    }
}
