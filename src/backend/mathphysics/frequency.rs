use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};

use super::Hertz;


const HZ_IN_KHZ: Hertz = 1e3;
const HZ_IN_MHZ: Hertz = 1e6;
const HZ_IN_GHZ: Hertz = 1e9;

// Upper band edges (exclusive).
const MAX_HF_VHF_FREQUENCY: Hertz = 300e6;
const MAX_UHF_FREQUENCY: Hertz    = 1e9;
const MAX_L_BAND_FREQUENCY: Hertz = 2e9;
const MAX_S_BAND_FREQUENCY: Hertz = 4e9;
const MAX_C_BAND_FREQUENCY: Hertz = 8e9;
const MAX_X_BAND_FREQUENCY: Hertz = 12e9;
const MAX_KU_BAND_FREQUENCY: Hertz = 18e9;
const MAX_K_BAND_FREQUENCY: Hertz = 26e9;


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    #[default]
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
}

impl FrequencyUnit {
    #[must_use]
    pub fn to_hertz(&self, value: f64) -> Hertz {
        match self {
            Self::Hertz     => value,
            Self::Kilohertz => value * HZ_IN_KHZ,
            Self::Megahertz => value * HZ_IN_MHZ,
            Self::Gigahertz => value * HZ_IN_GHZ,
        }
    }
}


#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum FrequencyBand {
    #[display("HF/VHF")]
    HfVhf,
    #[display("UHF")]
    Uhf,
    #[display("L-band")]
    L,
    #[display("S-band")]
    S,
    #[display("C-band")]
    C,
    #[display("X-band")]
    X,
    #[display("Ku-band")]
    Ku,
    #[display("K-band")]
    K,
    #[display("Ka-band")]
    Ka,
}

impl FrequencyBand {
    #[must_use]
    pub fn classify(frequency: Hertz) -> Self {
        if frequency < MAX_HF_VHF_FREQUENCY {
            Self::HfVhf
        } else if frequency < MAX_UHF_FREQUENCY {
            Self::Uhf
        } else if frequency < MAX_L_BAND_FREQUENCY {
            Self::L
        } else if frequency < MAX_S_BAND_FREQUENCY {
            Self::S
        } else if frequency < MAX_C_BAND_FREQUENCY {
            Self::C
        } else if frequency < MAX_X_BAND_FREQUENCY {
            Self::X
        } else if frequency < MAX_KU_BAND_FREQUENCY {
            Self::Ku
        } else if frequency < MAX_K_BAND_FREQUENCY {
            Self::K
        } else {
            Self::Ka
        }
    }
}

// Reports carry the same band name as the text output.
impl Serialize for FrequencyBand {
    fn serialize<S: Serializer>(
        &self,
        serializer: S
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn frequency_unit_conversion() {
        assert_eq!(8.0, FrequencyUnit::Hertz.to_hertz(8.0));
        assert_eq!(125_000.0, FrequencyUnit::Kilohertz.to_hertz(125.0));
        assert_eq!(300e6, FrequencyUnit::Megahertz.to_hertz(300.0));
        assert_eq!(2.2e9, FrequencyUnit::Gigahertz.to_hertz(2.2));
    }

    #[test]
    fn band_lower_edges_are_inclusive() {
        assert_eq!(FrequencyBand::HfVhf, FrequencyBand::classify(299.9e6));
        assert_eq!(FrequencyBand::Uhf, FrequencyBand::classify(300e6));
        assert_eq!(FrequencyBand::L, FrequencyBand::classify(1e9));
        assert_eq!(FrequencyBand::S, FrequencyBand::classify(2e9));
        assert_eq!(FrequencyBand::C, FrequencyBand::classify(4e9));
        assert_eq!(FrequencyBand::X, FrequencyBand::classify(8e9));
        assert_eq!(FrequencyBand::Ku, FrequencyBand::classify(12e9));
        assert_eq!(FrequencyBand::K, FrequencyBand::classify(18e9));
        assert_eq!(FrequencyBand::Ka, FrequencyBand::classify(26e9));
    }

    #[test]
    fn typical_satcom_frequencies() {
        assert_eq!(FrequencyBand::X, FrequencyBand::classify(8.4e9));
        assert_eq!(FrequencyBand::Ku, FrequencyBand::classify(14e9));
        assert_eq!(FrequencyBand::Ka, FrequencyBand::classify(30e9));
    }

    #[test]
    fn band_serializes_as_display_name() {
        assert_eq!(
            r#""X-band""#,
            serde_json::to_string(&FrequencyBand::X)
                .unwrap_or_else(|error| panic!("{}", error))
        );
    }

    #[test]
    fn band_display_names() {
        assert_eq!("HF/VHF", FrequencyBand::HfVhf.to_string());
        assert_eq!("Ku-band", FrequencyBand::Ku.to_string());
    }
}
