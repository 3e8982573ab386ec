use derive_more::Display;
use serde::Serialize;

use crate::backend::mathphysics::Decibel;


const MIN_STRONG_MARGIN: Decibel     = 10.0;
const MIN_SUFFICIENT_MARGIN: Decibel = 3.0;
const MIN_MARGINAL_MARGIN: Decibel   = 0.0;


// Ordered from the weakest to the strongest link.
#[derive(
    Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd, Serialize
)]
#[serde(rename_all = "snake_case")]
pub enum LinkQuality {
    #[display("Not viable")]
    NotViable,
    #[display("Marginal")]
    Marginal,
    #[display("Sufficient")]
    Sufficient,
    #[display("Strong")]
    Strong,
}

impl LinkQuality {
    // Thresholds are exclusive: a margin of exactly 0 dB is not viable.
    #[must_use]
    pub fn from_margin(link_margin: Decibel) -> Self {
        if link_margin > MIN_STRONG_MARGIN {
            Self::Strong
        } else if link_margin > MIN_SUFFICIENT_MARGIN {
            Self::Sufficient
        } else if link_margin > MIN_MARGINAL_MARGIN {
            Self::Marginal
        } else {
            Self::NotViable
        }
    }

    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Strong     => "Strong link, highly reliable",
            Self::Sufficient => "Sufficient margin, expected to work reliably",
            Self::Marginal   => "Marginal link, may degrade under stress",
            Self::NotViable  =>
                "Link not viable: increase power or gain, reduce distance \
                or lower the data rate",
        }
    }

    #[must_use]
    pub fn is_viable(&self) -> bool {
        *self > Self::NotViable
    }
}
