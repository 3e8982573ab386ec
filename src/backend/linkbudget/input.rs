use serde::{Deserialize, Serialize};

use crate::backend::mathphysics::{
    noise_power_density, BitsPerSecond, Decibel, DecibelIsotropic,
    DecibelMilliwatt, Hertz, Meter, ReceiverNoise
};

use super::validation::{
    ensure_finite, ensure_in_range, ensure_positive, InputField,
    ValidationError
};


#[derive(Clone, Copy, Debug, Default)]
pub struct LinkBudgetInputBuilder {
    tx_power_dbm: Option<DecibelMilliwatt>,
    tx_antenna_gain_dbi: Option<DecibelIsotropic>,
    rx_antenna_gain_dbi: Option<DecibelIsotropic>,
    frequency_hz: Option<Hertz>,
    distance_m: Option<Meter>,
    additional_losses_db: Option<Decibel>,
    noise: Option<ReceiverNoise>,
    bandwidth_hz: Option<Hertz>,
    data_rate_bps: Option<BitsPerSecond>,
}

impl LinkBudgetInputBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_tx_power_dbm(mut self, tx_power: DecibelMilliwatt) -> Self {
        self.tx_power_dbm = Some(tx_power);
        self
    }

    #[must_use]
    pub fn set_tx_antenna_gain_dbi(mut self, gain: DecibelIsotropic) -> Self {
        self.tx_antenna_gain_dbi = Some(gain);
        self
    }

    #[must_use]
    pub fn set_rx_antenna_gain_dbi(mut self, gain: DecibelIsotropic) -> Self {
        self.rx_antenna_gain_dbi = Some(gain);
        self
    }

    #[must_use]
    pub fn set_frequency_hz(mut self, frequency: Hertz) -> Self {
        self.frequency_hz = Some(frequency);
        self
    }

    #[must_use]
    pub fn set_distance_m(mut self, distance: Meter) -> Self {
        self.distance_m = Some(distance);
        self
    }

    #[must_use]
    pub fn set_additional_losses_db(mut self, losses: Decibel) -> Self {
        self.additional_losses_db = Some(losses);
        self
    }

    #[must_use]
    pub fn set_noise(mut self, noise: ReceiverNoise) -> Self {
        self.noise = Some(noise);
        self
    }

    #[must_use]
    pub fn set_bandwidth_hz(mut self, bandwidth: Hertz) -> Self {
        self.bandwidth_hz = Some(bandwidth);
        self
    }

    #[must_use]
    pub fn set_data_rate_bps(mut self, data_rate: BitsPerSecond) -> Self {
        self.data_rate_bps = Some(data_rate);
        self
    }

    // Unset fields fall back to zero (and to 290 K noise), so a forgotten
    // positive field is reported by validation rather than hidden.
    #[must_use]
    pub fn build(self) -> LinkBudgetInput {
        LinkBudgetInput {
            tx_power_dbm: self.tx_power_dbm.unwrap_or_default(),
            tx_antenna_gain_dbi: self.tx_antenna_gain_dbi.unwrap_or_default(),
            rx_antenna_gain_dbi: self.rx_antenna_gain_dbi.unwrap_or_default(),
            frequency_hz: self.frequency_hz.unwrap_or_default(),
            distance_m: self.distance_m.unwrap_or_default(),
            additional_losses_db: self.additional_losses_db.unwrap_or_default(),
            noise: self.noise.unwrap_or_default(),
            bandwidth_hz: self.bandwidth_hz.unwrap_or_default(),
            data_rate_bps: self.data_rate_bps.unwrap_or_default(),
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkBudgetInput {
    tx_power_dbm: DecibelMilliwatt,
    tx_antenna_gain_dbi: DecibelIsotropic,
    rx_antenna_gain_dbi: DecibelIsotropic,
    frequency_hz: Hertz,
    distance_m: Meter,
    #[serde(default)]
    additional_losses_db: Decibel,
    noise: ReceiverNoise,
    bandwidth_hz: Hertz,
    data_rate_bps: BitsPerSecond,
}

impl LinkBudgetInput {
    #[must_use]
    pub fn builder() -> LinkBudgetInputBuilder {
        LinkBudgetInputBuilder::new()
    }

    #[must_use]
    pub fn to_builder(&self) -> LinkBudgetInputBuilder {
        LinkBudgetInputBuilder::new()
            .set_tx_power_dbm(self.tx_power_dbm)
            .set_tx_antenna_gain_dbi(self.tx_antenna_gain_dbi)
            .set_rx_antenna_gain_dbi(self.rx_antenna_gain_dbi)
            .set_frequency_hz(self.frequency_hz)
            .set_distance_m(self.distance_m)
            .set_additional_losses_db(self.additional_losses_db)
            .set_noise(self.noise)
            .set_bandwidth_hz(self.bandwidth_hz)
            .set_data_rate_bps(self.data_rate_bps)
    }

    #[must_use]
    pub fn tx_power_dbm(&self) -> DecibelMilliwatt {
        self.tx_power_dbm
    }

    #[must_use]
    pub fn tx_antenna_gain_dbi(&self) -> DecibelIsotropic {
        self.tx_antenna_gain_dbi
    }

    #[must_use]
    pub fn rx_antenna_gain_dbi(&self) -> DecibelIsotropic {
        self.rx_antenna_gain_dbi
    }

    #[must_use]
    pub fn frequency_hz(&self) -> Hertz {
        self.frequency_hz
    }

    #[must_use]
    pub fn distance_m(&self) -> Meter {
        self.distance_m
    }

    #[must_use]
    pub fn additional_losses_db(&self) -> Decibel {
        self.additional_losses_db
    }

    #[must_use]
    pub fn noise(&self) -> ReceiverNoise {
        self.noise
    }

    #[must_use]
    pub fn bandwidth_hz(&self) -> Hertz {
        self.bandwidth_hz
    }

    #[must_use]
    pub fn data_rate_bps(&self) -> BitsPerSecond {
        self.data_rate_bps
    }

    /// Checks the positive quantities first (frequency, distance, bandwidth,
    /// data rate, noise), then that every decibel field is finite.
    ///
    /// # Errors
    ///
    /// Will return `Err` naming the first field that violates its invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive(InputField::Frequency, self.frequency_hz)?;
        ensure_positive(InputField::Distance, self.distance_m)?;
        ensure_positive(InputField::Bandwidth, self.bandwidth_hz)?;
        ensure_positive(InputField::DataRate, self.data_rate_bps)?;

        let (noise_field, noise_value) = match self.noise {
            ReceiverNoise::Temperature(temperature) => {
                ensure_positive(InputField::NoiseTemperature, temperature)?;
                (InputField::NoiseTemperature, temperature)
            },
            ReceiverNoise::Figure(noise_figure)     => {
                ensure_finite(InputField::NoiseFigure, noise_figure)?;
                (InputField::NoiseFigure, noise_figure)
            },
        };
        // An extreme noise figure or a subnormal temperature underflows
        // (or overflows) k*T.
        ensure_in_range(
            noise_field,
            noise_value,
            noise_power_density(self.noise.system_temperature())
        )?;

        ensure_finite(InputField::TxPower, self.tx_power_dbm)?;
        ensure_finite(InputField::TxAntennaGain, self.tx_antenna_gain_dbi)?;
        ensure_finite(InputField::RxAntennaGain, self.rx_antenna_gain_dbi)?;
        ensure_finite(InputField::AdditionalLosses, self.additional_losses_db)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::linkbudget::validation::ValidationReason;


    fn valid_input() -> LinkBudgetInput {
        LinkBudgetInput::builder()
            .set_tx_power_dbm(40.0)
            .set_tx_antenna_gain_dbi(10.0)
            .set_rx_antenna_gain_dbi(10.0)
            .set_frequency_hz(8.4e9)
            .set_distance_m(100_000.0)
            .set_additional_losses_db(5.0)
            .set_noise(ReceiverNoise::Figure(3.0))
            .set_bandwidth_hz(1e6)
            .set_data_rate_bps(1e6)
            .build()
    }


    #[test]
    fn valid_input_passes_validation() {
        assert_eq!(Ok(()), valid_input().validate());
    }

    #[test]
    fn negative_decibel_values_are_valid() {
        let input = valid_input()
            .to_builder()
            .set_tx_power_dbm(-10.0)
            .set_tx_antenna_gain_dbi(-3.0)
            .set_additional_losses_db(-1.0)
            .set_noise(ReceiverNoise::Figure(-0.5))
            .build();

        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_builder_fails_on_frequency_first() {
        let error = LinkBudgetInput::builder()
            .build()
            .validate()
            .expect_err("zero frequency must be rejected");

        assert_eq!(InputField::Frequency, error.field());
        assert_eq!(ValidationReason::NotPositive(0.0), error.reason());
    }

    #[test]
    fn first_violation_is_reported() {
        let error = valid_input()
            .to_builder()
            .set_bandwidth_hz(0.0)
            .set_data_rate_bps(-5.0)
            .build()
            .validate()
            .expect_err("invalid input must be rejected");

        assert_eq!(InputField::Bandwidth, error.field());
    }

    #[test]
    fn non_finite_decibel_field_is_rejected() {
        let error = valid_input()
            .to_builder()
            .set_rx_antenna_gain_dbi(f64::NAN)
            .build()
            .validate()
            .expect_err("NaN gain must be rejected");

        assert_eq!(InputField::RxAntennaGain, error.field());
        assert_eq!(ValidationReason::NotFinite, error.reason());
    }

    #[test]
    fn non_finite_noise_figure_is_rejected() {
        for noise_figure in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let error = valid_input()
                .to_builder()
                .set_noise(ReceiverNoise::Figure(noise_figure))
                .build()
                .validate()
                .expect_err("non-finite noise figure must be rejected");

            assert_eq!(InputField::NoiseFigure, error.field());
            assert_eq!(ValidationReason::NotFinite, error.reason());
        }
    }

    #[test]
    fn extreme_noise_figure_is_out_of_range() {
        for noise_figure in [-4000.0, 4000.0] {
            let error = valid_input()
                .to_builder()
                .set_noise(ReceiverNoise::Figure(noise_figure))
                .build()
                .validate()
                .expect_err("extreme noise figure must be rejected");

            assert_eq!(InputField::NoiseFigure, error.field());
            assert_eq!(
                ValidationReason::OutOfRange(noise_figure),
                error.reason()
            );
        }
    }

    #[test]
    fn subnormal_noise_temperature_is_out_of_range() {
        let error = valid_input()
            .to_builder()
            .set_noise(ReceiverNoise::Temperature(1e-310))
            .build()
            .validate()
            .expect_err("subnormal temperature must be rejected");

        assert_eq!(InputField::NoiseTemperature, error.field());
        assert_eq!(ValidationReason::OutOfRange(1e-310), error.reason());
    }

    #[test]
    fn to_builder_preserves_every_field() {
        let input = valid_input();

        assert_eq!(input, input.to_builder().build());
    }

    #[test]
    fn additional_losses_default_to_zero_in_json() {
        let input: LinkBudgetInput = serde_json::from_str(
            r#"{
                "tx_power_dbm": 40.0,
                "tx_antenna_gain_dbi": 45.0,
                "rx_antenna_gain_dbi": 35.0,
                "frequency_hz": 14e9,
                "distance_m": 35786000.0,
                "noise": { "temperature": 290.0 },
                "bandwidth_hz": 36e6,
                "data_rate_bps": 1e6
            }"#
        ).unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(0.0, input.additional_losses_db());
        assert_eq!(ReceiverNoise::Temperature(290.0), input.noise());
    }
}
