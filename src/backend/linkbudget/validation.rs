use derive_more::Display;
use thiserror::Error;


#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum InputField {
    #[display("tx_power_dbm")]
    TxPower,
    #[display("tx_antenna_gain_dbi")]
    TxAntennaGain,
    #[display("rx_antenna_gain_dbi")]
    RxAntennaGain,
    #[display("frequency_hz")]
    Frequency,
    #[display("distance_m")]
    Distance,
    #[display("additional_losses_db")]
    AdditionalLosses,
    #[display("noise_temperature_k")]
    NoiseTemperature,
    #[display("noise_figure_db")]
    NoiseFigure,
    #[display("bandwidth_hz")]
    Bandwidth,
    #[display("data_rate_bps")]
    DataRate,
    #[display("required_eb_n0_db")]
    RequiredEbN0,
}


#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ValidationReason {
    #[error("must be greater than zero, got {0}")]
    NotPositive(f64),
    #[error("must be a finite number")]
    NotFinite,
    // The value itself is finite, but a quantity derived from it is not.
    #[error("is outside the computable range, got {0}")]
    OutOfRange(f64),
}


#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    field: InputField,
    reason: ValidationReason,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: InputField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }

    #[must_use]
    pub fn field(&self) -> InputField {
        self.field
    }

    #[must_use]
    pub fn reason(&self) -> ValidationReason {
        self.reason
    }
}


/// # Errors
///
/// Will return `Err` if the value is NaN or infinite.
pub fn ensure_finite(
    field: InputField,
    value: f64
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, ValidationReason::NotFinite));
    }

    Ok(())
}

/// # Errors
///
/// Will return `Err` if the value is not finite or is not greater than zero.
pub fn ensure_positive(
    field: InputField,
    value: f64
) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;

    if value <= 0.0 {
        return Err(
            ValidationError::new(field, ValidationReason::NotPositive(value))
        );
    }

    Ok(())
}

/// Checks a quantity derived from the `value` of `field`.
///
/// # Errors
///
/// Will return `Err` if `derived` is NaN or infinite.
pub fn ensure_in_range(
    field: InputField,
    value: f64,
    derived: f64
) -> Result<(), ValidationError> {
    if !derived.is_finite() {
        return Err(
            ValidationError::new(field, ValidationReason::OutOfRange(value))
        );
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn positive_value_passes() {
        assert!(ensure_positive(InputField::Frequency, 1e-12).is_ok());
        assert!(ensure_finite(InputField::TxPower, -30.0).is_ok());
    }

    #[test]
    fn zero_and_negative_values_are_rejected() {
        assert_eq!(
            Err(ValidationError::new(
                InputField::Distance,
                ValidationReason::NotPositive(0.0)
            )),
            ensure_positive(InputField::Distance, 0.0)
        );
        assert!(
            matches!(
                ensure_positive(InputField::Bandwidth, -1.0),
                Err(error)
                    if error.reason() == ValidationReason::NotPositive(-1.0)
            )
        );
    }

    #[test]
    fn non_finite_values_are_rejected_before_sign_check() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let error = ensure_positive(InputField::DataRate, value)
                .expect_err("non-finite value must be rejected");

            assert_eq!(InputField::DataRate, error.field());
            assert_eq!(ValidationReason::NotFinite, error.reason());
        }
    }

    #[test]
    fn non_finite_derived_value_is_out_of_range() {
        assert!(ensure_in_range(InputField::TxPower, 30.0, 60.0).is_ok());
        assert_eq!(
            Err(ValidationError::new(
                InputField::NoiseFigure,
                ValidationReason::OutOfRange(-4000.0)
            )),
            ensure_in_range(
                InputField::NoiseFigure,
                -4000.0,
                f64::NEG_INFINITY
            )
        );
    }

    #[test]
    fn error_message_names_field_and_reason() {
        let error = ValidationError::new(
            InputField::NoiseTemperature,
            ValidationReason::NotPositive(-4.0)
        );

        assert_eq!(
            "Invalid noise_temperature_k: must be greater than zero, got -4",
            error.to_string()
        );
    }
}
