//! Link budget of a single point-to-point radio link.
//!
//! [`compute`] is a pure function: it validates a [`LinkBudgetInput`] and
//! derives every intermediate metric from it, from the free-space path loss
//! down to the margin over a required Eb/N0. Nothing is retained between
//! calls, so the same input always gives a bit-identical result.

use crate::backend::mathphysics::{
    free_space_path_loss, noise_power_density, power_ratio_to_db, Decibel,
    FrequencyBand
};


pub use input::{LinkBudgetInput, LinkBudgetInputBuilder};
pub use quality::LinkQuality;
pub use result::LinkBudgetResult;
pub use validation::{InputField, ValidationError, ValidationReason};


pub mod input;
pub mod quality;
pub mod result;
pub mod validation;


/// Computes the link budget of `input` against `required_eb_n0_db`.
///
/// # Errors
///
/// Will return `Err` if a positive quantity (frequency, distance, bandwidth,
/// data rate or noise temperature) is not greater than zero, if any value
/// is not finite, or if the values are so large that a derived metric
/// overflows.
pub fn compute(
    input: LinkBudgetInput,
    required_eb_n0_db: Decibel,
) -> Result<LinkBudgetResult, ValidationError> {
    input.validate()?;
    validation::ensure_finite(InputField::RequiredEbN0, required_eb_n0_db)?;

    let free_space_path_loss_db = free_space_path_loss(
        input.distance_m(),
        input.frequency_hz()
    );
    let total_link_loss_db = free_space_path_loss_db
        + input.additional_losses_db();
    validation::ensure_in_range(
        InputField::AdditionalLosses,
        input.additional_losses_db(),
        total_link_loss_db
    )?;

    let eirp_dbm = input.tx_power_dbm() + input.tx_antenna_gain_dbi();
    validation::ensure_in_range(
        InputField::TxAntennaGain,
        input.tx_antenna_gain_dbi(),
        eirp_dbm
    )?;
    let received_carrier_power_dbm = eirp_dbm
        + input.rx_antenna_gain_dbi()
        - total_link_loss_db;
    validation::ensure_in_range(
        InputField::RxAntennaGain,
        input.rx_antenna_gain_dbi(),
        received_carrier_power_dbm
    )?;

    // Noise terms are bounded once the noise input is validated, so only
    // the margin can still overflow below.
    let system_noise_temperature_k = input.noise().system_temperature();
    let noise_power_density_dbm_per_hz = noise_power_density(
        system_noise_temperature_k
    );
    let noise_power_dbm = noise_power_density_dbm_per_hz
        + power_ratio_to_db(input.bandwidth_hz());

    let carrier_to_noise_density_dbhz = received_carrier_power_dbm
        - noise_power_density_dbm_per_hz;
    let carrier_to_noise_db = received_carrier_power_dbm - noise_power_dbm;
    let energy_per_bit_to_noise_density_db = carrier_to_noise_density_dbhz
        - power_ratio_to_db(input.data_rate_bps());
    let link_margin_db = energy_per_bit_to_noise_density_db
        - required_eb_n0_db;
    validation::ensure_in_range(
        InputField::RequiredEbN0,
        required_eb_n0_db,
        link_margin_db
    )?;

    Ok(LinkBudgetResult {
        eirp_dbm,
        free_space_path_loss_db,
        total_link_loss_db,
        received_carrier_power_dbm,
        system_noise_temperature_k,
        noise_power_density_dbm_per_hz,
        noise_power_dbm,
        carrier_to_noise_db,
        carrier_to_noise_density_dbhz,
        energy_per_bit_to_noise_density_db,
        required_eb_n0_db,
        link_margin_db,
        frequency_band: FrequencyBand::classify(input.frequency_hz()),
        link_quality: LinkQuality::from_margin(link_margin_db),
    })
}
