use std::fmt::Write;

use log::{info, warn};

use crate::backend::linkbudget::{LinkBudgetResult, LinkQuality};

use super::FrontendError;
use super::config::{OutputConfig, OutputFormat};

use output::write_report;


mod output;


/// Renders `result` as `key = value` lines, decibel values with two
/// decimals.
#[must_use]
pub fn render_text(result: &LinkBudgetResult) -> String {
    let lines: [(&str, String); 16] = [
        ("frequency_band", result.frequency_band().to_string()),
        ("eirp_dbm", decimal(result.eirp_dbm())),
        ("free_space_path_loss_db", decimal(result.free_space_path_loss_db())),
        ("total_link_loss_db", decimal(result.total_link_loss_db())),
        (
            "received_carrier_power_dbm",
            decimal(result.received_carrier_power_dbm())
        ),
        (
            "system_noise_temperature_k",
            decimal(result.system_noise_temperature_k())
        ),
        (
            "noise_power_density_dbm_per_hz",
            decimal(result.noise_power_density_dbm_per_hz())
        ),
        ("noise_power_dbm", decimal(result.noise_power_dbm())),
        ("carrier_to_noise_db", decimal(result.carrier_to_noise_db())),
        (
            "carrier_to_noise_density_dbhz",
            decimal(result.carrier_to_noise_density_dbhz())
        ),
        (
            "energy_per_bit_to_noise_density_db",
            decimal(result.energy_per_bit_to_noise_density_db())
        ),
        ("required_eb_n0_db", decimal(result.required_eb_n0_db())),
        ("link_margin_db", decimal(result.link_margin_db())),
        ("link_quality", result.link_quality().to_string()),
        ("assessment", result.link_quality().advice().to_string()),
        ("link_viable", result.link_quality().is_viable().to_string()),
    ];

    lines
        .iter()
        .fold(String::new(), |mut text, (key, value)| {
            let _ = writeln!(text, "{key} = {value}");
            text
        })
}

/// # Errors
///
/// Will return `Err` if JSON serialization fails.
pub fn render(
    result: &LinkBudgetResult,
    format: OutputFormat
) -> Result<String, FrontendError> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => result
            .to_json()
            .map(|json| json + "\n")
            .map_err(FrontendError::ReportSerialization),
    }
}

/// Prints the report and, if an output directory is configured, also stores
/// it there as JSON.
///
/// # Errors
///
/// Will return `Err` if the report cannot be serialized or written.
pub fn publish(
    result: &LinkBudgetResult,
    output_config: &OutputConfig
) -> Result<(), FrontendError> {
    print!("{}", render(result, output_config.format())?);

    if let Some(output_directory) = output_config.output_directory() {
        let json = result
            .to_json()
            .map_err(FrontendError::ReportSerialization)?;
        let report_path = write_report(output_directory, &json)?;

        info!("Report written to {}", report_path.display());
    }

    if result.link_quality() <= LinkQuality::Marginal {
        warn!(
            "Link margin is {:.2} dB: {}",
            result.link_margin_db(),
            result.link_quality().advice()
        );
    }

    Ok(())
}

fn decimal(value: f64) -> String {
    format!("{value:.2}")
}
