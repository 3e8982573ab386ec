use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};

use crate::backend::mathphysics::{
    Decibel, DistanceUnit, FrequencyUnit, ReceiverNoise, PowerUnit
};
use crate::frontend::FrontendError;
use crate::frontend::config::{
    GeneralConfig, OutputConfig, OutputFormat, ScenarioConfig
};
use crate::frontend::presets::Preset;
use crate::frontend::report::publish;


pub const ARG_BANDWIDTH: &str         = "bandwidth";
pub const ARG_DATA_RATE: &str         = "data rate";
pub const ARG_DISTANCE: &str          = "distance";
pub const ARG_DISTANCE_UNIT: &str     = "distance unit";
pub const ARG_FREQUENCY: &str         = "frequency";
pub const ARG_FREQUENCY_UNIT: &str    = "frequency unit";
pub const ARG_JSON_INPUT: &str        = "scenario path";
pub const ARG_JSON_OUTPUT: &str       = "output directory path";
pub const ARG_LOSS: &str              = "additional loss";
pub const ARG_NOISE_FIGURE: &str      = "noise figure";
pub const ARG_NOISE_TEMPERATURE: &str = "noise temperature";
pub const ARG_OUTPUT_FORMAT: &str     = "output format";
pub const ARG_POWER_UNIT: &str        = "power unit";
pub const ARG_PRESET: &str            = "preset";
pub const ARG_REQUIRED_EB_N0: &str    = "required eb/n0";
pub const ARG_RX_GAIN: &str           = "rx antenna gain";
pub const ARG_TX_GAIN: &str           = "tx antenna gain";
pub const ARG_TX_POWER: &str          = "tx power";
pub const ARG_VERBOSE: &str           = "verbose";

pub const PRESET_CUSTOM: &str   = "custom";
pub const PRESET_HANDHELD: &str = "handheld";
pub const PRESET_MANPACK: &str  = "manpack";
pub const PRESET_VEHICLE: &str  = "vehicle";

pub const FREQ_HZ: &str  = "hz";
pub const FREQ_KHZ: &str = "khz";
pub const FREQ_MHZ: &str = "mhz";
pub const FREQ_GHZ: &str = "ghz";

pub const DIST_M: &str  = "m";
pub const DIST_KM: &str = "km";

pub const POWER_DBM: &str = "dbm";
pub const POWER_DBW: &str = "dbw";

pub const FORMAT_TEXT: &str = "text";
pub const FORMAT_JSON: &str = "json";

pub const DEFAULT_DISTANCE_UNIT: &str  = DIST_M;
pub const DEFAULT_FREQUENCY_UNIT: &str = FREQ_HZ;
pub const DEFAULT_OUTPUT_FORMAT: &str  = FORMAT_TEXT;
pub const DEFAULT_POWER_UNIT: &str     = POWER_DBM;


pub fn handle_arguments(matches: &ArgMatches) -> Result<(), FrontendError> {
    let general_config = general_config(matches)?;
    let scenario = general_config.scenario_config();

    debug!("Scenario: {scenario:?}");

    let result = scenario.compute()?;

    info!(
        "Link margin {:.2} dB ({})",
        result.link_margin_db(),
        result.link_quality()
    );

    publish(&result, general_config.output_config())
}

fn general_config(
    matches: &ArgMatches
) -> Result<GeneralConfig, FrontendError> {
    Ok(
        GeneralConfig::new(
            scenario_config(matches)?,
            OutputConfig::new(
                output_format(matches),
                output_directory(matches)
            )
        )
    )
}

// Explicit flags override the baseline from a scenario file or preset.
fn scenario_config(
    matches: &ArgMatches
) -> Result<ScenarioConfig, FrontendError> {
    let baseline = match scenario_path(matches) {
        Some(scenario_path) => ScenarioConfig::from_json_file(&scenario_path)?,
        None                => preset(matches).scenario(),
    };

    let mut link_builder = baseline.link().to_builder();

    if let Some(tx_power) = tx_power(matches) {
        link_builder = link_builder.set_tx_power_dbm(tx_power);
    }
    if let Some(tx_gain) = float(matches, ARG_TX_GAIN) {
        link_builder = link_builder.set_tx_antenna_gain_dbi(tx_gain);
    }
    if let Some(rx_gain) = float(matches, ARG_RX_GAIN) {
        link_builder = link_builder.set_rx_antenna_gain_dbi(rx_gain);
    }
    if let Some(frequency) = frequency(matches) {
        link_builder = link_builder.set_frequency_hz(frequency);
    }
    if let Some(distance) = distance(matches) {
        link_builder = link_builder.set_distance_m(distance);
    }
    if let Some(losses) = additional_losses(matches) {
        link_builder = link_builder.set_additional_losses_db(losses);
    }
    if let Some(noise) = noise(matches) {
        link_builder = link_builder.set_noise(noise);
    }
    if let Some(bandwidth) = float(matches, ARG_BANDWIDTH) {
        link_builder = link_builder.set_bandwidth_hz(bandwidth);
    }
    if let Some(data_rate) = float(matches, ARG_DATA_RATE) {
        link_builder = link_builder.set_data_rate_bps(data_rate);
    }

    let required_eb_n0 = float(matches, ARG_REQUIRED_EB_N0)
        .unwrap_or(baseline.required_eb_n0_db());

    Ok(
        baseline
            .with_link(link_builder.build())
            .with_required_eb_n0_db(required_eb_n0)
    )
}

fn float(matches: &ArgMatches, arg_id: &str) -> Option<f64> {
    matches
        .get_one::<f64>(arg_id)
        .copied()
}

fn choice<'a>(matches: &'a ArgMatches, arg_id: &str) -> Option<&'a str> {
    matches
        .get_one::<String>(arg_id)
        .map(String::as_str)
}

fn scenario_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<PathBuf>(ARG_JSON_INPUT)
        .cloned()
}

fn preset(matches: &ArgMatches) -> Preset {
    match choice(matches, ARG_PRESET) {
        Some(PRESET_HANDHELD) => Preset::Handheld,
        Some(PRESET_MANPACK)  => Preset::Manpack,
        Some(PRESET_VEHICLE)  => Preset::Vehicle,
        _                     => Preset::Custom,
    }
}

fn tx_power(matches: &ArgMatches) -> Option<f64> {
    let power_unit = match choice(matches, ARG_POWER_UNIT) {
        Some(POWER_DBW) => PowerUnit::DecibelWatt,
        _               => PowerUnit::DecibelMilliwatt,
    };

    float(matches, ARG_TX_POWER).map(|value| power_unit.to_dbm(value))
}

fn frequency(matches: &ArgMatches) -> Option<f64> {
    let frequency_unit = match choice(matches, ARG_FREQUENCY_UNIT) {
        Some(FREQ_KHZ) => FrequencyUnit::Kilohertz,
        Some(FREQ_MHZ) => FrequencyUnit::Megahertz,
        Some(FREQ_GHZ) => FrequencyUnit::Gigahertz,
        _              => FrequencyUnit::Hertz,
    };

    float(matches, ARG_FREQUENCY).map(|value| frequency_unit.to_hertz(value))
}

fn distance(matches: &ArgMatches) -> Option<f64> {
    let distance_unit = match choice(matches, ARG_DISTANCE_UNIT) {
        Some(DIST_KM) => DistanceUnit::Kilometer,
        _             => DistanceUnit::Meter,
    };

    float(matches, ARG_DISTANCE).map(|value| distance_unit.to_meters(value))
}

fn additional_losses(matches: &ArgMatches) -> Option<Decibel> {
    matches
        .get_many::<f64>(ARG_LOSS)
        .map(|losses| losses.sum())
}

fn noise(matches: &ArgMatches) -> Option<ReceiverNoise> {
    if let Some(temperature) = float(matches, ARG_NOISE_TEMPERATURE) {
        return Some(ReceiverNoise::Temperature(temperature));
    }

    float(matches, ARG_NOISE_FIGURE).map(ReceiverNoise::Figure)
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    match choice(matches, ARG_OUTPUT_FORMAT) {
        Some(FORMAT_JSON) => OutputFormat::Json,
        _                 => OutputFormat::Text,
    }
}

fn output_directory(matches: &ArgMatches) -> Option<&Path> {
    matches
        .get_one::<PathBuf>(ARG_JSON_OUTPUT)
        .map(|p| &**p)
}
