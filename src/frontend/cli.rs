use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use log::LevelFilter;

use super::FrontendError;

use args::{
    handle_arguments, ARG_BANDWIDTH, ARG_DATA_RATE, ARG_DISTANCE,
    ARG_DISTANCE_UNIT, ARG_FREQUENCY, ARG_FREQUENCY_UNIT, ARG_JSON_INPUT,
    ARG_JSON_OUTPUT, ARG_LOSS, ARG_NOISE_FIGURE, ARG_NOISE_TEMPERATURE,
    ARG_OUTPUT_FORMAT, ARG_POWER_UNIT, ARG_PRESET, ARG_REQUIRED_EB_N0,
    ARG_RX_GAIN, ARG_TX_GAIN, ARG_TX_POWER, ARG_VERBOSE,
    DEFAULT_DISTANCE_UNIT, DEFAULT_FREQUENCY_UNIT, DEFAULT_OUTPUT_FORMAT,
    DEFAULT_POWER_UNIT, DIST_KM, DIST_M, FORMAT_JSON, FORMAT_TEXT, FREQ_GHZ,
    FREQ_HZ, FREQ_KHZ, FREQ_MHZ, POWER_DBM, POWER_DBW, PRESET_CUSTOM,
    PRESET_HANDHELD, PRESET_MANPACK, PRESET_VEHICLE
};


mod args;


/// Parses the command line, computes the link budget and prints it.
///
/// # Errors
///
/// Will return `Err` if the scenario is invalid or cannot be loaded, or if
/// the report cannot be written.
pub fn cli() -> Result<(), FrontendError> {
    let matches = command().get_matches();

    init_logger(matches.get_flag(ARG_VERBOSE));

    handle_arguments(&matches)
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    // RUST_LOG still takes precedence.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn command() -> Command {
    Command::new("link_budget")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes SATCOM link budgets and link margin.")
        .args([
            arg_preset(),
            arg_json_input(),
            arg_tx_power(),
            arg_power_unit(),
            arg_tx_gain(),
            arg_rx_gain(),
            arg_frequency(),
            arg_frequency_unit(),
            arg_distance(),
            arg_distance_unit(),
            arg_loss(),
            arg_noise_temperature(),
            arg_noise_figure(),
            arg_bandwidth(),
            arg_data_rate(),
            arg_required_eb_n0(),
            arg_output_format(),
            arg_json_output(),
            arg_verbose(),
        ])
}

fn arg_preset() -> Arg {
    Arg::new(ARG_PRESET)
        .short('p')
        .long("preset")
        .value_parser([
            PRESET_CUSTOM,
            PRESET_HANDHELD,
            PRESET_MANPACK,
            PRESET_VEHICLE,
        ])
        .help(
            format!(
                "Choose the baseline terminal profile \
                (\"{PRESET_CUSTOM}\" if omitted)"
            )
        )
}

fn arg_json_input() -> Arg {
    Arg::new(ARG_JSON_INPUT)
        .long("ji")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with(ARG_PRESET)
        .help("Read the baseline scenario from a `.json` file")
}

fn arg_tx_power() -> Arg {
    Arg::new(ARG_TX_POWER)
        .long("tx-power")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the transmitter power (see --power-unit)")
}

fn arg_power_unit() -> Arg {
    Arg::new(ARG_POWER_UNIT)
        .long("power-unit")
        .value_parser([POWER_DBM, POWER_DBW])
        .default_value(DEFAULT_POWER_UNIT)
        .help("Choose the unit of --tx-power")
}

fn arg_tx_gain() -> Arg {
    Arg::new(ARG_TX_GAIN)
        .long("tx-gain")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the transmit antenna gain (in dBi)")
}

fn arg_rx_gain() -> Arg {
    Arg::new(ARG_RX_GAIN)
        .long("rx-gain")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the receive antenna gain (in dBi)")
}

fn arg_frequency() -> Arg {
    Arg::new(ARG_FREQUENCY)
        .short('f')
        .long("freq")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the carrier frequency (positive float, see --freq-unit)")
}

fn arg_frequency_unit() -> Arg {
    Arg::new(ARG_FREQUENCY_UNIT)
        .long("freq-unit")
        .value_parser([FREQ_HZ, FREQ_KHZ, FREQ_MHZ, FREQ_GHZ])
        .default_value(DEFAULT_FREQUENCY_UNIT)
        .help("Choose the unit of --freq")
}

fn arg_distance() -> Arg {
    Arg::new(ARG_DISTANCE)
        .short('d')
        .long("distance")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the link distance (positive float, see --distance-unit)")
}

fn arg_distance_unit() -> Arg {
    Arg::new(ARG_DISTANCE_UNIT)
        .long("distance-unit")
        .value_parser([DIST_M, DIST_KM])
        .default_value(DEFAULT_DISTANCE_UNIT)
        .help("Choose the unit of --distance")
}

fn arg_loss() -> Arg {
    Arg::new(ARG_LOSS)
        .short('l')
        .long("loss")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .action(ArgAction::Append)
        .help(
            "Add an atmospheric, pointing or implementation loss (in dB); \
            repeated values are summed and replace the baseline losses"
        )
}

fn arg_noise_temperature() -> Arg {
    Arg::new(ARG_NOISE_TEMPERATURE)
        .long("noise-temp")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .conflicts_with(ARG_NOISE_FIGURE)
        .help("Set the system noise temperature (positive float, in K)")
}

fn arg_noise_figure() -> Arg {
    Arg::new(ARG_NOISE_FIGURE)
        .long("noise-figure")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the receiver noise figure (in dB, referred to 290 K)")
}

fn arg_bandwidth() -> Arg {
    Arg::new(ARG_BANDWIDTH)
        .short('b')
        .long("bandwidth")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the receiver bandwidth (positive float, in Hz)")
}

fn arg_data_rate() -> Arg {
    Arg::new(ARG_DATA_RATE)
        .short('r')
        .long("data-rate")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the data rate (positive float, in bit/s)")
}

fn arg_required_eb_n0() -> Arg {
    Arg::new(ARG_REQUIRED_EB_N0)
        .short('e')
        .long("required-ebn0")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help("Set the Eb/N0 required by the modem (in dB)")
}

fn arg_output_format() -> Arg {
    Arg::new(ARG_OUTPUT_FORMAT)
        .long("format")
        .value_parser([FORMAT_TEXT, FORMAT_JSON])
        .default_value(DEFAULT_OUTPUT_FORMAT)
        .help("Choose how the report is printed")
}

fn arg_json_output() -> Arg {
    Arg::new(ARG_JSON_OUTPUT)
        .long("jo")
        .value_parser(value_parser!(PathBuf))
        .help("Also write the report as `.json` into specified directory")
}

fn arg_verbose() -> Arg {
    Arg::new(ARG_VERBOSE)
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show full log output")
}
