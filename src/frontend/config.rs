use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::linkbudget::{
    compute, LinkBudgetInput, LinkBudgetResult, ValidationError
};
use crate::backend::mathphysics::Decibel;

use super::FrontendError;
use super::presets::Preset;


pub struct GeneralConfig {
    scenario: ScenarioConfig,
    output: OutputConfig,
}

impl GeneralConfig {
    #[must_use]
    pub fn new(scenario: ScenarioConfig, output: OutputConfig) -> Self {
        Self { scenario, output }
    }

    #[must_use]
    pub fn scenario_config(&self) -> &ScenarioConfig {
        &self.scenario
    }

    #[must_use]
    pub fn output_config(&self) -> &OutputConfig {
        &self.output
    }
}


// A link and the Eb/N0 its modulation and coding need.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    link: LinkBudgetInput,
    required_eb_n0_db: Decibel,
}

impl ScenarioConfig {
    #[must_use]
    pub fn new(link: LinkBudgetInput, required_eb_n0_db: Decibel) -> Self {
        Self { link, required_eb_n0_db }
    }

    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or does not hold a
    /// scenario.
    pub fn from_json_file(path: &Path) -> Result<Self, FrontendError> {
        let json = fs::read_to_string(path)
            .map_err(|source| FrontendError::ScenarioRead {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json_str(&json)
    }

    /// # Errors
    ///
    /// Will return `Err` if the string is not a valid scenario document.
    pub fn from_json_str(json: &str) -> Result<Self, FrontendError> {
        serde_json::from_str(json).map_err(FrontendError::ScenarioParse)
    }

    #[must_use]
    pub fn link(&self) -> &LinkBudgetInput {
        &self.link
    }

    #[must_use]
    pub fn required_eb_n0_db(&self) -> Decibel {
        self.required_eb_n0_db
    }

    #[must_use]
    pub fn with_link(self, link: LinkBudgetInput) -> Self {
        Self { link, ..self }
    }

    #[must_use]
    pub fn with_required_eb_n0_db(self, required_eb_n0_db: Decibel) -> Self {
        Self { required_eb_n0_db, ..self }
    }

    /// # Errors
    ///
    /// Will return `Err` if the link parameters are invalid.
    pub fn compute(&self) -> Result<LinkBudgetResult, ValidationError> {
        compute(self.link, self.required_eb_n0_db)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Preset::default().scenario()
    }
}


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}


#[derive(Default)]
pub struct OutputConfig {
    format: OutputFormat,
    // If `None`, the report is printed only.
    output_directory: Option<PathBuf>,
}

impl OutputConfig {
    #[must_use]
    pub fn new(format: OutputFormat, output_directory: Option<&Path>) -> Self {
        Self {
            format,
            output_directory: output_directory.map(Path::to_path_buf),
        }
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::linkbudget::InputField;
    use crate::backend::mathphysics::ReceiverNoise;


    const GEOSTATIONARY_SCENARIO: &str = r#"{
        "link": {
            "tx_power_dbm": 40.0,
            "tx_antenna_gain_dbi": 45.0,
            "rx_antenna_gain_dbi": 35.0,
            "frequency_hz": 14e9,
            "distance_m": 35786000.0,
            "additional_losses_db": 2.0,
            "noise": { "temperature": 290.0 },
            "bandwidth_hz": 36e6,
            "data_rate_bps": 1e6
        },
        "required_eb_n0_db": 10.0
    }"#;


    fn parse(json: &str) -> ScenarioConfig {
        ScenarioConfig::from_json_str(json)
            .unwrap_or_else(|error| panic!("{}", error))
    }


    #[test]
    fn scenario_from_json() {
        let scenario = parse(GEOSTATIONARY_SCENARIO);

        assert_eq!(10.0, scenario.required_eb_n0_db());
        assert_eq!(14e9, scenario.link().frequency_hz());
        assert_eq!(
            ReceiverNoise::Temperature(290.0),
            scenario.link().noise()
        );

        let result = scenario
            .compute()
            .unwrap_or_else(|error| panic!("{}", error));

        assert!((result.link_margin_db() - 15.53).abs() < 0.01);
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let json = GEOSTATIONARY_SCENARIO.replace(
            "\"required_eb_n0_db\"",
            "\"required_snr_db\""
        );

        assert!(
            matches!(
                ScenarioConfig::from_json_str(&json),
                Err(FrontendError::ScenarioParse(_))
            )
        );
    }

    #[test]
    fn parsed_scenario_is_still_validated() {
        let json = GEOSTATIONARY_SCENARIO.replace(
            "\"bandwidth_hz\": 36e6",
            "\"bandwidth_hz\": 0.0"
        );

        let error = parse(&json)
            .compute()
            .expect_err("zero bandwidth must be rejected");

        assert_eq!(InputField::Bandwidth, error.field());
    }

    #[test]
    fn scenario_survives_json_file_round_trip() {
        let path = std::env::temp_dir().join(
            format!("link_budget_scenario_{}.json", std::process::id())
        );

        fs::write(&path, GEOSTATIONARY_SCENARIO)
            .unwrap_or_else(|error| panic!("{}", error));
        let scenario = ScenarioConfig::from_json_file(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(
            parse(GEOSTATIONARY_SCENARIO),
            scenario.unwrap_or_else(|error| panic!("{}", error))
        );
    }

    #[test]
    fn missing_scenario_file_reports_path() {
        let path = Path::new("/nonexistent/link_budget/scenario.json");

        let error = ScenarioConfig::from_json_file(path)
            .expect_err("missing file must be reported");

        assert!(
            matches!(
                &error,
                FrontendError::ScenarioRead { path: error_path, .. }
                    if error_path == path
            )
        );
    }

    #[test]
    fn overriding_scenario_parts() {
        let scenario = ScenarioConfig::default().with_required_eb_n0_db(4.5);
        let link = scenario
            .link()
            .to_builder()
            .set_data_rate_bps(2_400.0)
            .build();
        let scenario = scenario.with_link(link);

        assert_eq!(4.5, scenario.required_eb_n0_db());
        assert_eq!(2_400.0, scenario.link().data_rate_bps());
    }
}
