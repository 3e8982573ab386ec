use std::fs;
use std::path::{Path, PathBuf};

use crate::frontend::FrontendError;


const REPORT_FILE_PREFIX: &str    = "link_budget";
const REPORT_FILE_EXTENSION: &str = "json";


pub fn write_report(
    output_directory: &Path,
    json_report: &str
) -> Result<PathBuf, FrontendError> {
    fs::create_dir_all(output_directory)
        .map_err(|source| FrontendError::ReportWrite {
            path: output_directory.to_path_buf(),
            source,
        })?;

    let local_time = chrono::Local::now()
        .format("%YY-%mm-%dd_%HH-%MM-%SS-%3ff");

    let file_name = format!(
        "{REPORT_FILE_PREFIX}_{local_time}.{REPORT_FILE_EXTENSION}"
    );
    let file_path = output_directory.join(file_name);

    fs::write(&file_path, json_report)
        .map_err(|source| FrontendError::ReportWrite {
            path: file_path.clone(),
            source,
        })?;

    Ok(file_path)
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn report_is_written_into_new_directory() {
        let output_directory = std::env::temp_dir().join(
            format!("link_budget_reports_{}", std::process::id())
        );
        let json_report = r#"{"link_margin_db": 1.5}"#;

        let report_path = write_report(&output_directory, json_report)
            .unwrap_or_else(|error| panic!("{}", error));
        let written = fs::read_to_string(&report_path);
        let _ = fs::remove_dir_all(&output_directory);

        assert!(report_path.starts_with(&output_directory));
        assert_eq!(
            Some(REPORT_FILE_EXTENSION),
            report_path.extension().and_then(|extension| extension.to_str())
        );
        assert_eq!(
            json_report,
            written.unwrap_or_else(|error| panic!("{}", error))
        );
    }
}
