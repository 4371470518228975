//! Process-wide default settings
//!
//! Loaded once at startup from a TOML file and passed explicitly into
//! [`resolve`](super::resolve) so tests can inject arbitrary defaults
//! without touching the filesystem.

use serde::Deserialize;

use crate::common::paths::config_path;
use crate::common::{Error, Result};

/// Report output format requested from Newman
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportType {
    /// No report emission
    #[default]
    None,
    Html,
    Json,
    Xml,
}

impl ReportType {
    /// Map the defaults-file ordinal to a report type.
    ///
    /// Ordinals: 0 = None, 1 = Html, 2 = Json, 3 = Xml. Unknown values
    /// fall back to None. Used only at the config-loading boundary.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => Self::Html,
            2 => Self::Json,
            3 => Self::Xml,
            _ => Self::None,
        }
    }

    /// Map a `--T:` flag value to a report type.
    ///
    /// Anything other than the three known tokens disables reporting.
    pub fn from_token(token: &str) -> Self {
        match token {
            "json" => Self::Json,
            "html" => Self::Html,
            "xml" => Self::Xml,
            _ => Self::None,
        }
    }

    /// Newman flag that requests this report format.
    ///
    /// Json output needs no flag; the bare report path is enough.
    pub fn report_code(self) -> &'static str {
        match self {
            Self::Html => "-H",
            Self::Xml => "-t",
            Self::Json | Self::None => "",
        }
    }

    /// File extension for generated report files
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Html => ".html",
            Self::Json => ".json",
            Self::Xml => ".xml",
            Self::None => "",
        }
    }
}

/// Default settings applied before command-line flags
#[derive(Debug, Deserialize)]
pub struct DefaultSettings {
    /// Default suite root directory
    #[serde(default)]
    pub location: String,

    /// Default iteration count passed to Newman
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Default report type as an ordinal (0 None, 1 Html, 2 Json, 3 Xml)
    #[serde(default)]
    pub report_type: u8,

    /// Default report output directory
    #[serde(default)]
    pub report_file_location: String,

    /// Newman binary or launcher; defaults to the global installation
    #[serde(default = "default_newman_command")]
    pub newman_command: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            location: String::new(),
            iterations: default_iterations(),
            report_type: 0,
            report_file_location: String::new(),
            newman_command: default_newman_command(),
        }
    }
}

fn default_iterations() -> u32 {
    1
}

fn default_newman_command() -> String {
    "newman".to_string()
}

impl DefaultSettings {
    /// Load defaults from the platform config file
    ///
    /// Returns built-in defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
                    path: path.display().to_string(),
                    error: e.to_string(),
                })?;
                return toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_mapping() {
        assert_eq!(ReportType::from_ordinal(0), ReportType::None);
        assert_eq!(ReportType::from_ordinal(1), ReportType::Html);
        assert_eq!(ReportType::from_ordinal(2), ReportType::Json);
        assert_eq!(ReportType::from_ordinal(3), ReportType::Xml);
        assert_eq!(ReportType::from_ordinal(42), ReportType::None);
    }

    #[test]
    fn test_report_codes_follow_type() {
        assert_eq!(ReportType::Html.report_code(), "-H");
        assert_eq!(ReportType::Html.file_extension(), ".html");
        assert_eq!(ReportType::Xml.report_code(), "-t");
        assert_eq!(ReportType::Xml.file_extension(), ".xml");
        assert_eq!(ReportType::Json.report_code(), "");
        assert_eq!(ReportType::Json.file_extension(), ".json");
    }

    #[test]
    fn test_defaults_parse_from_toml() {
        let settings: DefaultSettings = toml::from_str(
            r#"
            location = "/srv/suites"
            iterations = 3
            report_type = 2
            report_file_location = "/srv/reports"
            newman_command = "/usr/local/bin/newman"
            "#,
        )
        .unwrap();

        assert_eq!(settings.location, "/srv/suites");
        assert_eq!(settings.iterations, 3);
        assert_eq!(ReportType::from_ordinal(settings.report_type), ReportType::Json);
        assert_eq!(settings.newman_command, "/usr/local/bin/newman");
    }

    #[test]
    fn test_defaults_empty_toml() {
        let settings: DefaultSettings = toml::from_str("").unwrap();
        assert_eq!(settings.iterations, 1);
        assert_eq!(settings.newman_command, "newman");
        assert!(settings.location.is_empty());
    }
}
