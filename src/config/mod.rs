use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_token: String,
    /// Date of the first report. To get the first report for Jan 5-11, set
    /// this to Jan 12: reporting weeks always end before the window opens.
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_report_date_format")]
    pub report_date_format: String,
    /// Projects reported under their own name in the summary view;
    /// everything else lands in the catch-all bucket.
    #[serde(default)]
    pub core_projects: Vec<String>,
    #[serde(default = "default_electives_label")]
    pub electives_label: String,
    /// Single-entry duration above which a record is flagged, in hours.
    #[serde(default = "default_threshold_hours")]
    pub threshold_hours: f64,
    /// Users whose records never enter reports (coaches, admins).
    #[serde(default)]
    pub excluded_users: Vec<String>,
}

fn default_report_date_format() -> String {
    "%b %d".to_string()
}
fn default_electives_label() -> String {
    "Electives".to_string()
}
fn default_threshold_hours() -> f64 {
    10.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            report_date_format: default_report_date_format(),
            core_projects: Vec::new(),
            electives_label: default_electives_label(),
            threshold_hours: default_threshold_hours(),
            excluded_users: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("togglrep")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".togglrep")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("togglrep.conf")
    }

    /// Load configuration from the given path, or from the standard
    /// location. A missing standard file falls back to defaults; a missing
    /// explicit path is an error.
    pub fn load(path_override: Option<&str>) -> AppResult<Self> {
        let path = match path_override {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };
        if !path.exists() {
            if path_override.is_some() {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write a default configuration file, ready to be filled in.
    pub fn init_all(path_override: Option<&str>, force: bool) -> AppResult<PathBuf> {
        let path = match path_override {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }
        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    /// Parsed `[start_date, end_date]` window. Empty or end-before-start
    /// windows are fatal before any fetch happens.
    pub fn reporting_window(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let start = parse_date(&self.start_date).ok_or_else(|| {
            AppError::Config(format!(
                "invalid or missing start_date: {:?}",
                self.start_date
            ))
        })?;
        let end = parse_date(&self.end_date).ok_or_else(|| {
            AppError::Config(format!("invalid or missing end_date: {:?}", self.end_date))
        })?;
        if end < start {
            return Err(AppError::InvalidRange(format!(
                "end date {end} precedes start date {start}"
            )));
        }
        Ok((start, end))
    }

    /// The reporting date must fall inside the configured window.
    pub fn ensure_in_window(&self, date: NaiveDate) -> AppResult<()> {
        let (start, end) = self.reporting_window()?;
        if date < start || date > end {
            return Err(AppError::InvalidRange(format!(
                "reporting date {date} is outside {start}..{end}"
            )));
        }
        Ok(())
    }
}
