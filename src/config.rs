use crate::cli::ExportFormat;
use crate::error::{RosterMatchError, Result};
use roster_match_common::{EmployeeColumns, MatchOptions, ReportColumns};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub employee_columns: EmployeeColumns,
    pub report_columns: ReportColumns,
    pub default_format: ExportFormat,
    /// Status列の合格値
    pub pass_value: String,
    /// Interview列の面接済み値
    pub yes_value: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            employee_columns: EmployeeColumns::default(),
            report_columns: ReportColumns::default(),
            default_format: ExportFormat::Json,
            pass_value: "pass".into(),
            yes_value: "yes".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 既存ファイルを読まずに初期値で上書き（壊れた設定からの復旧用）
    pub fn reset() -> Result<Self> {
        Self::reset_at(&Self::config_path()?)
    }

    pub fn reset_at(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(config_path)?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RosterMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("roster-match").join("config.json"))
    }

    /// 照合条件
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            pass_value: self.pass_value.to_lowercase(),
            yes_value: self.yes_value.to_lowercase(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.employee_columns.name.trim().is_empty() {
            return Err(RosterMatchError::Config("社員名の列名が空です".into()));
        }
        if self.report_columns.candidate_name.trim().is_empty() {
            return Err(RosterMatchError::Config("候補者名の列名が空です".into()));
        }
        if self.pass_value.is_empty() || self.yes_value.is_empty() {
            return Err(RosterMatchError::Config("pass_value / yes_value は空にできません".into()));
        }
        Ok(())
    }
}
