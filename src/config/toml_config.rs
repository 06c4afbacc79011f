use crate::adapters::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::core::resolver::parse_fraction;
use crate::core::FractionTable;
use crate::utils::error::{PtaError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub fractions: FractionsConfig,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionsConfig {
    #[serde(default = "standard_entries")]
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub output_path: Option<String>,
}

fn standard_entries() -> Vec<String> {
    FractionTable::default().entries().to_vec()
}

impl Default for FractionsConfig {
    fn default() -> Self {
        Self {
            entries: standard_entries(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PtaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PtaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TOKEN})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PtaError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        for (index, entry) in self.fractions.entries.iter().enumerate() {
            parse_fraction(entry).map_err(|message| PtaError::ConfigValidationError {
                field: format!("fractions.entries[{}]", index),
                message,
            })?;
        }

        if let Some(export) = &self.export {
            if let Some(endpoint) = &export.endpoint {
                validate_url("export.endpoint", endpoint)?;
            }
            if let Some(token) = &export.token {
                validate_non_empty_string("export.token", token)?;
            }
            if let Some(timeout) = export.timeout_seconds {
                validate_range("export.timeout_seconds", timeout, 1, 3600)?;
            }
            if let Some(output_path) = &export.output_path {
                validate_path("export.output_path", output_path)?;
            }
        }

        Ok(())
    }

    /// 取得分數表
    pub fn fraction_table(&self) -> FractionTable {
        FractionTable::new(self.fractions.entries.clone())
    }

    pub fn export_endpoint(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|e| e.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn export_token(&self) -> Option<&str> {
        self.export.as_ref().and_then(|e| e.token.as_deref())
    }

    pub fn export_timeout(&self) -> Duration {
        Duration::from_secs(
            self.export
                .as_ref()
                .and_then(|e| e.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn output_path(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|e| e.output_path.as_deref())
            .unwrap_or(".")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
