pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::Mode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pta-weighting")]
#[command(about = "Combine partial assessment weights into a reduced SE weighting")]
pub struct CliConfig {
    /// Path to a TOML configuration file with a [fractions] table
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: WeightingCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum WeightingCommand {
    /// Combine two weight codes with an explicit mode
    Compute {
        #[arg(long, value_enum)]
        mode: Mode,
        #[arg(allow_negative_numbers = true)]
        code1: i64,
        #[arg(allow_negative_numbers = true)]
        code2: i64,
    },
    /// Combine two weight codes using the mode of a school year (klas id)
    Leerjaar {
        #[arg(long)]
        klas: u8,
        #[arg(allow_negative_numbers = true)]
        code1: i64,
        #[arg(allow_negative_numbers = true)]
        code2: i64,
    },
    /// Show the label of a single weight code
    Describe {
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 --config 指定的 TOML 檔，未指定時使用預設分數表
    pub fn load_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }
}
