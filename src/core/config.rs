use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the configuration file, or the effective defaults if none exists.
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (run `attendlog init`). Effective settings:",
                path.display()
            ));
            println!("{}", serde_yaml::to_string(cfg)?);
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Open the configuration file in `editor`, `$EDITOR`, or a platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `attendlog init` first",
                path.display()
            )));
        }

        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }

        // The edited file must still parse.
        Config::load_from(path)?;
        info("Configuration saved.");
        Ok(())
    }
}
