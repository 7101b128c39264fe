use crate::commands::CmdResult;
use crate::config::MasonConfig;
use crate::error::Result;

/// Reports the effective configuration.
pub fn run(config: &MasonConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_config(config.clone()))
}
