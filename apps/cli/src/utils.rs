//! 花名册加载工具

use std::path::Path;

use anyhow::{Context, Result};
use robolab_core::RosterConfig;
use tracing::info;

/// 加载花名册
///
/// 未指定文件时使用内置花名册。
pub fn load_roster(path: Option<&Path>) -> Result<RosterConfig> {
    match path {
        Some(path) => {
            let config = RosterConfig::load_from_file(path)
                .with_context(|| format!("加载花名册失败: {}", path.display()))?;
            info!(path = %path.display(), robots = config.robots.len(), "using roster file");
            Ok(config)
        },
        None => Ok(RosterConfig::default()),
    }
}
