//! run 命令
//!
//! 对花名册运行驱动序列，结果逐行写到 stdout

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use robolab_core::{ConsoleSink, run_roster};
use tracing::info;

use crate::utils::load_roster;

/// 运行命令参数
#[derive(Args, Debug, Default)]
pub struct RunCommand {
    /// 花名册文件（TOML），不指定时使用内置花名册
    #[arg(short, long)]
    pub roster: Option<PathBuf>,
}

impl RunCommand {
    /// 执行驱动序列
    pub fn execute(&self) -> Result<()> {
        let config = load_roster(self.roster.as_deref())?;

        let mut sink = ConsoleSink::new();
        let summary = run_roster(&config, &mut sink).context("驱动序列执行失败")?;

        info!(
            entities = summary.entities,
            refusals = summary.refusals,
            "run complete"
        );
        Ok(())
    }
}
