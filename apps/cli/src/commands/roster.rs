//! roster 命令
//!
//! 以 TOML 形式打印生效的花名册，可直接保存后修改再用 `--roster` 加载

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::utils::load_roster;

/// 花名册命令参数
#[derive(Args, Debug, Default)]
pub struct RosterCommand {
    /// 花名册文件（TOML），不指定时打印内置花名册
    #[arg(short, long)]
    pub roster: Option<PathBuf>,
}

impl RosterCommand {
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> Result<String> {
        let config = load_roster(self.roster.as_deref())?;
        config.to_toml_string().context("序列化花名册失败")
    }
}
