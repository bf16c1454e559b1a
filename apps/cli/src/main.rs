//! # Robolab CLI
//!
//! 机器人仿真命令行工具。
//!
//! ```bash
//! # 运行内置花名册（与 `robolab-cli run` 相同）
//! robolab-cli
//!
//! # 打印内置花名册，修改后再运行
//! robolab-cli roster > roster.toml
//! robolab-cli run --roster roster.toml
//!
//! # 打开调试日志（写到 stderr，不影响 stdout 输出）
//! RUST_LOG=robolab_core=debug robolab-cli
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;

use commands::{RosterCommand, RunCommand};

/// Robolab CLI - 机器人仿真命令行工具
#[derive(Parser, Debug)]
#[command(name = "robolab-cli")]
#[command(about = "Run the robolab robot simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 运行驱动序列（默认命令）
    Run {
        #[command(flatten)]
        args: RunCommand,
    },

    /// 打印生效的花名册（TOML）
    Roster {
        #[command(flatten)]
        args: RosterCommand,
    },
}

/// 默认日志过滤指令（`RUST_LOG` 未覆盖时生效）
fn default_directives(verbose: bool) -> [&'static str; 2] {
    if verbose {
        ["robolab_cli=debug", "robolab_core=debug"]
    } else {
        ["robolab_cli=info", "robolab_core=warn"]
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::from_default_env();
    for directive in default_directives(verbose) {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Some(Commands::Run { args }) => args.execute(),
        Some(Commands::Roster { args }) => args.execute(),
        None => RunCommand::default().execute(),
    }
}
