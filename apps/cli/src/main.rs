//! # Maqueen CLI
//!
//! Command-line tool for the Maqueen add-on board.
//!
//! ```bash
//! # 编码电机命令帧
//! maqueen-cli frame run left cw 120
//! maqueen-cli frame stop all
//!
//! # 回波时间换算
//! maqueen-cli range --echo-us 580 --temperature 20
//!
//! # 在 Mock 硬件上运行主循环
//! maqueen-cli simulate --ticks 5 --press ab
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use maqueen_sdk::MaqueenConfig;
use std::path::PathBuf;

mod args;
mod commands;

use commands::{FrameCommand, RangeCommand, SimulateCommand};

/// Maqueen CLI - 扩展板命令行工具
#[derive(Parser, Debug)]
#[command(name = "maqueen-cli")]
#[command(about = "Command-line tool for the Maqueen robotics add-on board", long_about = None)]
#[command(version)]
struct Cli {
    /// 配置文件（TOML）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 编码电机命令帧
    #[command(subcommand)]
    Frame(FrameCommand),

    /// 回波时间换算为距离
    Range {
        #[command(flatten)]
        args: RangeCommand,
    },

    /// 在 Mock 硬件上运行按键 / 测距主循环
    Simulate {
        #[command(flatten)]
        args: SimulateCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    if cli.verbose {
        maqueen_sdk::init_logger_with_filter("maqueen=debug")?;
    } else {
        maqueen_sdk::init_logger()?;
    }

    let config = match &cli.config {
        Some(path) => MaqueenConfig::load_from_file(path)?,
        None => MaqueenConfig::default(),
    };

    match cli.command {
        Commands::Frame(cmd) => cmd.execute(),
        Commands::Range { args } => args.execute(),
        Commands::Simulate { args } => args.execute(&config),
    }
}
