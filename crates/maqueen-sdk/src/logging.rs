//! 日志初始化
//!
//! 安装 `tracing-subscriber` fmt 输出，并通过 `tracing-log` 把 `log` 记录桥接到 tracing。

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 未设置时的默认过滤规则
pub const DEFAULT_LOG_FILTER: &str = "maqueen=info";

/// 使用 `RUST_LOG`（或 [`DEFAULT_LOG_FILTER`]）初始化全局日志
///
/// 只能成功调用一次，重复调用返回错误。
pub fn init_logger() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter)
}

/// 使用显式过滤规则初始化全局日志，例如 `"maqueen_driver=trace"`
pub fn init_logger_with_filter(directives: &str) -> anyhow::Result<()> {
    install(EnvFilter::try_new(directives)?)
}

fn install(filter: EnvFilter) -> anyhow::Result<()> {
    // 日志写 stderr，stdout 留给命令输出
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init_with_filter(log::LevelFilter::Trace)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(init_logger_with_filter("maqueen=loudest").is_err());
    }

    #[test]
    fn test_second_init_fails() {
        // 同一进程中只有第一次安装成功
        let _ = init_logger_with_filter("maqueen=debug");
        assert!(init_logger().is_err());
    }
}
