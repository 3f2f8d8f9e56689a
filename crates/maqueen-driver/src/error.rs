//! 驱动层错误类型定义

use crate::ranger::EchoPhase;
use maqueen_hal::HalError;
use maqueen_protocol::ProtocolError;
use thiserror::Error;

/// 驱动层错误类型
///
/// 所有错误都直接返回给调用方，驱动层不做自动重试。
#[derive(Error, Debug)]
pub enum DriverError {
    /// 总线写入失败（外设缺失 / NACK）
    #[error("Transport error: {0}")]
    Transport(#[source] HalError),

    /// 超声波回波在超时时间内未出现
    ///
    /// 与任何有效距离（包括 0）都可区分。
    #[error("Ranging timeout: echo {phase} not observed within {waited_us}us")]
    RangingTimeout { phase: EchoPhase, waited_us: u64 },

    /// 引脚读写或传感器读取失败
    #[error("IO error: {0}")]
    Io(#[source] HalError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config file error: {0}")]
    ConfigFile(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl DriverError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RangingTimeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maqueen_protocol::MotorSelector;

    #[test]
    fn test_driver_error_display() {
        let err = DriverError::Transport(HalError::Nack { address: 0x10 });
        let msg = err.to_string();
        assert!(msg.contains("Transport") && msg.contains("0x10"), "{msg}");

        let err = DriverError::RangingTimeout {
            phase: EchoPhase::Rise,
            waited_us: 30_001,
        };
        assert_eq!(
            err.to_string(),
            "Ranging timeout: echo rise not observed within 30001us"
        );
        assert!(err.is_timeout());

        let err = DriverError::Io(HalError::InvalidPin { pin: 8 });
        assert!(err.to_string().starts_with("IO error"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_from_protocol_error() {
        let err: DriverError = ProtocolError::UnsupportedSelector(MotorSelector::All).into();
        match err {
            DriverError::Protocol(ProtocolError::UnsupportedSelector(sel)) => {
                assert_eq!(sel, MotorSelector::All)
            },
            other => panic!("Expected Protocol variant, got {other:?}"),
        }
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err = DriverError::Transport(HalError::Nack { address: 0x10 });
        assert!(err.source().is_some());
    }
}
