//! # Maqueen Protocol
//!
//! Maqueen 扩展板的协议定义（无硬件依赖）
//!
//! ## 模块
//!
//! - `motor`: 电机选择器、方向与 3 字节命令帧
//! - `pins`: 引脚角色与板载 LED / 巡线传感器枚举
//! - `input`: 主板按键标识与测距单位
//!
//! ## 帧格式
//!
//! 电机驱动芯片挂在 I2C 地址 [`PERIPHERAL_ADDRESS`]，每条命令固定 3 字节：
//!
//! ```text
//! [selector: u8, direction: u8 (0=CW, 1=CCW), speed: u8]
//! ```
//!
//! 外设不回传应答帧。

pub mod input;
pub mod motor;
pub mod pins;

// 重新导出常用类型
pub use input::*;
pub use motor::*;
pub use pins::*;

use thiserror::Error;

/// 电机驱动外设的 I2C 地址（进程生命周期内不变）
pub const PERIPHERAL_ADDRESS: u8 = 0x10;

/// 协议错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid value for field {field}: {value}")]
    InvalidValue { field: &'static str, value: u8 },

    /// `All` 只能用于停止命令
    #[error("Motor selector {0:?} is reserved for stop commands")]
    UnsupportedSelector(MotorSelector),
}
