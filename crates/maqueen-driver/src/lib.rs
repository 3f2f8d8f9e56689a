//! 驱动层模块
//!
//! 本模块提供 Maqueen 扩展板的设备驱动功能，包括：
//! - 电机总线（3 字节命令帧，停止后稳定延时）
//! - 超声波测距（触发 / 回波位操作，带超时）
//! - 数字 IO（LED、巡线传感器）
//! - 配置加载（TOML）
//!
//! # 使用场景
//!
//! 由用户回调直接调用，与按键轮询循环相互独立。
//! 按键分发与主循环见 `maqueen-client`。

mod builder;
pub mod config;
mod error;
pub mod io;
mod maqueen;
pub mod motor;
pub mod ranger;

pub use builder::MaqueenBuilder;
pub use config::{MaqueenConfig, PinMap, RangerConfig};
pub use error::DriverError;
pub use io::DigitalIo;
pub use maqueen::Maqueen;
pub use motor::{MotorBus, STOP_SETTLE};
pub use ranger::{EchoPhase, RangingSample, UltrasonicRanger, echo_to_cm, speed_of_sound};

use parking_lot::Mutex;
use std::sync::Arc;

/// 在数字 IO 与测距器之间共享的 GPIO 端口句柄
pub type SharedPort<G> = Arc<Mutex<G>>;
