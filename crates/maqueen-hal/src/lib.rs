//! # Maqueen HAL
//!
//! 硬件抽象层，为驱动层提供统一的外设接口。
//!
//! 驱动层只依赖本 crate 中的 trait，具体实现由宿主平台提供：
//!
//! - [`I2cBus`]: 电机驱动芯片所在的共享总线
//! - [`GpioPort`]: 按物理编号读写数字引脚
//! - [`TemperatureSensor`] / [`HostSensors`]: 主板温度、光线、罗盘
//! - [`ButtonInput`]: 主板 A/B 按键
//! - [`MicrosClock`]: 微秒级单调时钟（超声波测距计时）
//!
//! ## Feature Flags
//!
//! - `mock` - 内存模拟设备（测试、离线仿真）
//! - `embedded-hal` - 将 `embedded_hal::i2c::I2c` 适配为 [`I2cBus`]

use maqueen_protocol::{PhysicalButton, PinId};
use std::sync::Arc;
use thiserror::Error;

mod clock;
pub use clock::SystemClock;

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "embedded-hal")]
pub mod embedded;

/// 硬件层统一错误类型
#[derive(Error, Debug)]
pub enum HalError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// 外设不存在或未应答
    #[error("No acknowledge from device at address 0x{address:02X}")]
    Nack { address: u8 },
    #[error("Invalid pin: {pin}")]
    InvalidPin { pin: PinId },
    #[error("Device error: {0}")]
    Device(String),
    #[error("Not supported: {0}")]
    NotSupported(&'static str),
}

/// I2C 总线（只写）
pub trait I2cBus: Send {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), HalError>;
}

/// 数字 IO 端口
pub trait GpioPort: Send {
    fn write(&mut self, pin: PinId, high: bool) -> Result<(), HalError>;
    fn read(&mut self, pin: PinId) -> Result<bool, HalError>;
}

/// 环境温度来源（用于声速修正）
pub trait TemperatureSensor: Send + Sync {
    fn temperature_celsius(&self) -> Result<f32, HalError>;
}

/// 主板传感器
pub trait HostSensors: TemperatureSensor {
    /// 光线强度（0 暗 ~ 255 亮）
    fn light_level(&self) -> Result<u8, HalError>;

    /// 罗盘方向（度，0-359）
    fn compass_heading(&self) -> Result<u16, HalError>;
}

/// 主板按键
pub trait ButtonInput: Send {
    fn is_pressed(&mut self, button: PhysicalButton) -> Result<bool, HalError>;
}

/// 微秒级单调时钟
pub trait MicrosClock: Send + Sync {
    fn now_us(&self) -> u64;
}

impl<T: I2cBus + ?Sized> I2cBus for Box<T> {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), HalError> {
        (**self).write(address, bytes)
    }
}

impl<T: GpioPort + ?Sized> GpioPort for Box<T> {
    fn write(&mut self, pin: PinId, high: bool) -> Result<(), HalError> {
        (**self).write(pin, high)
    }

    fn read(&mut self, pin: PinId) -> Result<bool, HalError> {
        (**self).read(pin)
    }
}

impl<T: ButtonInput + ?Sized> ButtonInput for Box<T> {
    fn is_pressed(&mut self, button: PhysicalButton) -> Result<bool, HalError> {
        (**self).is_pressed(button)
    }
}

impl<T: TemperatureSensor + ?Sized> TemperatureSensor for Arc<T> {
    fn temperature_celsius(&self) -> Result<f32, HalError> {
        (**self).temperature_celsius()
    }
}

impl<T: HostSensors + ?Sized> HostSensors for Arc<T> {
    fn light_level(&self) -> Result<u8, HalError> {
        (**self).light_level()
    }

    fn compass_heading(&self) -> Result<u16, HalError> {
        (**self).compass_heading()
    }
}

impl<T: MicrosClock + ?Sized> MicrosClock for Arc<T> {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
