//! Maqueen SDK - micro:bit Maqueen 扩展板 Rust SDK
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **协议层** (`protocol`): 电机命令帧、引脚角色、按键标识
//! - **硬件层** (`hal`): I2C / GPIO / 传感器 / 按键 / 时钟 trait，Mock 设备
//! - **驱动层** (`driver`): 电机总线、超声波测距、数字 IO、配置
//! - **客户端层** (`client`): 按键分发、协作式主循环、传感器门面
//!
//! # 快速开始
//!
//! ```rust
//! use maqueen_sdk::prelude::*;
//! use maqueen_sdk::hal::mock::{MockButtons, MockClock, MockGpio, MockI2c, MockSensors};
//! use std::sync::Arc;
//!
//! let clock = MockClock::default();
//! let maqueen = Arc::new(
//!     MaqueenBuilder::new(MockI2c::new(), MockGpio::new(clock.clone()), MockSensors::new(20.0))
//!         .clock(clock)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let mut dispatcher = ButtonDispatcher::new(MockButtons::new());
//! let robot = maqueen.clone();
//! dispatcher.register(ButtonId::A, move || {
//!     robot.motor_run(Motor::Left, Direction::Cw, 200)?;
//!     Ok(())
//! });
//! ```

pub use maqueen_client as client;
pub use maqueen_driver as driver;
pub use maqueen_hal as hal;
pub use maqueen_protocol as protocol;

mod logging;
pub mod prelude;

pub use logging::{DEFAULT_LOG_FILTER, init_logger, init_logger_with_filter};

// 常用类型
pub use client::{ButtonDispatcher, RunLoop, RuntimeError};
pub use driver::{DriverError, Maqueen, MaqueenBuilder, MaqueenConfig};
pub use hal::HalError;
pub use protocol::ProtocolError;
