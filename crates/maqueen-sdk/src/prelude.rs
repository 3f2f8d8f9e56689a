//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use maqueen_sdk::prelude::*;
//! ```

// 客户端层
pub use crate::client::{ButtonDispatcher, Input, NoStep, RunLoop, pause, pause_ms};

// 驱动层
pub use crate::driver::{
    DigitalIo, Maqueen, MaqueenBuilder, MaqueenConfig, MotorBus, PinMap, RangerConfig,
    RangingSample, UltrasonicRanger,
};

// 硬件层（常用 Trait）
pub use crate::hal::{
    ButtonInput, GpioPort, HostSensors, I2cBus, MicrosClock, SystemClock, TemperatureSensor,
};

// 协议层
pub use crate::protocol::{
    ButtonId, Direction, LedSide, LedSwitch, LineState, Motor, MotorSelector, PatrolSide,
    PhysicalButton, PinRole, PingUnit,
};

// 错误类型
pub use crate::client::RuntimeError;
pub use crate::driver::DriverError;
pub use crate::hal::HalError;
pub use crate::protocol::ProtocolError;
