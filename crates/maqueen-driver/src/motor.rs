//! 电机总线
//!
//! 将电机命令编码为 3 字节帧并写入 [`PERIPHERAL_ADDRESS`]。写入后不读取应答。

use crate::error::DriverError;
use maqueen_hal::I2cBus;
use maqueen_protocol::{Direction, Motor, MotorCommand, MotorSelector, PERIPHERAL_ADDRESS};
use parking_lot::Mutex;
use std::time::Duration;
use tracing::{trace, warn};

/// 停止命令后的稳定延时
pub const STOP_SETTLE: Duration = Duration::from_millis(10);

/// 电机总线
///
/// 总线句柄由互斥锁保护，多个调用方的帧按顺序发送，不会交错。
///
/// # 示例
///
/// ```rust
/// use maqueen_driver::MotorBus;
/// use maqueen_hal::mock::MockI2c;
/// use maqueen_protocol::{Direction, Motor, MotorSelector};
///
/// let i2c = MockI2c::new();
/// let motors = MotorBus::new(i2c.clone());
///
/// motors.run(Motor::Left, Direction::Cw, 128).unwrap();
/// motors.stop(MotorSelector::All).unwrap();
///
/// assert_eq!(i2c.writes().len(), 3);
/// ```
pub struct MotorBus<B> {
    bus: Mutex<B>,
}

impl<B: I2cBus> MotorBus<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus: Mutex::new(bus),
        }
    }

    /// 驱动单个电机
    ///
    /// 发送 `[motor, direction, speed]`，不等待、不读取应答。
    pub fn run(&self, motor: Motor, direction: Direction, speed: u8) -> Result<(), DriverError> {
        let mut bus = self.bus.lock();
        transmit(&mut *bus, MotorCommand::run(motor, direction, speed))
    }

    /// 按原始选择器发送运行命令
    ///
    /// 选择器为 [`MotorSelector::All`] 时返回 [`DriverError::Protocol`]，不发送任何帧。
    pub fn send(
        &self,
        selector: MotorSelector,
        direction: Direction,
        speed: u8,
    ) -> Result<(), DriverError> {
        let command = MotorCommand::try_new(selector, direction, speed)?;
        let mut bus = self.bus.lock();
        transmit(&mut *bus, command)
    }

    /// 停止电机
    ///
    /// - `All`：依次发送左、右两个停止帧
    /// - 单个电机：发送一个停止帧
    ///
    /// 发送完成后阻塞 [`STOP_SETTLE`]。任一帧发送失败立即返回错误。
    pub fn stop(&self, target: MotorSelector) -> Result<(), DriverError> {
        {
            let mut bus = self.bus.lock();
            for motor in target.motors() {
                transmit(&mut *bus, MotorCommand::stop(*motor))?;
            }
        }
        spin_sleep::sleep(STOP_SETTLE);
        Ok(())
    }

    /// 停止全部电机（兼容旧接口）
    pub fn stop_all(&self) -> Result<(), DriverError> {
        self.stop(MotorSelector::All)
    }

    pub fn into_inner(self) -> B {
        self.bus.into_inner()
    }
}

fn transmit<B: I2cBus + ?Sized>(bus: &mut B, command: MotorCommand) -> Result<(), DriverError> {
    let frame = command.encode();
    trace!("motor frame -> 0x{:02X}: {:02X?}", PERIPHERAL_ADDRESS, frame);
    bus.write(PERIPHERAL_ADDRESS, &frame).map_err(|e| {
        warn!("Motor frame {:02X?} failed: {}", frame, e);
        DriverError::Transport(e)
    })
}
