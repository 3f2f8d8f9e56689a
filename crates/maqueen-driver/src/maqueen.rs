//! Maqueen 聚合句柄
//!
//! 组合电机总线、数字 IO 与超声波测距器，并提供与主板积木块同名的便捷方法。

use crate::config::MaqueenConfig;
use crate::error::DriverError;
use crate::io::DigitalIo;
use crate::motor::MotorBus;
use crate::ranger::UltrasonicRanger;
use maqueen_hal::{GpioPort, I2cBus, MicrosClock, TemperatureSensor};
use maqueen_protocol::{Direction, LedSide, LedSwitch, Motor, MotorSelector, PatrolSide, PingUnit};

/// Maqueen 扩展板
///
/// 聚合电机总线、数字 IO 与超声波测距器。通过 [`MaqueenBuilder`](crate::MaqueenBuilder) 构造，
/// 以引用（或 `Arc`）传给需要它的回调。
pub struct Maqueen<B, G, T, C> {
    motors: MotorBus<B>,
    io: DigitalIo<G>,
    ranger: UltrasonicRanger<G, T, C>,
    config: MaqueenConfig,
}

impl<B, G, T, C> Maqueen<B, G, T, C>
where
    B: I2cBus,
    G: GpioPort,
    T: TemperatureSensor,
    C: MicrosClock,
{
    pub(crate) fn from_parts(
        motors: MotorBus<B>,
        io: DigitalIo<G>,
        ranger: UltrasonicRanger<G, T, C>,
        config: MaqueenConfig,
    ) -> Self {
        Self {
            motors,
            io,
            ranger,
            config,
        }
    }

    pub fn motors(&self) -> &MotorBus<B> {
        &self.motors
    }

    pub fn io(&self) -> &DigitalIo<G> {
        &self.io
    }

    pub fn ranger(&self) -> &UltrasonicRanger<G, T, C> {
        &self.ranger
    }

    pub fn config(&self) -> &MaqueenConfig {
        &self.config
    }

    pub fn motor_run(
        &self,
        motor: Motor,
        direction: Direction,
        speed: u8,
    ) -> Result<(), DriverError> {
        self.motors.run(motor, direction, speed)
    }

    pub fn motor_stop(&self, target: MotorSelector) -> Result<(), DriverError> {
        self.motors.stop(target)
    }

    pub fn write_led(&self, led: LedSide, switch: LedSwitch) -> Result<(), DriverError> {
        self.io.write_led(led, switch)
    }

    pub fn read_patrol(&self, patrol: PatrolSide) -> Result<bool, DriverError> {
        self.io.read_patrol(patrol)
    }

    pub fn ultrasonic(&self, unit: PingUnit) -> Result<u32, DriverError> {
        self.ranger.ping(unit)
    }
}
