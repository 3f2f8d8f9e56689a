//! 数字 IO 门面
//!
//! 按逻辑角色读写 LED 与巡线传感器引脚，角色通过 [`PinMap`] 解析为物理引脚。

use crate::SharedPort;
use crate::config::PinMap;
use crate::error::DriverError;
use maqueen_hal::GpioPort;
use maqueen_protocol::{LedSide, LedSwitch, LineState, PatrolSide, PinRole};
use tracing::trace;

pub struct DigitalIo<G> {
    port: SharedPort<G>,
    pins: PinMap,
}

impl<G: GpioPort> DigitalIo<G> {
    pub fn new(port: SharedPort<G>, pins: PinMap) -> Self {
        Self { port, pins }
    }

    pub fn pins(&self) -> &PinMap {
        &self.pins
    }

    /// 无条件写引脚
    pub fn write_digital(&self, role: PinRole, value: bool) -> Result<(), DriverError> {
        let pin = self.pins.pin(role);
        trace!("write {:?} (pin {}) = {}", role, pin, value);
        self.port.lock().write(pin, value).map_err(DriverError::Io)
    }

    /// 无条件读引脚
    pub fn read_digital(&self, role: PinRole) -> Result<bool, DriverError> {
        let pin = self.pins.pin(role);
        self.port.lock().read(pin).map_err(DriverError::Io)
    }

    pub fn write_led(&self, led: LedSide, switch: LedSwitch) -> Result<(), DriverError> {
        self.write_digital(led.into(), switch.into())
    }

    pub fn read_patrol(&self, patrol: PatrolSide) -> Result<bool, DriverError> {
        self.read_digital(patrol.into())
    }

    /// 同时读取两路巡线传感器
    ///
    /// 两次读取在同一次加锁内完成。
    pub fn read_line(&self) -> Result<LineState, DriverError> {
        let mut port = self.port.lock();
        let left = port.read(self.pins.patrol_left).map_err(DriverError::Io)?;
        let right = port.read(self.pins.patrol_right).map_err(DriverError::Io)?;
        Ok(LineState::from_levels(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maqueen_hal::mock::{MockClock, MockGpio};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn io() -> (DigitalIo<MockGpio>, MockGpio) {
        let gpio = MockGpio::new(MockClock::default());
        let io = DigitalIo::new(Arc::new(Mutex::new(gpio.clone())), PinMap::default());
        (io, gpio)
    }

    #[test]
    fn test_write_led_resolves_pin() {
        let (io, gpio) = io();
        io.write_led(LedSide::Left, LedSwitch::TurnOn).unwrap();
        io.write_led(LedSide::Right, LedSwitch::TurnOff).unwrap();
        assert_eq!(gpio.writes(), vec![(8, true), (12, false)]);
    }

    #[test]
    fn test_read_patrol() {
        let (io, gpio) = io();
        gpio.set_input(13, true);
        assert!(io.read_patrol(PatrolSide::Left).unwrap());
        assert!(!io.read_patrol(PatrolSide::Right).unwrap());
        assert!(io.read_digital(PinRole::PatrolLeft).unwrap());
    }

    #[test]
    fn test_read_line() {
        let (io, gpio) = io();
        gpio.set_input(13, false);
        gpio.set_input(14, true);
        assert_eq!(io.read_line().unwrap(), LineState::LeftOnly);
    }

    #[test]
    fn test_io_error_propagates() {
        let (io, gpio) = io();
        gpio.set_fail_io(true);
        assert!(matches!(
            io.write_digital(PinRole::LedLeft, true),
            Err(DriverError::Io(_))
        ));
        assert!(matches!(io.read_line(), Err(DriverError::Io(_))));
    }
}
