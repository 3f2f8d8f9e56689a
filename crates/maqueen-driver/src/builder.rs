//! Builder 模式实现
//!
//! 提供链式构造 `Maqueen` 实例的便捷方式。

use crate::config::{MaqueenConfig, PinMap, RangerConfig};
use crate::error::DriverError;
use crate::io::DigitalIo;
use crate::maqueen::Maqueen;
use crate::motor::MotorBus;
use crate::ranger::UltrasonicRanger;
use maqueen_hal::{GpioPort, I2cBus, MicrosClock, SystemClock, TemperatureSensor};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// Maqueen Builder（链式构造）
///
/// 所有外设都由调用方显式传入，不存在进程级单例。
///
/// # Example
///
/// ```rust
/// use maqueen_driver::{MaqueenBuilder, RangerConfig};
/// use maqueen_hal::mock::{MockClock, MockGpio, MockI2c, MockSensors};
///
/// let clock = MockClock::default();
/// let maqueen = MaqueenBuilder::new(
///     MockI2c::new(),
///     MockGpio::new(clock.clone()),
///     MockSensors::new(20.0),
/// )
/// .clock(clock)
/// .ranger_config(RangerConfig {
///     timeout_us: 10_000,
///     poll_interval_us: 0,
/// })
/// .build()
/// .unwrap();
///
/// assert_eq!(maqueen.config().ranger.timeout_us, 10_000);
/// ```
pub struct MaqueenBuilder<B, G, T, C = SystemClock> {
    bus: B,
    gpio: G,
    temperature: T,
    clock: C,
    config: MaqueenConfig,
}

impl<B, G, T> MaqueenBuilder<B, G, T, SystemClock> {
    pub fn new(bus: B, gpio: G, temperature: T) -> Self {
        Self {
            bus,
            gpio,
            temperature,
            clock: SystemClock::new(),
            config: MaqueenConfig::default(),
        }
    }
}

impl<B, G, T, C> MaqueenBuilder<B, G, T, C> {
    /// 替换测距时钟（默认 [`SystemClock`]）
    pub fn clock<C2>(self, clock: C2) -> MaqueenBuilder<B, G, T, C2> {
        MaqueenBuilder {
            bus: self.bus,
            gpio: self.gpio,
            temperature: self.temperature,
            clock,
            config: self.config,
        }
    }

    pub fn config(mut self, config: MaqueenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pins(mut self, pins: PinMap) -> Self {
        self.config.pins = pins;
        self
    }

    pub fn ranger_config(mut self, ranger: RangerConfig) -> Self {
        self.config.ranger = ranger;
        self
    }
}

impl<B, G, T, C> MaqueenBuilder<B, G, T, C>
where
    B: I2cBus,
    G: GpioPort,
    T: TemperatureSensor,
    C: MicrosClock,
{
    /// 校验配置并构造实例
    pub fn build(self) -> Result<Maqueen<B, G, T, C>, DriverError> {
        self.config.validate()?;

        let pins = self.config.pins;
        let port = Arc::new(Mutex::new(self.gpio));
        let ranger = UltrasonicRanger::new(
            port.clone(),
            self.temperature,
            self.clock,
            pins.trigger,
            pins.echo,
            self.config.ranger,
        );

        info!(
            "Maqueen ready (trigger pin {}, echo pin {}, timeout {}us)",
            pins.trigger, pins.echo, self.config.ranger.timeout_us
        );

        Ok(Maqueen::from_parts(
            MotorBus::new(self.bus),
            DigitalIo::new(port, pins),
            ranger,
            self.config,
        ))
    }
}
