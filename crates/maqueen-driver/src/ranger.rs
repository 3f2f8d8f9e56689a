//! 超声波测距
//!
//! 单次飞行时间测量，通过触发脚 / 回波脚位操作完成：
//!
//! ```text
//! trigger  ──┐ ┌───────┐ ┌──────────────────────────────
//!            └─┘       └─┘
//! echo     ──────────────────┐               ┌──────────
//!                            └───── t ───────┘
//!                            t1              t2
//! ```
//!
//! 1. 触发脚拉低，读取温度计算声速 `V = 0.6 * T + 331.5`
//! 2. 触发脚拉高后立即拉低
//! 3. 忙等回波上升沿记录 `t1`，再忙等下降沿记录 `t2`（每个阶段都有超时）
//! 4. `L = floor((t2 - t1) * V / 20000)` 厘米

use crate::SharedPort;
use crate::config::RangerConfig;
use crate::error::DriverError;
use maqueen_hal::{GpioPort, MicrosClock, TemperatureSensor};
use maqueen_protocol::{PinId, PingUnit};
use std::fmt;
use tracing::{debug, trace, warn};

/// 回波等待阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoPhase {
    /// 等待回波上升沿
    Rise,
    /// 等待回波下降沿
    Fall,
}

impl fmt::Display for EchoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rise => f.write_str("rise"),
            Self::Fall => f.write_str("fall"),
        }
    }
}

/// 单次测距结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangingSample {
    /// 回波高电平持续时间（微秒）
    pub elapsed_us: u32,
    /// 距离（厘米，向下取整）
    pub distance_cm: u32,
}

impl RangingSample {
    /// 按单位取值
    pub fn value(&self, unit: PingUnit) -> u32 {
        match unit {
            PingUnit::Centimeters => self.distance_cm,
            PingUnit::MicroSeconds => self.elapsed_us,
        }
    }
}

/// 声速（与 [`echo_to_cm`] 配套的比例常数）
pub fn speed_of_sound(temperature_celsius: f32) -> f64 {
    0.6 * f64::from(temperature_celsius) + 331.5
}

/// 回波时间换算为厘米
///
/// 除数 20000 同时包含往返距离（除 2）和单位换算。
pub fn echo_to_cm(elapsed_us: u32, speed_of_sound: f64) -> u32 {
    (f64::from(elapsed_us) * speed_of_sound / 20_000.0).floor() as u32
}

/// 超声波测距器
///
/// # 线程安全
///
/// 测距期间一直持有共享 GPIO 端口的锁，两次测距不会交错执行触发 / 等待阶段；
/// 同一端口上的 LED、巡线读写会等待正在进行的测距完成。
pub struct UltrasonicRanger<G, T, C> {
    port: SharedPort<G>,
    temperature: T,
    clock: C,
    trigger: PinId,
    echo: PinId,
    config: RangerConfig,
}

impl<G, T, C> UltrasonicRanger<G, T, C>
where
    G: GpioPort,
    T: TemperatureSensor,
    C: MicrosClock,
{
    pub fn new(
        port: SharedPort<G>,
        temperature: T,
        clock: C,
        trigger: PinId,
        echo: PinId,
        config: RangerConfig,
    ) -> Self {
        Self {
            port,
            temperature,
            clock,
            trigger,
            echo,
            config,
        }
    }

    pub fn config(&self) -> &RangerConfig {
        &self.config
    }

    /// 测距，返回指定单位的值
    pub fn ping(&self, unit: PingUnit) -> Result<u32, DriverError> {
        Ok(self.measure()?.value(unit))
    }

    /// 执行一次完整测量
    pub fn measure(&self) -> Result<RangingSample, DriverError> {
        let mut port = self.port.lock();

        port.write(self.trigger, false).map_err(DriverError::Io)?;
        let celsius = self
            .temperature
            .temperature_celsius()
            .map_err(DriverError::Io)?;
        let velocity = speed_of_sound(celsius);

        port.write(self.trigger, true).map_err(DriverError::Io)?;
        port.write(self.trigger, false).map_err(DriverError::Io)?;

        let t1 = self.wait_for_echo(&mut *port, true, EchoPhase::Rise)?;
        let t2 = self.wait_for_echo(&mut *port, false, EchoPhase::Fall)?;
        drop(port);

        let elapsed_us = u32::try_from(t2.saturating_sub(t1)).unwrap_or(u32::MAX);
        let sample = RangingSample {
            elapsed_us,
            distance_cm: echo_to_cm(elapsed_us, velocity),
        };
        debug!(
            "Ranging: {}us at {:.1}°C -> {}cm",
            sample.elapsed_us, celsius, sample.distance_cm
        );
        Ok(sample)
    }

    /// 忙等回波脚达到 `level`，返回到达时刻
    fn wait_for_echo(
        &self,
        port: &mut G,
        level: bool,
        phase: EchoPhase,
    ) -> Result<u64, DriverError> {
        let timeout_us = u64::from(self.config.timeout_us);
        let poll_interval = self.config.poll_interval();
        let start = self.clock.now_us();

        loop {
            if port.read(self.echo).map_err(DriverError::Io)? == level {
                let at = self.clock.now_us();
                trace!("echo {} at {}us", phase, at);
                return Ok(at);
            }

            let waited_us = self.clock.now_us().saturating_sub(start);
            if waited_us > timeout_us {
                warn!("Ranging timeout waiting for echo {} ({}us)", phase, waited_us);
                return Err(DriverError::RangingTimeout { phase, waited_us });
            }

            if !poll_interval.is_zero() {
                spin_sleep::sleep(poll_interval);
            }
        }
    }
}
