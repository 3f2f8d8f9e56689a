//! 主板传感器门面
//!
//! 直接转发到 [`HostSensors`]，不做任何处理。

use maqueen_hal::{HalError, HostSensors};
use std::time::Duration;

pub struct Input<S> {
    sensors: S,
}

impl<S: HostSensors> Input<S> {
    pub fn new(sensors: S) -> Self {
        Self { sensors }
    }

    /// 温度（摄氏度）
    pub fn temperature(&self) -> Result<f32, HalError> {
        self.sensors.temperature_celsius()
    }

    /// 光线强度（0 暗 ~ 255 亮）
    pub fn light_level(&self) -> Result<u8, HalError> {
        self.sensors.light_level()
    }

    /// 罗盘方向（度）
    pub fn compass_heading(&self) -> Result<u16, HalError> {
        self.sensors.compass_heading()
    }
}

/// 阻塞当前线程
pub fn pause(duration: Duration) {
    spin_sleep::sleep(duration);
}

pub fn pause_ms(ms: u64) {
    pause(Duration::from_millis(ms));
}

#[cfg(test)]
mod tests {
    use super::*;
    use maqueen_hal::mock::MockSensors;
    use std::time::Instant;

    #[test]
    fn test_input_delegates() {
        let sensors = MockSensors::new(23.5);
        sensors.set_light_level(200);
        sensors.set_compass_heading(450);
        let input = Input::new(sensors);

        assert_eq!(input.temperature().unwrap(), 23.5);
        assert_eq!(input.light_level().unwrap(), 200);
        assert_eq!(input.compass_heading().unwrap(), 90);
    }

    #[test]
    fn test_pause_blocks() {
        let start = Instant::now();
        pause_ms(5);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
