//! 集成测试公共工具
//!
//! 在 Mock 硬件上组装一台完整的 Maqueen。

#![allow(dead_code)]

use maqueen_sdk::hal::mock::{EchoScript, MockButtons, MockClock, MockGpio, MockI2c, MockSensors};
use maqueen_sdk::prelude::*;
use std::sync::Arc;

pub type MockMaqueen = Maqueen<MockI2c, MockGpio, MockSensors, MockClock>;

/// Mock 硬件与被测实例
pub struct MockRig {
    pub maqueen: Arc<MockMaqueen>,
    pub i2c: MockI2c,
    pub gpio: MockGpio,
    pub sensors: MockSensors,
    pub buttons: MockButtons,
    pub clock: MockClock,
}

impl MockRig {
    pub fn new() -> Self {
        Self::with_echo(EchoScript::silent())
    }

    /// 配置回波脚本，测距使用纯自旋（无真实延时）
    pub fn with_echo(script: EchoScript) -> Self {
        let clock = MockClock::new(1);
        let i2c = MockI2c::new();
        let gpio = MockGpio::new(clock.clone());
        let sensors = MockSensors::new(20.0);
        let pins = PinMap::default();
        gpio.script_echo(pins.trigger, pins.echo, script);

        let maqueen = MaqueenBuilder::new(i2c.clone(), gpio.clone(), sensors.clone())
            .clock(clock.clone())
            .ranger_config(RangerConfig {
                timeout_us: 30_000,
                poll_interval_us: 0,
            })
            .build()
            .expect("mock config is valid");

        Self {
            maqueen: Arc::new(maqueen),
            i2c,
            gpio,
            sensors,
            buttons: MockButtons::new(),
            clock,
        }
    }

    pub fn dispatcher(&self) -> ButtonDispatcher<MockButtons> {
        ButtonDispatcher::new(self.buttons.clone())
    }

    /// 已发送的电机帧（不含地址）
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.i2c.writes().into_iter().map(|(_, bytes)| bytes).collect()
    }
}
