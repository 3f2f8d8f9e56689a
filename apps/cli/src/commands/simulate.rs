//! 在 Mock 硬件上运行主循环
//!
//! 绑定 A 前进、B 后退、AB 停止，每个 tick 测距一次，
//! 结束后打印发送的电机帧和测得的距离。

use crate::args::ButtonArg;
use anyhow::Result;
use clap::Args;
use maqueen_sdk::hal::mock::{EchoScript, MockButtons, MockClock, MockGpio, MockI2c, MockSensors};
use maqueen_sdk::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// 回波前的固定延迟（微秒）
const ECHO_DELAY_US: u64 = 100;

#[derive(Args, Debug)]
pub struct SimulateCommand {
    /// tick 数
    #[arg(short = 'n', long, default_value_t = 3)]
    pub ticks: u64,

    /// 按住的按键
    #[arg(short, long, value_enum)]
    pub press: Option<ButtonArg>,

    /// 回波宽度（微秒），不指定则无回波
    #[arg(long)]
    pub echo_us: Option<u64>,

    /// 环境温度（摄氏度）
    #[arg(short, long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub temperature: f32,

    /// 电机速度
    #[arg(short, long, default_value_t = 200)]
    pub speed: u8,
}

/// 一次模拟的结果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub ticks: u64,
    pub frames: Vec<Vec<u8>>,
    /// 每个 tick 的测距结果，`None` 表示超时
    pub distances: Vec<Option<u32>>,
}

impl SimulateCommand {
    pub fn simulate(&self, config: &MaqueenConfig) -> Result<SimulationReport> {
        let clock = MockClock::new(1);
        let i2c = MockI2c::new();
        let gpio = MockGpio::new(clock.clone());
        let sensors = MockSensors::new(self.temperature);
        let buttons = MockButtons::new();

        let script = match self.echo_us {
            Some(width) => EchoScript::pulse(ECHO_DELAY_US, width),
            None => EchoScript::silent(),
        };
        gpio.script_echo(config.pins.trigger, config.pins.echo, script);

        // Mock 时钟按读取推进，轮询无需真实等待
        let mut ranger = config.ranger;
        ranger.poll_interval_us = 0;
        let maqueen = Arc::new(
            MaqueenBuilder::new(i2c.clone(), gpio, sensors)
                .clock(clock)
                .config(config.clone())
                .ranger_config(ranger)
                .build()?,
        );

        if let Some(button) = self.press {
            let (a, b) = button.levels();
            buttons.set(a, b);
        }

        let mut dispatcher = ButtonDispatcher::new(buttons);
        let speed = self.speed;
        let robot = Arc::clone(&maqueen);
        dispatcher.register(ButtonId::A, move || {
            robot.motor_run(Motor::Left, Direction::Cw, speed)?;
            robot.motor_run(Motor::Right, Direction::Cw, speed)?;
            Ok(())
        });
        let robot = Arc::clone(&maqueen);
        dispatcher.register(ButtonId::B, move || {
            robot.motor_run(Motor::Left, Direction::Ccw, speed)?;
            robot.motor_run(Motor::Right, Direction::Ccw, speed)?;
            Ok(())
        });
        let robot = Arc::clone(&maqueen);
        dispatcher.register(ButtonId::AB, move || {
            robot.motor_stop(MotorSelector::All)?;
            Ok(())
        });

        let mut distances = Vec::new();
        let mut step = || -> anyhow::Result<()> {
            let distance = match maqueen.ultrasonic(PingUnit::Centimeters) {
                Ok(cm) => Some(cm),
                Err(e) if e.is_timeout() => None,
                Err(e) => return Err(e.into()),
            };
            debug!("Measured distance: {:?}", distance);
            distances.push(distance);
            Ok(())
        };

        info!(
            "Simulating {} ticks (press: {:?}, echo: {:?} us)",
            self.ticks, self.press, self.echo_us
        );
        let mut run_loop = RunLoop::new(dispatcher);
        for _ in 0..self.ticks {
            run_loop.tick(Some(&mut step))?;
        }

        let frames = i2c.writes().into_iter().map(|(_, bytes)| bytes).collect();
        Ok(SimulationReport {
            ticks: run_loop.ticks(),
            frames,
            distances,
        })
    }

    pub fn execute(&self, config: &MaqueenConfig) -> Result<()> {
        let report = self.simulate(config)?;
        println!("ticks: {}", report.ticks);
        for frame in &report.frames {
            println!("frame: {}", hex::encode(frame));
        }
        for (tick, distance) in report.distances.iter().enumerate() {
            match distance {
                Some(cm) => println!("tick {tick}: {cm} cm"),
                None => println!("tick {tick}: timeout"),
            }
        }
        Ok(())
    }
}
