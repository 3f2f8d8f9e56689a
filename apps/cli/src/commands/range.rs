//! 回波时间换算

use crate::args::UnitArg;
use anyhow::Result;
use clap::Args;
use maqueen_sdk::driver::{RangingSample, echo_to_cm, speed_of_sound};

#[derive(Args, Debug)]
pub struct RangeCommand {
    /// 回波高电平持续时间（微秒）
    #[arg(long)]
    pub echo_us: u32,

    /// 环境温度（摄氏度）
    #[arg(short, long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub temperature: f32,

    /// 输出单位
    #[arg(short, long, value_enum, default_value_t = UnitArg::Cm)]
    pub unit: UnitArg,
}

impl RangeCommand {
    pub fn sample(&self) -> RangingSample {
        let velocity = speed_of_sound(self.temperature);
        RangingSample {
            elapsed_us: self.echo_us,
            distance_cm: echo_to_cm(self.echo_us, velocity),
        }
    }

    pub fn execute(&self) -> Result<()> {
        println!("{}", self.sample().value(self.unit.into()));
        Ok(())
    }
}
