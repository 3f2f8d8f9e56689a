//! 电机命令帧编码
//!
//! 只输出帧内容，不访问硬件。

use crate::args::{DirectionArg, MotorArg, TargetArg};
use anyhow::Result;
use clap::Subcommand;
use maqueen_sdk::protocol::{MotorCommand, MotorSelector, PERIPHERAL_ADDRESS};

#[derive(Subcommand, Debug)]
pub enum FrameCommand {
    /// 运行单个电机
    Run {
        motor: MotorArg,
        direction: DirectionArg,
        /// 速度（0-255）
        speed: u8,
    },

    /// 停止电机（all = 左右各一帧）
    Stop { target: TargetArg },
}

impl FrameCommand {
    pub fn frames(&self) -> Vec<MotorCommand> {
        match *self {
            Self::Run {
                motor,
                direction,
                speed,
            } => vec![MotorCommand::run(motor.into(), direction.into(), speed)],
            Self::Stop { target } => MotorSelector::from(target)
                .motors()
                .iter()
                .map(|motor| MotorCommand::stop(*motor))
                .collect(),
        }
    }

    pub fn execute(&self) -> Result<()> {
        for command in self.frames() {
            println!(
                "0x{:02X} {}  # {:?}",
                PERIPHERAL_ADDRESS,
                hex::encode(command.encode()),
                command
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maqueen_sdk::protocol::{Direction, Motor};

    #[test]
    fn test_run_frame() {
        let cmd = FrameCommand::Run {
            motor: MotorArg::Right,
            direction: DirectionArg::Ccw,
            speed: 90,
        };
        assert_eq!(
            cmd.frames(),
            vec![MotorCommand::run(Motor::Right, Direction::Ccw, 90)]
        );
    }

    #[test]
    fn test_stop_all_frames() {
        let cmd = FrameCommand::Stop {
            target: TargetArg::All,
        };
        let encoded: Vec<_> = cmd.frames().iter().map(|c| c.encode()).collect();
        assert_eq!(encoded, vec![[0x00, 0x00, 0x00], [0x02, 0x00, 0x00]]);
    }
}
