//! 命令行参数到协议类型的映射

use clap::ValueEnum;
use maqueen_sdk::protocol::{ButtonId, Direction, Motor, MotorSelector, PingUnit};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorArg {
    Left,
    Right,
}

impl From<MotorArg> for Motor {
    fn from(arg: MotorArg) -> Self {
        match arg {
            MotorArg::Left => Motor::Left,
            MotorArg::Right => Motor::Right,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    Left,
    Right,
    All,
}

impl From<TargetArg> for MotorSelector {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Left => MotorSelector::Left,
            TargetArg::Right => MotorSelector::Right,
            TargetArg::All => MotorSelector::All,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    Cw,
    Ccw,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Cw => Direction::Cw,
            DirectionArg::Ccw => Direction::Ccw,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitArg {
    Cm,
    Us,
}

impl From<UnitArg> for PingUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Cm => PingUnit::Centimeters,
            UnitArg::Us => PingUnit::MicroSeconds,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonArg {
    A,
    B,
    Ab,
}

impl ButtonArg {
    /// 对应的物理按键状态 (a, b)
    pub fn levels(self) -> (bool, bool) {
        match self {
            Self::A => (true, false),
            Self::B => (false, true),
            Self::Ab => (true, true),
        }
    }
}

impl From<ButtonArg> for ButtonId {
    fn from(arg: ButtonArg) -> Self {
        match arg {
            ButtonArg::A => ButtonId::A,
            ButtonArg::B => ButtonId::B,
            ButtonArg::Ab => ButtonId::AB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_levels() {
        assert_eq!(ButtonArg::Ab.levels(), (true, true));
        assert_eq!(ButtonId::from(ButtonArg::Ab), ButtonId::AB);
    }

    #[test]
    fn test_target_all() {
        assert_eq!(MotorSelector::from(TargetArg::All), MotorSelector::All);
    }
}
