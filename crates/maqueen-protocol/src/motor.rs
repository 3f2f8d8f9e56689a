//! 电机命令帧
//!
//! 编码规则与板载固件一致：`M1`（左）= 0x00，`M2`（右）= 0x02，`ALL` = 0xFF。

use crate::ProtocolError;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// 命令帧长度
pub const FRAME_LEN: usize = 3;

/// 电机选择器（线上编码）
///
/// `All` 仅对停止命令有意义：协议层没有"同时驱动两个电机"的帧。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MotorSelector {
    Left = 0x00,
    Right = 0x02,
    All = 0xFF,
}

impl MotorSelector {
    /// 展开为物理电机（`All` 按左、右顺序）
    pub fn motors(self) -> &'static [Motor] {
        match self {
            Self::Left => &[Motor::Left],
            Self::Right => &[Motor::Right],
            Self::All => &[Motor::Left, Motor::Right],
        }
    }
}

/// 单个物理电机
///
/// `run` 只接受物理电机，`All` 在类型层面无法表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motor {
    Left,
    Right,
}

impl Motor {
    pub fn code(self) -> u8 {
        MotorSelector::from(self).into()
    }
}

impl From<Motor> for MotorSelector {
    fn from(motor: Motor) -> Self {
        match motor {
            Motor::Left => Self::Left,
            Motor::Right => Self::Right,
        }
    }
}

impl TryFrom<MotorSelector> for Motor {
    type Error = ProtocolError;

    fn try_from(selector: MotorSelector) -> Result<Self, Self::Error> {
        match selector {
            MotorSelector::Left => Ok(Self::Left),
            MotorSelector::Right => Ok(Self::Right),
            MotorSelector::All => Err(ProtocolError::UnsupportedSelector(selector)),
        }
    }
}

/// 旋转方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// 顺时针（停止帧固定使用）
    #[default]
    Cw = 0x00,
    /// 逆时针
    Ccw = 0x01,
}

/// 电机命令
///
/// 瞬态值：构造后立即编码发送，不做持久化。
///
/// # 示例
///
/// ```rust
/// use maqueen_protocol::{Direction, Motor, MotorCommand};
///
/// let cmd = MotorCommand::run(Motor::Right, Direction::Ccw, 200);
/// assert_eq!(cmd.encode(), [0x02, 0x01, 200]);
///
/// let stop = MotorCommand::stop(Motor::Left);
/// assert_eq!(stop.encode(), [0x00, 0x00, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorCommand {
    pub motor: Motor,
    pub direction: Direction,
    pub speed: u8,
}

impl MotorCommand {
    pub fn run(motor: Motor, direction: Direction, speed: u8) -> Self {
        Self {
            motor,
            direction,
            speed,
        }
    }

    /// 停止帧：方向固定为 CW，速度为 0
    pub fn stop(motor: Motor) -> Self {
        Self::run(motor, Direction::Cw, 0)
    }

    /// 从未经类型约束的选择器构造
    ///
    /// 选择器为 `All` 时返回 [`ProtocolError::UnsupportedSelector`]。
    pub fn try_new(
        selector: MotorSelector,
        direction: Direction,
        speed: u8,
    ) -> Result<Self, ProtocolError> {
        Ok(Self::run(Motor::try_from(selector)?, direction, speed))
    }

    pub fn is_stop(&self) -> bool {
        self.speed == 0
    }

    /// 编码为 `[selector, direction, speed]`
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        [self.motor.code(), self.direction.into(), self.speed]
    }

    /// 从原始字节解析（用于录制/调试）
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let frame: [u8; FRAME_LEN] =
            bytes
                .try_into()
                .map_err(|_| ProtocolError::InvalidLength {
                    expected: FRAME_LEN,
                    actual: bytes.len(),
                })?;
        Self::try_from(frame)
    }
}

impl From<MotorCommand> for [u8; FRAME_LEN] {
    fn from(cmd: MotorCommand) -> Self {
        cmd.encode()
    }
}

impl TryFrom<[u8; FRAME_LEN]> for MotorCommand {
    type Error = ProtocolError;

    fn try_from(frame: [u8; FRAME_LEN]) -> Result<Self, Self::Error> {
        let selector =
            MotorSelector::try_from(frame[0]).map_err(|e| ProtocolError::InvalidValue {
                field: "selector",
                value: e.number,
            })?;
        let direction = Direction::try_from(frame[1]).map_err(|e| ProtocolError::InvalidValue {
            field: "direction",
            value: e.number,
        })?;
        Self::try_new(selector, direction, frame[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_motor() -> impl Strategy<Value = Motor> {
        prop_oneof![Just(Motor::Left), Just(Motor::Right)]
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Cw), Just(Direction::Ccw)]
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(u8::from(MotorSelector::Left), 0x00);
        assert_eq!(u8::from(MotorSelector::Right), 0x02);
        assert_eq!(u8::from(MotorSelector::All), 0xFF);
        assert_eq!(u8::from(Direction::Cw), 0x00);
        assert_eq!(u8::from(Direction::Ccw), 0x01);
    }

    #[test]
    fn test_stop_frame_forces_cw() {
        assert_eq!(MotorCommand::stop(Motor::Right).encode(), [0x02, 0x00, 0x00]);
        assert!(MotorCommand::stop(Motor::Left).is_stop());
    }

    #[test]
    fn test_all_selector_rejected_for_run() {
        let err = MotorCommand::try_new(MotorSelector::All, Direction::Cw, 100).unwrap_err();
        assert_eq!(err, ProtocolError::UnsupportedSelector(MotorSelector::All));

        // 线上出现 ALL 同样拒绝
        assert!(MotorCommand::decode(&[0xFF, 0x00, 0x00]).is_err());
    }

    #[test]
    fn test_selector_expansion_order() {
        assert_eq!(MotorSelector::All.motors(), &[Motor::Left, Motor::Right]);
        assert_eq!(MotorSelector::Right.motors(), &[Motor::Right]);
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(
            MotorCommand::decode(&[0x00, 0x00]),
            Err(ProtocolError::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            MotorCommand::decode(&[0x01, 0x00, 0x10]),
            Err(ProtocolError::InvalidValue {
                field: "selector",
                value: 0x01
            })
        );
        assert_eq!(
            MotorCommand::decode(&[0x00, 0x05, 0x10]),
            Err(ProtocolError::InvalidValue {
                field: "direction",
                value: 0x05
            })
        );
    }

    proptest! {
        #[test]
        fn prop_run_frame_layout(
            motor in any_motor(),
            direction in any_direction(),
            speed in any::<u8>(),
        ) {
            let frame = MotorCommand::run(motor, direction, speed).encode();
            prop_assert_eq!(frame[0], motor.code());
            prop_assert_eq!(frame[1], u8::from(direction));
            prop_assert_eq!(frame[2], speed);
            prop_assert_eq!(
                MotorCommand::decode(&frame),
                Ok(MotorCommand::run(motor, direction, speed))
            );
        }
    }
}
