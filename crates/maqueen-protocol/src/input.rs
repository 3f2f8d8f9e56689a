//! 主板输入标识

/// 物理按键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicalButton {
    A,
    B,
}

/// 可注册回调的按键标识
///
/// `AB` 表示 A、B 同时按下。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonId {
    A,
    B,
    AB,
}

impl ButtonId {
    /// 分发优先级（从高到低）
    pub const PRIORITY: [ButtonId; 3] = [ButtonId::AB, ButtonId::A, ButtonId::B];

    /// 给定两个物理按键的状态，该标识是否处于按下状态
    pub fn is_active(self, a_pressed: bool, b_pressed: bool) -> bool {
        match self {
            Self::A => a_pressed,
            Self::B => b_pressed,
            Self::AB => a_pressed && b_pressed,
        }
    }
}

impl From<PhysicalButton> for ButtonId {
    fn from(button: PhysicalButton) -> Self {
        match button {
            PhysicalButton::A => Self::A,
            PhysicalButton::B => Self::B,
        }
    }
}

/// 超声波测距的返回单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PingUnit {
    #[default]
    Centimeters = 0,
    MicroSeconds = 1,
}
