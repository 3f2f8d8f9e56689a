//! 引脚角色
//!
//! 逻辑角色在初始化时绑定到物理引脚号，之后不可变。物理编号属于配置，不属于协议。

/// 物理引脚编号（主板边缘连接器编号）
pub type PinId = u8;

/// 逻辑引脚角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinRole {
    LedLeft,
    LedRight,
    PatrolLeft,
    PatrolRight,
    UltrasonicTrigger,
    UltrasonicEcho,
}

impl PinRole {
    pub const ALL: [PinRole; 6] = [
        PinRole::LedLeft,
        PinRole::LedRight,
        PinRole::PatrolLeft,
        PinRole::PatrolRight,
        PinRole::UltrasonicTrigger,
        PinRole::UltrasonicEcho,
    ];

    /// 是否为输出引脚
    pub fn is_output(self) -> bool {
        matches!(
            self,
            Self::LedLeft | Self::LedRight | Self::UltrasonicTrigger
        )
    }
}

/// 板载红色指示灯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedSide {
    Left,
    Right,
}

impl From<LedSide> for PinRole {
    fn from(side: LedSide) -> Self {
        match side {
            LedSide::Left => PinRole::LedLeft,
            LedSide::Right => PinRole::LedRight,
        }
    }
}

/// 指示灯开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LedSwitch {
    TurnOff = 0,
    TurnOn = 1,
}

impl From<LedSwitch> for bool {
    fn from(switch: LedSwitch) -> Self {
        switch == LedSwitch::TurnOn
    }
}

impl From<bool> for LedSwitch {
    fn from(on: bool) -> Self {
        if on { Self::TurnOn } else { Self::TurnOff }
    }
}

/// 巡线传感器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatrolSide {
    Left,
    Right,
}

impl From<PatrolSide> for PinRole {
    fn from(side: PatrolSide) -> Self {
        match side {
            PatrolSide::Left => PinRole::PatrolLeft,
            PatrolSide::Right => PinRole::PatrolRight,
        }
    }
}

/// 两路巡线传感器的组合读数
///
/// 传感器在黑线上读为低电平。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineState {
    /// 两侧都在线上
    Both,
    LeftOnly,
    RightOnly,
    /// 两侧都不在线上
    None,
}

impl LineState {
    /// 由两路原始电平合成（高电平 = 不在线上）
    pub fn from_levels(left_high: bool, right_high: bool) -> Self {
        match (left_high, right_high) {
            (false, false) => Self::Both,
            (false, true) => Self::LeftOnly,
            (true, false) => Self::RightOnly,
            (true, true) => Self::None,
        }
    }
}
