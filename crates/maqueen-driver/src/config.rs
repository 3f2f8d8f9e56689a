//! # 驱动配置
//!
//! 引脚绑定与超声波测距参数。可从 TOML 加载：
//!
//! ```toml
//! [pins]
//! led_left = 8
//! led_right = 12
//! patrol_left = 13
//! patrol_right = 14
//! trigger = 1
//! echo = 2
//!
//! [ranger]
//! timeout_us = 30000
//! poll_interval_us = 1
//! ```
//!
//! 缺省字段使用默认值。

use crate::error::DriverError;
use maqueen_protocol::{PinId, PinRole};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// 驱动配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaqueenConfig {
    /// 引脚绑定
    pub pins: PinMap,

    /// 超声波测距参数
    pub ranger: RangerConfig,
}

impl MaqueenConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DriverError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, DriverError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DriverError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DriverError> {
        self.pins.validate()?;
        self.ranger.validate()
    }
}

/// 逻辑角色到物理引脚的绑定
///
/// 默认值对应主板边缘连接器上的标准接线。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinMap {
    pub led_left: PinId,
    pub led_right: PinId,
    pub patrol_left: PinId,
    pub patrol_right: PinId,
    pub trigger: PinId,
    pub echo: PinId,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            led_left: 8,
            led_right: 12,
            patrol_left: 13,
            patrol_right: 14,
            trigger: 1,
            echo: 2,
        }
    }
}

impl PinMap {
    /// 解析角色对应的物理引脚
    pub fn pin(&self, role: PinRole) -> PinId {
        match role {
            PinRole::LedLeft => self.led_left,
            PinRole::LedRight => self.led_right,
            PinRole::PatrolLeft => self.patrol_left,
            PinRole::PatrolRight => self.patrol_right,
            PinRole::UltrasonicTrigger => self.trigger,
            PinRole::UltrasonicEcho => self.echo,
        }
    }

    /// 检查每个角色绑定到不同的引脚
    pub fn validate(&self) -> Result<(), DriverError> {
        for (i, a) in PinRole::ALL.iter().enumerate() {
            for b in &PinRole::ALL[i + 1..] {
                if self.pin(*a) == self.pin(*b) {
                    return Err(DriverError::Config(format!(
                        "{a:?} and {b:?} are both bound to pin {}",
                        self.pin(*a)
                    )));
                }
            }
        }
        Ok(())
    }
}

/// 超声波测距参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangerConfig {
    /// 单个等待阶段（回波上升 / 回波下降）的超时（微秒）
    ///
    /// 30ms 对应约 5m 的往返距离，超出传感器量程。
    pub timeout_us: u32,

    /// 忙等轮询间隔（微秒），0 表示纯自旋
    pub poll_interval_us: u64,
}

impl Default for RangerConfig {
    fn default() -> Self {
        Self {
            timeout_us: 30_000,
            poll_interval_us: 1,
        }
    }
}

impl RangerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_micros(self.poll_interval_us)
    }

    pub fn validate(&self) -> Result<(), DriverError> {
        if self.timeout_us == 0 {
            return Err(DriverError::Config(
                "ranger.timeout_us must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
