//! Mock 硬件
//!
//! 内存模拟设备，用于测试和离线仿真。所有设备都可 `clone`，克隆体共享内部状态，
//! 测试代码保留一份用于注入状态和检查结果。

use crate::{ButtonInput, GpioPort, HalError, HostSensors, I2cBus, MicrosClock, TemperatureSensor};
use maqueen_protocol::{PhysicalButton, PinId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use tracing::trace;

/// 模拟 I2C 总线
///
/// 记录每一次写入的 `(address, bytes)`。
#[derive(Debug, Clone, Default)]
pub struct MockI2c {
    writes: Arc<Mutex<Vec<(u8, Vec<u8>)>>>,
    /// 模拟外设缺失（所有写入返回 NACK）
    absent: Arc<AtomicBool>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_absent(&self, absent: bool) {
        self.absent.store(absent, Ordering::SeqCst);
    }

    /// 已写入的全部帧
    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.writes.lock().clone()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl I2cBus for MockI2c {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), HalError> {
        if self.absent.load(Ordering::SeqCst) {
            return Err(HalError::Nack { address });
        }
        trace!("mock i2c write 0x{:02X}: {:02X?}", address, bytes);
        self.writes.lock().push((address, bytes.to_vec()));
        Ok(())
    }
}

/// 虚拟微秒时钟
///
/// 每次 `now_us()` 返回当前值后自动前进 `step_us`，使忙等循环在没有真实时间流逝的
/// 情况下也能推进。`peek()` 读取而不前进。
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<AtomicU64>,
    step_us: u64,
}

impl MockClock {
    pub fn new(step_us: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(0)),
            step_us,
        }
    }

    pub fn peek(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    pub fn advance(&self, us: u64) {
        self.now.fetch_add(us, Ordering::SeqCst);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MicrosClock for MockClock {
    fn now_us(&self) -> u64 {
        self.now.fetch_add(self.step_us, Ordering::SeqCst)
    }
}

/// 回波脚本
///
/// 时间相对于触发脚下降沿。`rise_after_us` 为 `None` 表示回波永不出现，
/// `fall_after_us` 为 `None` 表示回波一直保持高电平。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoScript {
    pub rise_after_us: Option<u64>,
    pub fall_after_us: Option<u64>,
}

impl EchoScript {
    /// 回波在 `delay_us` 后出现，持续 `width_us`
    pub fn pulse(delay_us: u64, width_us: u64) -> Self {
        Self {
            rise_after_us: Some(delay_us),
            fall_after_us: Some(delay_us + width_us),
        }
    }

    pub fn silent() -> Self {
        Self {
            rise_after_us: None,
            fall_after_us: None,
        }
    }
}

#[derive(Debug, Default)]
struct GpioState {
    levels: HashMap<PinId, bool>,
    writes: Vec<(PinId, bool)>,
    /// 超声波：(trigger, echo, script)
    ranger: Option<(PinId, PinId, EchoScript)>,
    trigger_fall_at: Option<u64>,
}

/// 模拟 GPIO 端口
///
/// 普通引脚读取最近一次 `set_input` 或 `write` 的电平（默认低电平）。
/// 配置了回波脚本后，回波脚的电平由虚拟时钟与触发脚下降沿时刻计算得出。
#[derive(Debug, Clone)]
pub struct MockGpio {
    state: Arc<Mutex<GpioState>>,
    clock: MockClock,
    fail_io: Arc<AtomicBool>,
}

impl MockGpio {
    pub fn new(clock: MockClock) -> Self {
        Self {
            state: Arc::new(Mutex::new(GpioState::default())),
            clock,
            fail_io: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 设置输入脚电平
    pub fn set_input(&self, pin: PinId, high: bool) {
        self.state.lock().levels.insert(pin, high);
    }

    pub fn level(&self, pin: PinId) -> bool {
        self.state.lock().levels.get(&pin).copied().unwrap_or(false)
    }

    /// 配置超声波回波
    pub fn script_echo(&self, trigger: PinId, echo: PinId, script: EchoScript) {
        let mut state = self.state.lock();
        state.ranger = Some((trigger, echo, script));
        state.trigger_fall_at = None;
    }

    /// 所有写入记录（按时间顺序）
    pub fn writes(&self) -> Vec<(PinId, bool)> {
        self.state.lock().writes.clone()
    }

    /// 指定引脚的写入记录
    pub fn writes_to(&self, pin: PinId) -> Vec<bool> {
        self.state
            .lock()
            .writes
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|(_, level)| *level)
            .collect()
    }

    pub fn set_fail_io(&self, fail: bool) {
        self.fail_io.store(fail, Ordering::SeqCst);
    }

    fn check_io(&self, pin: PinId) -> Result<(), HalError> {
        if self.fail_io.load(Ordering::SeqCst) {
            return Err(HalError::InvalidPin { pin });
        }
        Ok(())
    }
}

impl GpioPort for MockGpio {
    fn write(&mut self, pin: PinId, high: bool) -> Result<(), HalError> {
        self.check_io(pin)?;
        let mut state = self.state.lock();
        let was_high = state.levels.insert(pin, high).unwrap_or(false);
        state.writes.push((pin, high));
        if let Some((trigger, _, _)) = state.ranger {
            if pin == trigger && was_high && !high {
                state.trigger_fall_at = Some(self.clock.peek());
            }
        }
        Ok(())
    }

    fn read(&mut self, pin: PinId) -> Result<bool, HalError> {
        self.check_io(pin)?;
        let state = self.state.lock();
        if let Some((_, echo, script)) = state.ranger {
            if pin == echo {
                let Some(fall_at) = state.trigger_fall_at else {
                    return Ok(false);
                };
                let since = self.clock.peek().saturating_sub(fall_at);
                let risen = script.rise_after_us.is_some_and(|rise| since >= rise);
                let fallen = script.fall_after_us.is_some_and(|fall| since >= fall);
                return Ok(risen && !fallen);
            }
        }
        Ok(state.levels.get(&pin).copied().unwrap_or(false))
    }
}

#[derive(Debug)]
struct SensorReadings {
    temperature: f32,
    light_level: u8,
    compass_heading: u16,
}

/// 模拟主板传感器
#[derive(Debug, Clone)]
pub struct MockSensors {
    readings: Arc<Mutex<SensorReadings>>,
    reads: Arc<AtomicUsize>,
}

impl MockSensors {
    pub fn new(temperature: f32) -> Self {
        Self {
            readings: Arc::new(Mutex::new(SensorReadings {
                temperature,
                light_level: 0,
                compass_heading: 0,
            })),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_temperature(&self, celsius: f32) {
        self.readings.lock().temperature = celsius;
    }

    pub fn set_light_level(&self, level: u8) {
        self.readings.lock().light_level = level;
    }

    pub fn set_compass_heading(&self, degrees: u16) {
        self.readings.lock().compass_heading = degrees % 360;
    }

    /// 温度读取次数
    pub fn temperature_reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TemperatureSensor for MockSensors {
    fn temperature_celsius(&self) -> Result<f32, HalError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.readings.lock().temperature)
    }
}

impl HostSensors for MockSensors {
    fn light_level(&self) -> Result<u8, HalError> {
        Ok(self.readings.lock().light_level)
    }

    fn compass_heading(&self) -> Result<u16, HalError> {
        Ok(self.readings.lock().compass_heading)
    }
}

#[derive(Debug, Default)]
struct ButtonState {
    a: bool,
    b: bool,
    reads: Vec<PhysicalButton>,
}

/// 模拟主板按键
#[derive(Debug, Clone, Default)]
pub struct MockButtons {
    state: Arc<Mutex<ButtonState>>,
    fail_io: Arc<AtomicBool>,
}

impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, a: bool, b: bool) {
        let mut state = self.state.lock();
        state.a = a;
        state.b = b;
    }

    pub fn release(&self) {
        self.set(false, false);
    }

    /// 读取记录（按时间顺序）
    pub fn reads(&self) -> Vec<PhysicalButton> {
        self.state.lock().reads.clone()
    }

    pub fn set_fail_io(&self, fail: bool) {
        self.fail_io.store(fail, Ordering::SeqCst);
    }
}

impl ButtonInput for MockButtons {
    fn is_pressed(&mut self, button: PhysicalButton) -> Result<bool, HalError> {
        if self.fail_io.load(Ordering::SeqCst) {
            return Err(HalError::Device(format!("button {button:?} unreadable")));
        }
        let mut state = self.state.lock();
        state.reads.push(button);
        Ok(match button {
            PhysicalButton::A => state.a,
            PhysicalButton::B => state.b,
        })
    }
}
