//! 按键分发器
//!
//! 维护 `ButtonId -> 回调` 映射。每次 `poll()` 读取 A、B 两个物理按键，
//! 按 `AB > A > B` 的优先级最多触发一个已注册的回调。
//!
//! # 优先级细节
//!
//! A、B 同时按下但没有注册 `AB` 回调时，会继续匹配 `A`（若已注册），
//! 再匹配 `B`。这一回退行为是有意保留的。

use crate::error::RuntimeError;
use maqueen_hal::{ButtonInput, HalError};
use maqueen_protocol::{ButtonId, PhysicalButton};
use std::collections::HashMap;
use tracing::{debug, trace};

/// 按键回调
pub type Handler = Box<dyn FnMut() -> anyhow::Result<()> + Send>;

pub struct ButtonDispatcher<I> {
    input: I,
    handlers: HashMap<ButtonId, Handler>,
}

impl<I: ButtonInput> ButtonDispatcher<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            handlers: HashMap::new(),
        }
    }

    /// 注册回调，覆盖同一按键上已有的回调
    pub fn register<F>(&mut self, button: ButtonId, handler: F)
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        if self.handlers.insert(button, Box::new(handler)).is_some() {
            debug!("Replaced handler for button {:?}", button);
        } else {
            debug!("Registered handler for button {:?}", button);
        }
    }

    /// 移除回调，返回之前是否已注册
    pub fn unregister(&mut self, button: ButtonId) -> bool {
        self.handlers.remove(&button).is_some()
    }

    pub fn is_registered(&self, button: ButtonId) -> bool {
        self.handlers.contains_key(&button)
    }

    /// 直接读取单个物理按键
    pub fn is_pressed(&mut self, button: PhysicalButton) -> Result<bool, HalError> {
        self.input.is_pressed(button)
    }

    /// 轮询一次
    ///
    /// 返回被触发的按键标识；没有匹配时返回 `Ok(None)`。
    /// 回调返回的错误包装为 [`RuntimeError::Handler`] 直接返回。
    pub fn poll(&mut self) -> Result<Option<ButtonId>, RuntimeError> {
        let a = self
            .input
            .is_pressed(PhysicalButton::A)
            .map_err(RuntimeError::Input)?;
        let b = self
            .input
            .is_pressed(PhysicalButton::B)
            .map_err(RuntimeError::Input)?;
        trace!("poll: a={} b={}", a, b);

        for button in ButtonId::PRIORITY {
            if !button.is_active(a, b) {
                continue;
            }
            if let Some(handler) = self.handlers.get_mut(&button) {
                debug!("Dispatching button {:?}", button);
                handler().map_err(|source| RuntimeError::Handler { button, source })?;
                return Ok(Some(button));
            }
        }
        Ok(None)
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
