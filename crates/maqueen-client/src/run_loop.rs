//! 协作式主循环
//!
//! 每个 tick 固定两个阶段：先 `poll()` 按键，再执行用户 `step`。
//! tick 内不让出执行权，`step` 应当是非阻塞或耗时有界的，否则会拉长按键响应延迟。
//!
//! 循环没有内置取消机制：唯一的退出路径是 `poll()` 或 `step` 返回错误（fail-fast），
//! 或进程终止。

use crate::dispatcher::ButtonDispatcher;
use crate::error::RuntimeError;
use maqueen_hal::ButtonInput;
use std::convert::Infallible;
use tracing::{error, info, trace};

/// 无 `step` 时使用的回调类型
///
/// ```rust,ignore
/// run_loop.run(None::<NoStep>)?;
/// ```
pub type NoStep = fn() -> anyhow::Result<()>;

pub struct RunLoop<I> {
    dispatcher: ButtonDispatcher<I>,
    ticks: u64,
}

impl<I: ButtonInput> RunLoop<I> {
    pub fn new(dispatcher: ButtonDispatcher<I>) -> Self {
        Self {
            dispatcher,
            ticks: 0,
        }
    }

    pub fn dispatcher(&self) -> &ButtonDispatcher<I> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut ButtonDispatcher<I> {
        &mut self.dispatcher
    }

    /// 已完成的 tick 数
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// 执行一个 tick：`poll()`，然后 `step`
    pub fn tick<F>(&mut self, step: Option<&mut F>) -> Result<(), RuntimeError>
    where
        F: FnMut() -> anyhow::Result<()>,
    {
        trace!("tick {}", self.ticks);
        self.dispatcher.poll()?;
        if let Some(step) = step {
            step().map_err(RuntimeError::Step)?;
        }
        self.ticks += 1;
        Ok(())
    }

    /// 无限循环执行 tick
    ///
    /// 正常情况下不返回；返回值只可能是错误。
    pub fn run<F>(&mut self, step: Option<F>) -> Result<Infallible, RuntimeError>
    where
        F: FnMut() -> anyhow::Result<()>,
    {
        let mut step = step;
        info!("Run loop started (step: {})", step.is_some());
        loop {
            if let Err(e) = self.tick(step.as_mut()) {
                error!("Run loop terminated after {} ticks: {}", self.ticks, e);
                return Err(e);
            }
        }
    }

    pub fn into_dispatcher(self) -> ButtonDispatcher<I> {
        self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maqueen_hal::mock::MockButtons;
    use maqueen_protocol::{ButtonId, PhysicalButton};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_poll_runs_before_step() {
        let buttons = MockButtons::new();
        let mut run_loop = RunLoop::new(ButtonDispatcher::new(buttons.clone()));

        let probe = buttons.clone();
        let mut calls = 0usize;
        let result = run_loop.run(Some(|| {
            calls += 1;
            // 每次 step 之前都已经完成了一次 poll（两次按键读取）
            assert_eq!(probe.reads().len(), calls * 2);
            if calls == 5 {
                anyhow::bail!("done");
            }
            Ok(())
        }));

        assert!(matches!(result, Err(RuntimeError::Step(_))));
        assert_eq!(run_loop.ticks(), 4);
    }

    #[test]
    fn test_handler_error_terminates_loop() {
        let buttons = MockButtons::new();
        let mut dispatcher = ButtonDispatcher::new(buttons.clone());
        dispatcher.register(ButtonId::A, || anyhow::bail!("abort"));
        let mut run_loop = RunLoop::new(dispatcher);

        let steps = Arc::new(AtomicUsize::new(0));
        let s = steps.clone();
        let probe = buttons.clone();
        let result = run_loop.run(Some(move || {
            if s.fetch_add(1, Ordering::SeqCst) == 2 {
                probe.set(true, false);
            }
            Ok(())
        }));

        match result {
            Err(RuntimeError::Handler { button, .. }) => assert_eq!(button, ButtonId::A),
            other => panic!("Expected Handler error, got {other:?}"),
        }
        // 第 4 个 tick 的 poll 失败，step 不再执行
        assert_eq!(steps.load(Ordering::SeqCst), 3);
        assert_eq!(run_loop.ticks(), 3);
    }

    #[test]
    fn test_tick_without_step() {
        let buttons = MockButtons::new();
        let mut run_loop = RunLoop::new(ButtonDispatcher::new(buttons.clone()));
        run_loop.tick(None::<&mut NoStep>).unwrap();
        run_loop.tick(None::<&mut NoStep>).unwrap();
        assert_eq!(run_loop.ticks(), 2);
        assert_eq!(
            buttons.reads(),
            vec![
                PhysicalButton::A,
                PhysicalButton::B,
                PhysicalButton::A,
                PhysicalButton::B
            ]
        );
    }

    #[test]
    fn test_run_without_step_stops_on_input_error() {
        let buttons = MockButtons::new();
        buttons.set_fail_io(true);
        let mut run_loop = RunLoop::new(ButtonDispatcher::new(buttons));
        let result = run_loop.run(None::<NoStep>);
        assert!(matches!(result, Err(RuntimeError::Input(_))));
        assert_eq!(run_loop.ticks(), 0);
    }
}
