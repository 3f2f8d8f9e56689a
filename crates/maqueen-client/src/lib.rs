//! # Maqueen Client
//!
//! 主板侧的事件驱动封装：
//!
//! - [`ButtonDispatcher`]: 按键到回调的映射，每次轮询最多触发一个回调
//! - [`RunLoop`]: 单线程协作式主循环（poll → step）
//! - [`Input`]: 主板传感器的直接转发
//!
//! # 示例
//!
//! ```rust
//! use maqueen_client::{ButtonDispatcher, RunLoop, RuntimeError};
//! use maqueen_hal::mock::MockButtons;
//! use maqueen_protocol::ButtonId;
//!
//! let buttons = MockButtons::new();
//! let mut dispatcher = ButtonDispatcher::new(buttons.clone());
//! dispatcher.register(ButtonId::A, || {
//!     println!("A pressed");
//!     Ok(())
//! });
//!
//! let mut run_loop = RunLoop::new(dispatcher);
//! let mut remaining = 3;
//! let result = run_loop.run(Some(|| {
//!     remaining -= 1;
//!     anyhow::ensure!(remaining > 0, "finished");
//!     Ok(())
//! }));
//! assert!(matches!(result, Err(RuntimeError::Step(_))));
//! ```

mod dispatcher;
mod error;
pub mod input;
mod run_loop;

pub use dispatcher::{ButtonDispatcher, Handler};
pub use error::RuntimeError;
pub use input::{Input, pause, pause_ms};
pub use run_loop::{NoStep, RunLoop};
