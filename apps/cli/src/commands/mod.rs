//! 命令定义和实现

pub mod frame;
pub mod range;
pub mod simulate;

pub use frame::FrameCommand;
pub use range::RangeCommand;
pub use simulate::SimulateCommand;
