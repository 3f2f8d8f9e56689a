//! 顶层导出测试
//!
//! 验证核心类型可以从 `maqueen_sdk` 直接导入。

use maqueen_sdk::{
    ButtonDispatcher, DriverError, HalError, MaqueenConfig, ProtocolError, RunLoop, RuntimeError,
};

#[test]
fn test_top_level_exports() {
    let _config: MaqueenConfig = MaqueenConfig::default();
    let _error: DriverError = DriverError::Config("test".to_string());
    let _hal_error: HalError = HalError::NotSupported("test");
    let _protocol_error: ProtocolError = ProtocolError::InvalidLength {
        expected: 3,
        actual: 0,
    };
    let _runtime_error: RuntimeError = RuntimeError::Step(anyhow::anyhow!("test"));

    let _ = std::mem::size_of::<RunLoop<Box<dyn maqueen_sdk::hal::ButtonInput>>>();
    let _ = std::mem::size_of::<ButtonDispatcher<Box<dyn maqueen_sdk::hal::ButtonInput>>>();
}

#[test]
fn test_layer_modules_reachable() {
    use maqueen_sdk::protocol::PERIPHERAL_ADDRESS;
    assert_eq!(PERIPHERAL_ADDRESS, 16);
    assert_eq!(maqueen_sdk::driver::STOP_SETTLE.as_millis(), 10);
}
