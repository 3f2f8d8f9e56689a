use maqueen_hal::HalError;
use maqueen_protocol::ButtonId;
use thiserror::Error;

/// 按键分发 / 主循环错误
///
/// 回调返回的错误不做隔离，原样向上传播并终止主循环。
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// 读取按键状态失败
    #[error("Button input error: {0}")]
    Input(#[source] HalError),

    #[error("Handler for button {button:?} failed: {source}")]
    Handler {
        button: ButtonId,
        #[source]
        source: anyhow::Error,
    },

    #[error("Step callback failed: {0}")]
    Step(#[source] anyhow::Error),
}
