//! embedded-hal 1.0 适配

use crate::{HalError, I2cBus};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// 将任意 `embedded_hal::i2c::I2c` 实现包装为 [`I2cBus`]
///
/// ```rust,ignore
/// let twim = Twim::new(board.TWIM0, board.i2c_external.into(), twim::Frequency::K100);
/// let bus = EhI2c::new(twim);
/// ```
#[derive(Debug)]
pub struct EhI2c<T> {
    inner: T,
}

impl<T> EhI2c<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: I2c + Send> I2cBus for EhI2c<T> {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), HalError> {
        self.inner
            .write(address, bytes)
            .map_err(|e| map_error_kind(address, e.kind()))
    }
}

fn map_error_kind(address: u8, kind: ErrorKind) -> HalError {
    match kind {
        ErrorKind::NoAcknowledge(_) => HalError::Nack { address },
        other => HalError::Device(format!("{other:?}")),
    }
}
