use crate::MicrosClock;
use std::time::Instant;

/// 基于 `Instant` 的单调时钟，零点为构造时刻
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MicrosClock for SystemClock {
    fn now_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let t1 = clock.now_us();
        std::thread::sleep(Duration::from_millis(2));
        let t2 = clock.now_us();
        assert!(t2 >= t1 + 2_000);
    }
}
