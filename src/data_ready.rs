//! Data-ready signalling between the application's interrupt path and the
//! driver.
//!
//! The driver never installs an interrupt handler. The application declares a
//! [`DataReady`] in a `static`, wires its INT-pin handler (or an async GPIO
//! task) to [`DataReady::notify`], and lends the flag to the driver at
//! construction. [`notify`](DataReady::notify) is the only operation the
//! interrupt side needs; the driver is the only consumer and clears the flag
//! when it reads a frame.
//!
//! Two devices on one bus take two statics and two drivers.

use portable_atomic::{AtomicBool, Ordering};

/// Level flag set by the interrupt path, cleared by the driver.
///
/// ```
/// # use mpu6050_fusion::data_ready::DataReady;
/// static DATA_READY: DataReady = DataReady::new();
///
/// // interrupt handler or GPIO task:
/// DATA_READY.notify();
/// ```
#[derive(Debug)]
pub struct DataReady {
    flag: AtomicBool,
}

impl DataReady {
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Mark a sample as ready. Call this from the INT-pin edge handler.
    pub fn notify(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether an interrupt has fired since the flag was last cleared.
    /// Never clears.
    pub fn ready(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Consume the flag. Driver-side only, from `read_raw`.
    pub(crate) fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Default for DataReady {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::DataReady;

    #[test]
    fn notify_then_consume() {
        let flag = DataReady::new();
        assert!(!flag.ready());

        flag.notify();
        assert!(flag.ready());
        // reading the level leaves it set
        assert!(flag.ready());

        flag.clear();
        assert!(!flag.ready());
    }

    #[test]
    fn repeated_notifies_coalesce() {
        let flag = DataReady::new();
        flag.notify();
        flag.notify();
        assert!(flag.ready());
        flag.clear();
        assert!(!flag.ready());
    }

    #[test]
    fn flags_are_independent() {
        let a = DataReady::new();
        let b = DataReady::new();
        a.notify();
        assert!(a.ready());
        assert!(!b.ready());
    }
}
