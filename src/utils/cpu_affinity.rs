//! Optional CPU pinning for benchmark workers.
//!
//! With `--pin`, each worker thread is fixed to the core it starts on so the
//! scheduler cannot migrate it mid-sort. Linux uses `sched_setaffinity`
//! through libc; on other platforms pinning is a no-op that reports failure.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Get the current CPU core the thread is running on
    pub fn get_current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Save the current CPU affinity mask
    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
                true
            } else {
                false
            }
        }
    }

    /// Pin to a specific core
    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    /// Restore the saved CPU affinity (unpin)
    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn get_current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

/// Pin the current thread to the core it is currently running on.
///
/// # Returns
/// The core ID that was pinned to, or `None` if pinning failed.
pub fn pin_to_current_core() -> Option<usize> {
    let current = platform::get_current_cpu()?;
    if platform::save_affinity() && platform::set_affinity(current) {
        Some(current)
    } else {
        None
    }
}

/// Unpin the current thread, restoring its original CPU affinity.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// The thread is unpinned when the guard goes out of scope, even if the
/// algorithm under test panics.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    /// Create a new guard that pins to the current CPU core.
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
