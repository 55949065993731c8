//! Allocation-counting global allocator.
//!
//! Install in a test binary with:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: CountingAlloc = CountingAlloc;
//! ```
//!
//! Counters are thread-local. The test harness runs each `#[test]` on its
//! own thread, so tests in the same binary do not see each other's
//! allocations.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

/// Allocation counters for one thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Number of successful allocations (including zeroed ones).
    pub allocations: usize,
    /// Number of deallocations.
    pub deallocations: usize,
    /// Total bytes handed out.
    pub bytes_allocated: usize,
    /// Total bytes returned.
    pub bytes_released: usize,
}

impl AllocStats {
    /// Allocations not yet released. Negative means more releases than
    /// allocations were observed in the window.
    pub fn live(&self) -> isize {
        self.allocations as isize - self.deallocations as isize
    }

    /// Counter deltas between `earlier` and `self`.
    pub fn since(&self, earlier: &AllocStats) -> AllocStats {
        AllocStats {
            allocations: self.allocations - earlier.allocations,
            deallocations: self.deallocations - earlier.deallocations,
            bytes_allocated: self.bytes_allocated - earlier.bytes_allocated,
            bytes_released: self.bytes_released - earlier.bytes_released,
        }
    }
}

thread_local! {
    static STATS: Cell<AllocStats> = const {
        Cell::new(AllocStats {
            allocations: 0,
            deallocations: 0,
            bytes_allocated: 0,
            bytes_released: 0,
        })
    };
}

fn record(update: impl FnOnce(&mut AllocStats)) {
    // Ignore accesses during thread teardown.
    let _ = STATS.try_with(|cell| {
        let mut stats = cell.get();
        update(&mut stats);
        cell.set(stats);
    });
}

/// Snapshot of the current thread's counters.
pub fn thread_stats() -> AllocStats {
    STATS.try_with(Cell::get).unwrap_or_default()
}

/// Run `f` and return its result with the allocations it performed on
/// this thread.
///
/// Only meaningful when [`CountingAlloc`] is the global allocator;
/// otherwise every counter reads zero.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, AllocStats) {
    let before = thread_stats();
    let result = f();
    let after = thread_stats();
    (result, after.since(&before))
}

/// Global allocator that forwards to [`System`] and counts per thread.
pub struct CountingAlloc;

#[allow(unsafe_code)]
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller upholds the GlobalAlloc contract for `layout`.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(|s| {
                s.allocations += 1;
                s.bytes_allocated += layout.size();
            });
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller upholds the GlobalAlloc contract for `layout`.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(|s| {
                s.allocations += 1;
                s.bytes_allocated += layout.size();
            });
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        record(|s| {
            s.deallocations += 1;
            s.bytes_released += layout.size();
        });
        // SAFETY: `ptr` was returned by this allocator (and so by System)
        // with the same `layout`.
        unsafe { System.dealloc(ptr, layout) }
    }
}
