// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
A read/write spinlock guarding logger configuration.

Readers are emit calls looking up their writer; the single writer is a setter rebuilding the
writer table.  On the wasm main thread we can't necessarily block, hence spinning.  Both sides
only hold the lock long enough to copy out or swap a few `Arc`s, never while doing I/O.
*/

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const UNLOCKED: u8 = 0;
//we allow for 254 readers or 1 writer (val = 255)
const LOCKED_WRITE: u8 = u8::MAX;

pub(crate) struct Spinlock<T> {
    data: UnsafeCell<T>,
    locked: AtomicU8,
}

// Shared access hands out &T to several threads at once, so T must be Sync as well.
unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send + Sync> Sync for Spinlock<T> {}

impl<T> Spinlock<T> {
    pub(crate) fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            locked: AtomicU8::new(UNLOCKED),
        }
    }

    fn lock_write(&self) {
        while self
            .locked
            .compare_exchange_weak(UNLOCKED, LOCKED_WRITE, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
    }

    fn lock_read(&self) {
        while self
            .locked
            .fetch_update(Acquire, Relaxed, |v| {
                if v < (LOCKED_WRITE - 1) {
                    Some(v + 1)
                } else {
                    None
                }
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
    }

    /// Runs `f` with exclusive access.
    pub(crate) fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.lock_write();
        // Unlocks even if `f` panics, so one bad setter can't wedge every later log call.
        let _unlock = Unlock {
            locked: &self.locked,
            write: true,
        };
        // SAFETY: we hold the write lock, no other reference exists
        unsafe { f(&mut *self.data.get()) }
    }

    /// Runs `f` with shared access.
    pub(crate) fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.lock_read();
        let _unlock = Unlock {
            locked: &self.locked,
            write: false,
        };
        // SAFETY: we hold a read lock, only shared references exist
        unsafe { f(&*self.data.get()) }
    }
}

struct Unlock<'a> {
    locked: &'a AtomicU8,
    write: bool,
}

impl Drop for Unlock<'_> {
    fn drop(&mut self) {
        if self.write {
            self.locked.store(UNLOCKED, Release);
        } else {
            self.locked.fetch_sub(1, Release);
        }
    }
}

impl<T> std::fmt::Debug for Spinlock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinlock")
            .field("locked", &self.locked.load(Relaxed))
            .finish_non_exhaustive()
    }
}
