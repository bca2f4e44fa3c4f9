//! Thread-local error indicator for the legacy entry points.
//!
//! Mirrors C's `errno`: [`sqrt`](crate::sqrt) stores [`Errno::Domain`] here when given a
//! negative input, and callers read it back after the call. Each thread has its own
//! slot, so concurrent domain errors on different threads never race. Successful calls
//! never clear the slot; use [`clear_errno`] or [`take_errno`] before a call whose
//! outcome you want to check.

use std::cell::Cell;
use std::fmt;

thread_local! {
    static ERRNO: Cell<Option<Errno>> = const { Cell::new(None) };
}

/// Values the indicator can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Errno {
    /// Argument outside the domain of the function (`EDOM`).
    Domain,
}

impl Errno {
    /// The POSIX error number for this value.
    pub const fn code(self) -> i32 {
        match self {
            Self::Domain => 33,
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => write!(f, "numerical argument out of domain"),
        }
    }
}

/// Returns the current thread's indicator without clearing it.
pub fn errno() -> Option<Errno> {
    ERRNO.with(Cell::get)
}

pub fn set_errno(value: Errno) {
    ERRNO.with(|slot| slot.set(Some(value)));
}

pub fn clear_errno() {
    ERRNO.with(|slot| slot.set(None));
}

/// Returns the current thread's indicator and resets it.
pub fn take_errno() -> Option<Errno> {
    ERRNO.with(Cell::take)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use std::sync::{Arc, Barrier};
    use std::thread;

    use super::*;

    #[test]
    fn starts_empty_and_round_trips() {
        clear_errno();
        assert_eq!(errno(), None);
        set_errno(Errno::Domain);
        assert_eq!(errno(), Some(Errno::Domain));
        // reading does not clear
        assert_eq!(errno(), Some(Errno::Domain));
        clear_errno();
        assert_eq!(errno(), None);
    }

    #[test]
    fn take_resets() {
        set_errno(Errno::Domain);
        assert_eq!(take_errno(), Some(Errno::Domain));
        assert_eq!(take_errno(), None);
    }

    #[test]
    fn edom_code_and_display() {
        assert_eq!(Errno::Domain.code(), 33);
        assert_eq!(Errno::Domain.to_string(), "numerical argument out of domain");
    }

    #[test]
    fn indicator_is_per_thread() {
        let barrier = Arc::new(Barrier::new(2));

        let setter = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                set_errno(Errno::Domain);
                barrier.wait();
                errno()
            })
        };
        let observer = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                errno()
            })
        };

        assert_eq!(setter.join().expect("setter thread panicked"), Some(Errno::Domain));
        assert_eq!(observer.join().expect("observer thread panicked"), None);
    }
}
