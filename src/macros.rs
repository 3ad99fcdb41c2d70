//! A small handful of helper macros

#[cfg(test)]
use std::cell::Cell;

// Per-thread, so that a test turning it on doesn't pick up trace output from the tests running
// alongside it.
#[cfg(test)]
thread_local! {
    pub(crate) static DEBUG: Cell<bool> = Cell::new(false);
}

#[cfg(test)]
macro_rules! enable_debug {
    () => {{
        $crate::macros::DEBUG.with(|d| d.set(true));
    }};
}

#[cfg(test)]
macro_rules! disable_debug {
    () => {{
        $crate::macros::DEBUG.with(|d| d.set(false));
    }};
}

// Trace output for tests. Outside of `cfg(test)` this expands to nothing, and the arguments are
// never evaluated.
macro_rules! debug_println {
    ($($args:tt)*) => {
        #[cfg(test)]
        {
            if $crate::macros::DEBUG.with(|d| d.get()) {
                println!($($args)*);
            }
        };
    };
}

// Assertions used by `validate`, reporting the path from the root to the failing node.
#[cfg(any(test, feature = "fuzz"))]
macro_rules! valid_assert {
    ($path:ident: $cond:expr) => {
        if !$cond {
            panic!(
                concat!("assertion failed: `", stringify!($cond), "` for path {:?}"),
                $path
            );
        }
    };
}

#[cfg(any(test, feature = "fuzz"))]
macro_rules! valid_assert_eq {
    ($path:ident: $lhs:expr, $rhs:expr) => {
        let left = $lhs;
        let right = $rhs;
        if left != right {
            panic!(
                concat!(
                    "assertion failed: `",
                    stringify!($lhs == $rhs),
                    "` for path {:?}:\n",
                    " left: {:?}\n",
                    "right: {:?}",
                ),
                $path, left, right,
            );
        }
    };
}
