//! Various collections of unit tests
//!
//! The broadest checks come from fuzzing against the [`Mock`](crate::mock::Mock), but each failure
//! found that way is kept as a unit test here as well.

/// Edge cases and error handling
mod manual;
/// Seeded random workloads, checked against the mock after every step
mod random;
