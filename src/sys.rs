//! Raw binding to the C decision function
//!
//! The symbol is compiled from `csrc/decision.c` by the build script and
//! resolved at link time. C `bool` is `_Bool`, which has the same layout as
//! Rust's `bool`.

extern "C" {
    /// `(a && b) || c`, implemented in C.
    pub fn decision(a: bool, b: bool, c: bool) -> bool;
}
