//! A hello world demo with a small arithmetic library.
//!
//! The binary prints a greeting and a few math results, or runs a
//! self test of the helpers with `hello-nx test`.

pub mod config;
pub mod hello;
pub mod math;
pub mod selftest;
pub mod util;

pub use hello::{add, print_hello, write_hello};
