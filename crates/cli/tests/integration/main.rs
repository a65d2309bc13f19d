//! CLI integration tests that drive builds through a fake toolchain.

#![cfg(unix)]

mod build_tests;
mod common;
