//! prana-lib: build orchestration for freestanding kernel images
//!
//! This crate drives the go toolchain to produce images that boot without an
//! operating system underneath them:
//! - `Config`: what the caller wants built
//! - `Builder`: resolves scratch space, assembles arguments, runs the compiler
//! - `Target`: the fixed platform every image is cross-compiled for
//! - `OverlayDescriptor`: per-build source substitutions handed to the compiler

pub mod build;
pub mod consts;
pub mod overlay;
pub mod target;
pub mod toolchain;
pub mod util;

pub use build::{BuildError, Builder, Config, Executor, Invocation, ProcessExecutor};
