//! Kernel image builds.
//!
//! This module turns a caller's [`Config`] into a single compiler run:
//!
//! - [`tags`] - decides how the kernel build tag reaches the compiler
//! - [`args`] - assembles the compiler's argument list
//! - [`execute`] - runs the compiler with inherited stdio
//! - [`builder`] - owns the scratch directory and sequences the build

pub mod args;
pub mod builder;
pub mod execute;
pub mod tags;
mod types;

pub use args::{BuildMode, compiler_args, kernel_ldflags};
pub use builder::Builder;
pub use execute::{Executor, Invocation, ProcessExecutor};
pub use tags::{TagPlan, plan_tags};
pub use types::{BuildError, Config};
