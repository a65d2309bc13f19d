use std::path::Path;

use prana_lib::build::kernel_ldflags;
use prana_lib::consts::{KERNEL_BUILD_TAG, KERNEL_ENTRY_SYMBOL, KERNEL_LOAD_ADDRESS};
use prana_lib::target::Target;
use prana_lib::toolchain::compiler_path;

use crate::output::print_stat;

pub fn cmd_info(go_root: Option<&Path>) {
  println!("Kernel target:");
  print_stat("Platform", &Target::kernel().to_string());
  print_stat("Entry", KERNEL_ENTRY_SYMBOL);
  print_stat("Load address", &format!("{:#x}", KERNEL_LOAD_ADDRESS));
  print_stat("Build tag", KERNEL_BUILD_TAG);
  print_stat("Linker flags", &kernel_ldflags());
  print_stat("Compiler", &compiler_path(go_root).display().to_string());
}
