/// Build tag every kernel image must be compiled with
pub const KERNEL_BUILD_TAG: &str = "eggos";

/// Fully-qualified symbol the linker uses as the image entry point
pub const KERNEL_ENTRY_SYMBOL: &str = "github.com/icexin/eggos/kernel.rt0";

/// Physical address the image is linked at (1 MiB)
pub const KERNEL_LOAD_ADDRESS: u64 = 0x100000;

/// File name of the overlay descriptor inside the scratch directory
pub const OVERLAY_FILENAME: &str = "overlay.json";

/// Prefix for scratch directories created by the builder
pub const SCRATCH_PREFIX: &str = "eggos-build";

/// Name of the compiler binary inside `<goroot>/bin`
pub const COMPILER_NAME: &str = "go";
