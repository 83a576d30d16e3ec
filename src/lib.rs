//! An interpreter for the Universal Machine (UM): a 14-opcode virtual
//! machine with eight 32-bit registers and a segmented memory of 32-bit
//! words. See `machine::run` for the entry point.

pub mod bitpack;
pub mod cli;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod machine;
pub mod memory;
pub mod registers;

pub use error::UmError;
