pub mod instr;
pub mod program;

pub use instr::Instr;
pub use program::Program;
