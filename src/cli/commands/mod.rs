mod command_result;
pub mod push;

pub use command_result::*;
