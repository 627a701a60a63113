pub mod decrypt;
pub mod encrypt;
pub mod frame;
pub mod gap;
pub mod generate;
pub mod info;
pub mod stats;
pub mod validate;

pub use decrypt::*;
pub use encrypt::*;
pub use frame::*;
pub use gap::*;
pub use generate::*;
pub use info::*;
pub use stats::*;
pub use validate::*;
