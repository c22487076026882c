// Utils compartidos

pub mod constants;
pub mod storage;
pub mod cookies;
pub mod colors;

pub use constants::*;
pub use storage::*;
pub use cookies::*;
pub use colors::*;
