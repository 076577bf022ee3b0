pub mod device;
pub mod fleet;
