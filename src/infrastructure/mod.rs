pub mod client;
pub mod desktop;
pub mod storage;
