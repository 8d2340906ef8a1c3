pub mod common;
pub mod error;
pub mod ownership;

#[cfg(not(target_arch = "wasm32"))]
pub mod testing;
