pub mod contract;
pub mod execute_admin;
pub mod execute_sale;
#[cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
pub mod mock;

mod state;
