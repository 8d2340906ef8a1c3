#[cfg(not(target_arch = "wasm32"))]
pub mod mock;
#[cfg(not(target_arch = "wasm32"))]
pub mod mock_builder;
#[cfg(not(target_arch = "wasm32"))]
pub mod mock_contract;

#[cfg(not(target_arch = "wasm32"))]
pub use mock::{MockApp, MockG8s};
#[cfg(not(target_arch = "wasm32"))]
pub use mock_builder::MockG8sBuilder;
#[cfg(not(target_arch = "wasm32"))]
pub use mock_contract::{MockContract, MockOwnable};
