pub mod manager;
pub mod memory;
pub mod traits;

// Disk-backed store
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
