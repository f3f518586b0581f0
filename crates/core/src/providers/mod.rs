pub mod traits;

// Provider implementations
pub mod fixture;
pub mod http;
