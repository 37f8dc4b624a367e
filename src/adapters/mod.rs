// Adapters layer: concrete implementations of the domain ports.

pub mod local_store;
pub mod seed;

pub use local_store::LocalStore;
pub use seed::HttpSeedPipeline;
