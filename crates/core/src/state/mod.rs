//! Application state module - the in-memory cache the presentation layer reads.

mod cached_entity;
mod state_model;
mod state_store;


pub use cached_entity::CachedEntity;
pub use state_model::AppSnapshot;
pub use state_store::AppStateStore;
