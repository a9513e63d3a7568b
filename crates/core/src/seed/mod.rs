//! Seeding - demo records and the routine that writes them to a fresh store.

mod seed_data;
mod seed_service;

pub use seed_data::{demo_dataset, DemoDataset};
pub use seed_service::{seed_remote_store, SeedReport};
