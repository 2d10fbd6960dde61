pub mod activity_registry;
pub mod seed_activities;

pub use activity_registry::ActivityRegistry;
