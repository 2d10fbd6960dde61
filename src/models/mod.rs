pub mod activity;
pub mod responses;

pub use activity::Activity;
pub use responses::{ErrorDetail, HealthResponse, MessageResponse};
