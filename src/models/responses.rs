use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub build: String,
}
