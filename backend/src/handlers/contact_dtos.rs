use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}
