use serde::{Deserialize, Serialize};

use super::repo_types::Cupcake;

#[derive(Debug, Deserialize)]
pub struct CreateCupcakeRequest {
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

/// PATCH body; any subset of the fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCupcakeRequest {
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CupcakeResponse {
    pub cupcake: Cupcake,
}

#[derive(Debug, Serialize)]
pub struct CupcakeListResponse {
    pub cupcakes: Vec<Cupcake>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}
