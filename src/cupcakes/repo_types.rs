use serde::Serialize;
use sqlx::FromRow;

/// Cupcake row. Field order here is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Cupcake {
    pub id: i32, // assigned by SERIAL, never rewritten
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}
