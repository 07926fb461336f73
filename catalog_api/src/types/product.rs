use serde::{Deserialize, Serialize};

pub type ProductID = String;

/// A catalog entry as served by the product service. Read-only on this side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductID,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Non-negative by convention; the service does not guarantee it.
    pub price: f64,
    pub image_url: String,
}
