use serde::{Deserialize, Serialize};

/// A user/item association, with an optional strength.
///
/// Used both for single preference updates and for batch ingestion.
/// A missing value lets the server apply its default strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub user_id: u64,
    pub item_id: u64,
    pub value: Option<f64>,
}

impl Preference {
    pub fn new(user_id: u64, item_id: u64) -> Self {
        Self {
            user_id,
            item_id,
            value: None,
        }
    }

    pub fn with_value(user_id: u64, item_id: u64, value: f64) -> Self {
        Self {
            user_id,
            item_id,
            value: Some(value),
        }
    }
}

/// An item paired with its score, as returned by recommendation,
/// similarity, and explanation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item_id: u64,
    pub value: f64,
}

impl From<(u64, f64)> for ScoredItem {
    fn from((item_id, value): (u64, f64)) -> Self {
        Self { item_id, value }
    }
}
