//! Compile-time catalog of the remote operations.
//!
//! Each variant carries the typed parameters of one REST endpoint and
//! knows how to render its HTTP verb, path, query string, and body.
//! The anonymous-user operations get an explicit branch in
//! [`Operation::path`] because their `id=weight` segments do not fit
//! the plain join-with-`/` rule the other endpoints follow.

use reqwest::Method;

use crate::ingest;
use crate::models::Preference;

/// One remote operation with its parameters bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<'a> {
    Recommend {
        user_id: u64,
        how_many: Option<usize>,
    },
    RecommendToMany {
        user_ids: &'a [u64],
        how_many: Option<usize>,
    },
    RecommendToAnonymous {
        preferences: &'a [(u64, f64)],
        how_many: Option<usize>,
    },
    Estimate {
        user_id: u64,
        item_ids: &'a [u64],
    },
    EstimateForAnonymous {
        item_id: u64,
        preferences: &'a [(u64, f64)],
        how_many: Option<usize>,
    },
    Similarity {
        item_ids: &'a [u64],
        how_many: Option<usize>,
    },
    SimilarityToItem {
        to_item_id: u64,
        item_ids: &'a [u64],
    },
    MostPopularItems {
        how_many: Option<usize>,
    },
    AllUserIds,
    AllItemIds,
    Because {
        user_id: u64,
        item_id: u64,
    },
    Ingest {
        records: &'a [Preference],
    },
    SetPreference {
        user_id: u64,
        item_id: u64,
        value: Option<f64>,
    },
    RemovePreference {
        user_id: u64,
        item_id: u64,
    },
    SetUserTag {
        user_id: u64,
        tag: &'a str,
        value: Option<f64>,
    },
    RemoveUserTag {
        user_id: u64,
        tag: &'a str,
    },
    SetItemTag {
        item_id: u64,
        tag: &'a str,
        value: Option<f64>,
    },
    RemoveItemTag {
        item_id: u64,
        tag: &'a str,
    },
    Ready,
    Refresh,
}

impl Operation<'_> {
    pub fn method(&self) -> Method {
        match self {
            Operation::Ingest { .. }
            | Operation::SetPreference { .. }
            | Operation::SetUserTag { .. }
            | Operation::SetItemTag { .. }
            | Operation::Refresh => Method::POST,
            Operation::RemovePreference { .. }
            | Operation::RemoveUserTag { .. }
            | Operation::RemoveItemTag { .. } => Method::DELETE,
            _ => Method::GET,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Operation::Recommend { user_id, .. } => format!("/recommend/{}", user_id),
            Operation::RecommendToMany { user_ids, .. } => {
                format!("/recommendToMany{}", id_segments(user_ids))
            }
            Operation::RecommendToAnonymous { preferences, .. } => {
                format!("/recommendToAnonymous{}", weighted_segments(preferences))
            }
            Operation::Estimate { user_id, item_ids } => {
                format!("/estimate/{}{}", user_id, id_segments(item_ids))
            }
            Operation::EstimateForAnonymous {
                item_id,
                preferences,
                ..
            } => format!(
                "/estimateForAnonymous/{}{}",
                item_id,
                weighted_segments(preferences)
            ),
            Operation::Similarity { item_ids, .. } => {
                format!("/similarity{}", id_segments(item_ids))
            }
            Operation::SimilarityToItem {
                to_item_id,
                item_ids,
            } => format!("/similarityToItem/{}{}", to_item_id, id_segments(item_ids)),
            Operation::MostPopularItems { .. } => "/mostPopularItems".to_string(),
            Operation::AllUserIds => "/user/allIDs".to_string(),
            Operation::AllItemIds => "/item/allIDs".to_string(),
            Operation::Because { user_id, item_id } => {
                format!("/because/{}/{}", user_id, item_id)
            }
            Operation::Ingest { .. } => "/ingest".to_string(),
            Operation::SetPreference {
                user_id, item_id, ..
            }
            | Operation::RemovePreference { user_id, item_id } => {
                format!("/pref/{}/{}", user_id, item_id)
            }
            Operation::SetUserTag { user_id, tag, .. }
            | Operation::RemoveUserTag { user_id, tag } => {
                format!("/tag/user/{}/{}", user_id, urlencoding::encode(tag))
            }
            Operation::SetItemTag { item_id, tag, .. }
            | Operation::RemoveItemTag { item_id, tag } => {
                format!("/tag/item/{}/{}", item_id, urlencoding::encode(tag))
            }
            Operation::Ready => "/ready".to_string(),
            Operation::Refresh => "/refresh".to_string(),
        }
    }

    /// Query parameter, if the operation takes one. Only `howMany` is
    /// ever sent, and only when the caller asked for a specific count.
    pub fn query(&self) -> Option<(&'static str, String)> {
        let how_many = match self {
            Operation::Recommend { how_many, .. }
            | Operation::RecommendToMany { how_many, .. }
            | Operation::RecommendToAnonymous { how_many, .. }
            | Operation::EstimateForAnonymous { how_many, .. }
            | Operation::Similarity { how_many, .. }
            | Operation::MostPopularItems { how_many } => *how_many,
            _ => None,
        };
        how_many.map(|count| ("howMany", count.to_string()))
    }

    pub fn body(&self) -> Option<String> {
        match self {
            Operation::Ingest { records } => Some(ingest::encode(records)),
            Operation::SetPreference { value, .. } => value.map(|v| v.to_string()),
            Operation::SetUserTag { value, .. } | Operation::SetItemTag { value, .. } => {
                // The server treats a tag without an explicit weight as 1.0.
                Some(match value {
                    Some(v) => v.to_string(),
                    None => "1.0".to_string(),
                })
            }
            _ => None,
        }
    }
}

fn id_segments(ids: &[u64]) -> String {
    ids.iter().fold(String::new(), |mut path, id| {
        path.push('/');
        path.push_str(&id.to_string());
        path
    })
}

fn weighted_segments(preferences: &[(u64, f64)]) -> String {
    preferences.iter().fold(String::new(), |mut path, (id, weight)| {
        path.push_str(&format!("/{}={:.6}", id, weight));
        path
    })
}
