//! High-level facade over the Myrrix REST API: one method per remote
//! operation, typed arguments in, decoded results out.

use crate::client::MyrrixClient;
use crate::error::Result;
use crate::models::{Preference, ScoredItem};
use crate::operation::Operation;

pub struct MyrrixService {
    client: MyrrixClient,
}

impl Default for MyrrixService {
    fn default() -> Self {
        Self {
            client: MyrrixClient::default(),
        }
    }
}

impl MyrrixService {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            client: MyrrixClient::new(host, port),
        }
    }

    pub fn with_credentials(host: &str, port: u16, username: &str, password: &str) -> Self {
        Self {
            client: MyrrixClient::builder(host, port)
                .credentials(username, password)
                .build(),
        }
    }

    pub fn from_client(client: MyrrixClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &MyrrixClient {
        &self.client
    }

    /// Recommends items to a known user, best first.
    ///
    /// `how_many` caps the result count; `None` leaves it to the
    /// server default.
    pub async fn recommend(
        &self,
        user_id: u64,
        how_many: Option<usize>,
    ) -> Result<Vec<ScoredItem>> {
        self.scored(Operation::Recommend { user_id, how_many }).await
    }

    /// Recommends items suited to all of the given users at once.
    pub async fn recommend_to_many(
        &self,
        user_ids: &[u64],
        how_many: Option<usize>,
    ) -> Result<Vec<ScoredItem>> {
        self.scored(Operation::RecommendToMany { user_ids, how_many })
            .await
    }

    /// Recommends items to a user the server has no profile for,
    /// inferring their taste from ad-hoc `(item, weight)` preferences.
    pub async fn recommend_to_anonymous(
        &self,
        preferences: &[(u64, f64)],
        how_many: Option<usize>,
    ) -> Result<Vec<ScoredItem>> {
        self.scored(Operation::RecommendToAnonymous {
            preferences,
            how_many,
        })
        .await
    }

    /// Estimates the user's preference score for each of the items,
    /// in the order the items were given.
    pub async fn estimate(&self, user_id: u64, item_ids: &[u64]) -> Result<Vec<f64>> {
        self.client
            .fetch_floats(&Operation::Estimate { user_id, item_ids })
            .await
    }

    /// Estimates an anonymous user's score for one item.
    pub async fn estimate_for_anonymous(
        &self,
        item_id: u64,
        preferences: &[(u64, f64)],
        how_many: Option<usize>,
    ) -> Result<f64> {
        self.client
            .fetch_scalar(&Operation::EstimateForAnonymous {
                item_id,
                preferences,
                how_many,
            })
            .await
    }

    /// Items most similar to the given items.
    pub async fn similar_items(
        &self,
        item_ids: &[u64],
        how_many: Option<usize>,
    ) -> Result<Vec<ScoredItem>> {
        self.scored(Operation::Similarity { item_ids, how_many }).await
    }

    /// Similarity of each of `item_ids` to `to_item_id`, in input order.
    pub async fn similarity_to_item(&self, to_item_id: u64, item_ids: &[u64]) -> Result<Vec<f64>> {
        self.client
            .fetch_floats(&Operation::SimilarityToItem {
                to_item_id,
                item_ids,
            })
            .await
    }

    pub async fn most_popular_items(&self, how_many: Option<usize>) -> Result<Vec<ScoredItem>> {
        self.scored(Operation::MostPopularItems { how_many }).await
    }

    /// Explains a recommendation: the associations that most drove the
    /// item's score for this user.
    pub async fn because(&self, user_id: u64, item_id: u64) -> Result<Vec<ScoredItem>> {
        self.scored(Operation::Because { user_id, item_id }).await
    }

    pub async fn all_user_ids(&self) -> Result<Vec<u64>> {
        self.client.fetch_json(&Operation::AllUserIds).await
    }

    pub async fn all_item_ids(&self) -> Result<Vec<u64>> {
        self.client.fetch_json(&Operation::AllItemIds).await
    }

    /// Sets a preference between a user and an item. A `None` value
    /// sends no body and lets the server apply its default strength.
    pub async fn set_preference(
        &self,
        user_id: u64,
        item_id: u64,
        value: Option<f64>,
    ) -> Result<bool> {
        self.client
            .run(&Operation::SetPreference {
                user_id,
                item_id,
                value,
            })
            .await
    }

    /// Uploads preferences in bulk through the ingest endpoint.
    pub async fn set_preferences(&self, records: &[Preference]) -> Result<bool> {
        self.client.run(&Operation::Ingest { records }).await
    }

    pub async fn remove_preference(&self, user_id: u64, item_id: u64) -> Result<bool> {
        self.client
            .run(&Operation::RemovePreference { user_id, item_id })
            .await
    }

    /// Attaches a tag to a user. An absent value defaults to weight 1.0.
    pub async fn set_user_tag(&self, user_id: u64, tag: &str, value: Option<f64>) -> Result<bool> {
        self.client
            .run(&Operation::SetUserTag {
                user_id,
                tag,
                value,
            })
            .await
    }

    pub async fn remove_user_tag(&self, user_id: u64, tag: &str) -> Result<bool> {
        self.client
            .run(&Operation::RemoveUserTag { user_id, tag })
            .await
    }

    /// Attaches a tag to an item. An absent value defaults to weight 1.0.
    pub async fn set_item_tag(&self, item_id: u64, tag: &str, value: Option<f64>) -> Result<bool> {
        self.client
            .run(&Operation::SetItemTag {
                item_id,
                tag,
                value,
            })
            .await
    }

    pub async fn remove_item_tag(&self, item_id: u64, tag: &str) -> Result<bool> {
        self.client
            .run(&Operation::RemoveItemTag { item_id, tag })
            .await
    }

    /// Asks the server to rebuild its model. May take a while to take
    /// effect; the call itself returns as soon as the request is accepted.
    pub async fn refresh(&self) -> Result<bool> {
        self.client.run(&Operation::Refresh).await
    }

    /// Whether the server is ready to answer requests.
    pub async fn is_ready(&self) -> Result<bool> {
        self.client.run(&Operation::Ready).await
    }

    async fn scored(&self, op: Operation<'_>) -> Result<Vec<ScoredItem>> {
        let pairs: Vec<(u64, f64)> = self.client.fetch_json(&op).await?;
        Ok(pairs.into_iter().map(ScoredItem::from).collect())
    }
}
