//! Blocklist endpoints

use serde::{Deserialize, Serialize};

use fguard_core::prelude::*;
use fguard_core::{BlockedSite, SiteCategory};

use crate::client::ApiClient;

/// `POST /blocklist` request body.
#[derive(Debug, Serialize)]
struct AddBody<'a> {
    url: &'a str,
    category: &'a str,
}

/// `GET /blocklist` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistPage {
    #[serde(default)]
    pub sites: Vec<BlockedSite>,
    #[serde(default)]
    pub count: usize,
}

/// `POST /blocklist` response; carries the entry the server created.
#[derive(Debug, Clone, Deserialize)]
pub struct AddedSite {
    pub site: BlockedSite,
}

/// `POST /blocklist/preset/{category}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetOutcome {
    pub added_count: u32,
    /// URLs that were actually inserted (already-present ones are skipped
    /// server-side).
    #[serde(default)]
    pub sites: Vec<String>,
}

/// Blocklist namespace of the API client.
pub struct BlocklistApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BlocklistApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /blocklist` - the full current list.
    pub async fn all(&self) -> Result<BlocklistPage> {
        self.client.get_json("blocklist").await
    }

    /// `POST /blocklist` - add a single url.
    ///
    /// The server validates the url and rejects duplicates with a 4xx whose
    /// message ("Invalid URL", "Site already blocked") must reach the user
    /// verbatim; callers surface [`Error::Api`](fguard_core::Error::Api)
    /// accordingly.
    pub async fn add(&self, url: &str, category: &SiteCategory) -> Result<AddedSite> {
        let body = AddBody {
            url,
            category: category.as_str(),
        };
        self.client.post_json("blocklist", &body).await
    }

    /// `DELETE /blocklist/{id}` - remove one entry by server-assigned id.
    pub async fn remove(&self, site_id: i64) -> Result<()> {
        self.client.delete(&format!("blocklist/{site_id}")).await
    }

    /// `POST /blocklist/preset/{category}` - bulk-add a named bundle.
    pub async fn add_preset(&self, category: &SiteCategory) -> Result<PresetOutcome> {
        self.client
            .post_empty(&format!("blocklist/preset/{}", category.as_str()))
            .await
    }
}
