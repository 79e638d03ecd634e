//! Blocklist tasks: fetch, add, remove, preset bulk-add

use tokio::sync::mpsc;

use fguard_api::ApiClient;
use fguard_core::SiteCategory;

use crate::message::Message;

pub(crate) fn spawn_fetch(api: ApiClient, msg_tx: mpsc::Sender<Message>, generation: u64) {
    tokio::spawn(async move {
        let outcome = api
            .blocklist()
            .all()
            .await
            .map(|page| page.sites)
            .map_err(|e| e.to_string());
        let _ = msg_tx
            .send(Message::BlocklistFetched {
                generation,
                outcome,
            })
            .await;
    });
}

pub(crate) fn spawn_add(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    url: String,
    category: SiteCategory,
) {
    tokio::spawn(async move {
        // A 4xx carries the server's message ("Invalid URL", "Site already
        // blocked"); anything else falls back to a generic string in the
        // handler's notice.
        let outcome = api
            .blocklist()
            .add(&url, &category)
            .await
            .map(|_| ())
            .map_err(|e| match e.api_message() {
                Some(message) => message.to_string(),
                None => "Failed to add site".to_string(),
            });
        let _ = msg_tx
            .send(Message::SiteAdded {
                generation,
                outcome,
            })
            .await;
    });
}

pub(crate) fn spawn_remove(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    site_id: i64,
) {
    tokio::spawn(async move {
        let outcome = api
            .blocklist()
            .remove(site_id)
            .await
            .map_err(|e| e.to_string());
        let _ = msg_tx
            .send(Message::SiteRemoved {
                generation,
                outcome,
            })
            .await;
    });
}

pub(crate) fn spawn_add_preset(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    category: SiteCategory,
) {
    tokio::spawn(async move {
        let outcome = api
            .blocklist()
            .add_preset(&category)
            .await
            .map(|o| o.added_count)
            .map_err(|e| e.to_string());
        let _ = msg_tx
            .send(Message::PresetAdded {
                generation,
                category,
                outcome,
            })
            .await;
    });
}
