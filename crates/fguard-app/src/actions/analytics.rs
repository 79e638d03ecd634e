//! Analytics load task: three concurrent reads joined before render

use tokio::sync::mpsc;

use fguard_api::ApiClient;

use crate::message::Message;
use crate::state::AnalyticsSnapshot;

/// Issue overview, daily, and streaks concurrently and join them. The view
/// renders only when all three are in; the first failure wins and the view
/// stays loading.
pub(crate) fn spawn_load(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    days: u32,
) {
    tokio::spawn(async move {
        let analytics = api.analytics();
        let (overview, daily, streaks) = tokio::join!(
            analytics.overview(days),
            analytics.daily(days),
            analytics.streaks(),
        );

        let outcome = match (overview, daily, streaks) {
            (Ok(overview), Ok(daily), Ok(streaks)) => Ok(Box::new(AnalyticsSnapshot {
                overview,
                daily,
                streaks,
            })),
            (overview, daily, streaks) => {
                let first_error = [
                    overview.err().map(|e| e.to_string()),
                    daily.err().map(|e| e.to_string()),
                    streaks.err().map(|e| e.to_string()),
                ]
                .into_iter()
                .flatten()
                .next()
                .unwrap_or_else(|| "analytics load failed".to_string());
                Err(first_error)
            }
        };

        let _ = msg_tx
            .send(Message::AnalyticsLoaded {
                generation,
                outcome,
            })
            .await;
    });
}
