//! Analytics endpoints (read-only)

use serde::Deserialize;

use fguard_core::prelude::*;
use fguard_core::{AnalyticsOverview, DailyPoint, SessionRecord, StreakInfo};

use crate::client::ApiClient;

/// Wrapper for endpoints that nest their payload under `data`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// `GET /analytics/history` response.
#[derive(Debug, Deserialize)]
struct HistoryPage {
    #[serde(default)]
    sessions: Vec<SessionRecord>,
}

/// Analytics namespace of the API client. All reads, no mutation.
pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /analytics/overview?days=N` - aggregate over a trailing window.
    pub async fn overview(&self, days: u32) -> Result<AnalyticsOverview> {
        self.client
            .get_json::<Envelope<AnalyticsOverview>>(&format!("analytics/overview?days={days}"))
            .await
            .map(|e| e.data)
    }

    /// `GET /analytics/daily?days=N` - per-day minutes, up to 30 days.
    pub async fn daily(&self, days: u32) -> Result<Vec<DailyPoint>> {
        self.client
            .get_json::<Envelope<Vec<DailyPoint>>>(&format!("analytics/daily?days={days}"))
            .await
            .map(|e| e.data)
    }

    /// `GET /analytics/streaks` - current/best consecutive-day counts.
    pub async fn streaks(&self) -> Result<StreakInfo> {
        // Streak fields sit at the response root, not under `data`.
        self.client.get_json("analytics/streaks").await
    }

    /// `GET /analytics/history?limit=N` - most recent sessions, newest first.
    pub async fn history(&self, limit: u32) -> Result<Vec<SessionRecord>> {
        self.client
            .get_json::<HistoryPage>(&format!("analytics/history?limit={limit}"))
            .await
            .map(|page| page.sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_overview_envelope_decodes() {
        let envelope: Envelope<AnalyticsOverview> = serde_json::from_str(
            r#"{
                "success": true,
                "data": {
                    "total_sessions": 5,
                    "completed_sessions": 4,
                    "total_minutes": 125.5,
                    "avg_session_length": 25.1,
                    "completion_rate": 80.0,
                    "block_attempts": 12,
                    "period_days": 7
                }
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.data.completed_sessions, 4);
        assert_eq!(envelope.data.period_days, 7);
    }

    #[test]
    fn test_daily_envelope_decodes() {
        let envelope: Envelope<Vec<DailyPoint>> = serde_json::from_str(
            r#"{
                "success": true,
                "data": [
                    {"date": "2025-08-05", "sessions": 2, "minutes": 50.0},
                    {"date": "2025-08-06", "sessions": 1, "minutes": 25.0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(
            envelope.data[0].date,
            NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()
        );
    }

    #[test]
    fn test_history_page_decodes() {
        let page: HistoryPage = serde_json::from_str(
            r#"{
                "success": true,
                "sessions": [{
                    "id": 9,
                    "session_id": "4f1c",
                    "mode": "deepwork",
                    "duration_minutes": 90.0,
                    "completed_minutes": 90.0,
                    "completed": true,
                    "started_at": "2025-08-06T08:00:00",
                    "ended_at": "2025-08-06T09:30:00",
                    "date": "2025-08-06"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(page.sessions.len(), 1);
        assert!(page.sessions[0].completed);
    }

    #[test]
    fn test_query_paths() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            client.endpoint("analytics/overview?days=7"),
            "http://localhost:5000/api/analytics/overview?days=7"
        );
        assert_eq!(
            client.endpoint("analytics/history?limit=50"),
            "http://localhost:5000/api/analytics/history?limit=50"
        );
    }
}
