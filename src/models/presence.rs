// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Presence counters per user and room.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Presence record as returned by `GET /presence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    #[serde(default, deserialize_with = "lenient::id")]
    pub room_id: String,
    #[serde(default, deserialize_with = "lenient::id")]
    pub presence_id: String,
    /// User this record belongs to
    #[serde(default, deserialize_with = "lenient::id")]
    pub user_id: String,
    /// Cumulative presences
    #[serde(default, deserialize_with = "lenient::count")]
    pub presence_count: u32,
    /// Presences in the current month
    #[serde(default, deserialize_with = "lenient::count")]
    pub monthly_presence_count: u32,
    /// Presences in the current year
    #[serde(default, deserialize_with = "lenient::count")]
    pub annual_presence_count: u32,
}

/// Summed counters for one user across all of their presence records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenceTotals {
    pub total: u32,
    pub monthly: u32,
    pub annual: u32,
}

impl PresenceTotals {
    fn add(&mut self, presence: &Presence) {
        self.total = self.total.saturating_add(presence.presence_count);
        self.monthly = self.monthly.saturating_add(presence.monthly_presence_count);
        self.annual = self.annual.saturating_add(presence.annual_presence_count);
    }
}

/// Index presence records by user ID, summing users with several records.
pub fn totals_by_user(presences: &[Presence]) -> HashMap<&str, PresenceTotals> {
    let mut totals: HashMap<&str, PresenceTotals> = HashMap::new();
    for presence in presences {
        totals
            .entry(presence.user_id.as_str())
            .or_default()
            .add(presence);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn presence(user_id: &str, total: u32, monthly: u32, annual: u32) -> Presence {
        Presence {
            room_id: "room-1".to_string(),
            presence_id: format!("p-{}", user_id),
            user_id: user_id.to_string(),
            presence_count: total,
            monthly_presence_count: monthly,
            annual_presence_count: annual,
        }
    }

    #[test]
    fn test_presence_wire_format() {
        let p: Presence = serde_json::from_value(json!({
            "roomId": "r1",
            "presenceId": "p1",
            "userId": 4,
            "presenceCount": "67",
            "monthlyPresenceCount": 12,
            "annualPresenceCount": null
        }))
        .unwrap();

        assert_eq!(p.user_id, "4");
        assert_eq!(p.presence_count, 67);
        assert_eq!(p.monthly_presence_count, 12);
        assert_eq!(p.annual_presence_count, 0);
    }

    #[test]
    fn test_totals_sum_per_user() {
        let records = vec![
            presence("1", 10, 2, 8),
            presence("2", 5, 1, 5),
            presence("1", 3, 1, 3),
        ];

        let totals = totals_by_user(&records);

        assert_eq!(
            totals.get("1"),
            Some(&PresenceTotals {
                total: 13,
                monthly: 3,
                annual: 11
            })
        );
        assert_eq!(totals.get("2").map(|t| t.total), Some(5));
        assert!(totals.get("3").is_none());
    }
}
