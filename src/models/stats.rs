//! Attendance statistics for the statistics screen.
//!
//! Everything here is a pure function of the user list and the class
//! totals; empty inputs and zero totals produce 0%, never NaN.

use serde::Serialize;

use crate::models::presence::{totals_by_user, Presence};
use crate::models::user::{Role, User};

/// Class totals used as percentage divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSettings {
    /// Classes per user for the overall average
    pub total_classes: u32,
    /// Classes per user in a month
    pub monthly_classes: u32,
    /// Classes per user in a year
    pub annual_classes: u32,
    /// Size of the top-students list
    pub top_n: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            total_classes: 100,
            monthly_classes: 100,
            annual_classes: 240,
            top_n: 3,
        }
    }
}

/// One user's attendance as fed into the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    pub user: User,
    /// Classes attended (ranking key)
    pub attended: u32,
    /// Classes attended this month
    pub monthly: u32,
    /// Classes attended this year
    pub annual: u32,
}

impl AttendanceEntry {
    /// Entry from the user's own `attendance` counter.
    pub fn from_user(user: User) -> Self {
        let attended = user.attendance;
        Self {
            user,
            attended,
            monthly: attended,
            annual: attended,
        }
    }
}

/// Entries using each user's own attendance counter.
pub fn entries_from_users(users: &[User]) -> Vec<AttendanceEntry> {
    users.iter().cloned().map(AttendanceEntry::from_user).collect()
}

/// Entries joining users with their presence records.
///
/// Users without any presence record count as zero attendance.
pub fn entries_from_presences(users: &[User], presences: &[Presence]) -> Vec<AttendanceEntry> {
    let totals = totals_by_user(presences);
    users
        .iter()
        .map(|user| {
            let t = totals
                .get(user.user_id.as_str())
                .copied()
                .unwrap_or_default();
            AttendanceEntry {
                user: user.clone(),
                attended: t.total,
                monthly: t.monthly,
                annual: t.annual,
            }
        })
        .collect()
}

/// Series for the per-user attendance chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

/// Aggregated attendance over a group of users.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceStats {
    pub settings: StatsSettings,

    // ─── Totals ──────────────────────────────────────────────────
    pub user_count: usize,
    pub total_attended: u64,

    // ─── Percentages ─────────────────────────────────────────────
    /// sum(attended) / (total_classes * users) * 100
    pub average_percentage: f64,
    /// sum(monthly) / (monthly_classes * users) * 100
    pub monthly_percentage: f64,
    /// sum(annual) / (annual_classes * users) * 100
    pub annual_percentage: f64,

    // ─── Ranking ─────────────────────────────────────────────────
    /// Entries by attended count, highest first; ties keep input order
    pub ranked: Vec<AttendanceEntry>,
}

impl AttendanceStats {
    pub fn compute(entries: Vec<AttendanceEntry>, settings: StatsSettings) -> Self {
        let user_count = entries.len();
        let total_attended: u64 = entries.iter().map(|e| u64::from(e.attended)).sum();
        let total_monthly: u64 = entries.iter().map(|e| u64::from(e.monthly)).sum();
        let total_annual: u64 = entries.iter().map(|e| u64::from(e.annual)).sum();

        let mut ranked = entries;
        // sort_by is stable
        ranked.sort_by(|a, b| b.attended.cmp(&a.attended));

        Self {
            settings,
            user_count,
            total_attended,
            average_percentage: percentage(total_attended, settings.total_classes, user_count),
            monthly_percentage: percentage(total_monthly, settings.monthly_classes, user_count),
            annual_percentage: percentage(total_annual, settings.annual_classes, user_count),
            ranked,
        }
    }

    /// Shorthand for `compute(entries_from_users(users), settings)`.
    pub fn from_users(users: &[User], settings: StatsSettings) -> Self {
        Self::compute(entries_from_users(users), settings)
    }

    /// Best `n` entries with the given role, highest attendance first.
    pub fn top(&self, role: Role, n: usize) -> Vec<&AttendanceEntry> {
        self.ranked
            .iter()
            .filter(|e| e.user.has_role(role))
            .take(n)
            .collect()
    }

    pub fn top_students(&self) -> Vec<&AttendanceEntry> {
        self.top(Role::Student, self.settings.top_n)
    }

    /// One user's attendance as a percentage of `total_classes`.
    pub fn percentage_of(&self, entry: &AttendanceEntry) -> f64 {
        percentage(u64::from(entry.attended), self.settings.total_classes, 1)
    }

    pub fn chart(&self) -> ChartSeries {
        ChartSeries {
            labels: self
                .ranked
                .iter()
                .map(|e| e.user.short_name().to_string())
                .collect(),
            values: self.ranked.iter().map(|e| e.attended).collect(),
        }
    }
}

/// `sum / (per_user * count) * 100`, or 0 when the divisor is 0.
pub fn percentage(sum: u64, per_user: u32, count: usize) -> f64 {
    let divisor = f64::from(per_user) * count as f64;
    if divisor == 0.0 {
        return 0.0;
    }
    sum as f64 / divisor * 100.0
}
