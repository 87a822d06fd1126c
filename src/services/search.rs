// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User search: accent-insensitive username match or age match.

use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;

use crate::models::User;

/// Strip diacritics and surrounding whitespace.
///
/// Case is left alone; callers lower-case first.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.trim().to_string()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Users matching `query`, in input order.
///
/// An empty query returns every user. Otherwise a user matches when the
/// normalized username contains the normalized query, or when their age on
/// `today` contains it (so "2" finds everyone in their twenties).
pub fn filter_users(users: &[User], query: &str, today: NaiveDate) -> Vec<User> {
    if query.is_empty() {
        return users.to_vec();
    }
    filter_users_ref(users, query, today)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing form of [`filter_users`].
pub fn filter_users_ref<'a>(users: &'a [User], query: &str, today: NaiveDate) -> Vec<&'a User> {
    if query.is_empty() {
        return users.iter().collect();
    }

    let needle = normalize(&query.to_lowercase());
    if needle.is_empty() {
        // A blank query still runs the substring test, which every name passes.
        tracing::debug!(query, "Search query is blank after normalization");
    }

    users
        .iter()
        .filter(|user| matches(user, &needle, today))
        .collect()
}

fn matches(user: &User, needle: &str, today: NaiveDate) -> bool {
    let username = normalize(&user.username.to_lowercase());
    if username.contains(needle) {
        return true;
    }
    user.age(today)
        .is_some_and(|age| age.to_string().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_users;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize("São"), "Sao");
        assert_eq!(normalize("  café  "), "cafe");
        assert_eq!(normalize("Ñandú"), "Nandu");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn test_normalize_keeps_case() {
        assert_eq!(normalize("JOSÉ"), "JOSE");
    }

    #[test]
    fn test_empty_query_is_identity() {
        let users = sample_users();
        assert_eq!(filter_users(&users, "", today()), users);
    }

    #[test]
    fn test_username_match_is_accent_and_case_insensitive() {
        let mut users = sample_users();
        users[0].username = "José.Álvarez".to_string();

        let found = filter_users(&users, "jose", today());
        assert_eq!(names(&found), vec!["José.Álvarez"]);

        let found = filter_users(&users, "ÁLV", today());
        assert_eq!(names(&found), vec!["José.Álvarez"]);
    }

    #[test]
    fn test_age_match() {
        // On 2024-05-14: john.doe is 33, michael.brown 23, Cassius.Thornton 20.
        let users = sample_users();
        let found = filter_users(&users, "33", today());
        assert_eq!(names(&found), vec!["john.doe"]);
    }

    #[test]
    fn test_result_preserves_input_order() {
        let users = sample_users();
        let found = filter_users(&users, "o", today());
        let positions: Vec<usize> = found
            .iter()
            .map(|f| users.iter().position(|u| u == f).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_users(&sample_users(), "zzz", today()).is_empty());
    }

    #[test]
    fn test_blank_query_matches_everyone() {
        let users = sample_users();
        assert_eq!(filter_users(&users, "   ", today()).len(), users.len());
    }

    #[test]
    fn test_user_without_birth_date_matches_by_name_only() {
        let mut users = sample_users();
        users.iter_mut().for_each(|u| u.birth_date = None);
        assert!(filter_users(&users, "33", today()).is_empty());
        assert_eq!(filter_users(&users, "jane", today()).len(), 1);
    }
}
