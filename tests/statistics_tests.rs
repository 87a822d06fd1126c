// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Attendance aggregation over realistic rosters.

use presence_tracker::models::{AttendanceStats, Role, StatsSettings};
use presence_tracker::sample::sample_users;

mod common;
use common::make_user;

#[test]
fn test_empty_roster_is_zero() {
    let stats = AttendanceStats::from_users(&[], StatsSettings::default());
    assert_eq!(stats.average_percentage, 0.0);
    assert_eq!(stats.annual_percentage, 0.0);
}

#[test]
fn test_single_user_fifty_percent() {
    let users = vec![make_user("1", "half.way", Role::Student, 50)];
    let stats = AttendanceStats::from_users(&users, StatsSettings::default());
    assert_eq!(stats.average_percentage, 50.0);
}

#[test]
fn test_top_three_students_of_seven() {
    let users = vec![
        make_user("1", "admin", Role::Admin, 90),
        make_user("2", "s.low", Role::Student, 10),
        make_user("3", "prof", Role::Professor, 80),
        make_user("4", "s.high", Role::Student, 70),
        make_user("5", "mod", Role::Moderator, 75),
        make_user("6", "s.mid", Role::Student, 40),
        make_user("7", "s.top", Role::Student, 72),
    ];
    let stats = AttendanceStats::from_users(&users, StatsSettings::default());

    let top = stats.top(Role::Student, 3);

    assert_eq!(top.len(), 3);
    assert!(top.iter().all(|e| e.user.role == Some(Role::Student)));
    let ids: Vec<&str> = top.iter().map(|e| e.user.user_id.as_str()).collect();
    assert_eq!(ids, vec!["7", "4", "6"]);
    assert!(top.windows(2).all(|w| w[0].attended >= w[1].attended));
}

#[test]
fn test_sample_roster_statistics() {
    // 18 + 34 + 34 + 67 + 45 + 24 + 15 = 237 over 7 users
    let stats = AttendanceStats::from_users(&sample_users(), StatsSettings::default());

    assert_eq!(stats.user_count, 7);
    assert_eq!(stats.total_attended, 237);
    assert!((stats.average_percentage - 237.0 / 700.0 * 100.0).abs() < 1e-9);
    assert!((stats.monthly_percentage - stats.average_percentage).abs() < 1e-9);
    assert!((stats.annual_percentage - 237.0 / 1680.0 * 100.0).abs() < 1e-9);

    let top: Vec<&str> = stats
        .top_students()
        .iter()
        .map(|e| e.user.username.as_str())
        .collect();
    assert_eq!(top, vec!["Ismaeel.Pittman", "Cassius.Thornton", "michael.brown"]);

    // jane.smith and michael.brown tie at 34; jane comes first in the roster
    let chart = stats.chart();
    assert_eq!(
        chart.labels,
        vec!["Ismaeel", "Cassius", "jane", "michael", "emily", "john", "david"]
    );
}

#[test]
fn test_custom_top_n() {
    let settings = StatsSettings {
        top_n: 1,
        ..StatsSettings::default()
    };
    let stats = AttendanceStats::from_users(&sample_users(), settings);
    assert_eq!(stats.top_students().len(), 1);
}
