// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in sample roster, shown when the presence API is unreachable.

use chrono::NaiveDate;

use crate::models::{Role, User};

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    picture: &str,
    username: &str,
    birth: (i32, u32, u32),
    room: &str,
    role: Role,
    phone: &str,
    attendance: u32,
) -> User {
    User {
        user_id: id.to_string(),
        username: username.to_string(),
        picture_url: Some(format!("https://randomuser.me/api/portraits/{}.jpg", picture)),
        birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2),
        room_name: Some(room.to_string()),
        role: Some(role),
        phone_number: Some(phone.to_string()),
        attendance,
    }
}

/// Seven users across every role; three of them are students.
#[rustfmt::skip]
pub fn sample_users() -> Vec<User> {
    vec![
        user("1", "men/32", "john.doe", (1990, 5, 15), "Math 101", Role::Admin, "+1-202-555-0125", 18),
        user("2", "women/45", "jane.smith", (1985, 11, 30), "Physics 202", Role::Professor, "+44-7911-123456", 34),
        user("3", "men/64", "michael.brown", (2000, 7, 21), "Chemistry 303", Role::Student, "+61-412-345-678", 34),
        user("4", "men/74", "Ismaeel.Pittman", (2002, 9, 12), "Chemistry 303", Role::Student, "+61-412-345-678", 67),
        user("5", "men/44", "Cassius.Thornton", (2003, 6, 14), "Chemistry 303", Role::Student, "+61-412-345-678", 45),
        user("6", "women/25", "emily.watson", (1998, 3, 12), "Biology 404", Role::Moderator, "+55-11-91234-5678", 24),
        user("7", "men/78", "david.lee", (1995, 9, 5), "History 505", Role::Professor, "+33-6-12-34-56-78", 15),
    ]
}
