use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. Append-only; duplicate usernames are permitted.
/// `birth_date` is `None` when the submitted value did not parse as a
/// date; the record is stored anyway and the table shows "Invalid Date".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub birth_date: Option<NaiveDate>,
    pub nickname: String,
}

/// A chat message. `username` is whatever the poster selected; it is not
/// checked against the registered users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub username: String,
    pub message: String,
    pub date: DateTime<Utc>,
}
