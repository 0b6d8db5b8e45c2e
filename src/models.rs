use crate::errors::FieldError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked person, as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: i64,
    pub full_name: String,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_year: Option<i32>,
    pub notes: Option<String>,
    pub created_at: String,
}

/// A wish sent to a friend for a given year. Read-only at the API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayWish {
    pub id: i64,
    pub friend_id: i64,
    pub year: i32,
    pub message: String,
}

/// Touched only by the import/export tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub friend_id: i64,
    pub days_before: i32,
    pub note: Option<String>,
}

/// The columns the dashboard needs, nothing more.
#[derive(Debug, Clone)]
pub struct FriendSummary {
    pub id: i64,
    pub full_name: String,
    pub country: Option<String>,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_year: Option<i32>,
}

/// Body for `POST /api/friends`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFriend {
    pub full_name: String,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_year: Option<i32>,
    pub notes: Option<String>,
}

impl NewFriend {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.full_name.trim().is_empty() {
            errors.push(FieldError::new("fullName", "name is required"));
        }
        if let Some(email) = &self.email {
            if !email.is_empty() && !email_is_valid(email) {
                errors.push(FieldError::new("email", "invalid email"));
            }
        }
        check_month("birthMonth", self.birth_month, &mut errors);
        check_day("birthDay", self.birth_day, &mut errors);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Body for `PUT /api/friends/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFriend {
    pub full_name: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_month: Option<u32>,
    pub birth_day: Option<u32>,
    pub birth_year: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateFriend {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(name) = &self.full_name {
            if name.trim().is_empty() {
                errors.push(FieldError::new("fullName", "name is required"));
            }
        }
        if let Some(email) = &self.email {
            if !email.is_empty() && !email_is_valid(email) {
                errors.push(FieldError::new("email", "invalid email"));
            }
        }
        if let Some(month) = self.birth_month {
            check_month("birthMonth", month, &mut errors);
        }
        if let Some(day) = self.birth_day {
            check_day("birthDay", day, &mut errors);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// Birth day is only range-checked here; day-of-month validity is left to
// the calendar normalization in the birthdays module.
fn check_day(field: &str, day: u32, errors: &mut Vec<FieldError>) {
    if !(1..=31).contains(&day) {
        errors.push(FieldError::new(field, "day must be between 1 and 31"));
    }
}

fn check_month(field: &str, month: u32, errors: &mut Vec<FieldError>) {
    if !(1..=12).contains(&month) {
        errors.push(FieldError::new(field, "month must be between 1 and 12"));
    }
}

fn email_is_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// `GET /api/friends/:id` response: the record plus its latest wishes.
#[derive(Debug, Serialize)]
pub struct FriendDetail {
    #[serde(flatten)]
    pub friend: Friend,
    pub wishes: Vec<BirthdayWish>,
}

/// One dashboard row: a friend whose birthday falls within the window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBirthday {
    pub id: i64,
    pub full_name: String,
    pub country: Option<String>,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_year: Option<i32>,
    pub next_birthday: NaiveDate,
    pub days_until: i64,
    pub age: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_friends: usize,
    pub upcoming_birthdays_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
    pub stats: DashboardStats,
}

/// On-disk shape produced by `maintenance export` and read back by `import`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataDump {
    pub friends: Vec<Friend>,
    pub wishes: Vec<BirthdayWish>,
    pub reminders: Vec<Reminder>,
}
