use crate::models::{DashboardResponse, DashboardStats, FriendSummary, UpcomingBirthday};
use chrono::{Datelike, Duration, Local, NaiveDate};

/// A friend counts as "upcoming" when their next birthday is at most this
/// many days away (inclusive of today).
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextBirthday {
    pub date: NaiveDate,
    pub days_until: i64,
    pub year: i32,
}

/// Next occurrence of a birthday on or after `today`.
///
/// The candidate year is the current one unless (month, day) has already
/// passed; equality means the birthday is today and counts zero days.
pub fn next_birthday(today: NaiveDate, birth_month: u32, birth_day: u32) -> NextBirthday {
    let mut year = today.year();
    if (birth_month, birth_day) < (today.month(), today.day()) {
        year += 1;
    }
    let date = resolve_date(year, birth_month, birth_day);
    NextBirthday {
        date,
        days_until: (date - today).num_days(),
        year,
    }
}

pub fn build_dashboard(friends: &[FriendSummary]) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), friends)
}

pub fn build_dashboard_at(today: NaiveDate, friends: &[FriendSummary]) -> DashboardResponse {
    let mut upcoming: Vec<UpcomingBirthday> = friends
        .iter()
        .map(|friend| {
            let next = next_birthday(today, friend.birth_month, friend.birth_day);
            UpcomingBirthday {
                id: friend.id,
                full_name: friend.full_name.clone(),
                country: friend.country.clone(),
                birth_month: friend.birth_month,
                birth_day: friend.birth_day,
                birth_year: friend.birth_year,
                next_birthday: next.date,
                days_until: next.days_until,
                age: friend.birth_year.map(|born| next.year - born),
            }
        })
        .filter(|entry| (0..=UPCOMING_WINDOW_DAYS).contains(&entry.days_until))
        .collect();
    // stable sort: friends with the same day-count keep store order
    upcoming.sort_by_key(|entry| entry.days_until);

    DashboardResponse {
        stats: DashboardStats {
            total_friends: friends.len(),
            upcoming_birthdays_count: upcoming.len(),
        },
        upcoming_birthdays: upcoming,
    }
}

/// Proleptic Gregorian date construction with the overflow rule spelled out:
/// a day past the end of the month rolls into the next, so Feb 29 in a
/// non-leap year resolves to Mar 1 (and Feb 30 to Mar 2). Intended behavior,
/// not something to correct here.
fn resolve_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let len = month_length(year, month);
    let clamped = NaiveDate::from_ymd_opt(year, month, day.min(len))
        .expect("month is range-checked at the boundary");
    clamped + Duration::days(i64::from(day.saturating_sub(len)))
}

fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summary(id: i64, month: u32, day: u32, year: Option<i32>) -> FriendSummary {
        FriendSummary {
            id,
            full_name: format!("friend-{id}"),
            country: None,
            birth_month: month,
            birth_day: day,
            birth_year: year,
        }
    }

    #[test]
    fn birthday_today_counts_zero_days() {
        let next = next_birthday(date(2026, 3, 1), 3, 1);
        assert_eq!(next.days_until, 0);
        assert_eq!(next.year, 2026);
        assert_eq!(next.date, date(2026, 3, 1));
    }

    #[test]
    fn birthday_later_this_year_stays_in_current_year() {
        let next = next_birthday(date(2026, 3, 1), 3, 15);
        assert_eq!(next.year, 2026);
        assert_eq!(next.days_until, 14);
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let next = next_birthday(date(2026, 3, 1), 1, 1);
        assert_eq!(next.year, 2027);
        assert_eq!(next.date, date(2027, 1, 1));
        assert_eq!(next.days_until, 306);
    }

    #[test]
    fn dec_31_to_jan_1_is_one_day() {
        let next = next_birthday(date(2026, 12, 31), 1, 1);
        assert_eq!(next.year, 2027);
        assert_eq!(next.days_until, 1);
    }

    #[test]
    fn feb_29_normalizes_to_mar_1_in_non_leap_year() {
        let next = next_birthday(date(2025, 1, 15), 2, 29);
        assert_eq!(next.date, date(2025, 3, 1));
    }

    #[test]
    fn feb_29_stays_on_feb_29_in_leap_year() {
        let next = next_birthday(date(2024, 1, 15), 2, 29);
        assert_eq!(next.date, date(2024, 2, 29));
    }

    #[test]
    fn overflow_days_roll_forward() {
        // Feb 30 never exists; Apr 31 and Jun 31 don't either.
        assert_eq!(next_birthday(date(2025, 1, 1), 2, 30).date, date(2025, 3, 2));
        assert_eq!(next_birthday(date(2025, 1, 1), 4, 31).date, date(2025, 5, 1));
        assert_eq!(next_birthday(date(2025, 1, 1), 6, 31).date, date(2025, 7, 1));
    }

    #[test]
    fn century_leap_rules_apply() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn window_includes_day_30_excludes_day_31() {
        let today = date(2026, 6, 1);
        let friends = vec![
            summary(1, 7, 1, None), // 30 days out
            summary(2, 7, 2, None), // 31 days out
            summary(3, 6, 1, None), // today
        ];
        let dashboard = build_dashboard_at(today, &friends);
        let ids: Vec<i64> = dashboard.upcoming_birthdays.iter().map(|f| f.id).collect();
        assert_eq!(ids, [3, 1]);
        assert_eq!(dashboard.upcoming_birthdays[1].days_until, 30);
        assert_eq!(dashboard.stats.total_friends, 3);
        assert_eq!(dashboard.stats.upcoming_birthdays_count, 2);
    }

    #[test]
    fn upcoming_sorted_ascending_by_day_count() {
        let today = date(2026, 6, 1);
        // day-counts 5, 0, 30, 12 in store order
        let friends = vec![
            summary(1, 6, 6, None),
            summary(2, 6, 1, None),
            summary(3, 7, 1, None),
            summary(4, 6, 13, None),
        ];
        let dashboard = build_dashboard_at(today, &friends);
        let counts: Vec<i64> = dashboard
            .upcoming_birthdays
            .iter()
            .map(|f| f.days_until)
            .collect();
        assert_eq!(counts, [0, 5, 12, 30]);
    }

    #[test]
    fn age_only_present_with_birth_year() {
        let today = date(2026, 12, 31);
        let friends = vec![summary(1, 1, 1, Some(1990)), summary(2, 1, 1, None)];
        let dashboard = build_dashboard_at(today, &friends);
        assert_eq!(dashboard.upcoming_birthdays[0].age, Some(37));
        assert_eq!(dashboard.upcoming_birthdays[1].age, None);
    }

    #[test]
    fn birthday_today_without_year_is_upcoming() {
        let dashboard = build_dashboard_at(date(2026, 3, 1), &[summary(1, 3, 1, None)]);
        assert_eq!(dashboard.upcoming_birthdays.len(), 1);
        assert_eq!(dashboard.upcoming_birthdays[0].days_until, 0);
        assert_eq!(dashboard.upcoming_birthdays[0].age, None);
    }
}
