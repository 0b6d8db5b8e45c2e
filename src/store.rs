use crate::models::{
    BirthdayWish, Friend, FriendSummary, NewFriend, Reminder, UpdateFriend,
};
use chrono::Utc;
use rusqlite::{named_params, Connection, OptionalExtension, Row};
use std::env;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS friend (
    id          INTEGER PRIMARY KEY,
    full_name   TEXT NOT NULL,
    country     TEXT,
    phone       TEXT,
    email       TEXT,
    birth_month INTEGER NOT NULL,
    birth_day   INTEGER NOT NULL,
    birth_year  INTEGER,
    notes       TEXT,
    created_at  TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS birthday_wish (
    id        INTEGER PRIMARY KEY,
    friend_id INTEGER NOT NULL REFERENCES friend(id) ON DELETE CASCADE,
    year      INTEGER NOT NULL,
    message   TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS reminder (
    id          INTEGER PRIMARY KEY,
    friend_id   INTEGER NOT NULL REFERENCES friend(id) ON DELETE CASCADE,
    days_before INTEGER NOT NULL,
    note        TEXT
);
";

const FRIEND_COLS: &str =
    "id, full_name, country, phone, email, birth_month, birth_day, birth_year, notes, created_at";

pub fn resolve_db_path() -> PathBuf {
    match env::var("BIRTHDAY_DB_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/friends.db"),
    }
}

/// Handle to the SQLite store. Opened once in main and shared through
/// `AppState`; the connection closes when the handle drops.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// All friends, newest first.
    pub fn list_friends(&self) -> rusqlite::Result<Vec<Friend>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {FRIEND_COLS} FROM friend ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], row_to_friend)?;
        rows.collect()
    }

    /// The columns the dashboard computation needs, in insertion order.
    pub fn friend_summaries(&self) -> rusqlite::Result<Vec<FriendSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, full_name, country, birth_month, birth_day, birth_year
             FROM friend ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(FriendSummary {
                id: row.get(0)?,
                full_name: row.get(1)?,
                country: row.get(2)?,
                birth_month: row.get(3)?,
                birth_day: row.get(4)?,
                birth_year: row.get(5)?,
            })
        })?;
        rows.collect()
    }

    pub fn insert_friend(&self, new: &NewFriend) -> rusqlite::Result<Friend> {
        let created_at = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO friend (full_name, country, phone, email, birth_month, birth_day, birth_year, notes, created_at)
             VALUES (:full_name, :country, :phone, :email, :birth_month, :birth_day, :birth_year, :notes, :created_at)",
            named_params! {
                ":full_name": new.full_name,
                ":country": new.country,
                ":phone": new.phone,
                ":email": new.email,
                ":birth_month": new.birth_month,
                ":birth_day": new.birth_day,
                ":birth_year": new.birth_year,
                ":notes": new.notes,
                ":created_at": created_at,
            },
        )?;

        Ok(Friend {
            id: self.conn.last_insert_rowid(),
            full_name: new.full_name.clone(),
            country: new.country.clone(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            birth_month: new.birth_month,
            birth_day: new.birth_day,
            birth_year: new.birth_year,
            notes: new.notes.clone(),
            created_at,
        })
    }

    pub fn get_friend(&self, id: i64) -> rusqlite::Result<Option<Friend>> {
        self.conn
            .query_row(
                &format!("SELECT {FRIEND_COLS} FROM friend WHERE id = :id"),
                named_params! { ":id": id },
                row_to_friend,
            )
            .optional()
    }

    /// Latest wishes for a friend, newest year first.
    pub fn wishes_for(&self, friend_id: i64, limit: usize) -> rusqlite::Result<Vec<BirthdayWish>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, friend_id, year, message FROM birthday_wish
             WHERE friend_id = :friend_id ORDER BY year DESC LIMIT :limit",
        )?;
        let rows = stmt.query_map(
            named_params! { ":friend_id": friend_id, ":limit": limit as i64 },
            row_to_wish,
        )?;
        rows.collect()
    }

    /// Read-modify-write; concurrent edits are last-write-wins.
    pub fn update_friend(
        &self,
        id: i64,
        patch: &UpdateFriend,
    ) -> rusqlite::Result<Option<Friend>> {
        let Some(mut friend) = self.get_friend(id)? else {
            return Ok(None);
        };

        if let Some(name) = &patch.full_name {
            friend.full_name = name.clone();
        }
        if let Some(country) = &patch.country {
            friend.country = Some(country.clone());
        }
        if let Some(phone) = &patch.phone {
            friend.phone = Some(phone.clone());
        }
        if let Some(email) = &patch.email {
            friend.email = Some(email.clone());
        }
        if let Some(month) = patch.birth_month {
            friend.birth_month = month;
        }
        if let Some(day) = patch.birth_day {
            friend.birth_day = day;
        }
        if let Some(year) = patch.birth_year {
            friend.birth_year = Some(year);
        }
        if let Some(notes) = &patch.notes {
            friend.notes = Some(notes.clone());
        }

        self.conn.execute(
            "UPDATE friend SET full_name = :full_name, country = :country, phone = :phone,
                    email = :email, birth_month = :birth_month, birth_day = :birth_day,
                    birth_year = :birth_year, notes = :notes
             WHERE id = :id",
            named_params! {
                ":id": id,
                ":full_name": friend.full_name,
                ":country": friend.country,
                ":phone": friend.phone,
                ":email": friend.email,
                ":birth_month": friend.birth_month,
                ":birth_day": friend.birth_day,
                ":birth_year": friend.birth_year,
                ":notes": friend.notes,
            },
        )?;

        Ok(Some(friend))
    }

    pub fn delete_friend(&self, id: i64) -> rusqlite::Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM friend WHERE id = :id", named_params! { ":id": id })?;
        Ok(changed > 0)
    }

    pub fn count_friends(&self) -> rusqlite::Result<i64> {
        self.conn
            .query_row("SELECT count(*) FROM friend", [], |row| row.get(0))
    }

    pub fn friend_names(&self) -> rusqlite::Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT full_name FROM friend ORDER BY full_name")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect()
    }

    pub fn all_wishes(&self) -> rusqlite::Result<Vec<BirthdayWish>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, friend_id, year, message FROM birthday_wish ORDER BY id")?;
        let rows = stmt.query_map([], row_to_wish)?;
        rows.collect()
    }

    pub fn all_reminders(&self) -> rusqlite::Result<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, friend_id, days_before, note FROM reminder ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Reminder {
                id: row.get(0)?,
                friend_id: row.get(1)?,
                days_before: row.get(2)?,
                note: row.get(3)?,
            })
        })?;
        rows.collect()
    }

    // Id-preserving upserts for the import tooling.

    pub fn upsert_friend(&self, friend: &Friend) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO friend (id, full_name, country, phone, email, birth_month, birth_day, birth_year, notes, created_at)
             VALUES (:id, :full_name, :country, :phone, :email, :birth_month, :birth_day, :birth_year, :notes, :created_at)
             ON CONFLICT(id) DO UPDATE SET
                full_name = excluded.full_name, country = excluded.country,
                phone = excluded.phone, email = excluded.email,
                birth_month = excluded.birth_month, birth_day = excluded.birth_day,
                birth_year = excluded.birth_year, notes = excluded.notes,
                created_at = excluded.created_at",
            named_params! {
                ":id": friend.id,
                ":full_name": friend.full_name,
                ":country": friend.country,
                ":phone": friend.phone,
                ":email": friend.email,
                ":birth_month": friend.birth_month,
                ":birth_day": friend.birth_day,
                ":birth_year": friend.birth_year,
                ":notes": friend.notes,
                ":created_at": friend.created_at,
            },
        )?;
        Ok(())
    }

    pub fn upsert_wish(&self, wish: &BirthdayWish) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO birthday_wish (id, friend_id, year, message)
             VALUES (:id, :friend_id, :year, :message)
             ON CONFLICT(id) DO UPDATE SET
                friend_id = excluded.friend_id, year = excluded.year, message = excluded.message",
            named_params! {
                ":id": wish.id,
                ":friend_id": wish.friend_id,
                ":year": wish.year,
                ":message": wish.message,
            },
        )?;
        Ok(())
    }

    pub fn upsert_reminder(&self, reminder: &Reminder) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO reminder (id, friend_id, days_before, note)
             VALUES (:id, :friend_id, :days_before, :note)
             ON CONFLICT(id) DO UPDATE SET
                friend_id = excluded.friend_id, days_before = excluded.days_before,
                note = excluded.note",
            named_params! {
                ":id": reminder.id,
                ":friend_id": reminder.friend_id,
                ":days_before": reminder.days_before,
                ":note": reminder.note,
            },
        )?;
        Ok(())
    }
}

fn row_to_friend(row: &Row) -> rusqlite::Result<Friend> {
    Ok(Friend {
        id: row.get(0)?,
        full_name: row.get(1)?,
        country: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
        birth_month: row.get(5)?,
        birth_day: row.get(6)?,
        birth_year: row.get(7)?,
        notes: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn row_to_wish(row: &Row) -> rusqlite::Result<BirthdayWish> {
    Ok(BirthdayWish {
        id: row.get(0)?,
        friend_id: row.get(1)?,
        year: row.get(2)?,
        message: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_friend(name: &str) -> NewFriend {
        NewFriend {
            full_name: name.to_string(),
            country: Some("Mongolia".to_string()),
            phone: None,
            email: None,
            birth_month: 5,
            birth_day: 20,
            birth_year: Some(1992),
            notes: None,
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let store = Store::open_in_memory().unwrap();
        let created = store.insert_friend(&new_friend("Bolor")).unwrap();
        assert!(created.id > 0);

        let fetched = store.get_friend(created.id).unwrap().unwrap();
        assert_eq!(fetched.full_name, "Bolor");
        assert_eq!(fetched.country.as_deref(), Some("Mongolia"));
        assert_eq!(fetched.birth_month, 5);
        assert_eq!(fetched.birth_day, 20);
        assert_eq!(fetched.birth_year, Some(1992));
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn list_is_newest_first() {
        let store = Store::open_in_memory().unwrap();
        let first = store.insert_friend(&new_friend("First")).unwrap();
        let second = store.insert_friend(&new_friend("Second")).unwrap();

        let ids: Vec<i64> = store.list_friends().unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, [second.id, first.id]);
    }

    #[test]
    fn partial_update_leaves_other_fields() {
        let store = Store::open_in_memory().unwrap();
        let created = store.insert_friend(&new_friend("Before")).unwrap();

        let patch = UpdateFriend {
            full_name: Some("After".to_string()),
            ..Default::default()
        };
        let updated = store.update_friend(created.id, &patch).unwrap().unwrap();
        assert_eq!(updated.full_name, "After");
        assert_eq!(updated.birth_month, 5);
        assert_eq!(updated.country.as_deref(), Some("Mongolia"));
    }

    #[test]
    fn update_unknown_id_is_none() {
        let store = Store::open_in_memory().unwrap();
        let result = store.update_friend(999, &UpdateFriend::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn delete_reports_whether_a_row_existed() {
        let store = Store::open_in_memory().unwrap();
        let created = store.insert_friend(&new_friend("Gone")).unwrap();
        assert!(store.delete_friend(created.id).unwrap());
        assert!(store.get_friend(created.id).unwrap().is_none());
        assert!(!store.delete_friend(created.id).unwrap());
    }

    #[test]
    fn wishes_come_back_newest_first_and_limited() {
        let store = Store::open_in_memory().unwrap();
        let friend = store.insert_friend(&new_friend("Wished")).unwrap();
        for (i, year) in (2019..=2025).enumerate() {
            store
                .upsert_wish(&BirthdayWish {
                    id: i as i64 + 1,
                    friend_id: friend.id,
                    year,
                    message: format!("happy {year}"),
                })
                .unwrap();
        }

        let wishes = store.wishes_for(friend.id, 5).unwrap();
        let years: Vec<i32> = wishes.iter().map(|w| w.year).collect();
        assert_eq!(years, [2025, 2024, 2023, 2022, 2021]);
    }

    #[test]
    fn deleting_a_friend_cascades_to_children() {
        let store = Store::open_in_memory().unwrap();
        let friend = store.insert_friend(&new_friend("Parent")).unwrap();
        store
            .upsert_wish(&BirthdayWish {
                id: 1,
                friend_id: friend.id,
                year: 2024,
                message: "hbd".to_string(),
            })
            .unwrap();
        store
            .upsert_reminder(&Reminder {
                id: 1,
                friend_id: friend.id,
                days_before: 7,
                note: None,
            })
            .unwrap();

        store.delete_friend(friend.id).unwrap();
        assert!(store.all_wishes().unwrap().is_empty());
        assert!(store.all_reminders().unwrap().is_empty());
    }

    #[test]
    fn upsert_friend_inserts_then_updates_in_place() {
        let store = Store::open_in_memory().unwrap();
        let mut friend = Friend {
            id: 42,
            full_name: "Imported".to_string(),
            country: None,
            phone: None,
            email: None,
            birth_month: 1,
            birth_day: 2,
            birth_year: None,
            notes: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        store.upsert_friend(&friend).unwrap();
        friend.full_name = "Imported Twice".to_string();
        store.upsert_friend(&friend).unwrap();

        assert_eq!(store.count_friends().unwrap(), 1);
        let fetched = store.get_friend(42).unwrap().unwrap();
        assert_eq!(fetched.full_name, "Imported Twice");
    }

    #[test]
    fn names_come_back_sorted() {
        let store = Store::open_in_memory().unwrap();
        for name in ["Zul", "Anar", "Mira"] {
            store.insert_friend(&new_friend(name)).unwrap();
        }
        assert_eq!(store.friend_names().unwrap(), ["Anar", "Mira", "Zul"]);
    }
}
