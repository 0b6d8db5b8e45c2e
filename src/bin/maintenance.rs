use anyhow::Context;
use birthday_book::models::DataDump;
use birthday_book::{resolve_db_path, Store};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

const DEFAULT_DUMP_PATH: &str = "data_dump.json";

/// Maintenance utilities for the birthday book database.
#[derive(Parser)]
#[clap(author, about)]
struct Args {
    /// Database path (defaults to BIRTHDAY_DB_PATH or data/friends.db)
    #[clap(long, short = 'd')]
    db: Option<PathBuf>,
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Export friends, wishes and reminders to a JSON dump.
    Export {
        /// Output file
        #[clap(long, short = 'o')]
        out: Option<PathBuf>,
    },
    /// Import a JSON dump, upserting every record by id.
    Import {
        /// Input file
        #[clap(long, short = 'i')]
        input: Option<PathBuf>,
    },
    /// Count friends and list their names.
    Count,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let db_path = args.db.unwrap_or_else(resolve_db_path);
    let store = Store::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    match args.cmd {
        Cmd::Export { out } => export(&store, out),
        Cmd::Import { input } => import(&store, input),
        Cmd::Count => count(&store),
    }
}

fn export(store: &Store, out: Option<PathBuf>) -> anyhow::Result<()> {
    let out = out.unwrap_or_else(|| PathBuf::from(DEFAULT_DUMP_PATH));

    let dump = DataDump {
        friends: store.list_friends()?,
        wishes: store.all_wishes()?,
        reminders: store.all_reminders()?,
    };

    fs::write(&out, serde_json::to_vec_pretty(&dump)?)
        .with_context(|| format!("failed to write {}", out.display()))?;

    println!("Data exported to {}", out.display());
    println!("Stats:");
    println!("- Friends: {}", dump.friends.len());
    println!("- Wishes: {}", dump.wishes.len());
    println!("- Reminders: {}", dump.reminders.len());
    Ok(())
}

fn import(store: &Store, input: Option<PathBuf>) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| PathBuf::from(DEFAULT_DUMP_PATH));
    let bytes = fs::read(&input)
        .with_context(|| format!("data dump file not found: {}", input.display()))?;
    let dump: DataDump = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    // Friends first so child rows can reference them.
    println!("Importing {} friends...", dump.friends.len());
    for friend in &dump.friends {
        store.upsert_friend(friend)?;
    }

    println!("Importing {} wishes...", dump.wishes.len());
    for wish in &dump.wishes {
        store.upsert_wish(wish)?;
    }

    println!("Importing {} reminders...", dump.reminders.len());
    for reminder in &dump.reminders {
        store.upsert_reminder(reminder)?;
    }

    println!("Data import complete!");
    Ok(())
}

fn count(store: &Store) -> anyhow::Result<()> {
    println!("Total friends in database: {}", store.count_friends()?);
    println!();
    println!("Friends list:");
    for (i, name) in store.friend_names()?.iter().enumerate() {
        println!("{}. {name}", i + 1);
    }
    Ok(())
}
