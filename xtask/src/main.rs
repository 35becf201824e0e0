// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! `cargo xtask <command>` runs the checks CI runs, from the workspace root
//! regardless of the current directory.
//!
//! `verify-schema` applies the embedded migrations to a scratch in-memory
//! `SQLite` database, compares the resulting `bookings` table against the
//! shape the Diesel schema expects, then reverts every migration and checks
//! that nothing is left behind.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::collections::{BTreeMap, BTreeSet};

use cargo_metadata::{camino::Utf8PathBuf, MetadataCommand};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::MigrationHarness;
use duct::cmd;
use roomslot_persistence::MIGRATIONS;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Formatting, clippy, build, tests and schema verification
    Ci,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    Clippy,

    /// Format the workspace
    Fmt {
        /// Report unformatted files instead of rewriting them
        #[arg(long)]
        check: bool,
    },

    /// Run every test, doc tests included
    #[command(visible_alias = "t")]
    Test,

    /// Check the migrations against the Diesel schema and that they revert cleanly
    #[command(visible_alias = "vs")]
    VerifySchema,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Ci => {
                cargo(&["fmt", "--all", "--check"])?;
                clippy()?;
                cargo(&["build", "--all-targets"])?;
                cargo(&["test", "--workspace"])?;
                verify_schema()
            }
            Self::Build => cargo(&["build", "--all-targets"]),
            Self::Check => cargo(&["check", "--all-targets"]),
            Self::Clippy => clippy(),
            Self::Fmt { check: true } => cargo(&["fmt", "--all", "--check"]),
            Self::Fmt { check: false } => cargo(&["fmt", "--all"]),
            Self::Test => cargo(&["test", "--workspace"]),
            Self::VerifySchema => verify_schema(),
        }
    }
}

fn clippy() -> Result<()> {
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
}

/// Runs `cargo` with `args` from the workspace root.
///
/// # Errors
///
/// Returns an error if the workspace root cannot be located or cargo exits
/// unsuccessfully.
fn cargo(args: &[&str]) -> Result<()> {
    let root: Utf8PathBuf = workspace_root()?;
    let command_line: String = args.join(" ");
    tracing::info!("cargo {command_line} (in {root})");

    cmd("cargo", args.iter().copied())
        .dir(root.as_std_path())
        .run()
        .wrap_err_with(|| format!("cargo {command_line} failed"))?;
    Ok(())
}

fn workspace_root() -> Result<Utf8PathBuf> {
    let metadata = MetadataCommand::new()
        .no_deps()
        .exec()
        .wrap_err("failed to read cargo metadata")?;
    Ok(metadata.workspace_root)
}

/// Verify the migrated schema
///
/// 1. Applies all embedded migrations to an in-memory database
/// 2. Compares every table against [`expected_schema`]
/// 3. Reverts all migrations and checks no application table remains
fn verify_schema() -> Result<()> {
    tracing::info!("Starting schema verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to open in-memory SQLite database")?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;
    tracing::info!("Applied {} migration(s)", applied.len());

    let actual: Schema = introspect_sqlite_schema(&mut conn)?;
    compare_schemas(&expected_schema(), &actual)?;
    tracing::info!("Migrated schema matches the Diesel schema");

    let reverted = conn
        .revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {e}"))?;
    tracing::info!("Reverted {} migration(s)", reverted.len());

    let leftover: Schema = introspect_sqlite_schema(&mut conn)?;
    if !leftover.tables.is_empty() {
        bail!(
            "Tables left behind after reverting migrations: {:?}",
            leftover.tables.keys().collect::<Vec<_>>()
        );
    }

    tracing::info!("Schema verification passed");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Table {
    columns: BTreeMap<String, Column>,
    primary_keys: BTreeSet<String>,
    indexes: BTreeSet<Index>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Column {
    name: String,
    normalized_type: String,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Index {
    name: String,
    columns: Vec<String>,
}

/// The schema `diesel_schema.rs` describes.
fn expected_schema() -> Schema {
    let column = |name: &str, normalized_type: &str, nullable: bool| {
        (
            name.to_string(),
            Column {
                name: name.to_string(),
                normalized_type: normalized_type.to_string(),
                nullable,
            },
        )
    };

    let bookings = Table {
        columns: BTreeMap::from([
            column("booking_id", "integer", false),
            column("name", "text", false),
            column("checkin_date", "text", false),
            column("checkout_date", "text", false),
            column("guests", "integer", false),
            column("created_at", "text", true),
        ]),
        primary_keys: BTreeSet::from(["booking_id".to_string()]),
        indexes: BTreeSet::new(),
    };

    Schema {
        tables: BTreeMap::from([("bookings".to_string(), bookings)]),
    }
}

/// Reads tables, columns and indexes back out of a live `SQLite` database.
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct NameRow {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnRow {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    let mut schema = Schema {
        tables: BTreeMap::new(),
    };

    let tables: Vec<NameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' \
         ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to list SQLite tables")?;

    for table in tables {
        let mut columns: BTreeMap<String, Column> = BTreeMap::new();
        let mut primary_keys: BTreeSet<String> = BTreeSet::new();

        let column_rows: Vec<ColumnRow> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read columns of {}", table.name))?;
        for row in column_rows {
            if row.pk > 0 {
                primary_keys.insert(row.name.clone());
            }
            columns.insert(
                row.name.clone(),
                Column {
                    normalized_type: normalize_sqlite_type(&row.r#type),
                    nullable: row.notnull == 0,
                    name: row.name,
                },
            );
        }

        let index_rows: Vec<NameRow> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read indexes of {}", table.name))?;
        let mut indexes: BTreeSet<Index> = BTreeSet::new();
        for index in index_rows {
            // Implicit indexes backing UNIQUE and PRIMARY KEY constraints
            if index.name.starts_with("sqlite_autoindex_") {
                continue;
            }
            let index_columns: Vec<NameRow> =
                diesel::sql_query(format!("PRAGMA index_info({})", index.name))
                    .load(conn)
                    .wrap_err_with(|| format!("Failed to read columns of index {}", index.name))?;
            indexes.insert(Index {
                name: index.name,
                columns: index_columns.into_iter().map(|row| row.name).collect(),
            });
        }

        schema.tables.insert(
            table.name,
            Table {
                columns,
                primary_keys,
                indexes,
            },
        );
    }

    Ok(schema)
}

/// Maps a declared `SQLite` type onto the storage class Diesel reads it as.
fn normalize_sqlite_type(sqlite_type: &str) -> String {
    let declared: String = sqlite_type.to_uppercase();
    let class: &str = if declared.contains("INT") {
        "integer"
    } else if ["REAL", "FLOA", "DOUB"]
        .iter()
        .any(|marker| declared.contains(marker))
    {
        "real"
    } else if declared.contains("BLOB") {
        "blob"
    } else {
        // TEXT, CHAR, CLOB and DATETIME
        "text"
    };
    class.to_string()
}

fn compare_schemas(expected: &Schema, actual: &Schema) -> Result<()> {
    let mut differences: Vec<String> = Vec::new();

    for name in expected.tables.keys() {
        if !actual.tables.contains_key(name) {
            differences.push(format!("Table '{name}' is missing"));
        }
    }
    for name in actual.tables.keys() {
        if !expected.tables.contains_key(name) {
            differences.push(format!("Table '{name}' is not in the Diesel schema"));
        }
    }

    for (name, expected_table) in &expected.tables {
        let Some(actual_table) = actual.tables.get(name) else {
            continue;
        };

        for (column_name, expected_column) in &expected_table.columns {
            match actual_table.columns.get(column_name) {
                None => differences.push(format!("Column '{name}.{column_name}' is missing")),
                Some(actual_column) if actual_column != expected_column => {
                    differences.push(format!(
                        "Column '{name}.{column_name}' differs: \
                         expected {expected_column:?}, found {actual_column:?}"
                    ));
                }
                Some(_) => {}
            }
        }
        for column_name in actual_table.columns.keys() {
            if !expected_table.columns.contains_key(column_name) {
                differences.push(format!(
                    "Column '{name}.{column_name}' is not in the Diesel schema"
                ));
            }
        }

        if expected_table.primary_keys != actual_table.primary_keys {
            differences.push(format!(
                "Primary key of '{name}' differs: expected {:?}, found {:?}",
                expected_table.primary_keys, actual_table.primary_keys
            ));
        }
        if expected_table.indexes != actual_table.indexes {
            differences.push(format!(
                "Indexes of '{name}' differ: expected {:?}, found {:?}",
                expected_table.indexes, actual_table.indexes
            ));
        }
    }

    if differences.is_empty() {
        return Ok(());
    }

    for difference in &differences {
        tracing::error!("{difference}");
    }
    bail!(
        "Schema verification found {} difference(s)",
        differences.len()
    )
}
