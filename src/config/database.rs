//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema matches the
//! Rust struct definitions without manual SQL. On top of the generated
//! tables, one extra index is created by hand: the unique
//! `(member_id, month_id)` pair index on `contributions`, which is the
//! enforcement point for the one-contribution-per-member-per-month rule.

use crate::entities::{Contribution, Member, Month};
use crate::errors::Result;
use sea_orm::sea_query::{Alias, Index};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions,
/// plus the unique pair index backing the contribution upsert.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut member_table = schema.create_table_from_entity(Member);
    let mut month_table = schema.create_table_from_entity(Month);
    let mut contribution_table = schema.create_table_from_entity(Contribution);

    db.execute(builder.build(member_table.if_not_exists()))
        .await?;
    db.execute(builder.build(month_table.if_not_exists()))
        .await?;
    db.execute(builder.build(contribution_table.if_not_exists()))
        .await?;

    // One contribution per (member, month); mark_paid upserts against this.
    let pair_index = Index::create()
        .if_not_exists()
        .name("idx_contributions_member_month")
        .table(Alias::new("contributions"))
        .col(Alias::new("member_id"))
        .col(Alias::new("month_id"))
        .unique()
        .to_owned();
    db.execute(builder.build(&pair_index)).await?;

    Ok(())
}
