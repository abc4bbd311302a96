// sparkify-core/src/application/fixtures.rs
//
// Shared test helpers: an in-memory warehouse with the schema in place and
// builders for staging rows.

use anyhow::Result;

use crate::application::schema_manager::reset_schema;
use crate::domain::project::Engine;
use crate::infrastructure::adapters::duckdb::DuckDBConnector;
use crate::ports::connector::Connector;

pub(crate) async fn fresh_warehouse() -> Result<DuckDBConnector> {
    let connector = DuckDBConnector::new(":memory:")?;
    reset_schema(&connector, Engine::DuckDB).await?;
    Ok(connector)
}

pub(crate) struct Event<'a> {
    pub user_id: Option<i32>,
    pub page: &'a str,
    pub song: &'a str,
    pub length: f64,
    pub level: &'a str,
    pub ts: &'a str,
}

impl Default for Event<'_> {
    fn default() -> Self {
        Self {
            user_id: Some(7),
            page: "NextSong",
            song: "Halo",
            length: 215.0,
            level: "paid",
            ts: "2018-11-15 08:30:00",
        }
    }
}

pub(crate) async fn stage_event(connector: &dyn Connector, event: Event<'_>) -> Result<()> {
    let user_id = event
        .user_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "NULL".to_string());
    let sql = format!(
        "INSERT INTO stg_events (userId, firstName, lastName, gender, level, page, song, length, ts, sessionId, location, userAgent) \
         VALUES ({}, 'Ann', 'Lee', 'F', '{}', '{}', '{}', {}, TIMESTAMP '{}', 42, 'Austin, TX', 'Mozilla/5.0');",
        user_id, event.level, event.page, event.song, event.length, event.ts
    );
    connector.execute(&sql).await?;
    Ok(())
}

pub(crate) async fn stage_song(
    connector: &dyn Connector,
    song_id: &str,
    title: &str,
    duration: f64,
    artist_id: &str,
    year: i32,
) -> Result<()> {
    let sql = format!(
        "INSERT INTO stg_songs (artist_id, artist_name, artist_location, duration, num_songs, song_id, title, year) \
         VALUES ('{}', 'Artist {}', 'Houston, TX', {}, 1, '{}', '{}', {});",
        artist_id, artist_id, duration, song_id, title, year
    );
    connector.execute(&sql).await?;
    Ok(())
}
