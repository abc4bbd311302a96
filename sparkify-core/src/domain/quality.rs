// sparkify-core/src/domain/quality.rs

use crate::domain::schema::{ARTISTS, SONGPLAYS, SONGS, STAGING_EVENTS, STAGING_SONGS, TIME, USERS};
use crate::domain::statement::{Statement, StatementKind};

/// A source-count vs target-count comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountCheck {
    pub name: &'static str,
    pub source_table: &'static str,
    pub source_sql: &'static str,
    pub target_table: &'static str,
    pub target_sql: &'static str,
}

impl CountCheck {
    /// Source count then target count, both named after the check.
    pub fn statements(&self) -> [Statement; 2] {
        [
            Statement::new(StatementKind::Select, self.name, self.source_table, self.source_sql),
            Statement::new(StatementKind::Select, self.name, self.target_table, self.target_sql),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub test: String,
    pub source: i64,
    pub target: i64,
    pub difference: i64,
}

impl CheckResult {
    pub fn new(check: &CountCheck, source: i64, target: i64) -> Self {
        Self {
            test: check.name.to_string(),
            source,
            target,
            difference: source - target,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.difference == 0
    }
}

pub const COUNT_CHECKS: [CountCheck; 5] = [
    CountCheck {
        name: "Count Distinct user_id",
        source_table: STAGING_EVENTS.name,
        source_sql: "SELECT COUNT(DISTINCT userId) FROM stg_events WHERE page = 'NextSong';",
        target_table: USERS.name,
        target_sql: "SELECT COUNT(user_id) FROM \"users\";",
    },
    CountCheck {
        name: "Count Distinct artist_id",
        source_table: STAGING_SONGS.name,
        source_sql: "SELECT COUNT(DISTINCT artist_id) FROM stg_songs;",
        target_table: ARTISTS.name,
        target_sql: "SELECT COUNT(artist_id) FROM \"artists\";",
    },
    CountCheck {
        name: "Count Distinct song_id",
        source_table: STAGING_SONGS.name,
        source_sql: "SELECT COUNT(DISTINCT song_id) FROM stg_songs;",
        target_table: SONGS.name,
        target_sql: "SELECT COUNT(song_id) FROM \"songs\";",
    },
    CountCheck {
        name: "Count Distinct time_stamp",
        source_table: STAGING_EVENTS.name,
        source_sql: "SELECT COUNT(DISTINCT ts) FROM stg_events;",
        target_table: TIME.name,
        target_sql: "SELECT COUNT(start_time) FROM \"time\";",
    },
    CountCheck {
        name: "Record Count songplays",
        source_table: STAGING_EVENTS.name,
        source_sql: "SELECT COUNT(1) FROM stg_events WHERE page = 'NextSong';",
        target_table: SONGPLAYS.name,
        target_sql: "SELECT COUNT(1) FROM \"songplays\";",
    },
];
