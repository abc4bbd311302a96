// sparkify-core/src/domain/transform.rs

// Staging -> star schema. The SQL is the same on both engines.
// Order matters: songplays references the four dimensions and runs last.

use crate::domain::statement::{Statement, StatementKind};

// Latest event wins for a user's attributes (level changes over time).
const USER_INSERT: &str = "INSERT INTO \"users\" (user_id, first_name, last_name, gender, level)
SELECT userId, firstName, lastName, gender, level
FROM (
    SELECT
        userId, firstName, lastName, gender, level,
        ROW_NUMBER() OVER (PARTITION BY userId ORDER BY ts DESC) AS row_num
    FROM stg_events
    WHERE page = 'NextSong'
) ranked
WHERE row_num = 1;";

// Most recent catalog year wins for an artist.
const ARTIST_INSERT: &str = "INSERT INTO \"artists\" (artist_id, name, location, latitude, longitude)
SELECT artist_id, artist_name, artist_location, artist_latitude, artist_longitude
FROM (
    SELECT
        artist_id, artist_name, artist_location, artist_latitude, artist_longitude,
        ROW_NUMBER() OVER (PARTITION BY artist_id ORDER BY year DESC) AS row_num
    FROM stg_songs
) ranked
WHERE row_num = 1;";

const TIME_INSERT: &str = "INSERT INTO \"time\" (start_time, hour, day, week, month, year, weekday)
SELECT DISTINCT
    ts,
    EXTRACT(hour FROM ts),
    EXTRACT(day FROM ts),
    EXTRACT(week FROM ts),
    EXTRACT(month FROM ts),
    EXTRACT(year FROM ts),
    EXTRACT(dow FROM ts)
FROM stg_events;";

// Catalog rows are unique per song_id already.
const SONG_INSERT: &str = "INSERT INTO \"songs\" (song_id, title, artist_id, year, duration)
SELECT DISTINCT song_id, title, artist_id, year, duration
FROM stg_songs;";

// Inner join: plays without an exact title + duration match are dropped.
const SONGPLAY_INSERT: &str = "INSERT INTO \"songplays\" (
    start_time, user_id, level, song_id, artist_id, session_id, location, user_agent
)
SELECT
    se.ts, se.userId, se.level, so.song_id, so.artist_id,
    se.sessionId, se.location, se.userAgent
FROM stg_events se
INNER JOIN stg_songs so
    ON UPPER(so.title) = UPPER(se.song)
    AND so.duration = se.length
WHERE se.page = 'NextSong';";

pub fn insert_statements() -> Vec<Statement> {
    [
        ("insert users", "users", USER_INSERT),
        ("insert artists", "artists", ARTIST_INSERT),
        ("insert time", "time", TIME_INSERT),
        ("insert songs", "songs", SONG_INSERT),
        ("insert songplays", "songplays", SONGPLAY_INSERT),
    ]
    .into_iter()
    .map(|(name, target, sql)| Statement::new(StatementKind::Insert, name, target, sql))
    .collect()
}
