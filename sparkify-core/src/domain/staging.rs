// sparkify-core/src/domain/staging.rs

// Bulk-load templates for the two staging tables. Values come from dwh.yaml
// and are substituted when the statement is built, never bound at execution.

use serde_json::{Value, json};

use crate::domain::error::DomainError;
use crate::domain::project::{DwhConfig, Engine};
use crate::domain::schema::{STAGING_EVENTS, STAGING_SONGS};

pub struct StageTemplate {
    pub name: &'static str,
    pub target: &'static str,
    pub template: &'static str,
}

const REDSHIFT_EVENTS_COPY: &str = "COPY stg_events
FROM '{{ log_data | redshift_literal }}'
CREDENTIALS 'aws_iam_role={{ iam_role_arn | redshift_literal }}'
FORMAT AS JSON '{{ log_jsonpath | redshift_literal }}'
ROUNDEC
TIMEFORMAT 'epochmillisecs'
REGION '{{ region | redshift_literal }}';";

const REDSHIFT_SONGS_COPY: &str = "COPY stg_songs
FROM '{{ song_data | redshift_literal }}'
CREDENTIALS 'aws_iam_role={{ iam_role_arn | redshift_literal }}'
FORMAT AS JSON 'auto'
ROUNDEC
REGION '{{ region | redshift_literal }}';";

// Log events carry epoch milliseconds and an empty-string userId for
// logged-out sessions.
const DUCKDB_EVENTS_LOAD: &str = "INSERT INTO stg_events (
    artist, auth, firstName, gender, itemInSession, lastName, length, level,
    location, method, page, registration, sessionId, song, status, ts,
    userAgent, userId
)
SELECT
    artist, auth, firstName, gender, itemInSession, lastName, length, level,
    location, method, page,
    epoch_ms(CAST(registration AS BIGINT)),
    sessionId, song, status,
    epoch_ms(ts),
    userAgent,
    TRY_CAST(NULLIF(CAST(userId AS VARCHAR), '') AS INTEGER)
FROM read_json('{{ log_data | sql_literal }}', format = 'auto', columns = {
    'artist': 'VARCHAR', 'auth': 'VARCHAR', 'firstName': 'VARCHAR',
    'gender': 'VARCHAR', 'itemInSession': 'INTEGER', 'lastName': 'VARCHAR',
    'length': 'DOUBLE', 'level': 'VARCHAR', 'location': 'VARCHAR',
    'method': 'VARCHAR', 'page': 'VARCHAR', 'registration': 'DOUBLE',
    'sessionId': 'INTEGER', 'song': 'VARCHAR', 'status': 'INTEGER',
    'ts': 'BIGINT', 'userAgent': 'VARCHAR', 'userId': 'VARCHAR'
});";

const DUCKDB_SONGS_LOAD: &str = "INSERT INTO stg_songs (
    artist_id, artist_latitude, artist_location, artist_longitude,
    artist_name, duration, num_songs, song_id, title, year
)
SELECT
    artist_id, artist_latitude, artist_location, artist_longitude,
    artist_name, duration, num_songs, song_id, title, year
FROM read_json('{{ song_data | sql_literal }}', format = 'auto', columns = {
    'artist_id': 'VARCHAR', 'artist_latitude': 'DOUBLE',
    'artist_location': 'VARCHAR', 'artist_longitude': 'DOUBLE',
    'artist_name': 'VARCHAR', 'duration': 'DOUBLE', 'num_songs': 'INTEGER',
    'song_id': 'VARCHAR', 'title': 'VARCHAR', 'year': 'INTEGER'
});";

/// Events first, then songs.
pub fn stage_templates(engine: Engine) -> [StageTemplate; 2] {
    let (events, songs) = match engine {
        Engine::Redshift => (REDSHIFT_EVENTS_COPY, REDSHIFT_SONGS_COPY),
        Engine::DuckDB => (DUCKDB_EVENTS_LOAD, DUCKDB_SONGS_LOAD),
    };
    [
        StageTemplate {
            name: "copy stg_events",
            target: STAGING_EVENTS.name,
            template: events,
        },
        StageTemplate {
            name: "copy stg_songs",
            target: STAGING_SONGS.name,
            template: songs,
        },
    ]
}

/// Template variables. The access role is only required on Redshift.
pub fn stage_context(config: &DwhConfig) -> Result<Value, DomainError> {
    let iam_role_arn = match config.engine {
        Engine::Redshift => config.iam_role()?.arn.clone(),
        Engine::DuckDB => String::new(),
    };
    let storage = &config.storage;
    Ok(json!({
        "log_data": storage.log_data,
        "song_data": storage.song_data,
        "log_jsonpath": storage.log_jsonpath,
        "region": storage.region,
        "iam_role_arn": iam_role_arn,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{DuckDbConfig, IamRoleConfig, StorageConfig};

    fn config(engine: Engine, with_role: bool) -> DwhConfig {
        DwhConfig {
            engine,
            cluster: None,
            iam_role: with_role.then(|| IamRoleConfig {
                arn: "arn:aws:iam::123:role/dwhRole".into(),
            }),
            storage: StorageConfig {
                log_data: "s3://udacity-dend/log_data".into(),
                song_data: "s3://udacity-dend/song_data".into(),
                log_jsonpath: "s3://udacity-dend/log_json_path.json".into(),
                region: "us-west-2".into(),
            },
            duckdb: DuckDbConfig::default(),
        }
    }

    #[test]
    fn test_redshift_context_requires_role() {
        let err = stage_context(&config(Engine::Redshift, false));
        assert!(matches!(err, Err(DomainError::MissingSection { .. })));

        let ctx = stage_context(&config(Engine::Redshift, true)).unwrap_or_default();
        assert_eq!(ctx["iam_role_arn"], "arn:aws:iam::123:role/dwhRole");
        assert_eq!(ctx["region"], "us-west-2");
    }

    #[test]
    fn test_duckdb_context_ignores_role() {
        let ctx = stage_context(&config(Engine::DuckDB, false)).unwrap_or_default();
        assert_eq!(ctx["iam_role_arn"], "");
        assert_eq!(ctx["log_data"], "s3://udacity-dend/log_data");
    }

    #[test]
    fn test_events_load_before_songs() {
        for engine in [Engine::Redshift, Engine::DuckDB] {
            let [events, songs] = stage_templates(engine);
            assert_eq!(events.target, "stg_events");
            assert_eq!(songs.target, "stg_songs");
        }
        let [events, songs] = stage_templates(Engine::Redshift);
        assert!(events.template.contains("TIMEFORMAT 'epochmillisecs'"));
        assert!(!songs.template.contains("TIMEFORMAT"));
    }
}
