// sparkify-core/src/domain/schema.rs

// Table definitions of the star schema and their DDL rendering.
// One definition, two dialects: Redshift gets its distribution/sort hints and
// IDENTITY columns, DuckDB gets a sequence and plain foreign keys.

use crate::domain::project::Engine;
use crate::domain::statement::{Statement, StatementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub primary_key: bool,
    pub not_null: bool,
    pub identity: bool,
    pub dist_key: bool,
    pub sort_key: bool,
}

const fn col(name: &'static str, sql_type: &'static str) -> Column {
    Column {
        name,
        sql_type,
        primary_key: false,
        not_null: false,
        identity: false,
        dist_key: false,
        sort_key: false,
    }
}

impl Column {
    const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
    const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
    const fn identity(mut self) -> Self {
        self.identity = true;
        self
    }
    const fn dist_key(mut self) -> Self {
        self.dist_key = true;
        self
    }
    const fn sort_key(mut self) -> Self {
        self.sort_key = true;
        self
    }

    fn render(&self, table: &str, engine: Engine) -> String {
        let mut sql = format!("{} {}", self.name, self.sql_type);
        if self.identity {
            match engine {
                Engine::Redshift => sql.push_str(" IDENTITY(0,1)"),
                Engine::DuckDB => {
                    sql.push_str(&format!(
                        " DEFAULT nextval('{}')",
                        sequence_name(table, self.name)
                    ));
                }
            }
        }
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if engine == Engine::Redshift {
            if self.dist_key {
                sql.push_str(" DISTKEY");
            }
            if self.sort_key {
                sql.push_str(" SORTKEY");
            }
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub table: &'static str,
    pub references: &'static str,
}

impl ForeignKey {
    fn render(&self, engine: Engine) -> String {
        let clause = format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            self.column,
            quote(self.table),
            self.references
        );
        match engine {
            Engine::Redshift => format!("CONSTRAINT {} {}", self.column, clause),
            // constraint names only on Redshift
            Engine::DuckDB => clause,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
    /// Replicate the table on every node (small dimensions).
    pub dist_all: bool,
}

impl TableDef {
    pub fn create_sql(&self, engine: Engine) -> String {
        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|c| c.render(self.name, engine))
            .collect();
        lines.extend(self.foreign_keys.iter().map(|fk| fk.render(engine)));

        let mut sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            quote(self.name),
            lines.join(",\n    ")
        );
        if engine == Engine::Redshift && self.dist_all {
            sql.push_str("\nDISTSTYLE ALL");
        }
        sql.push(';');
        sql
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", quote(self.name))
    }

    fn identity_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.identity)
    }
}

/// Quoted identifier. `time` collides with a type keyword on some engines.
pub fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}

pub fn sequence_name(table: &str, column: &str) -> String {
    format!("{}_{}_seq", table, column)
}

// --- STAGING ---

pub const STAGING_EVENTS: TableDef = TableDef {
    name: "stg_events",
    columns: &[
        col("artist", "varchar"),
        col("auth", "varchar"),
        col("firstName", "varchar"),
        col("gender", "varchar"),
        col("itemInSession", "int"),
        col("lastName", "varchar"),
        col("length", "decimal(18,5)"),
        col("level", "varchar"),
        col("location", "varchar"),
        col("method", "varchar"),
        col("page", "varchar"),
        col("registration", "timestamp"),
        col("sessionId", "int"),
        col("song", "varchar"),
        col("status", "int"),
        col("ts", "timestamp"),
        col("userAgent", "text"),
        col("userId", "int"),
    ],
    foreign_keys: &[],
    dist_all: false,
};

pub const STAGING_SONGS: TableDef = TableDef {
    name: "stg_songs",
    columns: &[
        col("artist_id", "varchar"),
        col("artist_latitude", "decimal(18,5)"),
        col("artist_location", "varchar"),
        col("artist_longitude", "decimal(18,5)"),
        col("artist_name", "varchar"),
        col("duration", "decimal(18,5)"),
        col("num_songs", "int"),
        col("song_id", "varchar"),
        col("title", "varchar"),
        col("year", "int"),
    ],
    foreign_keys: &[],
    dist_all: false,
};

// --- DIMENSIONS ---

pub const USERS: TableDef = TableDef {
    name: "users",
    columns: &[
        col("user_id", "int").primary_key().sort_key(),
        col("first_name", "varchar"),
        col("last_name", "varchar"),
        col("gender", "char(1)"),
        col("level", "varchar"),
    ],
    foreign_keys: &[],
    dist_all: true,
};

pub const SONGS: TableDef = TableDef {
    name: "songs",
    columns: &[
        col("song_id", "varchar").primary_key().dist_key().sort_key(),
        col("title", "varchar"),
        col("artist_id", "varchar"),
        col("year", "int"),
        col("duration", "numeric"),
    ],
    foreign_keys: &[],
    dist_all: false,
};

pub const ARTISTS: TableDef = TableDef {
    name: "artists",
    columns: &[
        col("artist_id", "varchar").primary_key().sort_key(),
        col("name", "varchar"),
        col("location", "varchar"),
        col("latitude", "numeric"),
        col("longitude", "numeric"),
    ],
    foreign_keys: &[],
    dist_all: true,
};

pub const TIME: TableDef = TableDef {
    name: "time",
    columns: &[
        col("start_time", "timestamp").primary_key().sort_key(),
        col("hour", "int"),
        col("day", "int"),
        col("week", "int"),
        col("month", "int"),
        col("year", "int"),
        col("weekday", "int"),
    ],
    foreign_keys: &[],
    dist_all: true,
};

// --- FACT ---

pub const SONGPLAYS: TableDef = TableDef {
    name: "songplays",
    columns: &[
        col("songplay_id", "bigint").identity().primary_key(),
        col("start_time", "timestamp").not_null().sort_key(),
        col("user_id", "int").not_null(),
        col("level", "varchar").not_null(),
        col("song_id", "varchar").not_null().dist_key(),
        col("artist_id", "varchar").not_null(),
        col("session_id", "int"),
        col("location", "varchar"),
        col("user_agent", "text"),
    ],
    foreign_keys: &[
        ForeignKey {
            column: "user_id",
            table: "users",
            references: "user_id",
        },
        ForeignKey {
            column: "song_id",
            table: "songs",
            references: "song_id",
        },
        ForeignKey {
            column: "artist_id",
            table: "artists",
            references: "artist_id",
        },
        ForeignKey {
            column: "start_time",
            table: "time",
            references: "start_time",
        },
    ],
    dist_all: false,
};

/// Referenced tables come before the fact table that points at them.
pub const CREATE_ORDER: [TableDef; 7] = [
    STAGING_EVENTS,
    STAGING_SONGS,
    USERS,
    SONGS,
    ARTISTS,
    TIME,
    SONGPLAYS,
];

/// The fact table goes before the dimensions it references.
pub const DROP_ORDER: [TableDef; 7] = [
    STAGING_EVENTS,
    STAGING_SONGS,
    SONGPLAYS,
    USERS,
    SONGS,
    ARTISTS,
    TIME,
];

pub fn drop_statements(engine: Engine) -> Vec<Statement> {
    let mut statements = Vec::with_capacity(DROP_ORDER.len() + 1);
    for table in DROP_ORDER {
        statements.push(Statement::new(
            StatementKind::Ddl,
            format!("drop {}", table.name),
            table.name,
            table.drop_sql(),
        ));
        if engine == Engine::DuckDB {
            if let Some(column) = table.identity_column() {
                let sequence = sequence_name(table.name, column.name);
                statements.push(Statement::new(
                    StatementKind::Ddl,
                    format!("drop {}", sequence),
                    table.name,
                    format!("DROP SEQUENCE IF EXISTS {};", sequence),
                ));
            }
        }
    }
    statements
}

pub fn create_statements(engine: Engine) -> Vec<Statement> {
    let mut statements = Vec::with_capacity(CREATE_ORDER.len() + 1);
    for table in CREATE_ORDER {
        if engine == Engine::DuckDB {
            if let Some(column) = table.identity_column() {
                let sequence = sequence_name(table.name, column.name);
                statements.push(Statement::new(
                    StatementKind::Ddl,
                    format!("create {}", sequence),
                    table.name,
                    format!(
                        "CREATE SEQUENCE IF NOT EXISTS {} START WITH 0 MINVALUE 0;",
                        sequence
                    ),
                ));
            }
        }
        statements.push(Statement::new(
            StatementKind::Ddl,
            format!("create {}", table.name),
            table.name,
            table.create_sql(engine),
        ));
    }
    statements
}
