// sparkify-core/src/domain/statement.rs

use std::fmt;

/// What a statement does to the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// DROP / CREATE of tables and sequences.
    Ddl,
    /// Bulk load of external files into a staging table.
    Copy,
    /// INSERT ... SELECT from staging into the star schema.
    Insert,
    /// Read-only query.
    Select,
}

impl StatementKind {
    pub fn is_read_only(self) -> bool {
        matches!(self, StatementKind::Select)
    }
}

/// The phase a statement belongs to. Failures are reported per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementGroup {
    Drop,
    Create,
    Stage,
    Transform,
    Test,
}

impl StatementGroup {
    /// Static message logged when any statement of the group fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            StatementGroup::Drop => "Error: Tables not deleted",
            StatementGroup::Create => "Error: Tables not created",
            StatementGroup::Stage => "Error: Copying into staging tables",
            StatementGroup::Transform => "Error: Inserting into target tables",
            StatementGroup::Test => "Error: Retrieving results from database",
        }
    }
}

impl fmt::Display for StatementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementGroup::Drop => "drop",
            StatementGroup::Create => "create",
            StatementGroup::Stage => "stage",
            StatementGroup::Transform => "transform",
            StatementGroup::Test => "test",
        };
        f.write_str(name)
    }
}

/// One entry of a pipeline: a fully rendered SQL text plus what it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub name: String,
    pub kind: StatementKind,
    pub target: String,
    pub sql: String,
}

impl Statement {
    pub fn new(
        kind: StatementKind,
        name: impl Into<String>,
        target: impl Into<String>,
        sql: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            sql: sql.into(),
        }
    }
}
