// sparkify-core/src/application/quality.rs
//
// USE CASE: compare staging counts with star-schema counts. A non-zero
// difference is a finding for a human, not a failure; only query errors fail.

use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, instrument, warn};

use crate::application::runner::run_counts;
use crate::domain::quality::{COUNT_CHECKS, CheckResult};
use crate::domain::statement::{Statement, StatementGroup};
use crate::error::SparkifyError;
use crate::ports::connector::Connector;

pub const REPORT_CAPTION: &str = "Test Results - Please investigate differences";
pub const REPORT_LEGEND: [&str; 2] = [
    "source = staging tables",
    "target = dimension tables / fact table",
];

#[instrument(skip(connector))]
pub async fn run_quality_checks(connector: &dyn Connector) -> Result<Vec<CheckResult>, SparkifyError> {
    let statements: Vec<Statement> = COUNT_CHECKS.iter().flat_map(|c| c.statements()).collect();
    let counts = run_counts(connector, StatementGroup::Test, &statements).await?;

    let mut results = Vec::with_capacity(COUNT_CHECKS.len());
    for (check, pair) in COUNT_CHECKS.iter().zip(counts.chunks_exact(2)) {
        let result = CheckResult::new(check, pair[0], pair[1]);

        if result.is_consistent() {
            info!(test = check.name, count = result.source, "Counts match");
        } else {
            warn!(
                test = check.name,
                source = result.source,
                target = result.target,
                difference = result.difference,
                "Counts differ"
            );
        }
        results.push(result);
    }

    Ok(results)
}

/// Caption, table, legend.
pub fn render_report(results: &[CheckResult]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["test", "source", "target", "difference"]);
    for r in results {
        table.add_row(vec![
            Cell::new(&r.test),
            Cell::new(r.source).set_alignment(CellAlignment::Right),
            Cell::new(r.target).set_alignment(CellAlignment::Right),
            Cell::new(r.difference).set_alignment(CellAlignment::Right),
        ]);
    }

    let mut report = String::new();
    report.push_str(REPORT_CAPTION);
    report.push('\n');
    report.push_str(&table.to_string());
    report.push('\n');
    for line in REPORT_LEGEND {
        report.push_str(line);
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{Event, fresh_warehouse, stage_event, stage_song};
    use crate::application::loader::insert_tables;
    use crate::application::runner::tests::MockConnector;
    use anyhow::Result;

    #[tokio::test]
    async fn test_clean_load_has_no_differences() -> Result<()> {
        let dwh = fresh_warehouse().await?;
        stage_event(&dwh, Event::default()).await?;
        stage_event(
            &dwh,
            Event {
                level: "free",
                ts: "2018-11-02 10:00:00",
                ..Default::default()
            },
        )
        .await?;
        stage_event(
            &dwh,
            Event {
                user_id: None,
                page: "Home",
                ts: "2018-11-03 10:00:00",
                ..Default::default()
            },
        )
        .await?;
        stage_song(&dwh, "S1", "Halo", 215.0, "A1", 2008).await?;
        stage_song(&dwh, "S2", "Single Ladies", 193.0, "A1", 2008).await?;
        insert_tables(&dwh).await?;

        let results = run_quality_checks(&dwh).await?;
        assert_eq!(results.len(), 5);
        for r in &results {
            assert_eq!(r.difference, 0, "{} differs", r.test);
        }
        let songplays = results
            .iter()
            .find(|r| r.test == "Record Count songplays")
            .map(|r| r.source);
        assert_eq!(songplays, Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_difference_is_reported_not_raised() -> Result<()> {
        let dwh = fresh_warehouse().await?;
        stage_song(&dwh, "S1", "Halo", 215.0, "A1", 2008).await?;
        // Nothing transformed: every target is empty.

        let results = run_quality_checks(&dwh).await?;
        let songs = results
            .iter()
            .find(|r| r.test == "Count Distinct song_id")
            .map(|r| (r.source, r.target, r.difference));
        assert_eq!(songs, Some((1, 0, 1)));
        Ok(())
    }

    #[tokio::test]
    async fn test_checks_do_not_mutate() -> Result<()> {
        let connector = MockConnector::default();
        run_quality_checks(&connector).await?;
        let executed = connector.executed();
        assert_eq!(executed.len(), 10);
        assert!(executed.iter().all(|q| q.starts_with("SELECT")));
        Ok(())
    }

    #[tokio::test]
    async fn test_query_error_fails_the_run() {
        let connector = MockConnector::failing_on("FROM \"artists\"");
        let result = run_quality_checks(&connector).await;
        match result {
            Err(SparkifyError::StatementFailed {
                group, statement, ..
            }) => {
                assert_eq!(group, StatementGroup::Test);
                assert_eq!(statement, "Count Distinct artist_id");
            }
            other => panic!("expected StatementFailed, got {:?}", other),
        }
        // user pair + artist source + failing artist target
        assert_eq!(connector.executed().len(), 4);
    }

    #[test]
    fn test_report_layout() {
        let results = vec![CheckResult::new(&COUNT_CHECKS[4], 6820, 6818)];
        let report = render_report(&results);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.first(), Some(&REPORT_CAPTION));
        assert_eq!(lines[lines.len() - 2], REPORT_LEGEND[0]);
        assert_eq!(lines[lines.len() - 1], REPORT_LEGEND[1]);
        assert!(report.contains("difference"));
        assert!(report.contains("Record Count songplays"));
        assert!(report.contains("6820"));
        assert!(report.contains("6818"));
    }
}
