//! Per-statement write outcomes reported by the storage port.

use crate::model::envelope::StatementResultDto;

/// Affected-row count of one named write statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementOutcome {
    pub statement_name: String,
    pub affected_count: i64,
}

impl StatementOutcome {
    pub fn new(statement_name: impl Into<String>, affected_count: i64) -> Self {
        Self {
            statement_name: statement_name.into(),
            affected_count,
        }
    }

    /// Builds an outcome from a driver row count, saturating instead of wrapping.
    pub fn from_rows(statement_name: impl Into<String>, rows_affected: u64) -> Self {
        Self::new(
            statement_name,
            i64::try_from(rows_affected).unwrap_or(i64::MAX),
        )
    }

    pub fn into_dto(self) -> StatementResultDto {
        StatementResultDto {
            statement_name: self.statement_name,
            affected_count: self.affected_count,
        }
    }
}

/// Sums the affected counts of a list of outcomes.
pub fn total_count(outcomes: &[StatementOutcome]) -> i64 {
    outcomes
        .iter()
        .fold(0i64, |sum, outcome| sum.saturating_add(outcome.affected_count))
}
