//! Response envelope construction.
//!
//! An `EnvelopeBuilder` is started once a request has passed validation and finalised exactly
//! once, either with the operation's result or as a storage fault. Elapsed time is measured
//! between the two on both paths.

use std::time::Instant;

use crate::{
    model::envelope::{OperationResult, OperationStatus},
    server::model::outcome::{total_count, StatementOutcome},
};

pub struct EnvelopeBuilder {
    operation: &'static str,
    started: Instant,
}

impl EnvelopeBuilder {
    /// Starts timing an operation.
    ///
    /// # Arguments
    /// - `operation` - Operation name used in anomaly warnings
    pub fn start(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
        }
    }

    /// Builds a success envelope with an explicit count.
    pub fn success<P>(self, total_count: i64, payload: P) -> OperationResult<P> {
        self.finish(OperationStatus::Success, total_count, payload)
    }

    /// Builds a success envelope whose count is the sum of the statement outcomes.
    ///
    /// Receiving fewer outcomes than `expected_statements` is logged as a warning and does not
    /// change the status.
    pub fn aggregate<P>(
        self,
        outcomes: &[StatementOutcome],
        expected_statements: usize,
        payload: P,
    ) -> OperationResult<P> {
        if outcomes.len() < expected_statements {
            tracing::warn!(
                operation = self.operation,
                expected = expected_statements,
                received = outcomes.len(),
                "Storage returned fewer statement outcomes than statements issued"
            );
        }

        self.success(total_count(outcomes), payload)
    }

    /// Builds the soft error envelope returned in place of a storage fault.
    ///
    /// `message` goes to the caller as is and must not carry storage error detail. The payload
    /// should carry identifiers only; collections are left empty by the caller.
    pub fn storage_fault<P>(self, message: &str, payload: P) -> OperationResult<P> {
        let mut result = self.finish(OperationStatus::Error, 0, payload);
        result.message = Some(message.to_string());
        result
    }

    fn finish<P>(self, status: OperationStatus, total_count: i64, payload: P) -> OperationResult<P> {
        OperationResult {
            status,
            total_count,
            elapsed_millis: i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX),
            message: None,
            payload,
        }
    }
}
