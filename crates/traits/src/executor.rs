//! Executor trait for abstracting batch execution.
//!
//! Each document generation is independent and reentrant, so a batch of
//! records can be spread over threads. This trait keeps the generator free of
//! any particular threading implementation.

use std::fmt::Debug;

/// A trait for executing work items, potentially in parallel.
///
/// # Implementations
///
/// - `SyncExecutor`: Sequential execution, no threading (always available)
/// - `RayonExecutor`: Work-stealing thread pool (in `folio-executor`)
///
/// # Example
///
/// ```ignore
/// let executor = SyncExecutor::new();
/// let pages = executor.execute_all_fallible(records, move |r| generator.generate_invoice(&r));
/// ```
pub trait Executor: Send + Sync + Debug {
    /// Execute a batch of work items, potentially in parallel.
    ///
    /// Results are returned in the same order as the input items.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Execute a batch of work items that may fail.
    ///
    /// A failing item never aborts its siblings; each result is reported in
    /// input order.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// Returns the level of parallelism this executor can provide.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A synchronous executor that processes items sequentially.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_executor_preserves_input_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec!["a", "b", "c"], |s| s.to_uppercase());
        assert_eq!(results, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sync_executor_reports_each_failure_separately() {
        let executor = SyncExecutor::new();
        let results: Vec<Result<usize, String>> =
            executor.execute_all_fallible(vec![8, 0, 16], |count| {
                if count == 0 {
                    Err("empty batch".to_string())
                } else {
                    Ok(count / 8)
                }
            });
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(1));
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(2));
    }

    #[test]
    fn test_sync_executor_empty_input() {
        let executor = SyncExecutor::new();
        let results: Vec<i32> = executor.execute_all(Vec::<i32>::new(), |x| x);
        assert!(results.is_empty());
    }

    #[test]
    fn test_sync_executor_metadata() {
        let executor = SyncExecutor::new();
        assert_eq!(executor.parallelism(), 1);
        assert_eq!(executor.name(), "SyncExecutor");
    }
}
