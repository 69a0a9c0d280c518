//! Rayon-based parallel executor.

use folio_traits::Executor;
use rayon::prelude::*;
use std::sync::Arc;

/// A parallel executor using rayon's work-stealing thread pool.
///
/// [`RayonExecutor::new`] runs on rayon's global pool, which defaults to one
/// thread per core. [`RayonExecutor::with_threads`] builds a dedicated pool so
/// a batch can be capped without touching the global configuration.
///
/// Results always come back in input order; rayon's indexed collect keeps
/// positions even though items finish out of order.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// `None` means the global pool.
    pool: Option<Arc<rayon::ThreadPool>>,
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            pool: None,
            num_threads: rayon::current_num_threads(),
        }
    }

    /// Runs on a dedicated pool of `threads` workers (at least one).
    ///
    /// Falls back to the global pool if the dedicated one cannot be built.
    pub fn with_threads(threads: usize) -> Self {
        let threads = threads.max(1);
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("folio-worker-{index}"))
            .build()
        {
            Ok(pool) => Self {
                pool: Some(Arc::new(pool)),
                num_threads: threads,
            },
            Err(e) => {
                log::warn!("Could not build a {threads}-thread pool, using the global pool: {e}");
                Self::new()
            }
        }
    }

    fn run<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        match &self.pool {
            Some(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
            None => items.into_par_iter().map(f).collect(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        self.run(items, f)
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.run(items, f)
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
