//! Fixed-size worker pool
//!
//! Fans a batch out over a dedicated rayon pool of N threads and blocks until
//! every item has a result. Each task runs under `catch_unwind`, and the
//! indexed parallel collect keeps results in submission order.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::warn;

/// Why an item produced no regular result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFailure {
    /// The task panicked; payload message attached
    Panicked(String),
}

impl std::fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFailure::Panicked(msg) => write!(f, "worker panicked: {}", msg),
        }
    }
}

/// Worker pool configuration. `workers == 0` runs everything on the
/// calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::per_cpu()
    }
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// One worker per available processor.
    pub fn per_cpu() -> Self {
        Self::new(num_cpus::get().max(1))
    }

    /// No pool: run items one after another on the caller's thread.
    pub fn sequential() -> Self {
        Self::new(0)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn is_sequential(&self) -> bool {
        self.workers == 0
    }

    /// Run `task` over every item and return `(item, outcome)` pairs in
    /// submission order.
    pub fn map<T, R, F>(&self, items: Vec<T>, task: F) -> Vec<(T, Result<R, TaskFailure>)>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let results: Vec<Result<R, TaskFailure>> = if self.is_sequential() || items.len() <= 1 {
            run_sequential(&items, &task)
        } else {
            self.map_parallel(&items, &task)
        };

        items.into_iter().zip(results).collect()
    }

    fn map_parallel<T, R, F>(&self, items: &[T], task: &F) -> Vec<Result<R, TaskFailure>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let pool = match ThreadPoolBuilder::new()
            .num_threads(self.workers.min(items.len()))
            .thread_name(|i| format!("tddmon-worker-{}", i))
            .build()
        {
            Ok(pool) => pool,
            Err(err) => {
                warn!(error = %err, "cannot start worker threads, running sequentially");
                return run_sequential(items, task);
            }
        };

        pool.install(|| items.par_iter().map(|item| guarded(task, item)).collect())
    }
}

fn run_sequential<T, R, F>(items: &[T], task: &F) -> Vec<Result<R, TaskFailure>>
where
    F: Fn(&T) -> R,
{
    items.iter().map(|item| guarded(task, item)).collect()
}

fn guarded<T, R, F>(task: &F, item: &T) -> Result<R, TaskFailure>
where
    F: Fn(&T) -> R,
{
    panic::catch_unwind(AssertUnwindSafe(|| task(item))).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        warn!(%message, "task panicked");
        TaskFailure::Panicked(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn results_pair_with_their_items_regardless_of_completion_order() {
        let pool = WorkerPool::new(4);
        // Earlier items sleep longer, so they finish last
        let items: Vec<u64> = (0..8).collect();
        let results = pool.map(items, |n| {
            std::thread::sleep(Duration::from_millis((8 - n) * 5));
            n * 10
        });

        for (item, outcome) in results {
            assert_eq!(outcome, Ok(item * 10));
        }
    }

    #[test]
    fn sequential_pool_runs_in_order() {
        let pool = WorkerPool::sequential();
        let results = pool.map(vec!["a", "b"], |s| s.to_uppercase());
        assert_eq!(
            results,
            vec![("a", Ok("A".to_string())), ("b", Ok("B".to_string()))]
        );
    }

    #[test]
    fn panicking_task_is_contained() {
        let pool = WorkerPool::new(2);
        let results = pool.map(vec![1, 2, 3], |n| {
            if *n == 2 {
                panic!("boom on {}", n);
            }
            *n
        });

        assert_eq!(results[0].1, Ok(1));
        assert_eq!(
            results[1].1,
            Err(TaskFailure::Panicked("boom on 2".to_string()))
        );
        assert_eq!(results[2].1, Ok(3));
    }

    #[test]
    fn empty_batch_is_empty() {
        let results = WorkerPool::new(3).map(Vec::<u8>::new(), |n| *n);
        assert!(results.is_empty());
    }

    #[test]
    fn per_cpu_has_at_least_one_worker() {
        assert!(WorkerPool::per_cpu().workers() >= 1);
        assert!(WorkerPool::sequential().is_sequential());
    }

    #[test]
    fn single_worker_pool_still_keeps_order() {
        let results = WorkerPool::new(1).map(vec![3, 1, 2], |n| n * 2);
        let doubled: Vec<_> = results.into_iter().map(|(_, r)| r.unwrap()).collect();
        assert_eq!(doubled, vec![6, 2, 4]);
    }

    #[test]
    fn tasks_run_on_named_worker_threads() {
        let results = WorkerPool::new(2).map(vec![(), ()], |_| {
            std::thread::current().name().map(str::to_string)
        });
        for (_, name) in results {
            assert!(name.unwrap().unwrap().starts_with("tddmon-worker-"));
        }
    }

    #[test]
    fn failure_message() {
        assert_eq!(
            TaskFailure::Panicked("x".into()).to_string(),
            "worker panicked: x"
        );
    }
}
