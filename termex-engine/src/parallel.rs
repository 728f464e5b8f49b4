//! Sentence-level parallel execution

use crate::error::{EngineError, Result};
use rayon::prelude::*;

/// Map `f` over `items` on a dedicated rayon pool, keeping input order
///
/// `threads` defaults to the number of logical CPUs.
pub(crate) fn map_in_order<I, T, F>(items: &[I], threads: Option<usize>, f: F) -> Result<Vec<T>>
where
    I: Sync,
    T: Send,
    F: Fn(usize, &I) -> Result<T> + Sync + Send,
{
    let thread_count = threads.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .thread_name(|i| format!("termex-worker-{i}"))
        .build()
        .map_err(|e| EngineError::Parallel(format!("Failed to create thread pool: {e}")))?;

    log::debug!(
        "Processing {} sentences on {} threads",
        items.len(),
        thread_count
    );

    pool.install(|| {
        items
            .par_iter()
            .enumerate()
            .map(|(index, item)| f(index, item))
            .collect::<Result<Vec<_>>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let items: Vec<usize> = (0..200).collect();
        let doubled = map_in_order(&items, Some(4), |index, item| Ok(index + item)).unwrap();
        assert_eq!(doubled, (0..200).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_error_is_returned() {
        let items = vec![1, 2, 3];
        let result = map_in_order(&items, Some(2), |_, item| {
            if *item == 2 {
                Err(EngineError::Configuration("boom".into()))
            } else {
                Ok(*item)
            }
        });
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u8> = Vec::new();
        let result = map_in_order(&items, None, |_, item| Ok(*item)).unwrap();
        assert!(result.is_empty());
    }
}
