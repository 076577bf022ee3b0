//! Concurrent fan-out over remote resources
//!
//! The site issues the same fetch against many branches or devices at once.
//! `settle_all` runs one future per input and collects the results in input
//! order; individual failures are the closure's problem (they surface as
//! `None` or a zero sentinel), so one bad branch never sinks the batch.

use std::future::Future;

use futures_util::future::join_all;

/// Maps `items` through `f` concurrently and returns the outputs in the
/// same order as the inputs.
pub async fn settle_all<I, T, F, Fut>(items: I, f: F) -> Vec<T>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = T>,
{
    join_all(items.into_iter().map(f)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn test_settle_all_preserves_input_order() {
        let out = settle_all(vec![3_u32, 1, 2], |n| async move { n * 10 })
            .now_or_never()
            .unwrap();
        assert_eq!(out, vec![30, 10, 20]);
    }

    #[test]
    fn test_settle_all_empty_input() {
        let out: Vec<u32> = settle_all(Vec::<u32>::new(), |n| async move { n })
            .now_or_never()
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_settle_all_keeps_per_item_failures() {
        let out = settle_all(vec!["4", "x", "7"], |s| async move {
            s.parse::<u32>().ok()
        })
        .now_or_never()
        .unwrap();
        assert_eq!(out, vec![Some(4), None, Some(7)]);
    }
}
