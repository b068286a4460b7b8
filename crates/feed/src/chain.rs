//! Ordered fallback evaluation

use futures::future::BoxFuture;

/// One entry of a fallback chain
pub type Attempt<'a, T, E> = BoxFuture<'a, Result<T, E>>;

/// Await `attempts` one after another and return the first success.
///
/// Later attempts are never polled once one succeeds. When all fail, the
/// errors come back in attempt order so callers can report the first one.
pub async fn first_success<T, E>(attempts: Vec<Attempt<'_, T, E>>) -> Result<T, Vec<E>> {
    let mut errors = Vec::with_capacity(attempts.len());
    for attempt in attempts {
        match attempt.await {
            Ok(value) => return Ok(value),
            Err(err) => errors.push(err),
        }
    }
    Err(errors)
}
