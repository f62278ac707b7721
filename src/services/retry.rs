use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Retries an async operation with exponential backoff for rate-limited requests.
///
/// # Behavior
///
/// - Initial delay: 100ms
/// - Backoff multiplier: 5x (100ms → 500ms → 2500ms → ...)
/// - Only retries on `AppError::RateLimited`
/// - All other errors immediately propagate
pub async fn retry_with_backoff<F, Fut, T>(operation: F, max_attempts: u32) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    retry_with_delay(operation, max_attempts, TimeoutFuture::new).await
}

/// Same policy as `retry_with_backoff`, waiting through `sleep(delay_ms)`
/// between attempts.
pub async fn retry_with_delay<F, Fut, T, S, SFut>(
    mut operation: F,
    max_attempts: u32,
    mut sleep: S,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
    S: FnMut(u32) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut delay_ms: u32 = 100;

    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(AppError::RateLimited) if attempt < max_attempts => {
                tracing::warn!(delay_ms, attempt, max_attempts, "Rate limited, retrying");
                sleep(delay_ms).await;
                delay_ms = delay_ms.saturating_mul(5);
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::RateLimited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::future::ready;

    /// Serves `RateLimited` for the first `limited` calls, then the call number.
    fn limited_then_ok(
        calls: &Cell<u32>,
        limited: u32,
    ) -> impl FnMut() -> std::future::Ready<Result<u32, AppError>> + '_ {
        move || {
            calls.set(calls.get() + 1);
            let call = calls.get();
            ready(if call <= limited { Err(AppError::RateLimited) } else { Ok(call) })
        }
    }

    #[test]
    fn test_success_returns_immediately() {
        let calls = Cell::new(0);
        let result = tokio_test::block_on(retry_with_backoff(
            || {
                calls.set(calls.get() + 1);
                async { Ok::<_, AppError>(7) }
            },
            3,
        ));

        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_other_errors_are_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), AppError> = tokio_test::block_on(retry_with_backoff(
            || {
                calls.set(calls.get() + 1);
                async { Err(AppError::NotFound("schedule".to_string())) }
            },
            3,
        ));

        assert_eq!(result, Err(AppError::NotFound("schedule".to_string())));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_last_attempt_reports_rate_limit() {
        let result: Result<(), AppError> =
            tokio_test::block_on(retry_with_backoff(|| async { Err(AppError::RateLimited) }, 1));

        assert_eq!(result, Err(AppError::RateLimited));
    }

    #[test_log::test]
    fn test_rate_limit_retried_with_growing_delay() {
        let calls = Cell::new(0);
        let delays = RefCell::new(Vec::new());
        let result = tokio_test::block_on(retry_with_delay(
            limited_then_ok(&calls, 2),
            3,
            |ms| {
                delays.borrow_mut().push(ms);
                ready(())
            },
        ));

        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
        assert_eq!(*delays.borrow(), [100, 500]);
    }

    #[test]
    fn test_rate_limit_gives_up_after_max_attempts() {
        let calls = Cell::new(0);
        let delays = RefCell::new(Vec::new());
        let result = tokio_test::block_on(retry_with_delay(
            limited_then_ok(&calls, u32::MAX),
            4,
            |ms| {
                delays.borrow_mut().push(ms);
                ready(())
            },
        ));

        assert_eq!(result, Err(AppError::RateLimited));
        assert_eq!(calls.get(), 4);
        assert_eq!(*delays.borrow(), [100, 500, 2500]);
    }
}
