use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Races `fut` against the time remaining on the request's deadline,
/// collapsing a tokio timeout into the same error type the future itself
/// would return. Mirrors the merge-and-propagate shape this codebase uses
/// for combining a `tokio::time::timeout` with an inner fallible future.
pub async fn with_deadline<T, F>(remaining: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(remaining, fut).await {
        Ok(result) => result,
        Err(_elapsed) => Err(AppError::DeadlineExceeded),
    }
}
