//! Timeout helper.

use std::future::Future;
use std::time::Duration;

use crate::error::RecipeError;

/// Wrap a future with a timeout.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, RecipeError>>,
) -> Result<T, RecipeError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(RecipeError::Timeout(duration.as_millis() as u64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn elapsed_future_maps_to_timeout_error() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, RecipeError>(())
        };

        let err = with_timeout(Duration::from_millis(250), slow)
            .await
            .expect_err("should time out");

        assert!(matches!(err, RecipeError::Timeout(250)));
    }

    #[tokio::test]
    async fn inner_error_passes_through() {
        let failing = async { Err::<(), _>(RecipeError::InvalidRequest("bad".into())) };

        let err = with_timeout(Duration::from_secs(1), failing)
            .await
            .expect_err("inner error should surface");

        assert!(matches!(err, RecipeError::InvalidRequest(_)));
    }
}
