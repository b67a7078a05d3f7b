use std::{future::Future, time::Duration};

use validator::ValidationErrors;

/// Upper bound on every storage call made by [`crate::Query`] and [`crate::Command`].
pub const STORAGE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationErrors),

    #[error("record not found")]
    NotFound,

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Storage(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Usage(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Usage(format!($fmt, $($arg)*)))
    };
}

/// Runs a storage future under [`STORAGE_TIMEOUT`]. Expiry surfaces as a
/// plain storage failure.
pub(crate) async fn bounded<T, F>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(STORAGE_TIMEOUT, future).await {
        Ok(result) => result,
        Err(_) => Err(Error::Storage(anyhow::anyhow!(
            "storage call timed out after {}s",
            STORAGE_TIMEOUT.as_secs()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn expired_storage_call_is_a_storage_error() {
        let result = bounded(std::future::pending::<Result<()>>()).await;

        let Err(Error::Storage(e)) = result else {
            panic!("expected a storage error, got {result:?}");
        };
        assert!(e.to_string().contains("timed out"));
    }

    #[tokio::test(start_paused = true)]
    async fn finished_call_passes_through() {
        let result = bounded(async { Ok::<_, Error>(7) }).await;
        assert_eq!(result.unwrap(), 7);

        let result = bounded(async { Err::<(), _>(Error::NotFound) }).await;
        assert!(matches!(result, Err(Error::NotFound)));
    }
}
