//! Command execution helpers
//!
//! Wraps a facade call with timing and outcome logging so handlers stay
//! small.

use std::future::Future;
use std::time::Instant;

use flagdesk_domain::Result as DomainResult;

use crate::utils::logging::{log_command_execution, log_command_failure};

/// Run `command_fn`, then log how long it took and whether it succeeded.
///
/// # Example
///
/// ```rust,ignore
/// let record = execute_command("flags::create", || async {
///     ctx.flags.create(caller, request).await
/// })
/// .await?;
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    let elapsed = start.elapsed();

    log_command_execution(command_name, elapsed, result.is_ok());
    if let Err(err) = &result {
        log_command_failure(command_name, err);
    }

    result
}

#[cfg(test)]
mod tests {
    use flagdesk_domain::FlagsError;

    use super::*;

    #[tokio::test]
    async fn passes_result_through() {
        let ok = execute_command("test::ok", || async { Ok::<_, FlagsError>(7) }).await;
        assert_eq!(ok, Ok(7));

        let err =
            execute_command("test::err", || async { Err::<(), _>(FlagsError::NoFlag) }).await;
        assert_eq!(err, Err(FlagsError::NoFlag));
    }
}
