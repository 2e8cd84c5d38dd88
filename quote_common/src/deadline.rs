//! Request-scoped deadlines.
//!
//! Every outbound call in the chain runs inside its own budget. `within` starts
//! the clock when it is called and abandons the wrapped future once the budget
//! elapses, turning that into a `QuoteError::Timeout` naming the stage.
use std::future::Future;
use std::time::Duration;

use log::warn;

use crate::error::QuoteError;
use crate::result::Result;

/// Run `fut` with a budget of `budget`, failing with `QuoteError::Timeout` when it elapses.
pub async fn within<T, F>(stage: &'static str, budget: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!("{} timed out after {}ms", stage, budget.as_millis());
            Err(QuoteError::Timeout { stage, budget })
        }
    }
}
