use std::future::Future;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Cancellation and deadline of the reconcile call that triggered a publish.
///
/// Cloning shares the token, so cancelling a clone cancels every
/// publish bound to the same reconcile.
#[derive(Clone, Debug, Default)]
pub struct PublishContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl PublishContext {
    pub fn new(token: CancellationToken) -> Self {
        Self { token, deadline: None }
    }

    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// A timeout too large to represent leaves the context without a deadline.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` until it completes, the token is cancelled, or the deadline passes.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let deadline = async {
            match self.deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(Error::Cancelled("context cancelled".to_string())),
            _ = deadline => Err(Error::DeadlineExceeded("context deadline exceeded".to_string())),
            res = fut => res,
        }
    }
}

impl From<CancellationToken> for PublishContext {
    fn from(token: CancellationToken) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn run_returns_inner_result() {
        let ctx = PublishContext::background();
        let out = ctx.run(async { Ok::<_, Error>(7) }).await.unwrap();
        assert_eq!(out, 7);
    }

    #[tokio::test]
    async fn run_aborts_when_cancelled() {
        let ctx = PublishContext::background();
        ctx.cancel();
        let res = ctx.run(std::future::pending::<Result<()>>()).await;
        assert!(matches!(res, Err(Error::Cancelled(_))));
    }

    #[tokio::test]
    async fn run_aborts_on_deadline() {
        let ctx = PublishContext::background().with_timeout(Duration::from_millis(10));
        let res = ctx.run(std::future::pending::<Result<()>>()).await;
        assert!(matches!(res, Err(Error::DeadlineExceeded(_))));
    }

    #[tokio::test]
    async fn oversized_timeout_means_no_deadline() {
        let ctx = PublishContext::background().with_timeout(Duration::from_secs(u64::MAX));
        assert!(ctx.deadline().is_none());
        let out = ctx.run(async { Ok::<_, Error>("done") }).await.unwrap();
        assert_eq!(out, "done");
    }

    #[test]
    fn timeout_sets_deadline() {
        let ctx = PublishContext::background().with_timeout(Duration::from_secs(30));
        assert!(ctx.deadline().is_some_and(|at| at > Instant::now()));
    }

    #[test]
    fn clones_share_cancellation() {
        let ctx = PublishContext::background();
        let child = ctx.clone();
        ctx.cancel();
        assert!(child.is_cancelled());
    }
}
