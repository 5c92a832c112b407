use std::sync::Arc;

use anyhow::anyhow;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, info};

use crate::AppState;

/// Drops rate limiter entries that have fully recovered their quota.
/// Returns how many clients are still tracked.
pub fn prune_contact_limiter(state: &AppState) -> usize {
    state.contact_limiter.retain_recent();
    state.contact_limiter.shrink_to_fit();
    state.contact_limiter.len()
}

pub async fn start_scheduler(state: Arc<AppState>) -> anyhow::Result<()> {
    let sched = JobScheduler::new()
        .await
        .map_err(|e| anyhow!("failed to create scheduler: {:?}", e))?;

    // Every minute, at second 0
    let state_clone = Arc::clone(&state);
    let prune_job = Job::new_async("0 * * * * *", move |_, _| {
        let state = state_clone.clone();
        Box::pin(async move {
            let tracked = prune_contact_limiter(&state);
            debug!(tracked, "pruned contact rate limiter");
        })
    })
    .map_err(|e| anyhow!("invalid limiter prune schedule: {:?}", e))?;

    sched
        .add(prune_job)
        .await
        .map_err(|e| anyhow!("failed to add limiter prune job: {:?}", e))?;
    sched
        .start()
        .await
        .map_err(|e| anyhow!("failed to start scheduler: {:?}", e))?;

    info!("scheduler started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    use futures::future::BoxFuture;

    use crate::api::mailer::{ContactEmail, MailError, Mailer};

    struct NullMailer;

    impl Mailer for NullMailer {
        fn send(&self, _email: ContactEmail) -> BoxFuture<'_, Result<(), MailError>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[test]
    fn pruning_keeps_clients_still_limited() {
        let state = AppState::new(Arc::new(NullMailer), NonZeroU32::new(1).unwrap());
        assert!(state.contact_limiter.check_key(&"ip:198.51.100.1".to_string()).is_ok());
        assert!(state.contact_limiter.check_key(&"ip:198.51.100.1".to_string()).is_err());

        // Spent quota refills over a minute, so the entry is not prunable yet.
        assert_eq!(prune_contact_limiter(&state), 1);
    }
}
