use std::time::Duration;

use futures::future::join_all;
use tokio::time;
use tracing::{error, info, warn};

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::TotalStake,
};

const EPOCH_WINDOW: i32 = 6;
const EPOCH_LOOKBACK: i32 = 3;

/// Periodic snapshot of total network stake. Runs once immediately, then on
/// every interval tick; a failed cycle is logged and retried on the next
/// tick, the task itself never ends.
pub async fn total_stake_task(
    app_state: AppState<State>,
) -> Result<(), Error> {
    if !app_state.config.enable_poller {
        return Ok(());
    }

    let interval: u64 = app_state.config.total_stake_interval;
    let mut interval = time::interval(Duration::from_secs(interval));

    tokio::spawn(async move {
        loop {
            interval.tick().await;

            if let Err(error) = fetch_insert(app_state.clone()).await {
                error!("Total stake task error {}", error);
            }
        }
    })
    .await?;

    Ok(())
}

pub async fn fetch_insert(app_state: AppState<State>) -> Result<(), Error> {
    let epoch: i32 = app_state.node.current_epoch().await?.try_into()?;

    let joins = epoch_window(epoch)
        .into_iter()
        .map(|epoch| fetch_epoch(&app_state, epoch));
    let results = join_all(joins).await;

    let mut data = Vec::with_capacity(EPOCH_WINDOW as usize);

    for result in results {
        match result {
            Ok(row) => data.push(row),
            // stake history is best effort, one bad epoch must not sink
            // the rest of the batch
            Err(error) => warn!("Total stake fetch error: {}", error),
        }
    }

    app_state
        .database
        .total_stake
        .insert_or_update(&data)
        .await?;

    info!("Total stake upsert complete for {} epochs", data.len());

    Ok(())
}

async fn fetch_epoch(
    app_state: &AppState<State>,
    epoch: i32,
) -> Result<TotalStake, Error> {
    let stake = app_state.node.total_stake_at(epoch).await?;

    Ok(TotalStake {
        epoch,
        stake: stake.try_into()?,
    })
}

/// Six consecutive epochs centered three behind the current one.
fn epoch_window(current: i32) -> Vec<i32> {
    (0..EPOCH_WINDOW)
        .map(|offset| current - EPOCH_LOOKBACK + offset)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::epoch_window;

    #[test]
    fn window_is_centered_behind_current_epoch() {
        assert_eq!(epoch_window(730), vec![727, 728, 729, 730, 731, 732]);
    }

    #[test]
    fn window_always_has_six_epochs() {
        assert_eq!(epoch_window(0).len(), 6);
        assert_eq!(epoch_window(3).len(), 6);
    }
}
