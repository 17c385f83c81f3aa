//! Long-polling loop.

use std::future::Future;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::places::StationLookup;
use crate::telegram::TelegramError;

use super::handler::Bot;

/// Pause after a failed `getUpdates` before polling again.
const POLL_ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Poll for updates and handle them one at a time until `shutdown`
/// resolves.
///
/// Only an invalid bot token ends the loop early; any other polling error
/// is logged and polling resumes after a pause.
pub async fn run_polling<L, S>(bot: &Bot<L>, shutdown: S) -> Result<(), TelegramError>
where
    L: StationLookup,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut offset = 0;

    loop {
        let updates = tokio::select! {
            _ = &mut shutdown => {
                info!("polling stopped");
                return Ok(());
            }
            result = bot.telegram().get_updates(offset) => result,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(TelegramError::Unauthorized) => return Err(TelegramError::Unauthorized),
            Err(e) => {
                let pause = match &e {
                    TelegramError::RateLimited { retry_after } => {
                        Duration::from_secs(*retry_after)
                    }
                    _ => POLL_ERROR_BACKOFF,
                };
                warn!(error = %e, pause_secs = pause.as_secs(), "getUpdates failed");
                tokio::time::sleep(pause).await;
                continue;
            }
        };

        for update in updates {
            offset = next_offset(offset, update.update_id);
            let update_id = update.update_id;
            if let Err(e) = bot.handle_update(update).await {
                error!(update_id, error = %e, "failed to handle update");
            }
        }
    }
}

/// The offset that acknowledges `update_id` and everything before it.
fn next_offset(current: i64, update_id: i64) -> i64 {
    current.max(update_id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_advances_past_handled_updates() {
        assert_eq!(next_offset(0, 815), 816);
        assert_eq!(next_offset(816, 816), 817);
    }

    #[test]
    fn offset_never_moves_backwards() {
        assert_eq!(next_offset(900, 815), 900);
    }
}
