//! Elapsed recording clock
//!
//! Formats time-since-start as a zero-padded clock string and drives the
//! periodic tick that publishes it.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Cadence of the elapsed-time publisher
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Format a duration as a clock string
///
/// Minutes and seconds are always two digits, zero-padded; zero renders
/// as "00". Durations of an hour or more grow a leading hours field
/// rather than wrapping.
pub fn format_clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Spawn the recurring elapsed-time publisher
///
/// The first tick fires one period after `started_at`; the initial
/// "00:00" value is emitted eagerly by the coordinator. Cancelled by
/// aborting the returned handle; aborting a finished task is a no-op.
pub(crate) fn spawn_ticker(
    started_at: Instant,
    elapsed_tx: broadcast::Sender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = time::interval_at(started_at + TICK_PERIOD, TICK_PERIOD);
        loop {
            let tick = ticks.tick().await;
            let _ = elapsed_tx.send(format_clock(tick.duration_since(started_at)));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_is_explicit() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
    }

    #[test]
    fn test_format_pads_single_digits() {
        assert_eq!(format_clock(Duration::from_secs(7)), "00:07");
        assert_eq!(format_clock(Duration::from_secs(9 * 60 + 5)), "09:05");
    }

    #[test]
    fn test_format_keeps_double_digits() {
        assert_eq!(format_clock(Duration::from_secs(12 * 60 + 34)), "12:34");
        assert_eq!(format_clock(Duration::from_secs(59 * 60 + 59)), "59:59");
    }

    #[test]
    fn test_format_ignores_subsecond_remainder() {
        assert_eq!(format_clock(Duration::from_millis(1999)), "00:01");
    }

    #[test]
    fn test_format_grows_hours_field() {
        assert_eq!(format_clock(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_clock(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(format_clock(Duration::from_secs(100 * 3600)), "100:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_publishes_each_second() {
        let (elapsed_tx, mut elapsed_rx) = broadcast::channel(16);
        let ticker = spawn_ticker(Instant::now(), elapsed_tx);

        time::advance(Duration::from_secs(2)).await;
        assert_eq!(elapsed_rx.recv().await.unwrap(), "00:01");
        assert_eq!(elapsed_rx.recv().await.unwrap(), "00:02");

        ticker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_abort_is_idempotent() {
        let (elapsed_tx, mut elapsed_rx) = broadcast::channel(16);
        let ticker = spawn_ticker(Instant::now(), elapsed_tx);

        ticker.abort();
        ticker.abort();

        time::advance(Duration::from_secs(3)).await;
        assert!(elapsed_rx.try_recv().is_err());
    }
}
