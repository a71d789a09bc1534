//! Timer stream.
//!
//! # Responsibilities
//! - Produce a finite, lazy sequence of `HH:MM:SS: <n>` lines, one
//!   interval apart
//! - Log each wall-clock reading and random draw as it happens
//! - End the sequence with a deliberately raised demo error, caught
//!   locally and surfaced as the final element
//!
//! # Design Decisions
//! - One `Timer` per request; the stream is non-restartable and owns
//!   all its state
//! - The demo error never propagates; the stream terminates normally
//!   after yielding its rendered report

use std::time::Duration;

use futures_util::stream::{self, Stream};

use crate::config::TimerConfig;
use crate::observability::instrument::logged;
use crate::rng::RandomSource;

/// The synthetic error raised after the timed elements.
#[derive(Debug, thiserror::Error)]
#[error("something unexpected happened!")]
pub struct DemoError;

/// Produces the timer line sequence for a single request.
#[derive(Debug)]
pub struct Timer {
    config: TimerConfig,
    rng: RandomSource,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            rng: RandomSource::new(),
        }
    }

    /// Consume the timer and return its element stream.
    ///
    /// Yields `config.ticks` timestamped lines and then one rendered
    /// error report, `config.interval_ms` apart. The element count is
    /// therefore `ticks + 1`.
    pub fn into_stream(self) -> impl Stream<Item = String> {
        let Timer { config, rng } = self;
        let ticks = config.ticks;
        let interval = Duration::from_millis(config.interval_ms);

        logged("into_stream", &config, move || {
            stream::unfold(0u32, move |step| async move {
                if step > ticks {
                    return None;
                }
                if step > 0 {
                    tokio::time::sleep(interval).await;
                }
                if step < ticks {
                    return Some((tick_line(&rng), step + 1));
                }
                // The demo failure: raised, caught here, rendered into
                // the final element instead of propagating.
                let report = match demo_failure() {
                    Err(err) => {
                        let report = format!("unhandled error in timer stream: {err}\n");
                        tracing::error!("uncaught exception: {report}");
                        report
                    }
                    Ok(()) => return None,
                };
                Some((report, step + 1))
            })
        })
    }
}

/// One timestamped element: current wall-clock time plus a random draw.
fn tick_line(rng: &RandomSource) -> String {
    let current_time = chrono::Local::now().format("%H:%M:%S").to_string();
    tracing::info!("{current_time}");
    let num = rng.sample();
    format!("{current_time}: {num}\n")
}

fn demo_failure() -> Result<(), DemoError> {
    Err(DemoError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::time::Instant;

    fn fast_config(ticks: u32) -> TimerConfig {
        TimerConfig {
            ticks,
            interval_ms: 1,
        }
    }

    fn assert_tick_line(line: &str) {
        let bytes = line.as_bytes();
        assert!(line.ends_with('\n'), "missing newline: {line:?}");
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
        for i in [0, 1, 3, 4, 6, 7] {
            assert!(bytes[i].is_ascii_digit(), "bad clock char in {line:?}");
        }
        let (_, value) = line.trim_end().rsplit_once(": ").unwrap();
        let value: u32 = value.parse().unwrap();
        assert!((1..=100).contains(&value), "out of range: {value}");
    }

    #[tokio::test]
    async fn yields_ticks_plus_one_elements() {
        let elements: Vec<String> = Timer::new(fast_config(5)).into_stream().collect().await;
        assert_eq!(elements.len(), 6);
        for line in &elements[..5] {
            assert_tick_line(line);
        }
    }

    #[tokio::test]
    async fn final_element_carries_the_demo_error() {
        let elements: Vec<String> = Timer::new(fast_config(2)).into_stream().collect().await;
        let last = elements.last().unwrap();
        assert!(last.contains("something unexpected happened!"));
    }

    #[tokio::test]
    async fn elements_are_separated_by_the_interval() {
        let config = TimerConfig {
            ticks: 3,
            interval_ms: 50,
        };
        let start = Instant::now();
        let elements: Vec<String> = Timer::new(config).into_stream().collect().await;
        let elapsed = start.elapsed();

        // 4 elements, 3 gaps between them.
        assert_eq!(elements.len(), 4);
        assert!(
            elapsed >= Duration::from_millis(150),
            "stream finished too fast: {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn streams_are_independent() {
        let first: Vec<String> = Timer::new(fast_config(5)).into_stream().collect().await;
        let second: Vec<String> = Timer::new(fast_config(5)).into_stream().collect().await;
        assert_eq!(first.len(), 6);
        assert_eq!(second.len(), 6);
    }
}
