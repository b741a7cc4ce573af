// ABOUTME: Fixed simulated round-trip delays for the mock backend
// ABOUTME: Sleeps on the tokio clock so paused-time tests advance instantly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use crate::config::LatencyMode;
use std::time::Duration;
use tokio::time::sleep;

/// Emulated network latency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    mode: LatencyMode,
}

impl SimulatedLatency {
    /// Latency with the given mode
    #[must_use]
    pub const fn new(mode: LatencyMode) -> Self {
        Self { mode }
    }

    /// Latency that never sleeps
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(LatencyMode::None)
    }

    /// Wait out a round trip of `millis`; returns the delay actually applied
    pub async fn round_trip(&self, millis: u64) -> u64 {
        match self.mode {
            LatencyMode::Simulated => {
                sleep(Duration::from_millis(millis)).await;
                millis
            }
            LatencyMode::None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_round_trip_advances_clock() {
        let start = Instant::now();
        let applied = SimulatedLatency::new(LatencyMode::Simulated)
            .round_trip(500)
            .await;
        assert_eq!(applied, 500);
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_round_trip_is_immediate() {
        let start = Instant::now();
        assert_eq!(SimulatedLatency::disabled().round_trip(500).await, 0);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
