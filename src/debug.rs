/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and collision counters to be displayed in the UI.
 */

use std::time::Duration;

use crate::simulation::TickStats;

// Debug information to display
#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub last_tick: TickStats,
    pub total_collisions: u64,
    pub total_rebirths: u64,
}

impl DebugInfo {
    pub fn record_tick(&mut self, stats: TickStats) {
        self.last_tick = stats;
        self.total_collisions += stats.collisions as u64;
        self.total_rebirths += stats.rebirths as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_across_ticks() {
        let mut info = DebugInfo::default();
        info.record_tick(TickStats { frame: 1, collisions: 2, rebirths: 4 });
        info.record_tick(TickStats { frame: 2, collisions: 1, rebirths: 2 });
        assert_eq!(info.last_tick.frame, 2);
        assert_eq!(info.total_collisions, 3);
        assert_eq!(info.total_rebirths, 6);
    }
}
