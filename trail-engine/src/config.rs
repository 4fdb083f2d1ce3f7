use serde::{Deserialize, Serialize};

pub const MIN_SEGMENT_LENGTH_PX: f64 = 45.0;
pub const LINE_WIDTH_PX: f64 = 0.8;
pub const MANUAL_IDLE_MS: u64 = 2_000;
pub const AUTO_CLEAR_MS: u64 = 10_000;
pub const AUTO_DRAW_INTERVAL_MS: u64 = 600;
pub const AUTO_DRAW_RETRY_MS: u64 = 100;
pub const AUTO_DRAW_POLL_MS: u64 = 1_000;
pub const AUTO_DRAW_INITIAL_DELAY_MS: u64 = 3_000;
pub const MODE_SETTLE_MS: u64 = 800;
pub const AUTO_BOX_FRACTION: f64 = 0.25;

/// Timing and geometry knobs for the trail effect.
///
/// The defaults are the values the site ships with; nothing reads them from
/// the environment, but keeping them in one struct lets tests shrink or
/// stretch individual timings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// A segment is drawn only when the pointer moved strictly further than this.
    pub min_segment_length: f64,
    pub line_width: f64,
    /// Quiet period after the last pointer move before returning to idle.
    pub manual_idle_ms: u64,
    /// Periodic clear cadence, and the manual session length that forces a clear.
    pub auto_clear_ms: u64,
    pub auto_draw_interval_ms: u64,
    pub auto_draw_retry_ms: u64,
    pub auto_draw_poll_ms: u64,
    pub auto_draw_initial_delay_ms: u64,
    pub mode_settle_ms: u64,
    /// Half-extent of the auto-draw box as a fraction of the viewport.
    pub auto_box_fraction: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            min_segment_length: MIN_SEGMENT_LENGTH_PX,
            line_width: LINE_WIDTH_PX,
            manual_idle_ms: MANUAL_IDLE_MS,
            auto_clear_ms: AUTO_CLEAR_MS,
            auto_draw_interval_ms: AUTO_DRAW_INTERVAL_MS,
            auto_draw_retry_ms: AUTO_DRAW_RETRY_MS,
            auto_draw_poll_ms: AUTO_DRAW_POLL_MS,
            auto_draw_initial_delay_ms: AUTO_DRAW_INITIAL_DELAY_MS,
            mode_settle_ms: MODE_SETTLE_MS,
            auto_box_fraction: AUTO_BOX_FRACTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: TrailConfig =
            serde_json::from_str(r#"{"auto_draw_interval_ms": 250}"#).unwrap();
        assert_eq!(config.auto_draw_interval_ms, 250);
        assert_eq!(config.min_segment_length, MIN_SEGMENT_LENGTH_PX);
        assert_eq!(config.auto_clear_ms, AUTO_CLEAR_MS);
    }
}
