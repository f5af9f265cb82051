//! Frame pacing shared by the play loop

use std::time::{Duration, Instant};

use crate::config::loader::MAX_TARGET_FPS;

/// Frame length for a target rate, clamped to 1..=MAX_TARGET_FPS
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_secs(1) / target_fps.clamp(1, MAX_TARGET_FPS) as u32
}

/// Sleep out whatever is left of the frame that began at `frame_start`.
///
/// Stands in for vsync: call once at the end of each loop iteration so the
/// simulation advances a fixed number of frames per second.
pub fn limit_frame_rate(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        std::thread::sleep(frame - elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(50), Duration::from_millis(20));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_duration_clamps_huge_rates() {
        // Truncating to u32 would give zero here
        assert_eq!(frame_duration(1 << 32), Duration::from_millis(1));
        assert_eq!(frame_duration(u64::MAX), Duration::from_millis(1));
    }

    #[test]
    fn test_limit_frame_rate_waits_out_the_frame() {
        let start = Instant::now();
        limit_frame_rate(start, Duration::from_millis(15));
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
