//! Frames of the "Analyzing" loading animation.

/// Text shown in front of the animated dots.
pub const ANALYZING_LABEL: &str = "Analyzing";

const FRAMES: [&str; 4] = ["", ".", "..", "..."];

/// Frame for the given tick: zero to three dots, repeating every four ticks.
pub fn frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Endless iterator over animation frames, starting with no dots.
#[derive(Debug, Clone, Default)]
pub struct DotsCycle {
    tick: usize,
}

impl DotsCycle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for DotsCycle {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = frame(self.tick);
        self.tick = self.tick.wrapping_add(1);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_repeats_every_four() {
        let frames: Vec<&str> = DotsCycle::new().take(9).collect();
        assert_eq!(frames, vec!["", ".", "..", "...", "", ".", "..", "...", ""]);
    }

    #[test]
    fn test_frame_by_tick() {
        assert_eq!(frame(0), "");
        assert_eq!(frame(3), "...");
        assert_eq!(frame(6), "..");
    }
}
