//! Pointer input sampling
//!
//! The host forwards pointer/touch events as they arrive; the simulation only
//! ever sees a boolean "held" snapshot taken once per tick.

use crate::sim::TickInput;

/// Pointer events the sampler understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// A touch/click began
    Down,
    /// A touch/click ended
    Up,
    /// The host lost all pointers (blur, touch cancel)
    Cancel,
}

/// Tracks how many pointers are currently pressed
#[derive(Debug, Clone, Default)]
pub struct PointerSampler {
    pressed: u32,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down => self.pressed += 1,
            // Stray ups (pointer pressed outside the canvas) are ignored
            PointerEvent::Up => self.pressed = self.pressed.saturating_sub(1),
            PointerEvent::Cancel => self.pressed = 0,
        }
    }

    pub fn is_down(&self) -> bool {
        self.pressed > 0
    }

    /// Snapshot for the next tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            pointer_down: self.is_down(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut sampler = PointerSampler::new();
        assert!(!sampler.sample().pointer_down);

        sampler.push(PointerEvent::Down);
        assert_eq!(sampler.sample(), TickInput::held());

        sampler.push(PointerEvent::Up);
        assert_eq!(sampler.sample(), TickInput::default());
    }

    #[test]
    fn test_second_touch_keeps_input_held() {
        let mut sampler = PointerSampler::new();
        sampler.push(PointerEvent::Down);
        sampler.push(PointerEvent::Down);
        sampler.push(PointerEvent::Up);
        assert!(sampler.is_down());

        sampler.push(PointerEvent::Cancel);
        assert!(!sampler.is_down());
    }

    #[test]
    fn test_stray_release_ignored() {
        let mut sampler = PointerSampler::new();
        sampler.push(PointerEvent::Up);
        sampler.push(PointerEvent::Down);
        assert!(sampler.is_down());
    }
}
