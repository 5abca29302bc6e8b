//! Press feedback bookkeeping
//!
//! Tracks which control is showing its pressed visual and hands out a
//! generation token per press. A delayed reset carries the token it was
//! scheduled with, so a reset left over from an earlier press never clears
//! a newer one.

/// Pressed-visual state keyed by a small control identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressFeedback<K> {
    pressed: Option<K>,
    generation: u64,
}

impl<K> Default for PressFeedback<K> {
    fn default() -> Self {
        Self {
            pressed: None,
            generation: 0,
        }
    }
}

impl<K: Copy + PartialEq> PressFeedback<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` pressed and return the token its reset must present
    pub fn press(&mut self, key: K) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pressed = Some(key);
        self.generation
    }

    /// Clear the pressed visual if `token` is still the latest press.
    /// Returns whether anything changed.
    pub fn release(&mut self, token: u64) -> bool {
        if token != self.generation || self.pressed.is_none() {
            return false;
        }
        self.pressed = None;
        true
    }

    pub fn is_pressed(&self, key: K) -> bool {
        self.pressed == Some(key)
    }

    pub fn pressed(&self) -> Option<K> {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_clears_matching_press() {
        let mut feedback = PressFeedback::new();
        let token = feedback.press('+');
        assert!(feedback.is_pressed('+'));
        assert!(feedback.release(token));
        assert_eq!(feedback.pressed(), None);
    }

    #[test]
    fn stale_release_keeps_newer_press() {
        let mut feedback = PressFeedback::new();
        let first = feedback.press('+');
        let second = feedback.press('-');
        assert!(!feedback.release(first));
        assert!(feedback.is_pressed('-'));
        assert!(feedback.release(second));
        assert!(!feedback.is_pressed('-'));
    }

    #[test]
    fn double_release_is_a_no_op() {
        let mut feedback = PressFeedback::new();
        let token = feedback.press(1u8);
        assert!(feedback.release(token));
        assert!(!feedback.release(token));
    }
}
