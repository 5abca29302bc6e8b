//! Avatar Components
//!
//! Initials avatars and overlapping avatar groups.

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::constants::MAX_VISIBLE_AVATARS;
use crate::theme::colors::KitColors;
use crate::theme::tokens::{tone_palette, Size, Tone};

/// Up to two uppercase initials of a name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Initials of the visible avatars and the number hidden behind "+N"
pub fn split_avatars(names: &[String]) -> (Vec<String>, usize) {
    let visible = names
        .iter()
        .take(MAX_VISIBLE_AVATARS)
        .map(|name| initials(name))
        .collect();
    (visible, names.len().saturating_sub(MAX_VISIBLE_AVATARS))
}

/// Avatar diameter keyed by size
pub fn avatar_diameter(size: Size) -> f32 {
    match size {
        Size::Small => 24.0,
        Size::Medium => 32.0,
        Size::Large => 40.0,
    }
}

/// Stable background tone for a set of initials
pub fn avatar_tone(initials: &str) -> Tone {
    const TONES: [Tone; 5] = [Tone::Primary, Tone::Success, Tone::Warning, Tone::Info, Tone::Danger];
    let sum: usize = initials.bytes().map(usize::from).sum();
    TONES[sum % TONES.len()]
}

fn circle(text: SharedString, tone: Tone, size: Size, overlap: bool) -> gpui::Div {
    let diameter = avatar_diameter(size);
    let palette = tone_palette(tone);
    div()
        .size(px(diameter))
        .flex_none()
        .rounded_full()
        .border_2()
        .border_color(KitColors::surface())
        .bg(palette.soft)
        .text_color(palette.solid)
        .text_size(px(diameter * 0.4))
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .flex()
        .items_center()
        .justify_center()
        .when(overlap, |el| el.ml(px(-diameter * 0.3)))
        .child(text)
}

/// A single initials avatar
#[derive(IntoElement)]
pub struct Avatar {
    initials: String,
    size: Size,
}

impl Avatar {
    pub fn new(name: &str) -> Self {
        Self {
            initials: initials(name),
            size: Size::Medium,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let tone = avatar_tone(&self.initials);
        circle(self.initials.into(), tone, self.size, false)
    }
}

/// Overlapping avatars with an overflow counter
#[derive(IntoElement)]
pub struct AvatarGroup {
    visible: Vec<String>,
    overflow: usize,
    size: Size,
}

impl AvatarGroup {
    pub fn new(names: &[String]) -> Self {
        let (visible, overflow) = split_avatars(names);
        Self::from_split(visible, overflow)
    }

    /// Group from already-split initials
    pub fn from_split(visible: Vec<String>, overflow: usize) -> Self {
        Self {
            visible,
            overflow,
            size: Size::Medium,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for AvatarGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let size = self.size;
        let overflow = self.overflow;
        div()
            .flex()
            .items_center()
            .children(self.visible.into_iter().enumerate().map(move |(i, initials)| {
                let tone = avatar_tone(&initials);
                circle(initials.into(), tone, size, i > 0)
            }))
            .when(overflow > 0, |el| {
                el.child(circle(format!("+{overflow}").into(), Tone::Neutral, size, true))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("olivia rhye"), "OR");
        assert_eq!(initials("Phoenix Baker Jr"), "PB");
        assert_eq!(initials("Lana"), "L");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn split_reports_overflow() {
        let names: Vec<String> = ["A a", "B b", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
        let (visible, overflow) = split_avatars(&names);
        assert_eq!(visible, vec!["AA", "BB", "C", "D"]);
        assert_eq!(overflow, 1);

        let (visible, overflow) = split_avatars(&names[..2]);
        assert_eq!(visible.len(), 2);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn tone_is_stable() {
        assert_eq!(avatar_tone("OR"), avatar_tone("OR"));
    }
}
