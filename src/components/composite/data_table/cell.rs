//! Cell Renderer Dispatch
//!
//! Maps a column kind and a field value to what the cell shows. Resolution
//! is pure ([`resolve_cell`]); drawing happens in [`render_cell`].

use gpui::{
    div, prelude::*, AnyElement, App, ClickEvent, ElementId, IntoElement, ParentElement,
    SharedString, Styled, Window,
};
use serde_json::Value;

use super::column::ColumnKind;
use crate::components::primitives::avatar::{split_avatars, AvatarGroup};
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::progress_bar::{percent_of, ProgressBar};
use crate::components::primitives::rating::{star_counts, Rating, StarCounts};
use crate::components::primitives::tag::Tag;
use crate::theme::colors::KitColors;
use crate::theme::tokens::Size;

/// A link shown in a links cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLink {
    pub label: String,
    pub href: Option<String>,
}

/// Resolved content of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Empty,
    Text(String),
    Title { title: String, subtitle: Option<String> },
    Tags(Vec<String>),
    Links(Vec<CellLink>),
    Rating(StarCounts),
    Avatars { visible: Vec<String>, overflow: usize },
    Progress { percent: f32 },
    Actions,
}

/// Labels and click handlers for an actions cell
pub struct CellActions {
    pub edit_label: SharedString,
    pub delete_label: SharedString,
    pub on_edit: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
    pub on_delete: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
}

/// Resolve what a built-in cell shows. Never fails: unusable values fall
/// back to their raw text or to an empty cell.
pub fn resolve_cell(kind: ColumnKind, value: Option<&Value>, progress_max: f64) -> CellContent {
    let value = value.filter(|v| !v.is_null());

    match kind {
        ColumnKind::Actions => CellContent::Actions,
        ColumnKind::Rating => CellContent::Rating(star_counts(value.and_then(Value::as_f64).unwrap_or(0.0))),
        ColumnKind::Text => value.map_or(CellContent::Empty, |v| CellContent::Text(display_value(v))),
        ColumnKind::Title => match value {
            None => CellContent::Empty,
            Some(v) => {
                let title = v.get("title").and_then(Value::as_str);
                match (v, title) {
                    (Value::Object(_), Some(title)) => CellContent::Title {
                        title: title.to_string(),
                        subtitle: v.get("subtitle").and_then(Value::as_str).map(str::to_string),
                    },
                    (Value::Object(_), None) => CellContent::Text(display_value(v)),
                    _ => CellContent::Title {
                        title: display_value(v),
                        subtitle: None,
                    },
                }
            }
        },
        ColumnKind::MultiTag => match value {
            None => CellContent::Empty,
            Some(Value::Array(items)) => {
                CellContent::Tags(items.iter().filter(|v| !v.is_null()).map(display_value).collect())
            }
            Some(Value::String(tag)) => CellContent::Tags(vec![tag.clone()]),
            Some(v) => CellContent::Text(display_value(v)),
        },
        ColumnKind::Links => match value {
            None => CellContent::Empty,
            Some(Value::Array(items)) => CellContent::Links(items.iter().filter_map(link_of).collect()),
            Some(v) => link_of(v).map_or_else(|| CellContent::Text(display_value(v)), |l| CellContent::Links(vec![l])),
        },
        ColumnKind::Avatars => match value {
            Some(Value::Array(items)) => {
                let names: Vec<String> = items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect();
                if names.is_empty() {
                    return CellContent::Empty;
                }
                let (visible, overflow) = split_avatars(&names);
                CellContent::Avatars { visible, overflow }
            }
            Some(v) => CellContent::Text(display_value(v)),
            None => CellContent::Empty,
        },
        ColumnKind::Progress => match value {
            None => CellContent::Empty,
            Some(v) => match v.as_f64() {
                Some(n) => CellContent::Progress {
                    percent: percent_of(n, progress_max),
                },
                None => CellContent::Text(display_value(v)),
            },
        },
    }
}

fn link_of(value: &Value) -> Option<CellLink> {
    match value {
        Value::String(label) => Some(CellLink {
            label: label.clone(),
            href: None,
        }),
        Value::Object(map) => {
            let href = map.get("href").and_then(Value::as_str).map(str::to_string);
            let label = map
                .get("label")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| href.clone())?;
            Some(CellLink { label, href })
        }
        _ => None,
    }
}

/// Raw text of a value; strings are unquoted
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Draw resolved content. `id` scopes element ids within the row.
pub fn render_cell(content: CellContent, id: ElementId, actions: Option<CellActions>) -> AnyElement {
    match content {
        CellContent::Empty => div().into_any_element(),
        CellContent::Text(text) => div()
            .text_sm()
            .text_color(KitColors::text_primary())
            .child(text)
            .into_any_element(),
        CellContent::Title { title, subtitle } => div()
            .flex()
            .flex_col()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(KitColors::text_primary())
                    .child(title),
            )
            .children(subtitle.map(|s| {
                div()
                    .text_xs()
                    .text_color(KitColors::text_secondary())
                    .child(s)
            }))
            .into_any_element(),
        CellContent::Tags(tags) => div()
            .flex()
            .flex_wrap()
            .gap_1()
            .children(tags.into_iter().map(|tag| Tag::new(tag).size(Size::Small)))
            .into_any_element(),
        CellContent::Links(links) => div()
            .id(id)
            .flex()
            .gap_2()
            .children(links.into_iter().enumerate().map(|(i, link)| {
                let label: SharedString = link.label.into();
                div()
                    .id(("link", i))
                    .text_sm()
                    .text_color(KitColors::primary())
                    .cursor_pointer()
                    .hover(|s| s.underline())
                    .when_some(link.href, |el, href| {
                        el.on_click(move |_event: &ClickEvent, _window, cx| cx.open_url(&href))
                    })
                    .child(label)
            }))
            .into_any_element(),
        CellContent::Rating(counts) => Rating::from_counts(counts).into_any_element(),
        CellContent::Avatars { visible, overflow } => AvatarGroup::from_split(visible, overflow)
            .size(Size::Small)
            .into_any_element(),
        CellContent::Progress { percent } => div()
            .w_full()
            .child(ProgressBar::new(percent).size(Size::Small).show_label(true))
            .into_any_element(),
        CellContent::Actions => {
            let (edit, delete) = match actions {
                Some(actions) => (
                    Button::new("edit", actions.edit_label).on_click(actions.on_edit),
                    Button::new("delete", actions.delete_label).on_click(actions.on_delete),
                ),
                None => (Button::new("edit", "Edit"), Button::new("delete", "Delete")),
            };
            let edit = edit.variant(ButtonVariant::Ghost).size(Size::Small);
            let delete = delete.variant(ButtonVariant::Danger).size(Size::Small);
            div()
                .id(id)
                .flex()
                .gap_2()
                .child(edit)
                .child(delete)
                .into_any_element()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_three_of_five() {
        let content = resolve_cell(ColumnKind::Rating, Some(&json!(3)), 100.0);
        assert_eq!(content, CellContent::Rating(StarCounts { filled: 3, empty: 2 }));
    }

    #[test]
    fn rating_caps_at_five() {
        let content = resolve_cell(ColumnKind::Rating, Some(&json!(7)), 100.0);
        assert_eq!(content, CellContent::Rating(StarCounts { filled: 5, empty: 0 }));
    }

    #[test]
    fn missing_rating_is_all_empty() {
        let content = resolve_cell(ColumnKind::Rating, None, 100.0);
        assert_eq!(content, CellContent::Rating(StarCounts { filled: 0, empty: 5 }));
        let content = resolve_cell(ColumnKind::Rating, Some(&json!("n/a")), 100.0);
        assert_eq!(content, CellContent::Rating(StarCounts { filled: 0, empty: 5 }));
    }

    #[test]
    fn progress_clamps_to_hundred() {
        let content = resolve_cell(ColumnKind::Progress, Some(&json!(150)), 100.0);
        assert_eq!(content, CellContent::Progress { percent: 100.0 });
    }

    #[test]
    fn progress_scales_by_max() {
        let content = resolve_cell(ColumnKind::Progress, Some(&json!(5)), 20.0);
        assert_eq!(content, CellContent::Progress { percent: 25.0 });
    }

    #[test]
    fn text_degrades_gracefully() {
        assert_eq!(resolve_cell(ColumnKind::Text, None, 100.0), CellContent::Empty);
        assert_eq!(resolve_cell(ColumnKind::Text, Some(&json!(null)), 100.0), CellContent::Empty);
        assert_eq!(
            resolve_cell(ColumnKind::Text, Some(&json!(42)), 100.0),
            CellContent::Text("42".to_string())
        );
        assert_eq!(
            resolve_cell(ColumnKind::Progress, Some(&json!("half")), 100.0),
            CellContent::Text("half".to_string())
        );
    }

    #[test]
    fn title_accepts_string_or_object() {
        assert_eq!(
            resolve_cell(ColumnKind::Title, Some(&json!("Olivia")), 100.0),
            CellContent::Title { title: "Olivia".into(), subtitle: None }
        );
        assert_eq!(
            resolve_cell(
                ColumnKind::Title,
                Some(&json!({"title": "Olivia", "subtitle": "@olivia"})),
                100.0
            ),
            CellContent::Title { title: "Olivia".into(), subtitle: Some("@olivia".into()) }
        );
    }

    #[test]
    fn tags_from_array_or_single_string() {
        assert_eq!(
            resolve_cell(ColumnKind::MultiTag, Some(&json!(["Design", "Product"])), 100.0),
            CellContent::Tags(vec!["Design".into(), "Product".into()])
        );
        assert_eq!(
            resolve_cell(ColumnKind::MultiTag, Some(&json!("Solo")), 100.0),
            CellContent::Tags(vec!["Solo".into()])
        );
    }

    #[test]
    fn links_accept_strings_and_objects() {
        let content = resolve_cell(
            ColumnKind::Links,
            Some(&json!(["Docs", {"label": "Site", "href": "https://example.com"}, 3])),
            100.0,
        );
        assert_eq!(
            content,
            CellContent::Links(vec![
                CellLink { label: "Docs".into(), href: None },
                CellLink { label: "Site".into(), href: Some("https://example.com".into()) },
            ])
        );
    }

    #[test]
    fn avatars_overflow_past_four() {
        let content = resolve_cell(
            ColumnKind::Avatars,
            Some(&json!(["Ann Lee", "Bo", "Cy Dee", "Di", "Ed", "Flo"])),
            100.0,
        );
        assert_eq!(
            content,
            CellContent::Avatars {
                visible: vec!["AL".into(), "B".into(), "CD".into(), "D".into()],
                overflow: 2
            }
        );
        assert_eq!(resolve_cell(ColumnKind::Avatars, Some(&json!([])), 100.0), CellContent::Empty);
        assert_eq!(resolve_cell(ColumnKind::Avatars, None, 100.0), CellContent::Empty);
    }

    #[test]
    fn actions_ignore_value() {
        assert_eq!(resolve_cell(ColumnKind::Actions, None, 100.0), CellContent::Actions);
    }
}
