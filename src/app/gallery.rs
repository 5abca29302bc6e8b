//! Gallery - Component Showcase
//!
//! One scrolling page that renders every component in its common
//! configurations, plus the team members table fed from a JSON fixture.

use std::path::PathBuf;

use gpui::{
    div, prelude::*, App, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window,
};
use gpui_component::{h_flex, v_flex};

use crate::components::composite::data_table::{
    rows_from_json, team_members::team_members_columns, team_members_table, DataTable, DataTableEvent,
    RowRecord,
};
use crate::components::primitives::{
    Avatar, AvatarGroup, Badge, Button, ButtonVariant, Checkbox, Input, InputEvent, InputNumbers, InputState,
    Label, LabelState, NumberRange, ProgressBar, RadioGroup, RadioOption, Rating, Slider, StepperGroup, Tag,
    Toggle,
};
use crate::i18n::{t, Locale};
use crate::theme::colors::KitColors;
use crate::theme::tokens::{Fill, Size, Tone};
use crate::utils::GalleryConfig;

const TEAM_MEMBERS_FIXTURE: &str = include_str!("fixtures/team_members.json");

const PLANS: [(&str, &str); 3] = [("free", "Free"), ("team", "Team"), ("enterprise", "Enterprise")];

/// Parse the bundled member rows; a broken fixture shows an empty table
fn load_team_members() -> Vec<RowRecord> {
    rows_from_json(TEAM_MEMBERS_FIXTURE).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse team members fixture: {}", e);
        Vec::new()
    })
}

/// Email check used by the validation demo
fn email_state(value: &str) -> Option<InputState> {
    if value.is_empty() {
        None
    } else if value.contains('@') && !value.ends_with('@') {
        Some(InputState::Success)
    } else {
        Some(InputState::Error)
    }
}

/// Validation state and localized message for the email field
fn email_feedback(locale: Locale, value: &str) -> (Option<InputState>, Option<SharedString>) {
    let state = email_state(value);
    let message = (state == Some(InputState::Error)).then(|| t(locale, "field-email-invalid"));
    (state, message)
}

/// Titled block of the page
fn section(title: SharedString, content: impl IntoElement) -> Div {
    v_flex()
        .gap_3()
        .p_4()
        .bg(KitColors::surface())
        .border_1()
        .border_color(KitColors::border())
        .rounded_lg()
        .child(
            div()
                .text_base()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(KitColors::text_primary())
                .child(title),
        )
        .child(content)
}

/// The gallery root view
pub struct Gallery {
    config: GalleryConfig,
    config_path: Option<PathBuf>,
    locale: Locale,
    table: Entity<DataTable>,
    name_input: Entity<Input>,
    email_input: Entity<Input>,
    quantity: Entity<InputNumbers>,
    notifications: u32,
    tags: Vec<SharedString>,
    toggle_on: bool,
    agree: bool,
    plan: String,
    volume: f64,
    step: usize,
    rating: u8,
    last_event: Option<SharedString>,
    _subscriptions: Vec<Subscription>,
}

impl Gallery {
    pub fn new(
        config: GalleryConfig,
        config_path: Option<PathBuf>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = config.resolved_locale();

        let rows = load_team_members();
        tracing::info!("Loaded {} team members", rows.len());
        let table = cx.new(|_| {
            team_members_table(rows, locale)
                .page_size(config.page_size)
                .size(config.table_size)
                .variant(config.table_variant)
        });

        let name_input = cx.new(|cx| {
            Input::new("name", window, cx)
                .label(t(locale, "field-name"))
                .placeholder(t(locale, "field-name-placeholder"))
        });
        let email_input = cx.new(|cx| {
            Input::new("email", window, cx)
                .label(t(locale, "field-email"))
                .placeholder("name@example.com")
        });
        let quantity = cx.new(|_| InputNumbers::new("quantity", NumberRange::new(0, 10, 1)).value(2));

        let subscriptions = vec![
            cx.subscribe(&table, Self::on_table_event),
            cx.subscribe(&email_input, Self::on_email_event),
        ];

        Self {
            config,
            config_path,
            locale,
            table,
            name_input,
            email_input,
            quantity,
            notifications: 3,
            tags: ["Design", "Rust", "GPUI"].into_iter().map(SharedString::from).collect(),
            toggle_on: true,
            agree: false,
            plan: PLANS[1].0.to_string(),
            volume: 40.0,
            step: 2,
            rating: 3,
            last_event: None,
            _subscriptions: subscriptions,
        }
    }

    fn on_table_event(&mut self, table: Entity<DataTable>, event: &DataTableEvent, cx: &mut Context<Self>) {
        tracing::info!("Table event: {:?}", event);
        if let DataTableEvent::Delete { row_id } = event {
            table.update(cx, |table, cx| {
                let rows = table.rows().iter().filter(|row| row.id() != row_id).cloned().collect();
                table.set_rows(rows);
                cx.notify();
            });
        }
        self.last_event = Some(format!("{event:?}").into());
        cx.notify();
    }

    fn on_email_event(&mut self, input: Entity<Input>, event: &InputEvent, cx: &mut Context<Self>) {
        let InputEvent::Change(value) = event;
        let (state, message) = email_feedback(self.locale, value);
        input.update(cx, |input, cx| {
            input.set_state(state, cx);
            input.set_message(message, cx);
        });
    }

    /// Switch the locale and remember it in the config file
    fn switch_locale(&mut self, cx: &mut Context<Self>) {
        self.locale = match self.locale {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        };
        let locale = self.locale;
        self.table.update(cx, |table, cx| {
            table.set_locale(locale);
            table.set_columns(team_members_columns(locale));
            cx.notify();
        });
        self.name_input.update(cx, |input, cx| {
            input.set_label(t(locale, "field-name"), cx);
            input.set_placeholder(t(locale, "field-name-placeholder"), cx);
        });
        self.email_input.update(cx, |input, cx| {
            input.set_label(t(locale, "field-email"), cx);
            let (_, message) = email_feedback(locale, input.value());
            input.set_message(message, cx);
        });

        self.config.locale = Some(locale);
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save(path) {
                tracing::warn!("Failed to save config {}: {}", path.display(), e);
            }
        }
        cx.notify();
    }

    /// Handler that applies a component's value to the gallery
    fn setter<A: 'static>(
        cx: &mut Context<Self>,
        apply: impl Fn(&mut Self, A) + 'static,
    ) -> Box<dyn Fn(A, &mut Window, &mut App) + 'static> {
        let view = cx.entity().downgrade();
        Box::new(move |value, _window, cx| {
            let _ = view.update(cx, |this, cx| {
                apply(this, value);
                cx.notify();
            });
        })
    }

    fn render_header(&self, cx: &mut Context<Self>) -> Div {
        h_flex()
            .justify_between()
            .px_6()
            .py_3()
            .bg(KitColors::surface())
            .border_b_1()
            .border_color(KitColors::border())
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(KitColors::text_primary())
                    .child(t(self.locale, "app-title")),
            )
            .child(
                Button::new("switch-locale", self.locale.display_name())
                    .variant(ButtonVariant::Outline)
                    .size(Size::Small)
                    .on_click(cx.listener(|this, _event, _window, cx| this.switch_locale(cx))),
            )
    }

    fn render_buttons(&self) -> Div {
        v_flex()
            .gap_3()
            .child(
                h_flex()
                    .gap_2()
                    .child(Button::primary("btn-primary", "Primary"))
                    .child(Button::secondary("btn-secondary", "Secondary"))
                    .child(Button::new("btn-outline", "Outline").variant(ButtonVariant::Outline))
                    .child(Button::danger("btn-danger", "Danger"))
                    .child(Button::ghost("btn-ghost", "Ghost")),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Button::primary("btn-small", "Small").size(Size::Small))
                    .child(Button::primary("btn-large", "Large").size(Size::Large))
                    .child(Button::primary("btn-disabled", "Disabled").disabled(true))
                    .child(Button::secondary("btn-loading", "Loading").loading(true))
                    .child(Button::secondary("btn-pressed", "Pressed").pressed(true)),
            )
    }

    fn render_badges(&self, cx: &mut Context<Self>) -> Div {
        let tags = self.tags.iter().enumerate().map(|(i, tag)| {
            let tag_value = tag.clone();
            Tag::new(tag.clone())
                .tone(Tone::Info)
                .fill(Fill::Soft)
                .on_remove(("tag-remove", i), cx.listener(move |this, _event, _window, cx| {
                    this.tags.retain(|t| *t != tag_value);
                    cx.notify();
                }))
        });

        v_flex()
            .gap_3()
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Badge::new("New"))
                    .child(Badge::new("Beta").tone(Tone::Warning).fill(Fill::Soft))
                    .child(Badge::new("Archived").tone(Tone::Neutral).fill(Fill::Outline))
                    .child(Badge::count(self.notifications).tone(Tone::Danger).max(99))
                    .child(Badge::dot().tone(Tone::Success))
                    .child(
                        Button::ghost("notify", "+10")
                            .size(Size::Small)
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.notifications = this.notifications.saturating_add(10);
                                cx.notify();
                            })),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(Tag::new("Success").tone(Tone::Success))
                    .child(Tag::new("Outline").tone(Tone::Primary).fill(Fill::Outline))
                    .children(tags),
            )
    }

    fn render_inputs(&self) -> Div {
        h_flex()
            .gap_6()
            .items_start()
            .child(self.name_input.clone())
            .child(self.email_input.clone())
            .child(
                v_flex()
                    .gap_1()
                    .child(Label::new(t(self.locale, "field-quantity")).required(true))
                    .child(self.quantity.clone()),
            )
            .child(
                v_flex()
                    .gap_2()
                    .child(Label::new("Disabled").state(LabelState::Disabled).helper("Read only"))
                    .child(Label::new("Invalid").state(LabelState::Error).helper("Required field")),
            )
    }

    fn render_controls(&self, cx: &mut Context<Self>) -> Div {
        let options = PLANS.iter().map(|(value, label)| RadioOption::new(*value, *label)).collect();
        let view = cx.entity().downgrade();

        h_flex()
            .gap_8()
            .items_start()
            .child(
                v_flex()
                    .gap_3()
                    .child(
                        Toggle::new("toggle")
                            .on(self.toggle_on)
                            .label("Notifications")
                            .on_change(Self::setter(cx, |this, on| this.toggle_on = on)),
                    )
                    .child(Toggle::new("toggle-small").size(Size::Small).label("Small"))
                    .child(Toggle::new("toggle-disabled").on(true).disabled(true).label("Disabled")),
            )
            .child(
                v_flex()
                    .gap_3()
                    .child(
                        Checkbox::new("agree")
                            .checked(self.agree)
                            .label("I agree")
                            .on_change(Self::setter(cx, |this, checked| this.agree = checked)),
                    )
                    .child(Checkbox::new("partial").indeterminate(true).label("Partial")),
            )
            .child(
                RadioGroup::new("plan", options)
                    .selected(self.plan.clone())
                    .on_change(move |plan, _window, cx| {
                        let _ = view.update(cx, |this, cx| {
                            this.plan = plan.to_string();
                            cx.notify();
                        });
                    }),
            )
            .child(
                Slider::new("volume")
                    .value(self.volume)
                    .range(0.0, 100.0)
                    .step(5.0)
                    .show_value(true)
                    .on_change(Self::setter(cx, |this, volume| this.volume = volume)),
            )
    }

    fn render_steppers(&self, cx: &mut Context<Self>) -> Div {
        let labels = ["step-account", "step-profile", "step-review", "step-done"].map(|key| t(self.locale, key));
        let last = labels.len();

        v_flex()
            .gap_4()
            .child(StepperGroup::new("steps", labels).current(self.step))
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        Button::secondary("step-back", "←")
                            .size(Size::Small)
                            .disabled(self.step <= 1)
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.step = this.step.saturating_sub(1).max(1);
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::primary("step-next", "→")
                            .size(Size::Small)
                            .disabled(self.step > last)
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.step = (this.step + 1).min(last + 1);
                                cx.notify();
                            })),
                    ),
            )
            .child(StepperGroup::new("steps-small", ["One", "Two", "Three"]).size(Size::Small).current(1))
    }

    fn render_progress(&self, cx: &mut Context<Self>) -> Div {
        let team: Vec<String> = ["Olivia Rhye", "Phoenix Baker", "Lana Steiner", "Demi Wilkinson", "Candice Wu", "Drew Cano"]
            .into_iter()
            .map(String::from)
            .collect();

        v_flex()
            .gap_3()
            .child(ProgressBar::from_value(self.volume, 100.0).show_label(true))
            .child(ProgressBar::new(100.0).tone(Tone::Success).size(Size::Small))
            .child(ProgressBar::from_value(150.0, 100.0).tone(Tone::Warning).size(Size::Large))
            .child(
                h_flex()
                    .gap_6()
                    .items_center()
                    .child(
                        Rating::new(f64::from(self.rating))
                            .size(Size::Large)
                            .on_rate("rating", Self::setter(cx, |this, stars| this.rating = stars)),
                    )
                    .child(Avatar::new("Olivia Rhye").size(Size::Large))
                    .child(AvatarGroup::new(&team)),
            )
    }

    fn render_table(&self) -> Div {
        v_flex()
            .gap_2()
            .child(self.table.clone())
            .when_some(self.last_event.clone(), |el, event| {
                el.child(div().text_xs().text_color(KitColors::text_muted()).child(event))
            })
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale;

        v_flex()
            .size_full()
            .bg(KitColors::background())
            .child(self.render_header(cx))
            .child(
                div()
                    .id("gallery-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(
                        v_flex()
                            .gap_4()
                            .p_6()
                            .child(section(t(locale, "section-buttons"), self.render_buttons()))
                            .child(section(t(locale, "section-badges"), self.render_badges(cx)))
                            .child(section(t(locale, "section-inputs"), self.render_inputs()))
                            .child(section(t(locale, "section-controls"), self.render_controls(cx)))
                            .child(section(t(locale, "section-steppers"), self.render_steppers(cx)))
                            .child(section(t(locale, "section-progress"), self.render_progress(cx)))
                            .child(section(t(locale, "section-table"), self.render_table())),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses() {
        let rows = load_team_members();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|row| row.get("member").is_some()));
    }

    #[test]
    fn email_validation_states() {
        assert_eq!(email_state(""), None);
        assert_eq!(email_state("ada@example.com"), Some(InputState::Success));
        assert_eq!(email_state("ada"), Some(InputState::Error));
        assert_eq!(email_state("ada@"), Some(InputState::Error));
    }

    #[test]
    fn email_message_follows_locale() {
        let (state, en) = email_feedback(Locale::EnUS, "ada");
        let (_, zh) = email_feedback(Locale::ZhCN, "ada");
        assert_eq!(state, Some(InputState::Error));
        assert_eq!(en, Some(t(Locale::EnUS, "field-email-invalid")));
        assert_eq!(zh, Some(t(Locale::ZhCN, "field-email-invalid")));
        assert_ne!(en, zh);
        assert_eq!(email_feedback(Locale::ZhCN, "ada@example.com").1, None);
    }
}
