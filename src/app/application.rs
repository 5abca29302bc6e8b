//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::PathBuf;

use gpui::{
    actions, px, size, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::gallery::Gallery;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::i18n::t;
use crate::utils::GalleryConfig;

actions!(design_kit, [Quit]);

/// Run the gallery application
///
/// `config_path` is where locale changes are saved, if anywhere.
pub fn run_gallery(config: GalleryConfig, config_path: Option<PathBuf>) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let locale = config.resolved_locale();
        let bounds = Bounds::centered(None, size(px(config.window_width), px(config.window_height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Gallery::new(config.clone(), config_path.clone(), window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open gallery window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
        tracing::info!("Gallery window opened ({:?})", locale);
    });
}
