use eframe::egui;
use layout_core::{LayoutComponent, LayoutPresets, ResizeNotifier, Settings, Viewport};

use crate::controller::resize::ResizeDetector;
use crate::ui::panels;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub presets: LayoutPresets,
    pub notifier_capacity: usize,
}

impl StartupConfig {
    pub fn from_settings(settings: &Settings) -> Result<Self, layout_core::LayoutError> {
        Ok(Self {
            presets: settings.presets()?,
            notifier_capacity: settings.notifier_capacity,
        })
    }
}

pub struct LayoutApp {
    notifier: ResizeNotifier,
    component: LayoutComponent,
    resize: ResizeDetector,
    started: bool,
}

impl LayoutApp {
    pub fn new(startup: StartupConfig) -> Self {
        Self {
            notifier: ResizeNotifier::new(startup.notifier_capacity),
            component: LayoutComponent::new(startup.presets),
            resize: ResizeDetector::default(),
            started: false,
        }
    }

    fn track_window_size(&mut self, ctx: &egui::Context) {
        let Some(viewport) = self.resize.observe(current_viewport(ctx)) else {
            return;
        };
        if self.started {
            self.notifier.notify(viewport);
        } else {
            tracing::info!(
                width = viewport.width,
                height = viewport.height,
                "initial window size"
            );
            self.component.init(&self.notifier, viewport);
            self.started = true;
        }
    }
}

fn current_viewport(ctx: &egui::Context) -> Option<Viewport> {
    #[allow(deprecated)]
    let rect = ctx
        .input(|i| i.viewport().inner_rect)
        .unwrap_or_else(|| ctx.screen_rect());
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some(Viewport::new(rect.width(), rect.height()))
}

impl eframe::App for LayoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_window_size(ctx);
        self.component.poll();

        let state = self.component.state();
        panels::show_page(ctx, &state);
    }
}

impl Drop for LayoutApp {
    fn drop(&mut self) {
        self.component.destroy();
        tracing::debug!(last_viewport = ?self.resize.last(), "layout app torn down");
    }
}
