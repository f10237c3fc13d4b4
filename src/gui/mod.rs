mod icons;
mod navigator;
mod ribbon;
mod settings_tab;

pub use icons::glyph;
pub use navigator::VaultNavigator;
pub use ribbon::{Ribbon, RibbonHandle, RibbonIcon};
pub use settings_tab::SettingsTab;

use crate::form::SettingsForm;
use crate::launcher::LauncherSync;
use crate::notice_log::{append_notice, NOTICE_LOG_FILE};
use crate::registry::Registry;
use crate::settings::Settings;
use crate::store::JsonFileStore;
use crate::suggest::FileSuggest;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::rc::Rc;

fn push_toast(toasts: &mut Toasts, toast: Toast) {
    append_notice(NOTICE_LOG_FILE, toast.text.text());
    toasts.add(toast);
}

/// Desktop host: a launcher ribbon on the left and the pinned note
/// settings in the central panel.
pub struct PinnedNotesApp {
    registry: Registry<JsonFileStore, Ribbon>,
    ribbon: Ribbon,
    tab: SettingsTab,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f32,
    ribbon_width: f32,
    show_settings: bool,
}

impl PinnedNotesApp {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let ribbon = Ribbon::default();
        let navigator = Rc::new(VaultNavigator::new(settings.vault_path()));
        let launchers = LauncherSync::new(ribbon.clone(), navigator);
        let registry = Registry::init(JsonFileStore::new(&settings.data_file), launchers)?;
        tracing::info!(count = registry.len(), vault = %settings.vault_dir, "pinned notes ready");

        let form = SettingsForm::new(&registry);
        let tab = SettingsTab::new(form, FileSuggest::new(settings.vault_path()));
        Ok(Self {
            registry,
            ribbon,
            tab,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            ribbon_width: settings.ribbon_width,
            show_settings: true,
        })
    }

    fn notify(&mut self, text: String, kind: ToastKind) {
        if !self.enable_toasts {
            append_notice(NOTICE_LOG_FILE, &text);
            return;
        }
        push_toast(
            &mut self.toasts,
            Toast {
                text: text.into(),
                kind,
                options: ToastOptions::default().duration_in_seconds(self.toast_duration as f64),
            },
        );
    }

    fn ribbon_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            if ui
                .add_sized([32.0, 32.0], egui::Button::new("⚙"))
                .on_hover_text("Pinned notes settings")
                .clicked()
            {
                self.show_settings = !self.show_settings;
            }
            ui.separator();
            for icon in self.ribbon.icons() {
                if ui
                    .add_sized([32.0, 32.0], egui::Button::new(glyph(&icon.icon)))
                    .on_hover_text(icon.label.as_str())
                    .clicked()
                {
                    icon.on_activate.fire();
                }
            }
        });
    }
}

impl eframe::App for PinnedNotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("pinned_ribbon")
            .resizable(false)
            .exact_width(self.ribbon_width)
            .show(ctx, |ui| self.ribbon_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.show_settings {
                return;
            }
            ui.heading("Pinned notes");
            if let Err(e) = self.tab.ui(ui, &mut self.registry) {
                tracing::error!(error = %e, "pinned notes operation failed");
                self.notify(format!("Failed to update pinned notes: {e}"), ToastKind::Error);
            }
        });

        for notice in self.tab.form.take_notices() {
            self.notify(notice, ToastKind::Warning);
        }
        self.toasts.show(ctx);
    }
}

impl Drop for PinnedNotesApp {
    fn drop(&mut self) {
        self.registry.teardown();
    }
}
