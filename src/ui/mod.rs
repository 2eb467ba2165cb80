// src/ui/mod.rs

mod fonts;
pub mod message;
mod signature_pad;
mod step_date_location;
mod step_personal;
mod step_preview;
mod step_signatures;
mod stepper;
mod widgets;

pub use fonts::install_cjk_fonts;

use std::sync::Arc;

use accord_studio_lib::activity_log::{ActivityKind, ActivityLog};
use accord_studio_lib::command::consent_form::{self as form, FormError, FormState, WizardStep};
use accord_studio_lib::context::AppCtx;
use accord_studio_lib::export::{ExportFormat, Exporter};
use accord_studio_lib::i18n::{self, Locale};
use eframe::egui::{self, RichText};

use message::PanelMsgState;
use step_preview::PreviewPanel;
use step_signatures::SignaturesPanel;

pub struct UiApp {
    ctx: Arc<AppCtx>,
    log: ActivityLog,

    /// The single per-session record + wizard position. Views receive it by
    /// reference; nothing else holds a copy.
    form: FormState,
    locale: Locale,

    exporter: Exporter,
    msg: PanelMsgState,

    signatures: SignaturesPanel,
    preview: PreviewPanel,
}

impl UiApp {
    pub fn new(ctx: Arc<AppCtx>, log: ActivityLog) -> Self {
        Self {
            ctx,
            log,
            form: FormState::new(),
            locale: Locale::default(),
            exporter: Exporter::new(),
            msg: PanelMsgState::default(),
            signatures: SignaturesPanel::new(),
            preview: PreviewPanel::new(),
        }
    }

    fn poll_export(&mut self) {
        let Some((format, res)) = self.exporter.poll() else {
            return;
        };

        let l = i18n::labels(self.locale);
        match res {
            Ok(path) => {
                self.msg
                    .set_success(format!("{}{}", l.exported_to, path.display()));
                self.log
                    .record(ActivityKind::ExportSucceeded, path.display().to_string());
            }
            Err(e) => {
                let short = match format {
                    ExportFormat::Pdf => l.export_pdf_failed,
                    ExportFormat::Png => l.export_image_failed,
                };
                let text = if self.ctx.debug_ui {
                    format!("{short} ({e})")
                } else {
                    short.to_string()
                };
                self.msg.set_error(text);
                self.log.record(ActivityKind::ExportFailed, e.to_string());
            }
        }
    }

    fn begin_export(&mut self, format: ExportFormat) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(self.ctx.export_start_dir())
            .set_file_name(format.default_file_name())
            .add_filter(format.extension().to_uppercase(), &[format.extension()])
            .save_file()
        else {
            return;
        };

        // The worker gets a snapshot; the live record stays untouched either
        // way, so a failed export is always safe to retry.
        match self.exporter.begin(
            format,
            self.form.record.clone(),
            self.locale,
            path.clone(),
        ) {
            Ok(()) => {
                self.msg.clear();
                self.log
                    .record(ActivityKind::ExportStarted, path.display().to_string());
            }
            Err(e) => self.msg.from_app_error(&e, self.locale, self.ctx.debug_ui),
        }
    }

    fn ui_header(&mut self, ui: &mut egui::Ui) {
        let l = i18n::labels(self.locale);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(l.app_title)
                    .strong()
                    .size(17.0)
                    .color(egui::Color32::from_rgb(37, 99, 235)),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("🌐 {}", self.locale.toggle_label()))
                    .clicked()
                {
                    self.locale = self.locale.toggled();
                }
            });
        });
    }

    fn ui_nav_bar(&mut self, ui: &mut egui::Ui) {
        let l = i18n::labels(self.locale);
        ui.horizontal(|ui| {
            if !self.form.step.is_first() && ui.button(format!("← {}", l.previous)).clicked() {
                // Backward motion never validates.
                let _ = form::retreat_step(&mut self.form);
                self.msg.clear();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.form.step.is_last() {
                    let busy = self.exporter.is_busy();

                    if ui
                        .add_enabled(!busy, egui::Button::new(l.export_image))
                        .clicked()
                    {
                        self.begin_export(ExportFormat::Png);
                    }
                    if ui
                        .add_enabled(!busy, egui::Button::new(l.export_pdf))
                        .clicked()
                    {
                        self.begin_export(ExportFormat::Pdf);
                    }
                    if busy {
                        ui.spinner();
                        ui.label(l.exporting);
                    }
                } else if ui.button(format!("{} →", l.next)).clicked() {
                    match form::advance_if_valid(&mut self.form) {
                        Ok(()) => self.msg.clear(),
                        Err(FormError::ValidationFailed(_)) => {
                            self.msg.set_error(l.fill_required);
                        }
                        Err(e) => self.msg.set_error(e.to_string()),
                    }
                }
            });
        });
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_export();
        if self.exporter.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.ui_header(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("wizard_nav").show(ctx, |ui| {
            ui.add_space(8.0);
            self.ui_nav_bar(ui);
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let l = i18n::labels(self.locale);

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(l.agreement_title).strong().size(20.0));
            });
            ui.add_space(8.0);

            stepper::ui(ui, self.locale, self.form.step);
            ui.add_space(10.0);

            self.msg.show(ui, self.ctx.debug_ui);
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.form.step {
                    WizardStep::PersonalInfo => step_personal::ui(ui, &mut self.form, self.locale),
                    WizardStep::DateLocation => {
                        step_date_location::ui(ui, &mut self.form, self.locale)
                    }
                    WizardStep::Signatures => self.signatures.ui(
                        ui,
                        &mut self.form,
                        self.locale,
                        &mut self.msg,
                        self.ctx.debug_ui,
                    ),
                    WizardStep::Preview => self.preview.ui(ui, &self.form.record, self.locale),
                });
        });
    }
}
