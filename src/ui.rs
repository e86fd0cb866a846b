use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui_phosphor::regular as icons;
use tokio::runtime::Runtime;

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::controller::{Completion, Controller};
use crate::mode::Mode;
use crate::prompt::DIALECTS;
use crate::remote::ProxyClient;
use crate::render::OutputField;

const WINDOW_TITLE: &str = "Dialettami";

pub struct DialettamiApp {
    controller: Controller,
    client: ProxyClient,
    runtime: Runtime,
    clipboard: Box<dyn ClipboardWriter>,
    done_tx: Sender<Completion>,
    done_rx: Receiver<Completion>,
    in_flight: usize,
}

impl DialettamiApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        controller: Controller,
        client: ProxyClient,
        runtime: Runtime,
    ) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let (done_tx, done_rx) = crossbeam_channel::unbounded();
        Self {
            controller,
            client,
            runtime,
            clipboard: Box::new(SystemClipboard),
            done_tx,
            done_rx,
            in_flight: 0,
        }
    }

    fn submit(&mut self, ctx: &egui::Context) {
        let Some(submission) = self.controller.begin_submission() else {
            return;
        };
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let ctx = ctx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            let completion = submission.send(&client).await;
            let _ = tx.send(completion);
            ctx.request_repaint();
        });
    }

    fn drain_completions(&mut self) {
        while let Ok(completion) = self.done_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.controller.complete(completion);
        }
    }

    fn mode_toggle(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in Mode::ALL {
                let active = self.controller.modes().is_indicator_active(mode);
                if ui.selectable_label(active, mode.label()).clicked() {
                    self.controller.set_mode(mode);
                }
            }
        });
    }

    fn input_form(&mut self, ui: &mut egui::Ui) {
        let modes = self.controller.modes().clone();
        if modes.is_form_visible(Mode::ItalianToDialect) {
            ui.label("Frase in italiano");
            ui.add(
                egui::TextEdit::multiline(&mut self.controller.italian_phrase)
                    .hint_text("Es. Come stai?")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                ui.label("Dialetto");
                egui::ComboBox::from_id_source("dialect")
                    .selected_text(self.controller.dialect.as_str())
                    .show_ui(ui, |ui| {
                        for d in DIALECTS {
                            ui.selectable_value(&mut self.controller.dialect, d.to_string(), *d);
                        }
                    });
            });
        }
        if modes.is_form_visible(Mode::DialectToItalian) {
            ui.label("Frase in dialetto");
            ui.add(
                egui::TextEdit::multiline(&mut self.controller.dialect_phrase)
                    .hint_text("Es. Comme staje?")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        }
    }

    fn output_field(&mut self, ui: &mut egui::Ui, field: OutputField, now: Instant) {
        ui.horizontal(|ui| {
            ui.strong(field.title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = self.controller.copy_button(field).label(now);
                if ui.button(format!("{} {label}", icons::COPY)).clicked() {
                    self.controller.copy(field, self.clipboard.as_mut(), now);
                }
            });
        });
        let mut shown = self.controller.output().field(field).to_string();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut shown)
                    .interactive(false)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
        });
    }

    #[cfg_attr(windows, allow(unused_variables))]
    fn alert_window(&mut self, ctx: &egui::Context) {
        #[cfg(windows)]
        if let Some(text) = self.controller.take_alert() {
            show_message_box(WINDOW_TITLE, &text);
        }

        #[cfg(not(windows))]
        if let Some(text) = self.controller.alert().map(str::to_owned) {
            let mut dismissed = false;
            egui::Window::new(WINDOW_TITLE)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(text);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.controller.dismiss_alert();
            }
        }
    }
}

impl eframe::App for DialettamiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_completions();
        let now = Instant::now();

        let blocked = self.controller.alert().is_some();

        egui::TopBottomPanel::top("modes").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(WINDOW_TITLE);
                    ui.separator();
                    self.mode_toggle(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                self.input_form(ui);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button(format!("{} Traduci", icons::TRANSLATE)).clicked() {
                        self.submit(ctx);
                    }
                    if self.in_flight > 0 {
                        ui.spinner();
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for field in OutputField::ALL {
                            self.output_field(ui, field, now);
                            ui.add_space(8.0);
                        }
                    });
            });
        });

        self.alert_window(ctx);

        // Wake up again when a "Copiato!" label has to revert.
        let revert = OutputField::ALL
            .iter()
            .filter_map(|f| self.controller.copy_button(*f).remaining(now))
            .min();
        if let Some(wait) = revert {
            ctx.request_repaint_after(wait + Duration::from_millis(10));
        }
    }
}

#[cfg(windows)]
pub(crate) fn show_message_box(title: &str, text: &str) {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging as wm;
    fn wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }
    let text = wide(text);
    let title = wide(title);
    unsafe {
        let _ = wm::MessageBoxW(
            HWND(std::ptr::null_mut()),
            windows::core::PCWSTR(text.as_ptr()),
            windows::core::PCWSTR(title.as_ptr()),
            wm::MB_OK | wm::MB_ICONWARNING | wm::MB_SETFOREGROUND,
        );
    }
}

/// Run the window event loop on the current thread until it is closed.
pub fn run(controller: Controller, client: ProxyClient, runtime: Runtime) -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([640.0, 620.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };
    tracing::info!("starting event loop");
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Box::new(DialettamiApp::new(cc, controller, client, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))?;
    tracing::info!("event loop exited");
    Ok(())
}
