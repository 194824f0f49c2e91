use std::path::PathBuf;

use log::info;

use crate::command::{Command, Confirmation, Outcome, PendingAction};
use crate::config::EditorConfig;
use crate::event::StatusLine;
use crate::geometry::Point;
use crate::input::{InputEvent, InputHandler, route_event};
use crate::renderer::Renderer;
use crate::shape::ShapeRegistry;
use crate::state::EditSession;

/// The editor window: menu, tool panel, canvas and status bar around an [`EditSession`].
///
/// Only the [`EditorConfig`] is persisted between runs.
pub struct PaintApp {
    config: EditorConfig,
    session: EditSession,
    renderer: Renderer,
    input: Option<InputHandler>,
    status: StatusLine,
    prompt: Option<PendingAction>,
    path_text: String,
    pointer: Option<Point>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` wins over the one stored by the previous run.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<EditorConfig>) -> Self {
        let config = config
            .or_else(|| {
                cc.storage
                    .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            })
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let session = EditSession::with_config(ShapeRegistry::new(), &config);
        let status = StatusLine::new();
        session.subscribe(Box::new(status.clone()));
        status.set("Ready");
        Self {
            path_text: config.document_path.display().to_string(),
            config,
            session,
            renderer: Renderer::new(),
            input: None,
            status,
            prompt: None,
            pointer: None,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    fn run(&mut self, command: Command) {
        let outcome = self.session.execute(command);
        self.track(outcome);
    }

    fn track(&mut self, outcome: Outcome) {
        if let Outcome::NeedsConfirmation(action) = outcome {
            self.prompt = Some(action);
        }
    }

    fn sync_config(&mut self) {
        self.config.default_style = self.session.default_style();
        self.config.initial_tool = self.session.tool();
        self.config.document_path = self.session.document_path().to_path_buf();
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    self.run(Command::New);
                    ui.close_menu();
                }
                if ui.button("Open").clicked() {
                    let path = PathBuf::from(&self.path_text);
                    let outcome = self.session.open_file(&path);
                    self.track(outcome);
                    ui.close_menu();
                }
                if ui.button("Save").clicked() {
                    let path = PathBuf::from(&self.path_text);
                    self.session.set_document_path(path.clone());
                    self.run(Command::Save(path));
                    ui.close_menu();
                }
            });
            ui.menu_button("Edit", |ui| {
                for (label, command) in [
                    ("Copy", Command::Copy),
                    ("Cut", Command::Cut),
                    ("Paste", Command::Paste),
                    ("Delete", Command::Delete),
                ] {
                    if ui.button(label).clicked() {
                        self.run(command);
                        ui.close_menu();
                    }
                }
            });
            ui.separator();
            ui.label("File:");
            ui.text_edit_singleline(&mut self.path_text);
        });
    }

    fn confirmation_modal(&mut self, ctx: &egui::Context) {
        let Some(action) = &self.prompt else {
            return;
        };
        let question = action.prompt();
        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(question);
                ui.horizontal(|ui| {
                    for (label, choice) in [
                        ("Yes", Confirmation::Yes),
                        ("No", Confirmation::No),
                        ("Cancel", Confirmation::Cancel),
                    ] {
                        if ui.button(label).clicked() {
                            answer = Some(choice);
                        }
                    }
                });
            });
        if let Some(answer) = answer {
            self.prompt = None;
            let outcome = self.session.resolve(answer);
            self.track(outcome);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.sync_config();
        info!("persisting editor config");
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| self.menu_bar(ui));

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.text());
                if let Some(pointer) = self.pointer {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(pointer.to_string());
                        if self.session.is_changed() {
                            ui.label("modified");
                        }
                    });
                }
            });
        });

        egui::SidePanel::left("tools").show(ctx, |ui| {
            let commands = self.renderer.render_tools_panel(
                ui,
                self.session.tool(),
                &self.session.default_style(),
            );
            for command in commands {
                self.run(command);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let rect = response.rect;

            let modal_open = self.prompt.is_some();
            let keyboard_free = !modal_open && !ctx.wants_keyboard_input();
            // False while a popup, menu or window covers the pointer
            let canvas_hit = response.contains_pointer();
            let input = self.input.get_or_insert_with(|| InputHandler::new(rect));
            input.set_canvas_rect(rect);
            let events = input.process_input(ctx, canvas_hit, keyboard_free);

            for event in &events {
                // A prompt is up: let running drags finish but start nothing new
                if modal_open && matches!(event, InputEvent::PointerDown { .. }) {
                    continue;
                }
                if let InputEvent::PointerMove { location } = event {
                    self.pointer = location.is_in_canvas.then_some(location.canvas);
                }
                if let Some(outcome) = route_event(event, &mut self.session) {
                    self.track(outcome);
                }
            }

            let preview = self.session.preview();
            self.renderer
                .render(&painter, rect, self.session.document(), preview.as_ref());
        });

        self.confirmation_modal(ctx);
    }
}
