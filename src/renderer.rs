use eframe::egui::{self, Color32, Slider};

use crate::command::Command;
use crate::document::Document;
use crate::shape::Shape;
use crate::state::Tool;
use crate::style::{BackgroundFill, LineStyle, Rgb, ShapeStyle, StyleChange};

/// Paints the canvas and the tool panel.
#[derive(Debug)]
pub struct Renderer {
    canvas_colour: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            canvas_colour: Color32::WHITE,
        }
    }

    /// Renders the tools panel.
    ///
    /// Returns the commands for whatever the user changed this frame.
    pub fn render_tools_panel(
        &self,
        ui: &mut egui::Ui,
        tool: Tool,
        style: &ShapeStyle,
    ) -> Vec<Command> {
        let mut commands = Vec::new();

        ui.heading("Tools");
        ui.separator();
        for candidate in Tool::ALL {
            if ui.selectable_label(tool == candidate, candidate.label()).clicked()
                && tool != candidate
            {
                commands.push(Command::ChangeTool(candidate));
            }
        }

        ui.separator();
        ui.heading("Style");

        let mut line_style = style.line_style;
        egui::ComboBox::from_label("Line")
            .selected_text(line_style.label())
            .show_ui(ui, |ui| {
                for candidate in LineStyle::ALL {
                    ui.selectable_value(&mut line_style, candidate, candidate.label());
                }
            });
        if line_style != style.line_style {
            commands.push(Command::ChangeStyle(StyleChange::LineStyle(line_style)));
        }

        let mut width = style.line_width;
        ui.horizontal(|ui| {
            ui.label("Width:");
            ui.add(Slider::new(&mut width, 0..=20));
        });
        if width != style.line_width {
            commands.push(Command::ChangeStyle(StyleChange::LineWidth(width)));
        }

        if let Some(colour) = colour_row(ui, "Line colour:", style.line_colour) {
            commands.push(Command::ChangeStyle(StyleChange::LineColour(colour)));
        }

        let mut filled = style.background_fill == BackgroundFill::Solid;
        if ui.checkbox(&mut filled, "Fill").changed() {
            let fill = if filled {
                BackgroundFill::Solid
            } else {
                BackgroundFill::None
            };
            commands.push(Command::ChangeStyle(StyleChange::BackgroundFill(fill)));
        }

        if let Some(colour) = colour_row(ui, "Fill colour:", style.background_colour) {
            commands.push(Command::ChangeStyle(StyleChange::BackgroundColour(colour)));
        }

        commands
    }

    /// Paints the document bottom to top, then the preview, inside `rect`.
    ///
    /// Shape coordinates are relative to the top-left corner of `rect`.
    pub fn render(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        document: &Document,
        preview: Option<&Shape>,
    ) {
        painter.rect_filled(rect, 0.0, self.canvas_colour);

        let offset = rect.min.to_vec2();
        let painter = painter.with_clip_rect(rect);
        for shape in document.shapes().chain(preview) {
            let mut primitives = shape.to_primitives();
            for primitive in &mut primitives {
                primitive.translate(offset);
            }
            painter.extend(primitives);
        }
    }
}

fn colour_row(ui: &mut egui::Ui, label: &str, current: Rgb) -> Option<Rgb> {
    let mut colour = current.to_color32();
    ui.horizontal(|ui| {
        ui.label(label);
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut colour,
            egui::color_picker::Alpha::Opaque,
        );
    });
    let picked = Rgb::from_color32(colour);
    (picked != current).then_some(picked)
}
