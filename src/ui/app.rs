use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use crate::formats::supported_extensions;
use crate::interaction::SCROLL_UNIT;
use crate::runtime::{CropSession, RenderFrame};

use super::command::UiCommand;
use super::notify;
use super::texture::{THUMBNAIL_SIZE, thumbnail, to_color_image};

const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::GRAY;
const PAN_HINT: &str = "middle-drag or arrow keys to pan";
const SELECTION_STROKE: egui::Stroke = egui::Stroke {
    width: 2.0,
    color: egui::Color32::RED,
};

/// Texture for one image of one loaded batch.
struct CanvasTexture {
    batch: u64,
    index: usize,
    handle: egui::TextureHandle,
}

pub(super) struct CropperApp {
    session: CropSession,
    batch: u64,
    canvas_texture: Option<CanvasTexture>,
    thumbnails: Vec<egui::TextureHandle>,
    thumbnails_batch: u64,
}

impl CropperApp {
    pub(super) fn new(cc: &eframe::CreationContext<'_>, initial: Vec<PathBuf>) -> Self {
        let mut app = Self {
            session: CropSession::new(),
            batch: 0,
            canvas_texture: None,
            thumbnails: Vec::new(),
            thumbnails_batch: 0,
        };
        app.load(&initial);
        app.render(&cc.egui_ctx);
        app
    }

    fn load(&mut self, paths: &[PathBuf]) {
        match self.session.load_images(paths) {
            Ok(0) => {}
            Ok(_) => self.batch = self.batch.wrapping_add(1),
            Err(error) => notify::error(format!("Failed to load images: {error}")),
        }
    }

    fn apply_commands(&mut self, commands: Vec<UiCommand>) {
        for command in commands {
            match command {
                UiCommand::LoadImages => self.load_from_dialog(),
                UiCommand::CropAll => self.crop_all(),
                UiCommand::SaveResults => self.save_results(),
                UiCommand::SelectImage(index) => {
                    if let Err(error) = self.session.select_image(index) {
                        notify::error(error.to_string());
                    }
                }
            }
        }
    }

    fn load_from_dialog(&mut self) {
        let picked = FileDialog::new()
            .add_filter("Image files", supported_extensions())
            .set_title("Load Images")
            .pick_files()
            .unwrap_or_default();
        if picked.is_empty() {
            log::debug!("load canceled");
            return;
        }
        self.load(&picked);
    }

    fn crop_all(&mut self) {
        match self.session.crop_all() {
            Ok(_) => notify::info("All images have been cropped!"),
            Err(error) => notify::error(format!("Cannot crop: {error}")),
        }
    }

    fn save_results(&mut self) {
        if self.session.results().is_empty() {
            notify::error("There is no image to save.");
            return;
        }
        let Some(directory) = FileDialog::new().set_title("Save Results").pick_folder() else {
            log::debug!("save canceled");
            return;
        };
        match self.session.export(&directory) {
            Ok(_) => notify::info(format!(
                "The cropped images have been saved in {}.",
                directory.display()
            )),
            Err(error) => notify::error(format!("Failed to save results: {error}")),
        }
    }

    /// Brings textures in line with the session. Runs whenever the session
    /// asked for a render.
    fn render(&mut self, ctx: &egui::Context) {
        if self.thumbnails_batch != self.batch {
            self.thumbnails = self
                .session
                .images()
                .previews()
                .map(|(index, image)| {
                    ctx.load_texture(
                        format!("thumbnail-{}-{index}", self.batch),
                        thumbnail(image.pixels()),
                        egui::TextureOptions::LINEAR,
                    )
                })
                .collect();
            self.thumbnails_batch = self.batch;
        }

        let Some(index) = self.session.images().active_index() else {
            self.canvas_texture = None;
            return;
        };
        let up_to_date = self
            .canvas_texture
            .as_ref()
            .is_some_and(|texture| texture.batch == self.batch && texture.index == index);
        if up_to_date {
            return;
        }
        let Some(image) = self.session.images().active() else {
            return;
        };

        let max_side = ctx.input(|input| input.max_texture_side);
        let color = to_color_image(image.pixels(), max_side);
        match &mut self.canvas_texture {
            Some(texture) => {
                texture.handle.set(color, egui::TextureOptions::LINEAR);
                texture.batch = self.batch;
                texture.index = index;
            }
            None => {
                self.canvas_texture = Some(CanvasTexture {
                    batch: self.batch,
                    index,
                    handle: ctx.load_texture("canvas", color, egui::TextureOptions::LINEAR),
                });
            }
        }
    }

    fn draw_toolbar(&self, ui: &mut egui::Ui, commands: &mut Vec<UiCommand>) {
        ui.horizontal(|ui| {
            if ui.button("Load Images").clicked() {
                commands.push(UiCommand::LoadImages);
            }
            if ui.button("Select Area and Crop").clicked() {
                commands.push(UiCommand::CropAll);
            }
            if ui.button("Save Results").clicked() {
                commands.push(UiCommand::SaveResults);
            }
            ui.separator();
            ui.label(self.status_text());
        });
    }

    fn status_text(&self) -> String {
        let images = self.session.images();
        let Some(active) = images.active() else {
            return "No images loaded".to_string();
        };
        let index = images.active_index().unwrap_or_default();
        let rect = self.session.selection().rect();
        let mut text = format!(
            "{}/{} {} ({}x{}) zoom {:.0}%",
            index + 1,
            images.len(),
            active.file_name(),
            active.width(),
            active.height(),
            self.session.view().scale() * 100.0
        );
        if !rect.is_unset() {
            text.push_str(&format!(
                " selection {:.0}x{:.0}",
                rect.width().abs(),
                rect.height().abs()
            ));
        }
        if !self.session.results().is_empty() {
            text.push_str(&format!(" cropped {}", self.session.results().len()));
        }
        text.push_str(" | ");
        text.push_str(PAN_HINT);
        text
    }

    fn draw_thumbnails(&self, ui: &mut egui::Ui, commands: &mut Vec<UiCommand>) {
        let active = self.session.images().active_index();
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.set_min_height(THUMBNAIL_SIZE as f32 + 8.0);
                for (index, texture) in self.thumbnails.iter().enumerate() {
                    let image = egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                        texture,
                    ));
                    let button = egui::ImageButton::new(image).selected(active == Some(index));
                    if ui.add(button).clicked() {
                        commands.push(UiCommand::SelectImage(index));
                    }
                }
            });
        });
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let size = egui::vec2(available.x.max(1.0), available.y.max(1.0));
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        self.session.notify_resized(rect.size());

        self.handle_canvas_input(ui, rect, &response);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
        if let Some(frame) = self.session.render_frame() {
            self.paint_frame(&painter, rect, &frame);
        }
    }

    fn handle_canvas_input(&mut self, ui: &egui::Ui, rect: egui::Rect, response: &egui::Response) {
        let local = |screen: egui::Pos2| (screen - rect.min).to_pos2();
        let (press_origin, moving, wheel, arrows) = ui.input(|input| {
            (
                input.pointer.press_origin(),
                input.pointer.is_moving(),
                input.raw_scroll_delta.y,
                [
                    input.key_down(egui::Key::ArrowLeft),
                    input.key_down(egui::Key::ArrowRight),
                    input.key_down(egui::Key::ArrowUp),
                    input.key_down(egui::Key::ArrowDown),
                ],
            )
        });

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(origin) = press_origin {
                self.session.pointer_pressed(local(origin));
            }
        }
        if response.dragged_by(egui::PointerButton::Primary) && moving {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.session.pointer_dragged(local(pointer));
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.session.pointer_released();
        }
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.session.pointer_pressed(local(pointer));
                self.session.pointer_released();
            }
        }

        if response.dragged_by(egui::PointerButton::Middle) {
            self.session.pan_by(-response.drag_delta());
        }
        let key_pan = arrow_pan(arrows);
        if response.hovered() && key_pan != egui::Vec2::ZERO {
            self.session.pan_by(key_pan);
        }

        if response.hovered() && wheel != 0.0 {
            self.session.zoom_wheel(wheel);
        }
    }

    fn paint_frame(&self, painter: &egui::Painter, rect: egui::Rect, frame: &RenderFrame) {
        let transform = &frame.transform;
        if let Some(texture) = &self.canvas_texture {
            if texture.index == frame.image_index {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(
                    texture.handle.id(),
                    transform.image_rect(rect.min),
                    uv,
                    egui::Color32::WHITE,
                );
            }
        }

        if let Some(selection) = frame.selection {
            let to_screen = |x: f32, y: f32| {
                rect.min + transform.canvas_to_viewport(egui::pos2(x, y)).to_vec2()
            };
            let outline = egui::Rect::from_two_pos(
                to_screen(selection.x1, selection.y1),
                to_screen(selection.x2, selection.y2),
            );
            painter.rect_stroke(outline, 0.0, SELECTION_STROKE, egui::StrokeKind::Middle);
        }
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.take_render_request() {
            self.render(ctx);
        }

        let mut commands = Vec::new();
        egui::TopBottomPanel::top("commands").show(ctx, |ui| {
            self.draw_toolbar(ui, &mut commands);
        });
        egui::TopBottomPanel::bottom("thumbnails")
            .resizable(false)
            .show(ctx, |ui| {
                self.draw_thumbnails(ui, &mut commands);
            });
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });

        self.apply_commands(commands);

        if self.session.take_render_request() {
            self.render(ctx);
            ctx.request_repaint();
        }
    }
}

/// Pan step for held arrow keys, in `[left, right, up, down]` order.
fn arrow_pan([left, right, up, down]: [bool; 4]) -> egui::Vec2 {
    let axis = |negative: bool, positive: bool| match (negative, positive) {
        (true, false) => -SCROLL_UNIT,
        (false, true) => SCROLL_UNIT,
        _ => 0.0,
    };
    egui::vec2(axis(left, right), axis(up, down))
}
