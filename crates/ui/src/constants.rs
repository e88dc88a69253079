use egui::vec2;

pub const PREVIEW_MAX_SIZE: egui::Vec2 = vec2(960.0, 540.0);
pub const INSPECTOR_LABEL_WIDTH: f32 = 80.0;
pub const PREVIEW_IMAGE_EXTENSIONS: &[&str] = &["gif", "png", "jpg", "jpeg", "webp"];
