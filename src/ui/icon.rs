use crate::tiles::decode::decode_image;
use egui::{Color32, Context, Painter, Pos2, Rect, Stroke, TextureHandle, TextureOptions};
use std::path::Path;

const GLASS: Color32 = Color32::from_rgb(0xff, 0xbf, 0x00);
const BASE: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);

/// The bulb image shared by markers and popups
pub struct BulbIcon {
    texture: Option<TextureHandle>,
}

impl BulbIcon {
    /// Loads the icon at `path`, falling back to a painted glyph
    pub fn load(ctx: &Context, path: &Path) -> Self {
        let texture = std::fs::read(path)
            .map_err(crate::MapError::from)
            .and_then(|bytes| decode_image(&bytes))
            .map(|image| ctx.load_texture("bulb-icon", image, TextureOptions::LINEAR));

        match texture {
            Ok(texture) => Self {
                texture: Some(texture),
            },
            Err(err) => {
                log::warn!("bulb icon {} unavailable ({}), drawing a glyph", path.display(), err);
                Self::glyph()
            }
        }
    }

    pub fn glyph() -> Self {
        Self { texture: None }
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        match &self.texture {
            Some(texture) => {
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            None => paint_glyph(painter, rect),
        }
    }
}

fn paint_glyph(painter: &Painter, rect: Rect) {
    let w = rect.width();
    let radius = w * 0.32;
    let glass_center = Pos2::new(rect.center().x, rect.top() + w * 0.38);
    painter.circle(glass_center, radius, GLASS, Stroke::new(1.0, BASE));

    let base = Rect::from_center_size(
        Pos2::new(rect.center().x, rect.bottom() - w * 0.14),
        egui::vec2(w * 0.3, w * 0.22),
    );
    painter.rect_filled(base, w * 0.04, BASE);
}
