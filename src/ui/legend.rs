use crate::choropleth::legend::{legend_entries, LegendEntry, LEGEND_TITLE};
use crate::ui::controls::{Control, ControlAction, ControlContext, Position};
use egui::{Color32, RichText, Sense, Ui, Vec2};

const SWATCH: f32 = 18.0;

/// Static colour key, pinned bottom-left
pub struct LegendControl {
    entries: Vec<LegendEntry>,
}

/// Builds the legend from the colour scale breakpoints
pub fn legend_control() -> LegendControl {
    LegendControl {
        entries: legend_entries(),
    }
}

impl LegendControl {
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}

impl Control for LegendControl {
    fn id(&self) -> &str {
        "legend"
    }

    fn position(&self) -> Position {
        Position::BottomLeft
    }

    fn show(&mut self, ui: &mut Ui, _context: &ControlContext<'_>) -> Option<ControlAction> {
        ui.label(RichText::new(LEGEND_TITLE).strong());
        for entry in &self.entries {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(SWATCH), Sense::hover());
                ui.painter().rect_filled(rect, 0.0, Color32::from(entry.color));
                ui.label(&entry.label);
            });
        }
        None
    }
}
