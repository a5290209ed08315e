use egui::{Context, RichText, Sense};

/// Panel id, also the element a click toggles
pub const DESCRIPTION_PANEL_ID: &str = "description";

const TITLE: &str = "Electricity access in West Africa";

const BODY: &str = "Share of each country's population with access to electricity. \
Countries are shaded from dark (low access) to amber (high access), and the bulb \
on each country grows with its access rate.\n\n\
Hover a country to highlight it. Click a country, or search for it by name, to \
zoom in and read its figure.";

/// Side panel with a short description of the map; clicking it collapses or expands it
#[derive(Debug, Clone, Default)]
pub struct DescriptionPanel {
    collapsed: bool,
}

impl DescriptionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn show(&mut self, ctx: &Context) {
        let width = if self.collapsed { 48.0 } else { 260.0 };
        egui::SidePanel::right(DESCRIPTION_PANEL_ID)
            .resizable(false)
            .exact_width(width)
            .show(ctx, |ui| {
                if self.collapsed {
                    ui.label(RichText::new("ℹ").heading());
                } else {
                    ui.heading(TITLE);
                    ui.add_space(6.0);
                    ui.label(BODY);
                }

                let click = ui.interact(
                    ui.max_rect(),
                    ui.id().with("toggle"),
                    Sense::click(),
                );
                if click.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    self.toggle();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_collapsed() {
        let mut panel = DescriptionPanel::new();
        assert!(!panel.is_collapsed());
        panel.toggle();
        assert!(panel.is_collapsed());
        panel.toggle();
        assert!(!panel.is_collapsed());
    }

    #[test]
    fn test_panel_renders_headless() {
        let ctx = Context::default();
        let mut panel = DescriptionPanel::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx));
        assert!(!panel.is_collapsed());
    }
}
