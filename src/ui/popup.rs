use crate::choropleth::popup::Popup;
use crate::core::viewport::Viewport;
use crate::ui::icon::BulbIcon;
use egui::{Align2, Context, Id, Order, Rect, RichText, Sense, Vec2};

/// Gap between the popup's bottom edge and its anchor
const TIP_OFFSET: f32 = 10.0;
const ICON_SIZE: f32 = 48.0;

/// Draws the open popup above its anchor. Returns true when the user closed it.
pub fn show_popup(
    ctx: &Context,
    map_rect: Rect,
    viewport: &Viewport,
    popup: &Popup,
    icon: &BulbIcon,
) -> bool {
    let anchor = viewport.lat_lng_to_pixel(&popup.position);
    let pos = map_rect.min + Vec2::new(anchor.x as f32, anchor.y as f32 - TIP_OFFSET);
    if !map_rect.contains(pos) {
        return false;
    }

    let mut closed = false;
    egui::Area::new(Id::new("map_popup").with(popup.feature))
        .order(Order::Foreground)
        .fixed_pos(pos)
        .pivot(Align2::CENTER_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(popup.content.max_width);
                ui.horizontal(|ui| {
                    ui.heading(&popup.content.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        if ui.small_button("×").clicked() {
                            closed = true;
                        }
                    });
                });

                let (icon_rect, _) = ui.allocate_exact_size(Vec2::splat(ICON_SIZE), Sense::hover());
                icon.paint(ui.painter(), icon_rect);

                ui.label(RichText::new(&popup.content.body));
            });
        });
    closed
}
