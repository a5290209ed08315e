use crate::core::config::MapConfig;
use crate::core::geo::{LatLng, Point};
use crate::data::feature::FeatureCollection;
use crate::input::events::{HoverTracker, InteractionEvent};
use crate::layers::choropleth::ChoroplethPolygon;
use crate::layers::base::LayerTrait;
use crate::tiles::{decode::decode_image, TileCache, TileLoader};
use crate::ui::controls::{ControlAction, ControlContext, ControlManager};
use crate::ui::icon::BulbIcon;
use crate::ui::legend::legend_control;
use crate::ui::popup::show_popup;
use crate::ui::search::search_control;
use crate::view::MapView;
use egui::{
    Align2, Color32, FontId, Id, Mesh, Pos2, Rect, Response, Sense, Shape, Stroke, TextureHandle,
    TextureOptions, Ui, Vec2,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Id of the map's interactive area
pub const MAP_WIDGET_ID: &str = "map";

const BACKGROUND: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
/// Zoom levels per point of scroll
const SCROLL_ZOOM_RATE: f64 = 1.0 / 120.0;

/// Interactive choropleth map drawn with egui.
///
/// Owns the headless [`MapView`] plus the pieces that need a GPU context:
/// tile textures, the bulb icon and the overlay controls.
pub struct MapWidget {
    view: MapView,
    controls: ControlManager,
    hover: HoverTracker,
    /// Pointer position seen by the previous frame's hover test
    last_pointer: Option<Pos2>,
    tile_loader: Option<TileLoader>,
    tile_cache: TileCache<TextureHandle>,
    pending_tiles: usize,
    icon_path: PathBuf,
    icon: Option<BulbIcon>,
}

impl MapWidget {
    /// Without a runtime handle no base tiles are downloaded
    pub fn new(config: &MapConfig, runtime: Option<tokio::runtime::Handle>) -> Self {
        let controls = ControlManager::new()
            .with_control(Box::new(search_control()))
            .with_control(Box::new(legend_control()));

        Self {
            view: MapView::new(config, Point::new(800.0, 600.0)),
            controls,
            hover: HoverTracker::new(),
            last_pointer: None,
            tile_loader: runtime.map(TileLoader::new),
            tile_cache: TileCache::new(config.tiles.cache_size),
            pending_tiles: 0,
            icon_path: PathBuf::from(&config.data.icon),
            icon: None,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    pub fn controls(&self) -> &ControlManager {
        &self.controls
    }

    pub fn load(&mut self, collection: FeatureCollection) {
        self.hover = HoverTracker::new();
        self.last_pointer = None;
        self.view.load(collection);
    }

    pub fn set_load_error(&mut self, message: impl Into<String>) {
        self.view.set_load_error(message);
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let response = ui.interact(rect, Id::new(MAP_WIDGET_ID), Sense::click_and_drag());
        let ctx = ui.ctx().clone();

        self.view
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));
        if self.icon.is_none() {
            self.icon = Some(BulbIcon::load(&ctx, &self.icon_path));
        }

        let actions = self.controls.show(
            &ctx,
            rect,
            &ControlContext {
                index: self.view.index(),
            },
        );
        for action in actions {
            match action {
                ControlAction::Submit(query) => {
                    self.view.dispatch(InteractionEvent::Submit(query));
                }
            }
        }

        self.handle_input(ui, rect, &response);

        if self.view.tick(Instant::now()) {
            ctx.request_repaint();
        }

        self.update_tiles(&ctx);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.paint_tiles(&painter, rect);
        self.paint_countries(&painter, rect);
        self.paint_markers(&painter, rect);
        self.paint_attribution(&painter, rect);

        self.show_popup(&ctx, rect);
        self.show_load_error(&ctx, rect);

        response
    }

    fn handle_input(&mut self, ui: &Ui, rect: Rect, response: &Response) {
        let pointer = response.hover_pos();
        let captured = pointer.map_or(false, |pos| self.controls.captures(pos));
        let to_local = |pos: Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);

        if response.dragged() && !captured {
            let delta = response.drag_delta();
            if delta.length_sq() > 0.0 {
                self.view.pan(Point::new(delta.x as f64, delta.y as f64));
            }
        }

        if response.hovered() && !captured {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if let (true, Some(pos)) = (scroll.abs() > 0.1, pointer) {
                let zoom = self.view.viewport().zoom + scroll as f64 * SCROLL_ZOOM_RATE;
                self.view.zoom_around(zoom, to_local(pos));
            }
        }

        // Only pointer motion re-targets the hover. The map moving under a
        // resting pointer (fly-to after a click) must not steal the focus.
        let moved = pointer != self.last_pointer;
        self.last_pointer = pointer;
        if pointer.is_none() || (moved && !self.view.is_animating()) {
            let target = match pointer {
                Some(pos) if !captured && !response.dragged() => {
                    self.view.feature_at(&to_local(pos))
                }
                _ => None,
            };
            for event in self.hover.update(target) {
                self.view.dispatch(event);
            }
        }

        if response.clicked() && !captured {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = to_local(pos);
                match self.view.feature_at(&local) {
                    Some(feature) => {
                        let at = self.view.viewport().pixel_to_lat_lng(&local);
                        self.view.dispatch(InteractionEvent::Click { feature, at });
                    }
                    None => self.view.close_popup(),
                }
            }
        }
    }

    fn update_tiles(&mut self, ctx: &egui::Context) {
        let Some(loader) = &self.tile_loader else {
            return;
        };

        let viewport = self.view.viewport().clone();
        for (coord, url) in self.view.tiles_mut().take_new_requests(&viewport) {
            loader.request(coord, url);
            self.pending_tiles += 1;
        }

        for result in loader.drain() {
            self.pending_tiles = self.pending_tiles.saturating_sub(1);
            let coord = result.coord;
            match result.data.and_then(|bytes| decode_image(&bytes)) {
                Ok(image) => {
                    let name = format!("tile-{}-{}-{}", coord.z, coord.x, coord.y);
                    let texture = ctx.load_texture(name, image, TextureOptions::LINEAR);
                    if let Some(evicted) = self.tile_cache.insert(coord, texture) {
                        self.view.tiles_mut().forget(&evicted);
                    }
                }
                Err(err) => {
                    log::warn!("tile {:?} unavailable: {}", coord, err);
                    self.view.tiles_mut().mark_failed(coord);
                }
            }
        }

        if self.pending_tiles > 0 {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    fn paint_tiles(&mut self, painter: &egui::Painter, rect: Rect) {
        let viewport = self.view.viewport();
        let tiles = self.view.tiles();
        if !tiles.is_visible() {
            return;
        }
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));

        for coord in tiles.visible_tiles(viewport) {
            let Some(texture) = self.tile_cache.get(&coord) else {
                continue;
            };
            let (min, max) = tiles.tile_screen_rect(coord, viewport);
            let tile_rect = Rect::from_min_max(to_screen(rect, &min), to_screen(rect, &max));
            painter.image(texture.id(), tile_rect, uv, Color32::WHITE);
        }
    }

    fn paint_countries(&self, painter: &egui::Painter, rect: Rect) {
        let viewport = self.view.viewport();
        let visible = viewport.bounds();
        let project = |p: &LatLng| {
            let pixel = viewport.lat_lng_to_pixel(p);
            to_screen(rect, &pixel)
        };

        let countries = self.view.countries();
        if !countries.is_visible() {
            return;
        }
        let on_screen: Vec<&ChoroplethPolygon> = countries
            .polygons()
            .iter()
            .filter(|polygon| polygon.bounds.intersects(&visible))
            .collect();

        for polygon in &on_screen {
            paint_fill(painter, polygon, &project);
        }
        for polygon in &on_screen {
            paint_outline(painter, polygon, &project);
        }
        // The focused outline goes on top of its neighbours
        if let Some(focused) = self.view.focus().focused() {
            if let Some(polygon) = countries.polygon(focused) {
                paint_outline(painter, polygon, &project);
            }
        }
    }

    fn paint_markers(&self, painter: &egui::Painter, rect: Rect) {
        let Some(icon) = &self.icon else {
            return;
        };
        let markers = self.view.markers();
        if !markers.is_visible() {
            return;
        }

        let viewport = self.view.viewport();
        for marker in markers.markers() {
            let position = to_screen(rect, &viewport.lat_lng_to_pixel(&marker.position));
            let anchor = marker.icon_anchor();
            let size = marker.icon_size();
            let min = position - Vec2::new(anchor.x as f32, anchor.y as f32);
            let icon_rect = Rect::from_min_size(min, Vec2::new(size.x as f32, size.y as f32));
            if rect.intersects(icon_rect) {
                icon.paint(painter, icon_rect);
            }
        }
    }

    fn paint_attribution(&self, painter: &egui::Painter, rect: Rect) {
        let text = self.view.tiles().attribution();
        if text.is_empty() {
            return;
        }
        let font = FontId::proportional(11.0);
        let galley = painter.layout_no_wrap(text.to_string(), font, Color32::from_gray(60));
        let padding = Vec2::new(4.0, 2.0);
        let bg = Rect::from_min_size(
            rect.right_bottom() - galley.size() - padding * 2.0,
            galley.size() + padding * 2.0,
        );
        painter.rect_filled(bg, 0.0, Color32::from_white_alpha(200));
        painter.galley(bg.min + padding, galley, Color32::from_gray(60));
    }

    fn show_popup(&mut self, ctx: &egui::Context, rect: Rect) {
        let (Some(popup), Some(icon)) = (self.view.popup(), &self.icon) else {
            return;
        };
        if show_popup(ctx, rect, self.view.viewport(), popup, icon) {
            self.view.close_popup();
        }
    }

    fn show_load_error(&mut self, ctx: &egui::Context, rect: Rect) {
        let Some(message) = self.view.load_error().map(str::to_string) else {
            return;
        };
        let mut dismissed = false;
        egui::Area::new(Id::new("map_load_error"))
            .order(egui::Order::Foreground)
            .fixed_pos(rect.center_top() + Vec2::new(0.0, 10.0))
            .pivot(Align2::CENTER_TOP)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(Color32::from_rgb(0xfd, 0xec, 0xea))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(
                                Color32::from_rgb(0x9b, 0x1c, 0x1c),
                                format!("Could not load map data: {}", message),
                            );
                            if ui.button("Dismiss").clicked() {
                                dismissed = true;
                            }
                        });
                    });
            });
        if dismissed {
            self.view.dismiss_load_error();
        }
    }
}

fn to_screen(rect: Rect, pixel: &Point) -> Pos2 {
    rect.min + Vec2::new(pixel.x as f32, pixel.y as f32)
}

fn paint_fill(painter: &egui::Painter, polygon: &ChoroplethPolygon, project: &impl Fn(&LatLng) -> Pos2) {
    let color = Color32::from(polygon.style.fill());
    let mut mesh = Mesh::default();
    for triangle in &polygon.triangles {
        let base = mesh.vertices.len() as u32;
        for corner in triangle {
            mesh.colored_vertex(project(corner), color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    painter.add(Shape::mesh(mesh));
}

fn paint_outline(
    painter: &egui::Painter,
    polygon: &ChoroplethPolygon,
    project: &impl Fn(&LatLng) -> Pos2,
) {
    let stroke = Stroke::new(polygon.style.stroke_width, Color32::from(polygon.style.stroke()));
    for ring in &polygon.rings {
        let points: Vec<Pos2> = ring.iter().map(project).collect();
        painter.add(Shape::closed_line(points, stroke));
    }
}
