//! Headless map state: everything the widget draws and every handler it calls

use crate::choropleth::popup::{Popup, PopupManager};
use crate::core::animation::ViewAnimation;
use crate::core::config::{MapConfig, ViewConfig};
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::core::viewport::Viewport;
use crate::data::feature::{CountryFeature, FeatureCollection, FeatureId};
use crate::data::index::CountryIndex;
use crate::input::events::{EventHandled, InteractionEvent};
use crate::input::focus::{FocusChange, FocusState};
use crate::layers::base::LayerTrait;
use crate::layers::choropleth::ChoroplethLayer;
use crate::layers::marker::MarkerLayer;
use crate::layers::tile::{TileLayer, TileLayerOptions};
use std::time::{Duration, Instant};

pub struct MapView {
    viewport: Viewport,
    view_config: ViewConfig,
    tiles: TileLayer,
    features: FeatureCollection,
    countries: ChoroplethLayer,
    markers: MarkerLayer,
    index: CountryIndex,
    focus: FocusState,
    popups: PopupManager,
    animation: Option<ViewAnimation>,
    load_error: Option<String>,
}

impl MapView {
    pub fn new(config: &MapConfig, size: Point) -> Self {
        let view = &config.view;
        let mut viewport = Viewport::new(view.center(), view.zoom, size);
        viewport.set_zoom_limits(view.min_zoom, view.max_zoom);
        viewport.set_zoom(view.zoom);

        Self {
            viewport,
            view_config: view.clone(),
            tiles: TileLayer::with_options("base", TileLayerOptions::from(&config.tiles)),
            features: FeatureCollection::default(),
            countries: ChoroplethLayer::new("countries"),
            markers: MarkerLayer::new("bulbs"),
            index: CountryIndex::new(),
            focus: FocusState::Neutral,
            popups: PopupManager::new(),
            animation: None,
            load_error: None,
        }
    }

    /// Installs the dataset: polygons, markers and the name index are built
    /// together before any handler can observe them.
    pub fn load(&mut self, collection: FeatureCollection) {
        let countries = ChoroplethLayer::from_collection("countries", &collection);
        let markers = MarkerLayer::from_collection("bulbs", &collection);
        let index = CountryIndex::build(collection.features());

        log::info!(
            "map ready: {} polygons in {:?}, {} markers in {:?}, {} searchable names",
            countries.len(),
            countries.id(),
            markers.len(),
            markers.id(),
            index.len()
        );

        self.countries = countries;
        self.markers = markers;
        self.index = index;
        self.features = collection;
        self.focus = FocusState::Neutral;
        self.popups.close();
        self.load_error = None;
    }

    /// Records a failed dataset load; the map keeps showing the base layer
    pub fn set_load_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("failed to load map data: {}", message);
        self.load_error = Some(message);
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn dismiss_load_error(&mut self) {
        self.load_error = None;
    }

    pub fn dispatch(&mut self, event: InteractionEvent) -> EventHandled {
        match event {
            InteractionEvent::PointerEnter(feature) => self.on_pointer_enter(feature),
            InteractionEvent::PointerLeave(feature) => self.on_pointer_leave(feature),
            InteractionEvent::Click { feature, at } => self.on_click(feature, at),
            InteractionEvent::Submit(query) => self.on_submit(&query),
        }
    }

    pub fn on_pointer_enter(&mut self, feature: FeatureId) -> EventHandled {
        if self.features.get(feature).is_none() {
            return EventHandled::NotHandled;
        }
        let change = self.focus.pointer_enter(feature);
        self.apply(change)
    }

    pub fn on_pointer_leave(&mut self, feature: FeatureId) -> EventHandled {
        let change = self.focus.pointer_leave(feature);
        self.apply(change)
    }

    /// Selects the clicked country and opens its popup where it was clicked
    pub fn on_click(&mut self, feature: FeatureId, at: LatLng) -> EventHandled {
        self.select(feature, Some(at))
    }

    /// Resolves search text to a country and selects it; misses are ignored
    pub fn on_submit(&mut self, query: &str) -> EventHandled {
        match self.index.resolve(query) {
            Some(feature) => self.select(feature, None),
            None => {
                log::debug!("no country matches {:?}", query.trim());
                EventHandled::NotHandled
            }
        }
    }

    fn select(&mut self, feature: FeatureId, popup_at: Option<LatLng>) -> EventHandled {
        let Some(country) = self.features.get(feature) else {
            return EventHandled::NotHandled;
        };
        let bounds = country.bounds;
        let anchor = popup_at.unwrap_or_else(|| bounds.center());

        self.popups.open_for(country, anchor);
        let change = self.focus.select(feature);
        self.apply(change);
        self.fly_to_bounds(&bounds);
        EventHandled::Handled
    }

    fn apply(&mut self, change: FocusChange) -> EventHandled {
        match change {
            FocusChange::Highlight(feature) => {
                if let Some(country) = self.features.get(feature) {
                    self.countries.highlight(country);
                }
                EventHandled::Handled
            }
            FocusChange::Reset => {
                self.countries.reset_all();
                EventHandled::Handled
            }
            FocusChange::Unchanged => EventHandled::NotHandled,
        }
    }

    /// Starts an eased move to the best view of `bounds`
    pub fn fly_to_bounds(&mut self, bounds: &LatLngBounds) {
        let (center, zoom) = self
            .viewport
            .fit_bounds_target(bounds, self.view_config.fit_padding);
        self.animation = Some(ViewAnimation::new(
            self.viewport.center,
            center,
            self.viewport.zoom,
            zoom,
            Duration::from_millis(self.view_config.animation_ms),
        ));
    }

    /// Advances any running view animation; returns true while one is running
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };
        let frame = animation.sample(now);
        self.viewport.set_zoom(frame.zoom);
        self.viewport.set_center(frame.center);
        if frame.finished {
            self.animation = None;
        }
        !frame.finished
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the running animation will end
    pub fn animation_target(&self) -> Option<(LatLng, f64)> {
        self.animation.as_ref().map(ViewAnimation::target)
    }

    pub fn pan(&mut self, delta: Point) {
        self.animation = None;
        self.viewport.pan(delta);
    }

    pub fn zoom_around(&mut self, zoom: f64, focus: Point) {
        self.animation = None;
        self.viewport.zoom_around(zoom, focus);
    }

    pub fn set_size(&mut self, size: Point) {
        self.viewport.set_size(size);
    }

    /// The country polygon under a container pixel, if any
    pub fn feature_at(&self, pixel: &Point) -> Option<FeatureId> {
        let lat_lng = self.viewport.pixel_to_lat_lng(pixel);
        self.countries.hit_test(&lat_lng)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut TileLayer {
        &mut self.tiles
    }

    pub fn features(&self) -> &FeatureCollection {
        &self.features
    }

    pub fn feature(&self, id: FeatureId) -> Option<&CountryFeature> {
        self.features.get(id)
    }

    pub fn countries(&self) -> &ChoroplethLayer {
        &self.countries
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn index(&self) -> &CountryIndex {
        &self.index
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popups.current()
    }

    pub fn close_popup(&mut self) {
        self.popups.close();
    }
}
