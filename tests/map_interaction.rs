use wafmap::choropleth::{default_style, focused_style, unfocused_style, LEGEND_TITLE};
use wafmap::input::{HoverTracker, InteractionEvent};
use wafmap::{
    color_for, legend_entries, FeatureCollection, FocusState, LatLng, MapConfig, MapView, Point,
};

/// Two neighbouring countries plus one without a value
const DATASET: &str = r#"
{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"ADM0_NAME": "Benin", "Value": 75, "cen_x": 2.3, "cen_y": 9.5},
            "geometry": {"type": "Polygon", "coordinates": [[[0.8, 6.2], [3.8, 6.2], [3.8, 12.4], [0.8, 12.4], [0.8, 6.2]]]}
        },
        {
            "type": "Feature",
            "properties": {"ADM0_NAME": "Togo", "Value": 30, "cen_x": 0.1, "cen_y": 8.5},
            "geometry": {"type": "Polygon", "coordinates": [[[-0.2, 6.1], [0.8, 6.1], [0.8, 11.1], [-0.2, 11.1], [-0.2, 6.1]]]}
        },
        {
            "type": "Feature",
            "properties": {"ADM0_NAME": "Liberia", "Value": null},
            "geometry": {"type": "Polygon", "coordinates": [[[-11.5, 4.4], [-7.4, 4.4], [-7.4, 8.6], [-11.5, 8.6], [-11.5, 4.4]]]}
        }
    ]
}
"#;

const BENIN: usize = 0;
const TOGO: usize = 1;
const LIBERIA: usize = 2;

fn loaded_view() -> MapView {
    let mut view = MapView::new(&MapConfig::default(), Point::new(1024.0, 768.0));
    view.load(FeatureCollection::from_str(DATASET).unwrap());
    view
}

fn assert_all_default(view: &MapView) {
    for feature in view.features().features() {
        assert_eq!(
            view.countries().style_of(feature.id),
            Some(default_style(feature)),
            "{} should be back to its default style",
            feature.name
        );
    }
}

#[test]
fn test_load_builds_every_layer() {
    let view = loaded_view();

    assert_eq!(view.countries().len(), 3);
    // Liberia has no centroid and gets no bulb
    assert_eq!(view.markers().len(), 2);
    assert_eq!(view.index().names(), &["Benin", "Togo", "Liberia"]);
    assert_all_default(&view);

    let benin = view.feature(BENIN).unwrap();
    assert_eq!(default_style(benin).fill_color, color_for(Some(75.0)));
}

#[test]
fn test_bulb_sits_on_centroid() {
    let view = loaded_view();
    let bulb = view.markers().marker_for(TOGO).unwrap();

    assert_eq!(bulb.position, LatLng::new(8.5, 0.1));
    assert!(view.markers().marker_for(BENIN).unwrap().size > bulb.size);
    assert!(view.markers().marker_for(LIBERIA).is_none());
}

#[test]
fn test_search_is_case_insensitive() {
    let mut view = loaded_view();

    for query in ["benin", "BENIN", "  Benin  "] {
        assert!(view.on_submit(query).is_handled());
        assert_eq!(view.focus().focused(), Some(BENIN));
    }

    assert!(view.on_submit("tog").is_handled());
    assert_eq!(view.focus().focused(), Some(TOGO));
}

#[test]
fn test_search_miss_changes_nothing() {
    let mut view = loaded_view();

    assert!(!view.on_submit("xyz").is_handled());
    assert_eq!(view.focus(), FocusState::Neutral);
    assert!(view.popup().is_none());
    assert!(!view.is_animating());
}

#[test]
fn test_search_miss_keeps_current_selection() {
    let mut view = loaded_view();
    view.on_submit("benin");
    let popup = view.popup().cloned();
    let target = view.animation_target();

    assert!(!view.on_submit("xyz").is_handled());
    assert_eq!(view.focus(), FocusState::Focused { feature: BENIN, sticky: true });
    assert_eq!(view.popup().cloned(), popup);
    assert_eq!(view.animation_target(), target);
}

#[test]
fn test_search_opens_popup_at_country_center() {
    let mut view = loaded_view();
    view.on_submit("benin");

    let popup = view.popup().unwrap();
    let benin = view.feature(BENIN).unwrap();
    assert_eq!(popup.position, benin.bounds.center());
    assert_eq!(popup.content.title, "Benin");
    assert_eq!(popup.content.body, "Electricity access: 75%");
    assert!(view.is_animating());
}

#[test]
fn test_hover_moves_highlight_between_neighbours() {
    let mut view = loaded_view();
    let mut hover = HoverTracker::new();

    for event in hover.update(Some(BENIN)) {
        view.dispatch(event);
    }
    let benin = view.feature(BENIN).unwrap().clone();
    assert_eq!(view.countries().style_of(BENIN), Some(focused_style(&benin)));
    assert_eq!(view.countries().style_of(TOGO), Some(unfocused_style()));

    let events = hover.update(Some(TOGO));
    assert_eq!(
        events,
        vec![InteractionEvent::PointerLeave(BENIN), InteractionEvent::PointerEnter(TOGO)]
    );
    for event in events {
        view.dispatch(event);
    }

    let togo = view.feature(TOGO).unwrap().clone();
    assert_eq!(view.countries().style_of(TOGO), Some(focused_style(&togo)));
    assert_eq!(view.countries().style_of(BENIN), Some(unfocused_style()));
    assert_eq!(view.focus(), FocusState::Focused { feature: TOGO, sticky: false });

    // Hover alone neither opens a popup nor moves the map
    assert!(view.popup().is_none());
    assert!(!view.is_animating());
}

#[test]
fn test_leaving_a_hovered_country_resets_styles() {
    let mut view = loaded_view();

    view.on_pointer_enter(TOGO);
    view.on_pointer_leave(TOGO);

    assert_eq!(view.focus(), FocusState::Neutral);
    assert_all_default(&view);
}

#[test]
fn test_clicked_country_stays_focused_after_leave() {
    let mut view = loaded_view();
    let at = LatLng::new(9.0, 2.0);

    view.on_pointer_enter(BENIN);
    view.dispatch(InteractionEvent::Click { feature: BENIN, at });
    view.on_pointer_leave(BENIN);

    assert_eq!(view.focus(), FocusState::Focused { feature: BENIN, sticky: true });
    let benin = view.feature(BENIN).unwrap().clone();
    assert_eq!(view.countries().style_of(BENIN), Some(focused_style(&benin)));
    assert_eq!(view.popup().unwrap().position, at);

    // Hovering another country takes over, and leaving it clears the map
    view.on_pointer_enter(TOGO);
    view.on_pointer_leave(TOGO);
    assert_eq!(view.focus(), FocusState::Neutral);
    assert_all_default(&view);
}

#[test]
fn test_country_without_value() {
    let mut view = loaded_view();
    view.on_submit("liberia");

    let popup = view.popup().unwrap();
    assert_eq!(popup.content.body, "Electricity access: n/a");

    let liberia = view.feature(LIBERIA).unwrap();
    assert_eq!(default_style(liberia).fill_color, color_for(None));
}

#[test]
fn test_hit_testing_through_the_viewport() {
    let view = loaded_view();
    let over_togo = view.viewport().lat_lng_to_pixel(&LatLng::new(8.0, 0.3));
    let over_sea = view.viewport().lat_lng_to_pixel(&LatLng::new(2.0, 0.0));

    assert_eq!(view.feature_at(&over_togo), Some(TOGO));
    assert_eq!(view.feature_at(&over_sea), None);
}

#[test]
fn test_legend_agrees_with_fill_colours() {
    assert_eq!(LEGEND_TITLE, "Electricity Access (%)");
    for (entry, value) in legend_entries().iter().zip([10.0, 30.0, 50.0, 70.0, 90.0]) {
        assert_eq!(entry.color, color_for(Some(value)), "legend row {}", entry.label);
    }
}
