//! egui rendering of the map: widget, overlay controls, popups and panels

pub mod controls;
pub mod description;
pub mod icon;
pub mod legend;
pub mod popup;
pub mod search;
pub mod widget;

pub use controls::{Control, ControlAction, ControlContext, ControlManager, Position};
pub use description::{DescriptionPanel, DESCRIPTION_PANEL_ID};
pub use icon::BulbIcon;
pub use legend::{legend_control, LegendControl};
pub use search::{search_control, SearchControl};
pub use widget::{MapWidget, MAP_WIDGET_ID};
