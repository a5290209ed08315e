use crate::core::geo::LatLng;
use crate::data::feature::FeatureId;

/// Interactions the map view reacts to, already resolved to features
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// Pointer moved onto a country polygon
    PointerEnter(FeatureId),
    /// Pointer moved off a country polygon
    PointerLeave(FeatureId),
    /// Country polygon clicked at a geographic position
    Click { feature: FeatureId, at: LatLng },
    /// Search text submitted (Enter or a picked suggestion)
    Submit(String),
}

/// Whether an event changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(self) -> bool {
        self == EventHandled::Handled
    }
}

/// Translates successive hover targets into enter/leave events.
///
/// Moving straight from one polygon to another yields a leave for the
/// old one followed by an enter for the new one.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    current: Option<FeatureId>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<FeatureId> {
        self.current
    }

    pub fn update(&mut self, target: Option<FeatureId>) -> Vec<InteractionEvent> {
        if target == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.current {
            events.push(InteractionEvent::PointerLeave(old));
        }
        if let Some(new) = target {
            events.push(InteractionEvent::PointerEnter(new));
        }
        self.current = target;
        events
    }
}
