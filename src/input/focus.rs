use crate::data::feature::FeatureId;

/// Which country, if any, is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Neutral,
    /// `sticky` focus came from a click or search and survives pointer-leave
    Focused { feature: FeatureId, sticky: bool },
}

/// What the caller has to do to the polygon styles after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    /// Dim everything, then emphasize this feature
    Highlight(FeatureId),
    /// Restore every default style
    Reset,
    Unchanged,
}

impl FocusState {
    pub fn focused(&self) -> Option<FeatureId> {
        match self {
            FocusState::Neutral => None,
            FocusState::Focused { feature, .. } => Some(*feature),
        }
    }

    pub fn is_sticky(&self) -> bool {
        matches!(self, FocusState::Focused { sticky: true, .. })
    }

    /// Pointer entered a polygon; a sticky focus on it stays sticky
    pub fn pointer_enter(&mut self, feature: FeatureId) -> FocusChange {
        let sticky = matches!(
            *self,
            FocusState::Focused { feature: current, sticky: true } if current == feature
        );
        *self = FocusState::Focused { feature, sticky };
        FocusChange::Highlight(feature)
    }

    /// Pointer left a polygon
    pub fn pointer_leave(&mut self, _feature: FeatureId) -> FocusChange {
        match *self {
            FocusState::Focused { sticky: false, .. } => {
                *self = FocusState::Neutral;
                FocusChange::Reset
            }
            _ => FocusChange::Unchanged,
        }
    }

    /// Click or search match
    pub fn select(&mut self, feature: FeatureId) -> FocusChange {
        *self = FocusState::Focused {
            feature,
            sticky: true,
        };
        FocusChange::Highlight(feature)
    }
}
