use crate::data::index::CountryIndex;
use egui::{Align2, Context, Id, Order, Pos2, Rect, Ui, Vec2};

/// Map corner an overlay control is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// Corner of `container` inset by `margin`, plus the pivot that keeps
    /// the control inside the container
    pub fn anchor(&self, container: Rect, margin: f32) -> (Pos2, Align2) {
        match self {
            Position::TopLeft => (container.left_top() + Vec2::new(margin, margin), Align2::LEFT_TOP),
            Position::TopRight => (
                container.right_top() + Vec2::new(-margin, margin),
                Align2::RIGHT_TOP,
            ),
            Position::BottomLeft => (
                container.left_bottom() + Vec2::new(margin, -margin),
                Align2::LEFT_BOTTOM,
            ),
            Position::BottomRight => (
                container.right_bottom() - Vec2::new(margin, margin),
                Align2::RIGHT_BOTTOM,
            ),
        }
    }
}

/// What a control asks the map to do
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    Submit(String),
}

/// Read-only map state handed to controls while they draw
pub struct ControlContext<'a> {
    pub index: &'a CountryIndex,
}

/// An overlay drawn on top of the map in its own layer
pub trait Control {
    fn id(&self) -> &str;

    fn position(&self) -> Position;

    /// Called when the control is added to a manager
    fn on_add(&mut self) {}

    /// Draws the control body inside its frame
    fn show(&mut self, ui: &mut Ui, context: &ControlContext<'_>) -> Option<ControlAction>;
}

/// Places overlay controls by corner and keeps map input out of them
pub struct ControlManager {
    controls: Vec<Box<dyn Control>>,
    /// Screen rectangles from the last frame, one per control
    rects: Vec<Rect>,
    margin: f32,
}

impl ControlManager {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            rects: Vec::new(),
            margin: 10.0,
        }
    }

    pub fn add_control(&mut self, mut control: Box<dyn Control>) {
        control.on_add();
        self.controls.push(control);
    }

    pub fn with_control(mut self, control: Box<dyn Control>) -> Self {
        self.add_control(control);
        self
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Whether `pos` lies on a control drawn last frame
    pub fn captures(&self, pos: Pos2) -> bool {
        self.rects.iter().any(|rect| rect.contains(pos))
    }

    /// Draws every control over `map_rect` and collects their requests
    pub fn show(
        &mut self,
        ctx: &Context,
        map_rect: Rect,
        context: &ControlContext<'_>,
    ) -> Vec<ControlAction> {
        let mut actions = Vec::new();
        self.rects.clear();

        for control in &mut self.controls {
            let (pos, pivot) = control.position().anchor(map_rect, self.margin);
            let area = egui::Area::new(Id::new("map_control").with(control.id()))
                .order(Order::Foreground)
                .fixed_pos(pos)
                .pivot(pivot)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .show(ui, |ui| control.show(ui, context))
                        .inner
                });

            self.rects.push(area.response.rect);
            actions.extend(area.inner);
        }
        actions
    }
}

impl Default for ControlManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        added: bool,
    }

    impl Control for Probe {
        fn id(&self) -> &str {
            "probe"
        }

        fn position(&self) -> Position {
            Position::BottomRight
        }

        fn on_add(&mut self) {
            self.added = true;
        }

        fn show(&mut self, ui: &mut Ui, _context: &ControlContext<'_>) -> Option<ControlAction> {
            assert!(self.added);
            ui.label("probe");
            Some(ControlAction::Submit("probe".to_string()))
        }
    }

    #[test]
    fn test_anchor_corners() {
        let container = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 600.0));

        assert_eq!(
            Position::TopLeft.anchor(container, 10.0),
            (Pos2::new(10.0, 10.0), Align2::LEFT_TOP)
        );
        assert_eq!(
            Position::BottomLeft.anchor(container, 10.0),
            (Pos2::new(10.0, 590.0), Align2::LEFT_BOTTOM)
        );
        assert_eq!(
            Position::BottomRight.anchor(container, 10.0),
            (Pos2::new(790.0, 590.0), Align2::RIGHT_BOTTOM)
        );
    }

    #[test]
    fn test_controls_record_rects() {
        let ctx = Context::default();
        let index = CountryIndex::new();
        let mut manager = ControlManager::new().with_control(Box::new(Probe { added: false }));
        let map_rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 600.0));

        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = manager.show(ctx, map_rect, &ControlContext { index: &index });
        });

        assert_eq!(actions, vec![ControlAction::Submit("probe".to_string())]);
        assert_eq!(manager.rects().len(), 1);
        let rect = manager.rects()[0];
        assert!(manager.captures(rect.center()));
        assert!(!manager.captures(Pos2::new(5.0, 5.0)));
    }
}
