use crate::ui::controls::{Control, ControlAction, ControlContext, Position};
use egui::{Key, TextEdit, Ui};

const SUGGESTION_LIMIT: usize = 8;

/// Country search box with autocomplete, pinned top-left
pub struct SearchControl {
    query: String,
    suggestions_open: bool,
    width: f32,
}

/// Builds the search control
pub fn search_control() -> SearchControl {
    SearchControl {
        query: String::new(),
        suggestions_open: false,
        width: 200.0,
    }
}

impl SearchControl {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.suggestions_open = !self.query.trim().is_empty();
    }

    /// Submits the current text; blank input submits nothing
    pub fn submit(&mut self) -> Option<ControlAction> {
        self.suggestions_open = false;
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        Some(ControlAction::Submit(query.to_string()))
    }

    /// Fills the box with a picked suggestion and submits it
    pub fn pick(&mut self, name: &str) -> Option<ControlAction> {
        self.query = name.to_string();
        self.submit()
    }

    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }
}

impl Control for SearchControl {
    fn id(&self) -> &str {
        "search"
    }

    fn position(&self) -> Position {
        Position::TopLeft
    }

    fn show(&mut self, ui: &mut Ui, context: &ControlContext<'_>) -> Option<ControlAction> {
        let response = ui.add(
            TextEdit::singleline(&mut self.query)
                .hint_text("Search country…")
                .desired_width(self.width),
        );

        if response.changed() {
            self.suggestions_open = !self.query.trim().is_empty();
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            return self.submit();
        }
        if ui.input(|i| i.key_pressed(Key::Escape)) {
            self.suggestions_open = false;
        }

        if !self.suggestions_open {
            return None;
        }

        let mut picked = None;
        for name in context.index.suggestions(&self.query, SUGGESTION_LIMIT) {
            let button = egui::Button::new(name)
                .frame(false)
                .min_size(egui::vec2(self.width, 0.0));
            if ui.add(button).clicked() {
                picked = Some(name.to_string());
            }
        }
        picked.and_then(|name| self.pick(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut search = search_control();
        search.set_query("   ");
        assert_eq!(search.submit(), None);
    }

    #[test]
    fn test_submit_trims_query() {
        let mut search = search_control();
        search.set_query("  benin ");
        assert!(search.suggestions_open());
        assert_eq!(search.submit(), Some(ControlAction::Submit("benin".to_string())));
        assert!(!search.suggestions_open());
    }

    #[test]
    fn test_pick_fills_the_box() {
        let mut search = search_control();
        search.set_query("gu");
        assert_eq!(
            search.pick("Guinea-Bissau"),
            Some(ControlAction::Submit("Guinea-Bissau".to_string()))
        );
        assert_eq!(search.query(), "Guinea-Bissau");
    }
}
