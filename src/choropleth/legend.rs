use crate::choropleth::scale::color_for;
use crate::choropleth::style::Color;

pub const LEGEND_TITLE: &str = "Electricity Access (%)";

/// Lower edges of the legend ranges
pub const BREAKPOINTS: [f64; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// One entry per breakpoint, lowest first. Each swatch samples the colour
/// scale just above its lower edge.
pub fn legend_entries() -> Vec<LegendEntry> {
    BREAKPOINTS
        .iter()
        .enumerate()
        .map(|(i, from)| {
            let label = match BREAKPOINTS.get(i + 1) {
                Some(to) => format!("{}–{}", from, to),
                None => format!("{}+", from),
            };
            LegendEntry {
                color: color_for(Some(from + 1.0)),
                label,
            }
        })
        .collect()
}
