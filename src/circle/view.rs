//! Terminal rendering for the circle timer.
//!
//! The face is drawn as a centered column: top label, top value, a
//! separator line, bottom value, bottom label, and a row of segments
//! standing in for the arc.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

use super::model::Model;

const SEPARATOR: char = '─';
const SEGMENT_FULL: char = '●';
const SEGMENT_EMPTY: char = '○';

/// Styles for each element of the face.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Both unit labels.
    pub label: Style,
    /// Value of the top unit.
    pub value_top: Style,
    /// Value of the bottom unit.
    pub value_bottom: Style,
    /// Line between the two values.
    pub separator: Style,
    /// Gauge segments covered by the arc.
    pub arc: Style,
    /// Gauge segments not covered by the arc.
    pub back: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            label: Style::new().foreground(lipgloss::Color::from("#808080")),
            value_top: Style::new()
                .foreground(lipgloss::Color::from("#808080"))
                .bold(true),
            value_bottom: Style::new()
                .foreground(lipgloss::Color::from("#CCCCCC"))
                .bold(true),
            separator: Style::new().foreground(lipgloss::Color::from("#B0BEC5")),
            arc: Style::new().foreground(lipgloss::Color::from("#263238")),
            back: Style::new().foreground(lipgloss::Color::from("#B0BEC5")),
        }
    }
}

impl Model {
    /// Renders the face.
    pub fn view(&self) -> String {
        let pair = self.display();
        let width = [
            self.gauge_width,
            pair.top_label.width(),
            pair.top_value.width(),
            pair.bottom_label.width(),
            pair.bottom_value.width(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let separator = SEPARATOR.to_string().repeat(width);
        let lines = [
            centered(&pair.top_label, width, &self.styles.label),
            centered(&pair.top_value, width, &self.styles.value_top),
            self.styles.separator.render(&separator),
            centered(&pair.bottom_value, width, &self.styles.value_bottom),
            centered(&pair.bottom_label, width, &self.styles.label),
            centered_raw(&self.gauge_view(), self.gauge_width, width),
        ];

        lines.join("\n")
    }

    /// Renders only the arc gauge, one segment per `1 / gauge_width` of a
    /// revolution. Counter-clockwise arcs fill from the right.
    pub fn gauge_view(&self) -> String {
        let segments = self.gauge_width;
        let filled = ((self.angle.fraction() * segments as f64).round() as usize).min(segments);

        let full = self
            .styles
            .arc
            .render(&SEGMENT_FULL.to_string().repeat(filled));
        let empty = self
            .styles
            .back
            .render(&SEGMENT_EMPTY.to_string().repeat(segments - filled));

        if self.angle.clockwise {
            format!("{}{}", full, empty)
        } else {
            format!("{}{}", empty, full)
        }
    }
}

fn centered(text: &str, width: usize, style: &Style) -> String {
    centered_raw(&style.render(text), text.width(), width)
}

// `visible` is the width of `rendered` without escape sequences.
fn centered_raw(rendered: &str, visible: usize, width: usize) -> String {
    let pad = width.saturating_sub(visible) / 2;
    format!("{}{}", " ".repeat(pad), rendered)
}
