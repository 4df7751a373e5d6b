//! ASCII grid rendering for the incubator.

mod style;

pub use style::*;

use chrono::NaiveDate;
use incubator_core::{slot_views, Clock, Incubator, IncubatorState, Result, SlotView};

const EGG: char = '●';
const EMPTY: char = '○';

/// Visible width of every cell, excluding borders.
pub const CELL_WIDTH: usize = 22;
const COLUMNS: usize = 4;

/// Text of a single cell, padded to [`CELL_WIDTH`].
pub fn cell_text(view: &SlotView) -> String {
    let text = match (view.age_days, view.hatch_date) {
        (Some(age), Some(hatch)) => format!(
            " {:>2} {} {:02}d (H: {})",
            view.slot.number(),
            EGG,
            age,
            hatch.format("%m-%d")
        ),
        _ => format!(" {:>2} {} EMPTY", view.slot.number(), EMPTY),
    };
    format!("{:<width$}", text, width = CELL_WIDTH)
}

/// Render the eight slots as a bordered 4x2 grid.
///
/// Example output (plain style):
/// ```text
/// +----------------------+----------------------+----------------------+----------------------+
/// |  1 ● 05d (H: 03-22)  |  2 ○ EMPTY           |  3 ○ EMPTY           |  4 ● 20d (H: 03-07)  |
/// +----------------------+----------------------+----------------------+----------------------+
/// |  5 ○ EMPTY           |  6 ○ EMPTY           |  7 ○ EMPTY           |  8 ○ EMPTY           |
/// +----------------------+----------------------+----------------------+----------------------+
/// ```
pub fn render_grid(state: &IncubatorState, today: NaiveDate, style: &dyn Style) -> String {
    let cells: Vec<String> = slot_views(state, today)
        .iter()
        .map(|view| style.paint(&cell_text(view), view.stage))
        .collect();

    let horiz = format!("+{}+", vec!["-".repeat(CELL_WIDTH); COLUMNS].join("+"));

    let mut output = String::new();
    output.push_str(&horiz);
    output.push('\n');
    for row in cells.chunks(COLUMNS) {
        output.push('|');
        output.push_str(&row.join("|"));
        output.push_str("|\n");
        output.push_str(&horiz);
        output.push('\n');
    }
    output
}

/// Load the current state and render it. Never writes.
pub fn render<C: Clock>(incubator: &Incubator<C>, style: &dyn Style) -> Result<String> {
    let state = incubator.state()?;
    Ok(render_grid(&state, incubator.today(), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use incubator_core::SlotIndex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(n: usize) -> SlotIndex {
        SlotIndex::from_number(n).unwrap()
    }

    #[test]
    fn test_empty_cell() {
        let view = SlotView::new(slot(2), None, date(2024, 3, 5));
        assert_eq!(cell_text(&view), "  2 ○ EMPTY           ");
    }

    #[test]
    fn test_occupied_cell() {
        let view = SlotView::new(slot(1), Some(date(2024, 3, 1)), date(2024, 3, 6));
        assert_eq!(cell_text(&view), "  1 ● 05d (H: 03-22)  ");
    }

    #[test]
    fn test_cells_have_fixed_width() {
        let views = [
            SlotView::new(slot(8), None, date(2024, 3, 5)),
            SlotView::new(slot(8), Some(date(2024, 3, 5)), date(2024, 3, 5)),
            SlotView::new(slot(8), Some(date(2024, 1, 1)), date(2024, 3, 5)),
        ];
        for view in &views {
            assert_eq!(cell_text(view).chars().count(), CELL_WIDTH);
        }
    }

    #[test]
    fn test_plain_grid() {
        let mut state = IncubatorState::default();
        state.place(slot(1), date(2024, 3, 1));
        state.place(slot(4), date(2024, 2, 15));

        let output = render_grid(&state, date(2024, 3, 6), &PlainStyle);
        let border = format!("{}+", "+----------------------".repeat(4));
        let expected = format!(
            "{border}\n\
             |  1 ● 05d (H: 03-22)  |  2 ○ EMPTY           |  3 ○ EMPTY           |  4 ● 20d (H: 03-07)  |\n\
             {border}\n\
             |  5 ○ EMPTY           |  6 ○ EMPTY           |  7 ○ EMPTY           |  8 ○ EMPTY           |\n\
             {border}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_ansi_grid_colors_by_stage() {
        let mut state = IncubatorState::default();
        state.place(slot(1), date(2024, 2, 15));

        let output = render_grid(&state, date(2024, 3, 6), &AnsiStyle);
        assert!(output.contains("\x1b[31;5;7m  1 ● 20d"));
        assert!(output.contains("\x1b[2m  2 ○ EMPTY"));
    }
}
