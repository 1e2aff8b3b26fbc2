use crate::models::calendar::{CalendarDay, MarkedDate, MarkedDates, SelectedRange};

/// Applies one calendar tap to the current selection.
///
/// The first tap sets the start, the second completes the range (swapping
/// the bounds when the second day comes first), and any tap on a complete
/// range starts a new selection.
pub fn select_next_range(current: SelectedRange, clicked: CalendarDay) -> SelectedRange {
    match current {
        SelectedRange::Empty => SelectedRange::Start(clicked),
        SelectedRange::Start(start) if clicked < start => SelectedRange::Complete {
            start: clicked,
            end: start,
        },
        SelectedRange::Start(start) => SelectedRange::Complete {
            start,
            end: clicked,
        },
        SelectedRange::Complete { .. } => SelectedRange::Start(clicked),
    }
}

pub fn to_marked_dates(range: &SelectedRange) -> MarkedDates {
    let mut marked = MarkedDates::new();
    match *range {
        SelectedRange::Empty => {}
        SelectedRange::Start(start) => {
            marked.insert(start.date_string(), MarkedDate::selected());
        }
        SelectedRange::Complete { start, end } => {
            for date in start.date().iter_days().take_while(|d| *d <= end.date()) {
                marked.insert(CalendarDay::new(date).date_string(), MarkedDate::selected());
            }
        }
    }
    marked
}

pub fn to_display_label(range: &SelectedRange) -> String {
    match *range {
        SelectedRange::Empty => String::new(),
        SelectedRange::Start(start) => format_day(start),
        SelectedRange::Complete { start, end } if start == end => format_day(start),
        SelectedRange::Complete { start, end } => {
            format!("{} - {}", format_day(start), format_day(end))
        }
    }
}

fn format_day(day: CalendarDay) -> String {
    day.date().format("%-d %b.").to_string()
}
