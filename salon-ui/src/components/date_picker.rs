//! Date Picker
//!
//! Month calendar. Days the wizard's date policy closes are disabled.

use chrono::{Datelike, Local, Months, NaiveDate};
use leptos::*;

use crate::state::BookingState;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the month containing `date`
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Calendar cells for a month: leading blanks up to the first weekday, then each day
fn month_cells(first: NaiveDate) -> Vec<Option<NaiveDate>> {
    let blanks = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; blanks];
    cells.extend(
        first
            .iter_days()
            .take_while(|day| day.month() == first.month())
            .map(Some),
    );
    cells
}

#[component]
pub fn DatePicker() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    let initial = booking
        .wizard
        .with_untracked(|w| w.state().date())
        .unwrap_or_else(|| Local::now().date_naive());
    let month = create_rw_signal(month_start(initial));

    let shift = move |forward: bool| {
        month.update(|m| {
            let next = if forward {
                m.checked_add_months(Months::new(1))
            } else {
                m.checked_sub_months(Months::new(1))
            };
            if let Some(next) = next {
                *m = next;
            }
        });
    };

    view! {
        <div class="bg-gray-900 rounded-lg p-4">
            <div class="flex items-center justify-between mb-3">
                <button class="px-3 py-1 rounded hover:bg-gray-700" on:click=move |_| shift(false)>"‹"</button>
                <span class="font-semibold">{move || month.get().format("%B %Y").to_string()}</span>
                <button class="px-3 py-1 rounded hover:bg-gray-700" on:click=move |_| shift(true)>"›"</button>
            </div>

            <div class="grid grid-cols-7 gap-1 text-center text-xs text-gray-400 mb-1">
                {WEEKDAY_LABELS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
            </div>

            <div class="grid grid-cols-7 gap-1">
                {move || {
                    month_cells(month.get())
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <span /> }.into_view(),
                            Some(day) => view! { <DayButton day=day /> }.into_view(),
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn DayButton(day: NaiveDate) -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    let selectable = booking.wizard.with_untracked(|w| w.is_date_selectable(day));
    let selected = move || booking.wizard.with(|w| w.state().date() == Some(day));

    view! {
        <button
            disabled=!selectable
            on:click=move |_| booking.select_date(day)
            class=move || {
                let base = "py-2 rounded text-sm transition-colors";
                if !selectable {
                    format!("{} text-gray-600 cursor-not-allowed", base)
                } else if selected() {
                    format!("{} bg-primary-600 text-white font-semibold", base)
                } else {
                    format!("{} text-gray-200 hover:bg-gray-700", base)
                }
            }
        >
            {day.day()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_cells() {
        // June 2030 starts on a Saturday and has 30 days
        let cells = month_cells(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert_eq!(cells.len(), 6 + 30);
        assert!(cells[..6].iter().all(Option::is_none));
        assert_eq!(cells[6], NaiveDate::from_ymd_opt(2030, 6, 1));
        assert_eq!(cells.last().copied().flatten(), NaiveDate::from_ymd_opt(2030, 6, 30));
    }

    #[test]
    fn test_month_start() {
        let date = NaiveDate::from_ymd_opt(2030, 2, 17).unwrap();
        assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2030, 2, 1).unwrap());
    }
}
