//! Next-hours temperature strip.

use dioxus::prelude::*;
use skycast_shared::{units, ForecastResponse};

const HOURS_SHOWN: usize = 8;

/// Bar strip of the next forecast steps, scaled to the shown range.
#[component]
pub fn HourlyTemperature(data: ForecastResponse) -> Element {
    let offset = data.city.timezone;
    let entries: Vec<_> = data.list.iter().take(HOURS_SHOWN).cloned().collect();

    let (min, max) = entries.iter().fold((f64::MAX, f64::MIN), |(lo, hi), e| {
        (lo.min(e.main.temp), hi.max(e.main.temp))
    });
    let span = (max - min).max(1.0);

    let bars: Vec<_> = entries
        .into_iter()
        .map(|entry| {
            let height = 20.0 + 80.0 * (entry.main.temp - min) / span;
            (entry, height)
        })
        .collect();

    rsx! {
        div { class: "mt-6 rounded-lg border bg-card p-6 shadow-sm",
            h3 { class: "mb-4 text-lg font-semibold", "Today's Temperature" }
            div { class: "flex items-end gap-3",
                for (entry, height) in bars {
                    div {
                        key: "{entry.dt}",
                        class: "flex flex-1 flex-col items-center gap-1",
                        span { class: "text-sm font-medium",
                            {units::format_temp(entry.main.temp)}
                        }
                        div {
                            class: "w-full rounded-t bg-primary/70",
                            style: "height: {height}px",
                        }
                        span { class: "text-xs text-muted-foreground",
                            {units::format_time(entry.dt, offset)}
                        }
                    }
                }
            }
        }
    }
}
