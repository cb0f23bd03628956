//! Daily forecast panel.

use dioxus::prelude::*;
use skycast_shared::{daily_forecast, units, ForecastResponse};

const DAYS_SHOWN: usize = 5;

/// Per-day min/max summary of the forecast series. The remainder of today is
/// skipped; the next full days are shown.
#[component]
pub fn WeatherForecast(data: ForecastResponse) -> Element {
    let offset = data.city.timezone;
    let days: Vec<_> = daily_forecast(&data)
        .into_iter()
        .skip(1)
        .take(DAYS_SHOWN)
        .collect();

    rsx! {
        div { class: "rounded-lg border bg-card p-6 shadow-sm",
            h3 { class: "mb-4 text-lg font-semibold", "5-Day Forecast" }
            div { class: "grid gap-4",
                for day in days {
                    div {
                        key: "{day.dt}",
                        class: "grid grid-cols-3 items-center gap-4 rounded-lg border p-4",
                        div {
                            p { class: "font-medium", {units::format_day(day.dt, offset)} }
                            if let Some(condition) = &day.condition {
                                p { class: "text-sm capitalize text-muted-foreground",
                                    "{condition.description}"
                                }
                            }
                        }
                        div { class: "flex justify-center gap-4",
                            span { class: "text-blue-500",
                                "↓ "
                                {units::format_temp(day.temp_min)}
                            }
                            span { class: "text-red-500",
                                "↑ "
                                {units::format_temp(day.temp_max)}
                            }
                        }
                        div { class: "flex flex-col items-end gap-1 text-sm text-muted-foreground",
                            span { "{day.humidity}% humidity" }
                            span { "{day.wind_speed} m/s" }
                        }
                    }
                }
            }
        }
    }
}
