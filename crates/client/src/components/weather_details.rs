//! Sunrise/sunset, wind, pressure and humidity panel.

use dioxus::prelude::*;
use skycast_shared::{units, WeatherSnapshot};

#[component]
pub fn WeatherDetails(data: WeatherSnapshot) -> Element {
    let tz = data.timezone;
    let details = [
        ("Sunrise", units::format_time(data.sys.sunrise, tz)),
        ("Sunset", units::format_time(data.sys.sunset, tz)),
        (
            "Wind",
            format!(
                "{} m/s {}",
                data.wind.speed,
                units::wind_direction(data.wind.deg)
            ),
        ),
        ("Pressure", format!("{} hPa", data.main.pressure)),
        ("Humidity", format!("{}%", data.main.humidity)),
        ("Feels Like", units::format_temp(data.main.feels_like)),
    ];

    rsx! {
        div { class: "rounded-lg border bg-card p-6 shadow-sm",
            h3 { class: "mb-4 text-lg font-semibold", "Weather Details" }
            div { class: "grid gap-4 sm:grid-cols-2",
                for (label, value) in details {
                    div {
                        key: "{label}",
                        class: "flex items-center justify-between rounded-lg border p-4",
                        p { class: "text-sm font-medium", "{label}" }
                        p { class: "text-sm text-muted-foreground", "{value}" }
                    }
                }
            }
        }
    }
}
