//! Daily aggregation of the 3-hour forecast series.

use chrono::{DateTime, NaiveDate};

use crate::models::{ForecastResponse, WeatherCondition};

/// One calendar day collapsed out of the 3-hour series.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Timestamp of the first entry of the day, used for labels.
    pub dt: i64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub condition: Option<WeatherCondition>,
}

/// Collapses the series into one row per local calendar day, preserving
/// chronological order. Min/max temperatures span the whole day; humidity,
/// wind and condition come from the day's first entry.
///
/// The series is assumed to already be time-ordered, which the forecast
/// endpoint guarantees.
pub fn daily_forecast(series: &ForecastResponse) -> Vec<DailyForecast> {
    let offset = series.city.timezone;
    let mut days: Vec<DailyForecast> = Vec::new();

    for entry in &series.list {
        let Some(local) = DateTime::from_timestamp(entry.dt + offset, 0) else {
            continue;
        };
        let date = local.date_naive();

        match days.last_mut() {
            Some(day) if day.date == date => {
                day.temp_min = day.temp_min.min(entry.main.temp_min);
                day.temp_max = day.temp_max.max(entry.main.temp_max);
            }
            _ => days.push(DailyForecast {
                date,
                dt: entry.dt,
                temp_min: entry.main.temp_min,
                temp_max: entry.main.temp_max,
                humidity: entry.main.humidity,
                wind_speed: entry.wind.speed,
                condition: entry.weather.first().cloned(),
            }),
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastCity, ForecastEntry, MainConditions, Wind};

    fn entry(dt: i64, temp_min: f64, temp_max: f64) -> ForecastEntry {
        ForecastEntry {
            dt,
            main: MainConditions {
                temp: (temp_min + temp_max) / 2.0,
                feels_like: 0.0,
                temp_min,
                temp_max,
                pressure: 1013.0,
                humidity: 60.0,
            },
            weather: vec![WeatherCondition {
                id: 800,
                main: "Clear".into(),
                description: "clear sky".into(),
                icon: "01d".into(),
            }],
            wind: Wind {
                speed: 3.0,
                deg: 90.0,
            },
        }
    }

    fn series(entries: Vec<ForecastEntry>, timezone: i64) -> ForecastResponse {
        ForecastResponse {
            list: entries,
            city: ForecastCity {
                timezone,
                ..Default::default()
            },
        }
    }

    // 2024-09-26 00:00:00 UTC
    const DAY_START: i64 = 1727308800;
    const HOUR: i64 = 3600;

    #[test]
    fn groups_entries_by_calendar_day() {
        let forecast = series(
            vec![
                entry(DAY_START + 9 * HOUR, 12.0, 15.0),
                entry(DAY_START + 15 * HOUR, 14.0, 19.0),
                entry(DAY_START + 33 * HOUR, 10.0, 13.0),
            ],
            0,
        );

        let days = daily_forecast(&forecast);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].temp_min, 12.0);
        assert_eq!(days[0].temp_max, 19.0);
        assert_eq!(days[1].temp_min, 10.0);
        assert!(days[0].date < days[1].date);
    }

    #[test]
    fn day_boundaries_follow_the_location_offset() {
        // 23:00 UTC is already the next day two hours east of Greenwich.
        let forecast_utc = series(vec![entry(DAY_START + 23 * HOUR, 10.0, 12.0)], 0);
        let forecast_east = series(vec![entry(DAY_START + 23 * HOUR, 10.0, 12.0)], 2 * HOUR);

        let utc_day = daily_forecast(&forecast_utc)[0].date;
        let east_day = daily_forecast(&forecast_east)[0].date;
        assert_eq!(east_day, utc_day.succ_opt().unwrap());
    }

    #[test]
    fn first_entry_supplies_condition_and_label_timestamp() {
        let first = entry(DAY_START + 9 * HOUR, 12.0, 15.0);
        let forecast = series(
            vec![first.clone(), entry(DAY_START + 12 * HOUR, 13.0, 18.0)],
            0,
        );

        let days = daily_forecast(&forecast);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].dt, first.dt);
        assert_eq!(days[0].condition, first.weather.first().cloned());
    }

    #[test]
    fn empty_series_yields_no_days() {
        assert!(daily_forecast(&series(vec![], 0)).is_empty());
    }
}
