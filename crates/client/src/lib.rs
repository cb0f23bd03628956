//! Skycast client - Dioxus web application
//!
//! This crate contains the web client for Skycast, a weather dashboard
//! built on the OpenWeatherMap API.

pub mod api_client;
pub mod config;
pub mod geolocation;
pub mod logging;
pub mod storage;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod stores;
pub mod views;

pub use api_client::WeatherApi;
pub use geolocation::{use_geolocation, GeolocationContext, GeolocationProvider};
pub use routes::Route;
