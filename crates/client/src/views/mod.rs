mod city;
mod dashboard;
mod shell;

pub use city::CityView;
pub use dashboard::Dashboard;
pub use shell::AppShell;
