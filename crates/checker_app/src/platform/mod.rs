mod app;
mod bootstrap;
mod dashboard;
mod effects;
mod events;
mod persistence;
mod ui;

pub(crate) use app::run_app;
