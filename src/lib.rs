pub mod app_state;
pub mod config;
pub mod kanban;
pub mod models;
pub mod repository;
pub mod task;
