#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod dashboard_service;
pub mod error;
pub mod progress;

pub use app_services::{AppServices, LaunchSettings};
pub use catalog::CourseSource;
pub use dashboard_service::{BandStat, DashboardService, DashboardSnapshot, StatCard, StatTone};
pub use error::{AppServicesError, CatalogError};
pub use progress::{AdvanceTicket, ProgressIntent, ProgressState};
