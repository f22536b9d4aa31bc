//! Background and outbound services

pub mod dashboard;
pub mod graphql;

pub use dashboard::DashboardFeed;
pub use graphql::GraphQlClient;
