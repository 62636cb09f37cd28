pub mod catalog;
pub mod environments;
pub mod explore;
pub mod metrics;
pub mod show;
pub mod stages;
pub mod tools;
