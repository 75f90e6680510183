pub mod client;
pub mod dto;
pub mod helpers;
pub mod service;

pub use client::RobleClient;
pub use dto::{COLUMN_NAME, ColumnStatsResponse, ReadTableArgs};
pub use service::{RobleError, RobleService, TableReader};
