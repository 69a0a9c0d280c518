use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid pagination policy: {0}")]
    InvalidPolicy(String),
}

pub mod algorithms;
pub mod config;
pub mod page;

pub use self::algorithms::pagination::{PagePlan, PlannedPage, plan};
pub use self::config::PaginationPolicy;
pub use self::page::PageKind;
