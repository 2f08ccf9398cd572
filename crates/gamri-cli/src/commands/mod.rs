pub mod activity;
pub mod ask;
pub mod categories;
pub mod dispatch;
pub mod overview;
pub mod profile;
pub mod report;
pub mod search;
pub mod shared;
pub mod show;
pub mod taxonomy;
pub mod trend;
