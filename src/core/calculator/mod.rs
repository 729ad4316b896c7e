pub mod grouping;

pub use grouping::{StartEnd, group_by_months, group_by_start_end, group_by_weekday, mean};
