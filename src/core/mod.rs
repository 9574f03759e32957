pub mod backup;
pub mod draft;
pub mod grouping;
pub mod hours;
pub mod log;
pub mod period;
pub mod sheet;
pub mod week;
