pub mod day_record;
pub mod pto;
pub mod settings;
pub mod week_summary;

pub use day_record::DayRecord;
pub use pto::{PtoInput, PtoValue};
pub use settings::{Settings, WorkPattern};
pub use week_summary::WeekSummary;
