mod breakdown;
mod color;
mod output_format;
mod session;
mod usage_record;

pub use breakdown::{Breakdown, Category, ViewEntry, ViewGroup};
pub use color::Color;
pub use output_format::OutputFormat;
pub use session::{Conversation, SessionStore};
pub use usage_record::UsageRecord;
