//! Syntax layer: line tokenizing and record/structure boundaries.
//!
//! Nothing here knows what a tag means. [`Line`] splits one line into its
//! level, xref id, tag and value; [`record`] works out which lines belong
//! together using levels alone.

pub mod line;
pub mod record;

pub use line::{Line, write_line};
pub use record::{Children, Record, RecordSplitter, children, structure};
