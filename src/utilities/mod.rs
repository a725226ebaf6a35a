//! Standalone field-by-field transformations that sit next to the analyzer.

mod gst;
mod report_card;
mod title;

pub use gst::calculate_gst;
pub use report_card::{generate_report_card, ReportCard, Student, SubjectMark};
pub use title::fix_title;
