pub mod args;
pub mod countries;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sections;
pub mod utils;

pub use args::Args;
pub use error::ReportError;
pub use pipeline::{generate_report, generate_report_with_workers};
pub use report::{Report, ReportSummary, Section};
pub use sections::SectionKind;
