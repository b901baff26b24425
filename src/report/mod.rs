pub mod report;

pub use report::{RankingReport, ReportError};
