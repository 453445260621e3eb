//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`] target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, EmitterSummary};
pub use generate::{EmitterReport, FileReport, FileStatus, GenerateMode, GenerateReport};
pub use output::{Output, Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::BufferOutput;
