//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use list::{GeneratorInfo, ListReport, OptionInfo};
pub use output::{Report, TerminalOutput};
