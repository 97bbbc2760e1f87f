//! Error types with diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced while building or rendering a chart.
///
/// Missing ancestry data is deliberately *not* an error: absent parent links
/// truncate a branch, absent dates render as empty years, and a label that
/// overflows its wedge even at the minimum font size is accepted visual
/// degradation. Only an unresolvable root, an invalid configuration, or an
/// output failure aborts the chart.
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("root individual not found: {id}")]
    #[diagnostic(
        code(fanrose::records::root_not_found),
        help("check the identifier against the record store")
    )]
    RootNotFound { id: String },

    #[error("invalid chart configuration: {reason}")]
    #[diagnostic(code(fanrose::config::invalid))]
    InvalidConfig { reason: String },

    #[error("no output path configured")]
    #[diagnostic(
        code(fanrose::config::missing_output),
        help("set `ChartConfig::output` before calling rose_to_file")
    )]
    MissingOutput,

    #[error("failed to write chart output")]
    #[diagnostic(code(fanrose::io))]
    Io(#[from] std::io::Error),
}
