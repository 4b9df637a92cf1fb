//! Creates an inverted-color copy of a UI skin.
//!
//! A skin folder is mirrored into a destination folder: `.png` and `.psd`
//! assets are copied as they are, every other file is read as text and
//! its `#RRGGBB` / `#RGB` color codes are replaced by their complement.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod inverter;
pub mod logging;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_options, get_verbosity, usage_lines};
    pub use crate::errors::{
        Error, Result, destination_inside_source_error, file_operation_error, path_operation_error,
        unsupported_entry_error,
    };
    pub use crate::inverter::{DigitWidth, invert_color, invert_line, invert_text};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{
        InvertOptions, OperationType, RunOutcome, WorkflowContext, copy_tree, invert_file, run,
    };
}
