/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// File extensions copied verbatim instead of being inverted
///
/// Matching is exact and case-sensitive: `image.PNG` is treated as text.
pub const BINARY_EXTENSIONS: [&str; 2] = ["png", "psd"];

/// Literal substitutions applied to every inverted line
///
/// The inverted skin of `PaleMoon` is called `PaleSun`.
pub const BRAND_SUBSTITUTIONS: [(&str, &str); 2] =
    [("PaleMoon", "PaleSun"), ("palemoon", "palesun")];

/// Marker that introduces a color code
pub const COLOR_MARKER: char = '#';

/// Help text for the source positional argument
pub const SOURCE_HELP: &str = "Skin folder to invert, or a single file to print inverted";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Folder that receives the inverted skin";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would be written without touching the disk";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Default destination root, the current working directory
pub const DEFAULT_OUTPUT_PATH: &str = ".";

/// Name of the executable, used in the usage example
pub const BINARY_NAME: &str = "invertcolor";

/// Skin folder the inverted skin is generated into, used in the usage example
pub const USAGE_TARGET_SKIN: [&str; 5] = ["Mixxx", "res", "skins", "LateNight", "palesun"];

/// Alternative skin folder layout shown in the usage example
pub const USAGE_ALTERNATIVE_SKIN: [&str; 4] = ["Mixxx", "skins", "LateNight", "palesun"];

/// Source skin, relative to the target skin folder
pub const USAGE_SOURCE_SKIN: [&str; 2] = ["..", "palemoon"];
