pub mod environment;
pub mod names;
pub mod paths;

pub use environment::{get_config_dir, get_history_path};
pub use names::{has_balanced_braces, is_valid_name, macro_reference};
pub use paths::{format_path_with_tilde, normalize_path, validate_file_size};
