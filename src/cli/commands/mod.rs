//! Each subcommand lives in its own file, keeping the match arm in main thin.

mod codes;
mod presets;
mod render;

pub use codes::cmd_codes;
pub use presets::cmd_presets;
pub use render::{RenderArgs, build_layout, build_record, cmd_render};
