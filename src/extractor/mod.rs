pub mod command_extractor;

pub use command_extractor::{render_command_list, CommandExtractor, COMMANDS_FILE};
