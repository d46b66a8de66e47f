use anyhow::Context;
use repotools::{render_command_list, CommandExtractor, COMMANDS_FILE};

fn main() -> anyhow::Result<()> {
    let extractor = CommandExtractor::new()?;
    let commands = extractor
        .extract_from_file(COMMANDS_FILE)
        .with_context(|| format!("failed to read {}", COMMANDS_FILE))?;

    println!("{}", render_command_list(&commands));
    Ok(())
}
