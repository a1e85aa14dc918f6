use anyhow::Result;

use crate::config::get_config;
use crate::preview::ToolPreview;

/// Print the preview block for one tool call whose output is on stdin.
pub fn run(tool: String, header: Option<String>, plain: bool) -> Result<()> {
    let config = get_config()?;
    let output = super::read_input(None)?;
    let rendered = ToolPreview::new(&tool, header.as_deref().unwrap_or_default(), &output)
        .render(&config);

    let lines = if plain {
        rendered.to_plain_lines()
    } else {
        rendered.to_colored_lines()
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
