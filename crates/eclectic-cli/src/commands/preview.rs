use anyhow::Result;
use std::path::Path;

use eclectic_cli::Config;
use eclectic_import::{ImportField, PREVIEW_ROWS};

use super::read_sheet;

/// Print the first rows of a sheet exactly as the importer sees them.
pub fn preview_sheet(config: &Config, path: &Path) -> Result<()> {
    let text = read_sheet(path)?;
    let rows = config.parser().preview(&text);

    if rows.is_empty() {
        println!("Nothing to preview in {}", path.display());
        return Ok(());
    }

    println!("\nPreview (first {} rows)\n", PREVIEW_ROWS);
    for (number, row) in rows.iter().enumerate() {
        println!(
            "  {}. {} - {}",
            number + 1,
            row.get(ImportField::SongName),
            row.get(ImportField::Artist)
        );

        for field in &ImportField::ALL[2..] {
            let value = row.get(*field);
            if !value.is_empty() {
                println!("       {}: {}", field.header(), value);
            }
        }
    }

    Ok(())
}
