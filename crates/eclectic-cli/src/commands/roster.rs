use anyhow::Result;

use eclectic_cli::Config;

pub fn show_roster(config: &Config) -> Result<()> {
    let roster = config.roster()?;

    println!("\nBand Roster\n");
    for member in roster.members() {
        println!("  {:<20} {:<18} {}", member.name, member.instrument, member.email);
    }

    Ok(())
}
