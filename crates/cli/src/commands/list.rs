use anyhow::Result;
use colored::*;
use turbo_group_core::GroupManager;

pub fn execute(manager: &GroupManager) -> Result<()> {
    let groups = manager.list_groups()?;

    if groups.is_empty() {
        println!(
            "No groups found in {}",
            manager.options().config_file.display()
        );
        return Ok(());
    }

    println!("{}", "Available groups:".bold().underline());
    for group in &groups.groups {
        println!("  {}:", group.name.blue().bold());
        for filter in &group.filters {
            println!("    - {}", filter.cyan());
        }
    }

    Ok(())
}
