use std::path::PathBuf;

use tracing::info;

use crate::{
    constants::Constants,
    error::Result,
    inventory::{Inventory, InventoryFormat},
    layout::ClusterLayout,
    output::{ensure_parent_dir, write_atomic},
    paths::ProjectPaths,
};

/// Regenerates the inventory from the project's Vagrantfile and returns where
/// it was written. The inventory file is untouched unless every step succeeds.
pub fn generate(paths: &ProjectPaths, format: InventoryFormat) -> Result<PathBuf> {
    let constants = Constants::from_file(&paths.vagrantfile())?;
    let layout = ClusterLayout::from_constants(&constants)?;
    info!("{layout:?}");

    let inventory = Inventory::from_layout(&layout)?;
    let contents = inventory.render(format)?;

    let inventory_path = paths.inventory();
    ensure_parent_dir(&inventory_path)?;
    write_atomic(&inventory_path, &contents)?;
    info!(
        "wrote {} host groups and {} cluster children to {}",
        inventory.groups.len(),
        inventory.children.len(),
        inventory_path.display()
    );
    Ok(inventory_path)
}
