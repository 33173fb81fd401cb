use std::path::PathBuf;

use clap::{ArgAction, Parser};
use common::inventory::InventoryFormat;

#[derive(Debug, Parser)]
#[command(name = "generate-inventory")]
#[command(author, version, about = "Generates the Ansible inventory for the libvirt Vagrant cluster", long_about = None)]
pub struct Cli {
    /// Verbose logging
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Project root, defaults to the directory above the executable's
    #[arg(long, short)]
    pub root: Option<PathBuf>,

    /// Inventory format (ini or yaml)
    #[arg(long, short, default_value = "ini")]
    pub format: InventoryFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["generate-inventory"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.root.is_none());
        assert_eq!(cli.format, InventoryFormat::Ini);
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "generate-inventory",
            "-v",
            "--root",
            "/srv/cluster",
            "--format",
            "yaml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/cluster")));
        assert_eq!(cli.format, InventoryFormat::Yaml);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["generate-inventory", "--format", "toml"]).is_err());
    }
}
