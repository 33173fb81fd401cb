use std::{
    env, io,
    path::{Path, PathBuf},
};

pub const VAGRANT_DIR: &str = "libvirt-vagrant";
pub const VAGRANTFILE: &str = "Vagrantfile";
pub const INVENTORY_FILE: &str = "inventory";

/// Locations of the Vagrantfile and the generated inventory under a project
/// root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            root: std::path::absolute(root)?,
        })
    }

    /// The project root is one level above the directory the executable
    /// lives in.
    pub fn from_executable() -> io::Result<Self> {
        let exe = env::current_exe()?;
        let root = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} has no parent directory", exe.display()),
                )
            })?;
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn vagrantfile(&self) -> PathBuf {
        self.root.join(VAGRANT_DIR).join(VAGRANTFILE)
    }

    pub fn inventory(&self) -> PathBuf {
        self.root.join(INVENTORY_FILE)
    }
}
