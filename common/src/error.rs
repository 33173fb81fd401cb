use std::{io, path::PathBuf};

use thiserror::Error;

use crate::constants::ConstantName;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("could not read Vagrantfile {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("constant {0} is not defined in the Vagrantfile")]
    MissingConstant(ConstantName),
    #[error("constant {name} has a value that is out of range: {value}")]
    InvalidConstant { name: ConstantName, value: String },
    #[error("address suffix derived from {0} overflows")]
    AddressOverflow(ConstantName),
    #[error("could not create output directory {path}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write inventory {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not render inventory")]
    Render(#[from] serde_yaml::Error),
}

pub type Result<T, E = InventoryError> = std::result::Result<T, E>;
