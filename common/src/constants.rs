use std::{collections::HashMap, fmt, fs, path::Path};

use regex::Regex;
use tracing::{debug, info};

use crate::error::{InventoryError, Result};

lazy_static::lazy_static! {
    static ref CONSTANT_LINE: Regex = Regex::new(
        r"^(NUM_CONTROL_NODES|NUM_WORKER_NODE|MASTER_IP_START|NODE_IP_START|LB_IP_START)(?-u:\s)*=(?-u:\s)*([0-9]+)"
    )
    .unwrap();
}

/// Numeric constants the inventory is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantName {
    NumControlNodes,
    NumWorkerNode,
    MasterIpStart,
    NodeIpStart,
    LbIpStart,
}

impl ConstantName {
    pub const ALL: [ConstantName; 5] = [
        ConstantName::NumControlNodes,
        ConstantName::NumWorkerNode,
        ConstantName::MasterIpStart,
        ConstantName::NodeIpStart,
        ConstantName::LbIpStart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstantName::NumControlNodes => "NUM_CONTROL_NODES",
            ConstantName::NumWorkerNode => "NUM_WORKER_NODE",
            ConstantName::MasterIpStart => "MASTER_IP_START",
            ConstantName::NodeIpStart => "NODE_IP_START",
            ConstantName::LbIpStart => "LB_IP_START",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ConstantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constants picked out of a Vagrantfile. A name assigned more than once keeps
/// its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constants {
    values: HashMap<ConstantName, u64>,
}

impl Constants {
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = HashMap::new();
        for line in text.lines() {
            let Some(caps) = CONSTANT_LINE.captures(line) else {
                continue;
            };
            // the regex only admits the five known names
            let Some(name) = ConstantName::from_name(&caps[1]) else {
                continue;
            };
            let value = caps[2]
                .parse::<u64>()
                .map_err(|_| InventoryError::InvalidConstant {
                    name,
                    value: caps[2].to_owned(),
                })?;
            debug!("{name} = {value}");
            values.insert(name, value);
        }
        Ok(Self { values })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| InventoryError::ConfigNotFound {
            path: path.to_owned(),
            source,
        })?;
        let constants = Self::parse(&text)?;
        info!(
            "read {} constants from {}",
            constants.values.len(),
            path.display()
        );
        Ok(constants)
    }

    pub fn get(&self, name: ConstantName) -> Result<u64> {
        self.values
            .get(&name)
            .copied()
            .ok_or(InventoryError::MissingConstant(name))
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, name: ConstantName, value: u64) {
        self.values.insert(name, value);
    }
}
