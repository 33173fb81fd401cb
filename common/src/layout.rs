use crate::{
    constants::{ConstantName, Constants},
    error::{InventoryError, Result},
};

pub const NETWORK_PREFIX: &str = "192.168.100.";

/// Control planes at or above this count get a load balancer in front of them.
pub const LOAD_BALANCER_THRESHOLD: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterLayout {
    pub control_nodes: u64,
    pub worker_nodes: u64,
    pub master_ip_start: u64,
    pub node_ip_start: u64,
    pub lb_ip_start: u64,
}

impl ClusterLayout {
    pub fn from_constants(constants: &Constants) -> Result<Self> {
        Ok(Self {
            control_nodes: constants.get(ConstantName::NumControlNodes)?,
            worker_nodes: constants.get(ConstantName::NumWorkerNode)?,
            master_ip_start: constants.get(ConstantName::MasterIpStart)?,
            node_ip_start: constants.get(ConstantName::NodeIpStart)?,
            lb_ip_start: constants.get(ConstantName::LbIpStart)?,
        })
    }

    pub fn has_load_balancer(&self) -> bool {
        self.control_nodes >= LOAD_BALANCER_THRESHOLD
    }

    /// Address of control plane `i`, 1-based.
    pub fn control_plane_address(&self, i: u64) -> Result<String> {
        offset_address(self.master_ip_start, i, ConstantName::MasterIpStart)
    }

    /// Address of worker `i`, 1-based.
    pub fn worker_address(&self, i: u64) -> Result<String> {
        offset_address(self.node_ip_start, i, ConstantName::NodeIpStart)
    }

    pub fn load_balancer_address(&self) -> String {
        format!("{NETWORK_PREFIX}{}", self.lb_ip_start)
    }
}

fn offset_address(start: u64, i: u64, name: ConstantName) -> Result<String> {
    let suffix = start
        .checked_add(i)
        .ok_or(InventoryError::AddressOverflow(name))?;
    Ok(format!("{NETWORK_PREFIX}{suffix}"))
}
