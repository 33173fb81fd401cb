use std::{fmt::Write, str::FromStr};

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::{error::Result, layout::ClusterLayout};

pub const CONTROL_PLANES: &str = "controlplanes";
pub const LOAD_BALANCERS: &str = "loadbalancers";
pub const WORKER_NODES: &str = "workernodes";
pub const CLUSTER: &str = "k8s_cluster";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: &'static str,
    pub hosts: Vec<Host>,
}

/// Host groups plus the `k8s_cluster` group made up of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub groups: Vec<Group>,
    pub children: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventoryFormat {
    #[default]
    Ini,
    Yaml,
}

impl FromStr for InventoryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ini" => Ok(Self::Ini),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown inventory format {other}")),
        }
    }
}

#[derive(Serialize)]
struct HostVars<'a> {
    ansible_host: &'a str,
}

impl Inventory {
    pub fn from_layout(layout: &ClusterLayout) -> Result<Self> {
        let mut groups = Vec::new();
        let mut children = vec![CONTROL_PLANES, WORKER_NODES];

        let control_planes = (1..=layout.control_nodes)
            .map(|i| -> Result<Host> {
                Ok(Host {
                    name: format!("controlplane{i:02}"),
                    address: layout.control_plane_address(i)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        groups.push(Group {
            name: CONTROL_PLANES,
            hosts: control_planes,
        });

        if layout.has_load_balancer() {
            groups.push(Group {
                name: LOAD_BALANCERS,
                hosts: vec![Host {
                    name: "loadbalancer".to_owned(),
                    address: layout.load_balancer_address(),
                }],
            });
            children.push(LOAD_BALANCERS);
        }

        let workers = (1..=layout.worker_nodes)
            .map(|i| -> Result<Host> {
                Ok(Host {
                    name: format!("node{i:02}"),
                    address: layout.worker_address(i)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        groups.push(Group {
            name: WORKER_NODES,
            hosts: workers,
        });

        Ok(Self { groups, children })
    }

    pub fn render(&self, format: InventoryFormat) -> Result<String> {
        match format {
            InventoryFormat::Ini => Ok(self.to_ini()),
            InventoryFormat::Yaml => self.to_yaml(),
        }
    }

    pub fn to_ini(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            // writing into a String cannot fail
            let _ = writeln!(out, "[{}]", group.name);
            for host in &group.hosts {
                let _ = writeln!(out, "{} ansible_host={}", host.name, host.address);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "[{CLUSTER}:children]");
        for child in &self.children {
            let _ = writeln!(out, "{child}");
        }
        out
    }

    pub fn to_yaml(&self) -> Result<String> {
        let mut root = Mapping::new();
        for group in &self.groups {
            let mut hosts = Mapping::new();
            for host in &group.hosts {
                hosts.insert(
                    Value::from(host.name.as_str()),
                    serde_yaml::to_value(HostVars {
                        ansible_host: &host.address,
                    })?,
                );
            }
            let mut body = Mapping::new();
            body.insert(Value::from("hosts"), Value::Mapping(hosts));
            root.insert(Value::from(group.name), Value::Mapping(body));
        }

        let mut children = Mapping::new();
        for child in &self.children {
            children.insert(Value::from(*child), Value::Mapping(Mapping::new()));
        }
        let mut cluster = Mapping::new();
        cluster.insert(Value::from("children"), Value::Mapping(children));
        root.insert(Value::from(CLUSTER), Value::Mapping(cluster));

        Ok(serde_yaml::to_string(&root)?)
    }
}
