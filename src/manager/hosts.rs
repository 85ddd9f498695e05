use std::collections::HashMap;
use std::str::FromStr;

use crate::error::MonitorError;

/// Maps a numeric host id to the name shown in the Client/Server columns.
pub trait HostNameResolver {
    fn name_for_host(&self, host_id: u32) -> String;
}

/// Host names announced by the scheduler, keyed by host id.
#[derive(Debug, Clone, Default)]
pub struct HostTable {
    names: HashMap<u32, String>,
}

impl HostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, host_id: u32, name: impl Into<String>) {
        self.names.insert(host_id, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl HostNameResolver for HostTable {
    fn name_for_host(&self, host_id: u32) -> String {
        self.names
            .get(&host_id)
            .cloned()
            .unwrap_or_else(|| format!("host-{}", host_id))
    }
}

/// One `ID=NAME` pair as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMapping {
    pub host_id: u32,
    pub name: String,
}

impl FromStr for HostMapping {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, name) = s
            .split_once('=')
            .ok_or_else(|| MonitorError::InvalidHostMapping(s.to_string()))?;
        let host_id = id
            .trim()
            .parse::<u32>()
            .map_err(|_| MonitorError::InvalidHostMapping(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(MonitorError::InvalidHostMapping(s.to_string()));
        }
        Ok(HostMapping { host_id, name: name.to_string() })
    }
}

impl FromIterator<HostMapping> for HostTable {
    fn from_iter<I: IntoIterator<Item = HostMapping>>(iter: I) -> Self {
        let mut table = HostTable::new();
        for mapping in iter {
            table.insert(mapping.host_id, mapping.name);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_and_unknown_hosts() {
        let mut table = HostTable::new();
        table.insert(1, "builder");
        assert_eq!(table.name_for_host(1), "builder");
        assert_eq!(table.name_for_host(9), "host-9");
    }

    #[test]
    fn parses_mappings() {
        let mapping: HostMapping = "3 = ci-runner".parse().unwrap();
        assert_eq!(mapping, HostMapping { host_id: 3, name: "ci-runner".into() });
        assert!("3".parse::<HostMapping>().is_err());
        assert!("x=name".parse::<HostMapping>().is_err());
        assert!("4=".parse::<HostMapping>().is_err());

        let table: HostTable = vec![mapping].into_iter().collect();
        assert_eq!(table.len(), 1);
    }
}
