use serde::{Deserialize, Serialize};

macro_rules! define_node_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_node_id!(SupplyNodeId, "S");
define_node_id!(DemandNodeId, "D");

/// A facility with finite capacity that sources units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupplyNode {
    pub id: SupplyNodeId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: f64,
}

/// A destination requiring units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemandNode {
    pub id: DemandNodeId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A history row as persisted, before it is joined with the demand node names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredDemandRecord {
    pub period: u32,
    pub demand_node_id: DemandNodeId,
    pub units_requested: f64,
}

/// Units requested by one demand node in one period, joined with the node name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoricalDemandRecord {
    pub period: u32,
    pub demand_node_id: DemandNodeId,
    pub demand_node_name: String,
    pub units_requested: f64,
}

/// Joins stored rows with their demand node, dropping rows whose node is unknown.
/// Row order is preserved.
pub fn join_history(
    records: &[StoredDemandRecord],
    demand_nodes: &[DemandNode],
) -> Vec<HistoricalDemandRecord> {
    let names = demand_nodes
        .iter()
        .map(|node| (node.id, node.name.as_str()))
        .collect::<fxhash::FxHashMap<_, _>>();

    records
        .iter()
        .filter_map(|record| {
            let Some(name) = names.get(&record.demand_node_id) else {
                tracing::debug!(
                    "Dropping history row for unknown demand node {}",
                    record.demand_node_id
                );
                return None;
            };

            Some(HistoricalDemandRecord {
                period: record.period,
                demand_node_id: record.demand_node_id,
                demand_node_name: (*name).to_owned(),
                units_requested: record.units_requested,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand_node(id: u64, name: &str) -> DemandNode {
        DemandNode {
            id: DemandNodeId::new(id),
            name: name.to_owned(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_join_history_drops_unknown_nodes() {
        let nodes = vec![demand_node(101, "Retail Store A"), demand_node(102, "Pharmacy B")];
        let records = vec![
            StoredDemandRecord {
                period: 1,
                demand_node_id: DemandNodeId::new(102),
                units_requested: 10.0,
            },
            StoredDemandRecord {
                period: 1,
                demand_node_id: DemandNodeId::new(999),
                units_requested: 12.0,
            },
            StoredDemandRecord {
                period: 1,
                demand_node_id: DemandNodeId::new(101),
                units_requested: 14.0,
            },
        ];

        let joined = join_history(&records, &nodes);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].demand_node_name, "Pharmacy B");
        assert_eq!(joined[1].demand_node_id, DemandNodeId::new(101));
        assert_eq!(joined[1].units_requested, 14.0);
    }

    #[test]
    fn test_node_ids_serialize_transparently() {
        let json = serde_json::to_string(&SupplyNodeId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: DemandNodeId = serde_json::from_str("105").unwrap();
        assert_eq!(id, DemandNodeId::new(105));
        assert_eq!(id.to_string(), "D105");
    }
}
