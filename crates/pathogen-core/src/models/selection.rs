use serde::{Deserialize, Serialize};

use super::ValidatedNetwork;

/// Outcome of final-network selection.
///
/// `NoValidNetwork` is a normal result: screening rejected every candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Selection {
    Selected { network: ValidatedNetwork },
    NoValidNetwork,
}

impl Selection {
    pub fn network(&self) -> Option<&ValidatedNetwork> {
        match self {
            Self::Selected { network } => Some(network),
            Self::NoValidNetwork => None,
        }
    }

    pub fn into_network(self) -> Option<ValidatedNetwork> {
        match self {
            Self::Selected { network } => Some(network),
            Self::NoValidNetwork => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

impl From<Option<ValidatedNetwork>> for Selection {
    fn from(network: Option<ValidatedNetwork>) -> Self {
        match network {
            Some(network) => Self::Selected { network },
            None => Self::NoValidNetwork,
        }
    }
}
