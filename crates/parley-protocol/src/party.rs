//! # Bargaining Roles
//!
//! The two roles in a dispute. The claimant (Player 1) opened with the
//! public claim; the respondent (Player 2) answered with the public offer.
//! Role assignment is fixed at dispute creation and never changes.

use serde::{Deserialize, Serialize};

/// One of the two bargaining parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// Player 1 — holds the public claim and a private floor.
    Claimant,
    /// Player 2 — holds the public offer and a private ceiling.
    Respondent,
}

impl Party {
    /// The counterparty.
    pub fn other(&self) -> Party {
        match self {
            Self::Claimant => Self::Respondent,
            Self::Respondent => Self::Claimant,
        }
    }

    /// The canonical string name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claimant => "claimant",
            Self::Respondent => "respondent",
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
