//! Cumulative standing between the two parties

use serde::{Deserialize, Serialize};

/// Who is ahead on cumulative score.
///
/// Strictly higher total wins; equal totals are a tie. This is advisory:
/// it is handed to the judge model, which writes its own narrative verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Standing {
    Leader { name: String, margin: u32 },
    Tie,
}

impl Standing {
    pub fn from_totals(party1: (&str, u32), party2: (&str, u32)) -> Self {
        let ((name1, total1), (name2, total2)) = (party1, party2);
        match total1.cmp(&total2) {
            std::cmp::Ordering::Greater => Standing::Leader {
                name: name1.to_string(),
                margin: total1 - total2,
            },
            std::cmp::Ordering::Less => Standing::Leader {
                name: name2.to_string(),
                margin: total2 - total1,
            },
            std::cmp::Ordering::Equal => Standing::Tie,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Standing::Tie)
    }

    pub fn leader(&self) -> Option<&str> {
        match self {
            Standing::Leader { name, .. } => Some(name),
            Standing::Tie => None,
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Standing::Leader { name, margin } => {
                write!(f, "{} leads by {} point{}", name, margin, if *margin == 1 { "" } else { "s" })
            }
            Standing::Tie => write!(f, "Tie"),
        }
    }
}
