//! Factions and their alliances

use serde::Serialize;

/// An alliance entry held by a faction, naming the ally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alliance {
    pub ally: String,
}

/// A player faction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faction {
    pub name: String,
    /// May go negative under attack or construction costs
    pub resources: i32,
    pub power: i32,
    /// Newest first
    alliances: Vec<Alliance>,
}

impl Faction {
    pub fn new(name: impl Into<String>, resources: i32, power: i32) -> Self {
        Self {
            name: name.into(),
            resources,
            power,
            alliances: Vec::new(),
        }
    }

    /// Alliance entries, most recent first
    pub fn alliances(&self) -> &[Alliance] {
        &self.alliances
    }

    pub fn is_allied_with(&self, name: &str) -> bool {
        self.alliances.iter().any(|a| a.ally == name)
    }

    /// Record an alliance with `ally`. Returns false if one was already recorded.
    pub fn add_alliance(&mut self, ally: &str) -> bool {
        if self.is_allied_with(ally) {
            return false;
        }
        self.alliances.insert(
            0,
            Alliance {
                ally: ally.to_string(),
            },
        );
        true
    }

    /// Victory score: power plus resources
    pub fn score(&self) -> i64 {
        i64::from(self.power) + i64::from(self.resources)
    }
}
