//! End-of-run winner

use crate::entity::Faction;

/// Faction with the highest power plus resources
///
/// Factions are visited in the order given; on a tie the first one visited
/// keeps the lead. Fed from the faction registry this favours the most
/// recently positioned faction.
pub fn select_winner<'a>(factions: impl IntoIterator<Item = &'a Faction>) -> Option<&'a Faction> {
    let mut best: Option<&Faction> = None;
    for faction in factions {
        if best.map_or(true, |b| faction.score() > b.score()) {
            best = Some(faction);
        }
    }
    best
}
