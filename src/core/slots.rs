use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{Availability, SlotGroup};

/// Group availability poll responses by time slot
///
/// Groups come back in chronological order. Within a group, respondents
/// keep first-seen order and a player answering the same slot twice counts
/// once. Empty input yields empty output.
pub fn group_by_slot(entries: &[Availability]) -> Vec<SlotGroup> {
    let mut groups: BTreeMap<DateTime<Utc>, Vec<String>> = BTreeMap::new();

    for entry in entries {
        let players = groups.entry(entry.slot).or_default();
        if !players.iter().any(|id| id == &entry.player_id) {
            players.push(entry.player_id.clone());
        }
    }

    groups
        .into_iter()
        .map(|(slot, player_ids)| SlotGroup {
            slot,
            count: player_ids.len(),
            player_ids,
        })
        .collect()
}
