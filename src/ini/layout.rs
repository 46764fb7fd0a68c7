//! Fixed section layout of the exported file
//!
//! The consumer reads keys by section and position, so both the section
//! order and the key order inside each section are part of the format.

use crate::constants::sections;

/// One `[Name]` block: output key paired with the field it is read from
#[derive(Debug)]
pub struct Section {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const LAYOUT: &[Section] = &[
    Section {
        name: sections::GENERAL,
        entries: &[
            ("Program", "generalProgram"),
            ("JSTOffset", "generalJSTOffset"),
            ("Pause", "generalPause"),
        ],
    },
    Section {
        name: sections::SCHEDULED_SLEEP,
        entries: &[
            ("SleepEnabled", "scheduledSleepSleepEnabled"),
            ("SleepStartTime", "scheduledSleepSleepStartTime"),
            ("SleepLength", "scheduledSleepSleepLength"),
            ("ExpeditionSleepEnabled", "scheduledSleepExpeditionSleepEnabled"),
            ("ExpeditionSleepStartTime", "scheduledSleepExpeditionSleepStartTime"),
            ("ExpeditionSleepLength", "scheduledSleepExpeditionSleepLength"),
            ("CombatSleepEnabled", "scheduledSleepCombatSleepEnabled"),
            ("CombatSleepStartTime", "scheduledSleepCombatSleepStartTime"),
            ("CombatSleepLength", "scheduledSleepCombatSleepLength"),
        ],
    },
    Section {
        name: sections::EXPEDITIONS,
        entries: &[
            ("Enabled", "expeditionsEnabled"),
            ("Fleet2", "expeditionsFleet2"),
            ("Fleet3", "expeditionsFleet3"),
            ("Fleet4", "expeditionsFleet4"),
        ],
    },
    Section {
        name: sections::PVP,
        entries: &[("Enabled", "pvpEnabled")],
    },
    Section {
        name: sections::COMBAT,
        entries: &[
            ("Enabled", "combatEnabled"),
            ("Engine", "combatEngine"),
            ("Map", "combatMap"),
            ("FleetMode", "combatFleetMode"),
            ("CombatNodes", "combatCombatNodes"),
            ("NodeSelects", "combatNodeSelects"),
            ("Formations", "combatFormations"),
            ("NightBattles", "combatNightBattles"),
            ("RetreatLimit", "combatRetreatLimit"),
            ("RepairLimit", "combatRepairLimit"),
            ("RepairTimeLimit", "combatRepairTimeLimit"),
            ("LBASGroups", "combatLBASGroups"),
            // derived by the override rules
            ("LBASGroup1Nodes", "combatLBASGroup1Nodes"),
            ("LBASGroup2Nodes", "combatLBASGroup2Nodes"),
            ("LBASGroup3Nodes", "combatLBASGroup3Nodes"),
            ("ForceRetreatNodes", "combatForceRetreatNodes"),
            ("MiscOptions", "combatMiscOptions"),
        ],
    },
    Section {
        name: sections::SHIP_SWITCHER,
        entries: &[
            ("Enabled", "shipSwitcherEnabled"),
            ("Slot1Criteria", "shipSwitcherSlot1Criteria"),
            ("Slot1Ships", "shipSwitcherSlot1Ships"),
            ("Slot2Criteria", "shipSwitcherSlot2Criteria"),
            ("Slot2Ships", "shipSwitcherSlot2Ships"),
            ("Slot3Criteria", "shipSwitcherSlot3Criteria"),
            ("Slot3Ships", "shipSwitcherSlot3Ships"),
            ("Slot4Criteria", "shipSwitcherSlot4Criteria"),
            ("Slot4Ships", "shipSwitcherSlot4Ships"),
            ("Slot5Criteria", "shipSwitcherSlot5Criteria"),
            ("Slot5Ships", "shipSwitcherSlot5Ships"),
            ("Slot6Criteria", "shipSwitcherSlot6Criteria"),
            ("Slot6Ships", "shipSwitcherSlot6Ships"),
        ],
    },
    Section {
        name: sections::QUESTS,
        entries: &[("Enabled", "questsEnabled")],
    },
];

/// Number of lines a serialized config always has
pub fn line_count() -> usize {
    let keys: usize = LAYOUT.iter().map(|section| section.entries.len()).sum();
    // headers plus one separator between consecutive sections
    keys + LAYOUT.len() * 2 - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::is_documented;
    use crate::ini::overrides::derived_fields;

    #[test]
    fn test_every_source_field_is_known() {
        let derived: Vec<_> = derived_fields().collect();
        for section in LAYOUT {
            for (key, field) in section.entries {
                assert!(
                    is_documented(field) || derived.contains(field),
                    "[{}] {key} reads unknown field {field}",
                    section.name
                );
            }
        }
    }

    #[test]
    fn test_section_order() {
        let names: Vec<_> = LAYOUT.iter().map(|section| section.name).collect();
        assert_eq!(
            names,
            vec!["General", "ScheduledSleep", "Expeditions", "PvP", "Combat", "ShipSwitcher", "Quests"]
        );
    }

    #[test]
    fn test_line_count() {
        // 48 keys, 7 headers, 6 separators
        assert_eq!(line_count(), 61);
    }
}
