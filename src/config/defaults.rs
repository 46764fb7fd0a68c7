//! Default values for every form field
//!
//! The table below is the single list of documented fields. Its order
//! follows the editor's groups and is used when listing fields.

use clap::ValueEnum;

use super::record::{ConfigRecord, FieldValue};

/// Logical group a field belongs to in the settings editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldGroup {
    General,
    ScheduledSleep,
    Expeditions,
    #[value(name = "pvp")]
    PvP,
    Combat,
    ShipSwitcher,
    Quests,
}

/// Const-friendly stand-in for [`FieldValue`]
#[derive(Debug, Clone, Copy)]
enum Seed {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'static str),
    Time(u8, u8),
}

impl Seed {
    fn to_value(self) -> FieldValue {
        match self {
            Seed::Null => FieldValue::Null,
            Seed::Bool(flag) => FieldValue::Bool(flag),
            Seed::Int(n) => FieldValue::int(n),
            Seed::Float(f) => FieldValue::float(f),
            Seed::Text(text) => FieldValue::text(text),
            Seed::Time(hour, minute) => FieldValue::time(hour, minute),
        }
    }
}

struct FieldDefault {
    name: &'static str,
    group: FieldGroup,
    seed: Seed,
}

const fn field(name: &'static str, group: FieldGroup, seed: Seed) -> FieldDefault {
    FieldDefault { name, group, seed }
}

use FieldGroup::*;

const DEFAULTS: &[FieldDefault] = &[
    field("generalProgram", General, Seed::Text("Chrome")),
    field("generalJSTOffset", General, Seed::Int(0)),
    field("generalPause", General, Seed::Bool(false)),
    field("scheduledSleepSleepEnabled", ScheduledSleep, Seed::Bool(true)),
    field("scheduledSleepSleepStartTime", ScheduledSleep, Seed::Time(0, 30)),
    field("scheduledSleepSleepLength", ScheduledSleep, Seed::Float(3.5)),
    field("scheduledSleepExpeditionSleepEnabled", ScheduledSleep, Seed::Bool(false)),
    field("scheduledSleepExpeditionSleepStartTime", ScheduledSleep, Seed::Null),
    field("scheduledSleepExpeditionSleepLength", ScheduledSleep, Seed::Float(3.5)),
    field("scheduledSleepCombatSleepEnabled", ScheduledSleep, Seed::Bool(false)),
    field("scheduledSleepCombatSleepStartTime", ScheduledSleep, Seed::Null),
    field("scheduledSleepCombatSleepLength", ScheduledSleep, Seed::Float(3.5)),
    field("expeditionsEnabled", Expeditions, Seed::Bool(true)),
    field("expeditionsFleet2", Expeditions, Seed::Text("2")),
    field("expeditionsFleet3", Expeditions, Seed::Text("5")),
    field("expeditionsFleet4", Expeditions, Seed::Text("21")),
    field("pvpEnabled", PvP, Seed::Bool(false)),
    field("combatEnabled", Combat, Seed::Bool(false)),
    field("combatEngine", Combat, Seed::Text("legacy")),
    field("combatMap", Combat, Seed::Text("1-1")),
    field("combatFleetMode", Combat, Seed::Text("")),
    field("combatCombatNodes", Combat, Seed::Null),
    field("combatNodeSelects", Combat, Seed::Null),
    field("combatFormations", Combat, Seed::Null),
    field("combatNightBattles", Combat, Seed::Null),
    field("combatRetreatLimit", Combat, Seed::Text("heavy")),
    field("combatRepairLimit", Combat, Seed::Text("moderate")),
    field("combatRepairTimeLimit", Combat, Seed::Time(0, 30)),
    field("combatLBASGroups", Combat, Seed::Null),
    field("combatLBASGroup1Node1", Combat, Seed::Null),
    field("combatLBASGroup1Node2", Combat, Seed::Null),
    field("combatLBASGroup2Node1", Combat, Seed::Null),
    field("combatLBASGroup2Node2", Combat, Seed::Null),
    field("combatLBASGroup3Node1", Combat, Seed::Null),
    field("combatLBASGroup3Node2", Combat, Seed::Null),
    field("combatForceRetreatNodes", Combat, Seed::Null),
    field("combatOptionCheckFatigue", Combat, Seed::Bool(false)),
    field("combatOptionReserveDocks", Combat, Seed::Bool(false)),
    field("combatOptionPortCheck", Combat, Seed::Bool(false)),
    field("combatOptionClearStop", Combat, Seed::Bool(false)),
    field("shipSwitcherEnabled", ShipSwitcher, Seed::Bool(false)),
    field("shipSwitcherSlot1Criteria", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot1Ships", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot2Criteria", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot2Ships", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot3Criteria", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot3Ships", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot4Criteria", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot4Ships", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot5Criteria", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot5Ships", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot6Criteria", ShipSwitcher, Seed::Null),
    field("shipSwitcherSlot6Ships", ShipSwitcher, Seed::Null),
    field("questsEnabled", Quests, Seed::Bool(true)),
];

/// Every documented field paired with its default value, in table order
pub fn default_fields() -> impl Iterator<Item = (&'static str, FieldValue)> {
    DEFAULTS.iter().map(|entry| (entry.name, entry.seed.to_value()))
}

/// Names of the fields in one group, in table order
pub fn field_names(group: FieldGroup) -> impl Iterator<Item = &'static str> {
    DEFAULTS
        .iter()
        .filter(move |entry| entry.group == group)
        .map(|entry| entry.name)
}

pub fn all_field_names() -> impl Iterator<Item = &'static str> {
    DEFAULTS.iter().map(|entry| entry.name)
}

pub fn is_documented(name: &str) -> bool {
    DEFAULTS.iter().any(|entry| entry.name == name)
}

impl Default for ConfigRecord {
    fn default() -> Self {
        default_fields()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}
