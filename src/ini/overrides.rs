//! Field-specific rendering applied after the generic pass
//!
//! Rules run in declaration order and only ever write the fields they
//! name, so each one can be checked on its own.

use std::collections::BTreeMap;
use tracing::trace;

use crate::config::{ConfigRecord, FieldValue};
use crate::constants::{format, misc_options};

/// Rendered text per field name, as produced by the generic pass
pub type Rendered = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy)]
pub enum OverrideRule {
    /// `TimeOfDay` → `HHMM`, null → empty
    Time { field: &'static str },
    /// Derived `"<first>,<second>"`, empty unless both nodes are set
    NodePair {
        target: &'static str,
        first: &'static str,
        second: &'static str,
    },
    /// Derived comma list of the tags whose flag is literally `true`
    OptionTags {
        target: &'static str,
        options: &'static [(&'static str, &'static str)],
    },
    /// Both fields blanked unless both are set
    SlotPair {
        criteria: &'static str,
        ships: &'static str,
    },
}

pub const OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule::Time { field: "scheduledSleepSleepStartTime" },
    OverrideRule::Time { field: "scheduledSleepExpeditionSleepStartTime" },
    OverrideRule::Time { field: "scheduledSleepCombatSleepStartTime" },
    OverrideRule::Time { field: "combatRepairTimeLimit" },
    OverrideRule::NodePair {
        target: "combatLBASGroup1Nodes",
        first: "combatLBASGroup1Node1",
        second: "combatLBASGroup1Node2",
    },
    OverrideRule::NodePair {
        target: "combatLBASGroup2Nodes",
        first: "combatLBASGroup2Node1",
        second: "combatLBASGroup2Node2",
    },
    OverrideRule::NodePair {
        target: "combatLBASGroup3Nodes",
        first: "combatLBASGroup3Node1",
        second: "combatLBASGroup3Node2",
    },
    OverrideRule::OptionTags {
        target: "combatMiscOptions",
        options: &[
            ("combatOptionCheckFatigue", misc_options::CHECK_FATIGUE),
            ("combatOptionReserveDocks", misc_options::RESERVE_DOCKS),
            ("combatOptionPortCheck", misc_options::PORT_CHECK),
            ("combatOptionClearStop", misc_options::CLEAR_STOP),
        ],
    },
    OverrideRule::SlotPair { criteria: "shipSwitcherSlot1Criteria", ships: "shipSwitcherSlot1Ships" },
    OverrideRule::SlotPair { criteria: "shipSwitcherSlot2Criteria", ships: "shipSwitcherSlot2Ships" },
    OverrideRule::SlotPair { criteria: "shipSwitcherSlot3Criteria", ships: "shipSwitcherSlot3Ships" },
    OverrideRule::SlotPair { criteria: "shipSwitcherSlot4Criteria", ships: "shipSwitcherSlot4Ships" },
    OverrideRule::SlotPair { criteria: "shipSwitcherSlot5Criteria", ships: "shipSwitcherSlot5Ships" },
    OverrideRule::SlotPair { criteria: "shipSwitcherSlot6Criteria", ships: "shipSwitcherSlot6Ships" },
];

/// Fields that exist only as rule output, never as form input
pub fn derived_fields() -> impl Iterator<Item = &'static str> {
    OVERRIDE_RULES.iter().filter_map(|rule| match rule {
        OverrideRule::NodePair { target, .. } | OverrideRule::OptionTags { target, .. } => Some(*target),
        OverrideRule::Time { .. } | OverrideRule::SlotPair { .. } => None,
    })
}

impl OverrideRule {
    /// Rewrite this rule's fields in `rendered`, reading raw values from `record`
    pub fn apply(&self, record: &ConfigRecord, rendered: &mut Rendered) {
        match *self {
            OverrideRule::Time { field } => {
                // other value kinds keep their generic rendering
                let text = match record.get(field) {
                    FieldValue::Time(time) => time.to_hhmm(),
                    FieldValue::Null => String::new(),
                    _ => return,
                };
                rendered.insert(field.to_string(), text);
            }
            OverrideRule::NodePair { target, first, second } => {
                // a numeric 0 node counts as unset and suppresses the pair
                let text = if record.get(first).is_present() && record.get(second).is_present() {
                    [rendered_text(rendered, first), rendered_text(rendered, second)]
                        .join(format::LIST_SEPARATOR)
                } else {
                    trace!(field = target, "node pair incomplete, leaving blank");
                    String::new()
                };
                rendered.insert(target.to_string(), text);
            }
            OverrideRule::OptionTags { target, options } => {
                let text = options
                    .iter()
                    .filter(|(flag, _)| record.get(flag).is_true())
                    .map(|(_, tag)| *tag)
                    .collect::<Vec<_>>()
                    .join(format::LIST_SEPARATOR);
                rendered.insert(target.to_string(), text);
            }
            OverrideRule::SlotPair { criteria, ships } => {
                if !(record.get(criteria).is_present() && record.get(ships).is_present()) {
                    trace!(criteria, ships, "slot incomplete, blanking both fields");
                    rendered.insert(criteria.to_string(), String::new());
                    rendered.insert(ships.to_string(), String::new());
                }
            }
        }
    }
}

fn rendered_text<'a>(rendered: &'a Rendered, field: &str) -> &'a str {
    rendered.get(field).map(String::as_str).unwrap_or_default()
}
