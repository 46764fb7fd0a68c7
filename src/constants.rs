//! Application-wide constants
//!
//! Section names, option tags and formatting literals for the exported
//! config file, kept in one place so the layout table and the override
//! rules agree on spelling.

/// Section header names, in file order
pub mod sections {
    pub const GENERAL: &str = "General";
    pub const SCHEDULED_SLEEP: &str = "ScheduledSleep";
    pub const EXPEDITIONS: &str = "Expeditions";
    pub const PVP: &str = "PvP";
    pub const COMBAT: &str = "Combat";
    pub const SHIP_SWITCHER: &str = "ShipSwitcher";
    pub const QUESTS: &str = "Quests";
}

/// Literals written into `Key: Value` lines
pub mod format {
    /// Separator between key and value (single space after the colon)
    pub const KEY_VALUE_SEPARATOR: &str = ": ";

    /// Rendering of boolean `true`
    pub const TRUE: &str = "True";

    /// Rendering of boolean `false`
    pub const FALSE: &str = "False";

    /// Joiner for node pairs and option lists
    pub const LIST_SEPARATOR: &str = ",";

    /// Joiner for lines when the config is written out as one text blob
    pub const LINE_SEPARATOR: &str = "\n";
}

/// Tags emitted in `[Combat] MiscOptions`, in declaration order
pub mod misc_options {
    pub const CHECK_FATIGUE: &str = "CheckFatigue";
    pub const RESERVE_DOCKS: &str = "ReserveDocks";
    pub const PORT_CHECK: &str = "PortCheck";
    pub const CLEAR_STOP: &str = "ClearStop";
}

/// Process environment
pub mod env {
    /// Environment variable selecting the log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";

    /// Log level used when `LOG_LEVEL` is unset or unrecognised
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
