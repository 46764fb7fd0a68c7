//! Flat settings record produced by the browser settings editor
//!
//! Every field is stored by its camelCase form name. Values are kept
//! loosely typed so that any JSON the form layer hands over can be
//! exported without failing.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::defaults::default_fields;
use crate::constants::format;

/// Wall-clock hour/minute pair (date is irrelevant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Zero-padded 24-hour `HHMM`, e.g. 09:05 → `0905`
    pub fn to_hhmm(&self) -> String {
        format!("{:02}{:02}", self.hour, self.minute)
    }
}

/// Accepts only `{ "hour": H, "minute": M }` objects
///
/// A derived impl would also take `[H, M]`, which turns plain two-number
/// lists into times.
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with `hour` and `minute`")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TimeOfDay, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut hour: Option<u8> = None;
                let mut minute: Option<u8> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "hour" => hour = Some(map.next_value()?),
                        "minute" => minute = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                let hour = hour.ok_or_else(|| de::Error::missing_field("hour"))?;
                let minute = minute.ok_or_else(|| de::Error::missing_field("minute"))?;
                Ok(TimeOfDay { hour, minute })
            }
        }

        deserializer.deserialize_map(TimeOfDayVisitor)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A single form value
///
/// Deserialization tries the variants in order, so `null`, booleans,
/// numbers and strings land in their own variant, `{hour, minute}`
/// objects become [`FieldValue::Time`] and anything else is kept as raw
/// JSON in [`FieldValue::Other`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Time(TimeOfDay),
    Other(serde_json::Value),
}

static NULL_FIELD: FieldValue = FieldValue::Null;

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn int(value: i64) -> Self {
        FieldValue::Number(value.into())
    }

    /// Non-finite floats have no JSON form and become `Null`
    pub fn float(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(FieldValue::Null, FieldValue::Number)
    }

    pub fn time(hour: u8, minute: u8) -> Self {
        FieldValue::Time(TimeOfDay::new(hour, minute))
    }

    /// Generic rendering used for every `Key: Value` line
    ///
    /// `true`/`false` become `True`/`False`, `null` becomes empty, and
    /// everything else is written in its natural string form.
    pub fn to_config_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(flag) => bool_text(*flag).to_string(),
            FieldValue::Number(number) => number_text(number),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Time(time) => time.to_string(),
            FieldValue::Other(value) => json_text(value),
        }
    }

    /// Whether the rendered value counts as set when pairing fields
    ///
    /// Null, empty text and numeric zero are unset. Booleans are always
    /// set since they render as `True`/`False`.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(_) => true,
            FieldValue::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Time(_) => true,
            FieldValue::Other(_) => true,
        }
    }

    /// True only for a literal boolean `true`
    pub fn is_true(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<TimeOfDay> for FieldValue {
    fn from(value: TimeOfDay) -> Self {
        FieldValue::Time(value)
    }
}

fn bool_text(flag: bool) -> &'static str {
    if flag { format::TRUE } else { format::FALSE }
}

/// Whole floats are written without a decimal point (`2.0` → `2`)
fn number_text(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

fn json_text(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => bool_text(*flag).to_string(),
        Value::Number(number) => number_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(json_text)
            .collect::<Vec<_>>()
            .join(format::LIST_SEPARATOR),
        Value::Object(_) => value.to_string(),
    }
}

/// Flat mapping from form field name to value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ConfigRecord {
    /// Record with no fields at all (every lookup yields `Null`)
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Lookup that never fails: missing fields read as `Null`
    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&NULL_FIELD)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder form of [`ConfigRecord::set`]
    #[cfg(test)]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fill every documented field missing from `partial` with its default
    ///
    /// Fields already present, explicit nulls included, are kept as given.
    pub fn with_defaults(partial: ConfigRecord) -> Self {
        let mut record = partial;
        let mut filled = 0usize;
        for (name, value) in default_fields() {
            if !record.contains(name) {
                record.set(name, value);
                filled += 1;
            }
        }
        debug!(filled, total = record.len(), "applied field defaults");
        record
    }
}

impl FromIterator<(String, FieldValue)> for ConfigRecord {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FieldValue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_time_of_day_hhmm() {
        assert_eq!(TimeOfDay::new(0, 0).to_hhmm(), "0000");
        assert_eq!(TimeOfDay::new(23, 59).to_hhmm(), "2359");
        assert_eq!(TimeOfDay::new(9, 5).to_hhmm(), "0905");
    }

    #[test]
    fn test_untagged_deserialization_picks_variant() {
        assert_eq!(parse("null"), FieldValue::Null);
        assert_eq!(parse("true"), FieldValue::Bool(true));
        assert_eq!(parse("3"), FieldValue::int(3));
        assert_eq!(parse("\"1-1\""), FieldValue::text("1-1"));
        assert_eq!(parse(r#"{"hour": 9, "minute": 5}"#), FieldValue::time(9, 5));
        assert!(matches!(parse("[1, 2]"), FieldValue::Other(_)));
        assert!(matches!(parse("[9, 5]"), FieldValue::Other(_)));
        assert!(matches!(parse(r#"{"hour": 9}"#), FieldValue::Other(_)));
    }

    #[test]
    fn test_time_of_day_rejects_sequences() {
        assert!(serde_json::from_str::<TimeOfDay>("[9, 5]").is_err());
        assert_eq!(
            serde_json::from_str::<TimeOfDay>(r#"{"minute": 5, "hour": 9, "second": 0}"#).unwrap(),
            TimeOfDay::new(9, 5)
        );
        assert_eq!(parse("[5, 12]").to_config_text(), "5,12");
    }

    #[test]
    fn test_config_text_generic_rules() {
        assert_eq!(FieldValue::Bool(true).to_config_text(), "True");
        assert_eq!(FieldValue::Bool(false).to_config_text(), "False");
        assert_eq!(FieldValue::Null.to_config_text(), "");
        assert_eq!(FieldValue::text("Chrome").to_config_text(), "Chrome");
        assert_eq!(FieldValue::int(-9).to_config_text(), "-9");
        assert_eq!(FieldValue::float(3.5).to_config_text(), "3.5");
        assert_eq!(FieldValue::float(2.0).to_config_text(), "2");
        assert_eq!(parse("[2, \"A\", true]").to_config_text(), "2,A,True");
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(FieldValue::float(f64::NAN), FieldValue::Null);
    }

    #[test]
    fn test_is_present() {
        assert!(!FieldValue::Null.is_present());
        assert!(!FieldValue::text("").is_present());
        assert!(!FieldValue::int(0).is_present());
        assert!(!FieldValue::float(0.0).is_present());
        assert!(FieldValue::Bool(false).is_present());
        assert!(FieldValue::text("A2").is_present());
        assert!(FieldValue::int(4).is_present());
    }

    #[test]
    fn test_missing_field_reads_as_null() {
        let record = ConfigRecord::empty();
        assert_eq!(record.get("generalProgram"), &FieldValue::Null);
    }

    #[test]
    fn test_with_defaults_keeps_given_fields() {
        let partial = ConfigRecord::empty()
            .with("generalProgram", "Firefox")
            .with("combatMap", FieldValue::Null)
            .with("customField", "kept");

        let record = ConfigRecord::with_defaults(partial);

        assert_eq!(record.get("generalProgram"), &FieldValue::text("Firefox"));
        assert_eq!(record.get("combatMap"), &FieldValue::Null);
        assert_eq!(record.get("customField"), &FieldValue::text("kept"));
        assert_eq!(record.get("questsEnabled"), &FieldValue::Bool(true));
    }

    #[test]
    fn test_record_json_is_flat_object() {
        let record = ConfigRecord::empty()
            .with("pvpEnabled", true)
            .with("scheduledSleepSleepStartTime", TimeOfDay::new(0, 30));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pvpEnabled": true,
                "scheduledSleepSleepStartTime": { "hour": 0, "minute": 30 },
            })
        );

        let back: ConfigRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
