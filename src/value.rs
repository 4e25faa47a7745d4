//! Dynamic value representation for parsed configuration files.
//!
//! This module provides the [`ConfigValue`] enum which represents any node of a
//! TOML document, and [`Datetime`] for the four TOML temporal forms.
//!
//! ## Core Types
//!
//! - [`ConfigValue`]: a table, an array, or one of the scalar leaves
//! - [`Datetime`]: offset datetime, local datetime, local date or local time,
//!   backed by `chrono`
//!
//! `ConfigValue` has a total order (see [`crate::canonical`]), so values of any
//! kind can be compared and sorted, including mixed-kind arrays.
//!
//! ## Examples
//!
//! ```rust
//! use pyprojectsort::{ConfigMap, ConfigValue};
//!
//! let mut tool = ConfigMap::new();
//! tool.insert("line-length".to_string(), ConfigValue::from(88));
//!
//! let value = ConfigValue::Table(tool);
//! assert!(value.is_table());
//! assert_eq!(
//!     value.as_table().and_then(|t| t.get("line-length")).and_then(|v| v.as_integer()),
//!     Some(88)
//! );
//! ```

use crate::error::{Error, Result};
use crate::ConfigMap;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
};
use serde::{Serialize, Serializer};
use std::fmt;

/// Any node of a parsed configuration file.
///
/// Equality and ordering are defined in [`crate::canonical`]: they depend on
/// content only, so two tables with the same pairs in different orders are
/// equal.
#[derive(Clone, Debug)]
pub enum ConfigValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Datetime(Datetime),
    Array(Vec<ConfigValue>),
    Table(ConfigMap),
}

/// A TOML date, time, or datetime.
///
/// # Examples
///
/// ```rust
/// use pyprojectsort::Datetime;
/// use chrono::NaiveDate;
///
/// let release = Datetime::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// assert_eq!(release.to_string(), "2024-01-15");
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Datetime {
    /// `1979-05-27T07:32:00-08:00`
    Offset(DateTime<FixedOffset>),
    /// `1979-05-27T07:32:00`
    Local(NaiveDateTime),
    /// `1979-05-27`
    Date(NaiveDate),
    /// `07:32:00`
    Time(NaiveTime),
}

impl ConfigValue {
    /// Returns a short name for the kind of this value, as used in messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Datetime(_) => "datetime",
            ConfigValue::Array(_) => "array",
            ConfigValue::Table(_) => "table",
        }
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, ConfigValue::Table(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, ConfigValue::Array(_))
    }

    /// Returns `true` if the value is neither a table nor an array.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !self.is_table() && !self.is_array()
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyprojectsort::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(ConfigValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a datetime, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&Datetime> {
        match self {
            ConfigValue::Datetime(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<ConfigValue>> {
        match self {
            ConfigValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a table, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConfigValue::Boolean(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(i) => serializer.serialize_i64(*i),
            ConfigValue::Float(f) => serializer.serialize_f64(*f),
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::Datetime(dt) => toml::value::Datetime::from(*dt).serialize(serializer),
            ConfigValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ConfigValue::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

// Conversions from the parser's tree
impl TryFrom<toml::Value> for ConfigValue {
    type Error = Error;

    fn try_from(value: toml::Value) -> Result<Self> {
        Ok(match value {
            toml::Value::Boolean(b) => ConfigValue::Boolean(b),
            toml::Value::Integer(i) => ConfigValue::Integer(i),
            toml::Value::Float(f) => ConfigValue::Float(f),
            toml::Value::String(s) => ConfigValue::String(s),
            toml::Value::Datetime(dt) => ConfigValue::Datetime(Datetime::try_from(dt)?),
            toml::Value::Array(arr) => ConfigValue::Array(
                arr.into_iter()
                    .map(ConfigValue::try_from)
                    .collect::<Result<_>>()?,
            ),
            toml::Value::Table(table) => ConfigValue::Table(ConfigMap::try_from(table)?),
        })
    }
}

impl TryFrom<toml::Table> for ConfigMap {
    type Error = Error;

    fn try_from(table: toml::Table) -> Result<Self> {
        table
            .into_iter()
            .map(|(k, v)| ConfigValue::try_from(v).map(|v| (k, v)))
            .collect()
    }
}

impl TryFrom<toml::value::Datetime> for Datetime {
    type Error = Error;

    fn try_from(dt: toml::value::Datetime) -> Result<Self> {
        let invalid = || Error::invalid_datetime(dt);

        let date = match dt.date {
            Some(d) => Some(
                NaiveDate::from_ymd_opt(i32::from(d.year), u32::from(d.month), u32::from(d.day))
                    .ok_or_else(invalid)?,
            ),
            None => None,
        };
        let time = match dt.time {
            Some(t) => Some(
                NaiveTime::from_hms_nano_opt(
                    u32::from(t.hour),
                    u32::from(t.minute),
                    u32::from(t.second),
                    t.nanosecond,
                )
                .ok_or_else(invalid)?,
            ),
            None => None,
        };
        let offset = match dt.offset {
            Some(toml::value::Offset::Z) => Some(FixedOffset::east_opt(0).ok_or_else(invalid)?),
            Some(toml::value::Offset::Custom { minutes }) => {
                Some(FixedOffset::east_opt(i32::from(minutes) * 60).ok_or_else(invalid)?)
            }
            None => None,
        };

        match (date, time, offset) {
            (Some(date), Some(time), Some(offset)) => date
                .and_time(time)
                .and_local_timezone(offset)
                .single()
                .map(Datetime::Offset)
                .ok_or_else(invalid),
            (Some(date), Some(time), None) => Ok(Datetime::Local(date.and_time(time))),
            (Some(date), None, None) => Ok(Datetime::Date(date)),
            (None, Some(time), None) => Ok(Datetime::Time(time)),
            _ => Err(invalid()),
        }
    }
}

fn toml_date(date: NaiveDate) -> toml::value::Date {
    toml::value::Date {
        year: date.year() as u16,
        month: date.month() as u8,
        day: date.day() as u8,
    }
}

fn toml_time(time: NaiveTime) -> toml::value::Time {
    toml::value::Time {
        hour: time.hour() as u8,
        minute: time.minute() as u8,
        second: time.second() as u8,
        nanosecond: time.nanosecond(),
    }
}

impl From<Datetime> for toml::value::Datetime {
    fn from(dt: Datetime) -> Self {
        match dt {
            Datetime::Offset(odt) => {
                let seconds = odt.offset().local_minus_utc();
                let offset = if seconds == 0 {
                    toml::value::Offset::Z
                } else {
                    toml::value::Offset::Custom {
                        minutes: (seconds / 60) as i16,
                    }
                };
                let local = odt.naive_local();
                toml::value::Datetime {
                    date: Some(toml_date(local.date())),
                    time: Some(toml_time(local.time())),
                    offset: Some(offset),
                }
            }
            Datetime::Local(ldt) => toml::value::Datetime {
                date: Some(toml_date(ldt.date())),
                time: Some(toml_time(ldt.time())),
                offset: None,
            },
            Datetime::Date(date) => toml::value::Datetime {
                date: Some(toml_date(date)),
                time: None,
                offset: None,
            },
            Datetime::Time(time) => toml::value::Datetime {
                date: None,
                time: Some(toml_time(time)),
                offset: None,
            },
        }
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&toml::value::Datetime::from(*self), f)
    }
}

// From implementations for building values by hand
impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<Datetime> for ConfigValue {
    fn from(value: Datetime) -> Self {
        ConfigValue::Datetime(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        ConfigValue::Array(value)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(value: ConfigMap) -> Self {
        ConfigValue::Table(value)
    }
}
