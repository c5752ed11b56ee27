//! Modifiers - Additive stat-name → value mappings

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A stat value that remembers whether it is whole or decimal
///
/// Whole values stay whole while only whole values are added to them. Any
/// decimal contribution makes the sum decimal, even if it lands on an integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl StatValue {
    pub fn as_f64(self) -> f64 {
        match self {
            StatValue::Int(v) => v as f64,
            StatValue::Float(v) => v,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, StatValue::Float(_))
    }
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Int(0)
    }
}

impl Add for StatValue {
    type Output = StatValue;

    fn add(self, rhs: StatValue) -> StatValue {
        match (self, rhs) {
            (StatValue::Int(a), StatValue::Int(b)) => match a.checked_add(b) {
                Some(sum) => StatValue::Int(sum),
                None => StatValue::Float(a as f64 + b as f64),
            },
            (a, b) => StatValue::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl AddAssign for StatValue {
    fn add_assign(&mut self, rhs: StatValue) {
        *self = *self + rhs;
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Int(value)
    }
}

impl From<i32> for StatValue {
    fn from(value: i32) -> Self {
        StatValue::Int(i64::from(value))
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

/// Whole values print bare, decimal values always keep a fractional part
impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(v) => f.pad(&v.to_string()),
            StatValue::Float(v) => f.pad(&format!("{:?}", v)),
        }
    }
}

/// A bag of named stat modifiers
///
/// The stat vocabulary is open: any name is a valid key. Contributions to the
/// same key are summed, and reading a key that was never added yields `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(BTreeMap<String, StatValue>);

impl Modifiers {
    /// Create an empty modifier mapping
    pub fn new() -> Self {
        Modifiers(BTreeMap::new())
    }

    /// Read a stat, defaulting to zero when absent
    pub fn get(&self, stat: &str) -> f64 {
        self.value(stat).as_f64()
    }

    /// Read a stat with its whole/decimal kind, defaulting to whole zero
    pub fn value(&self, stat: &str) -> StatValue {
        self.0.get(stat).copied().unwrap_or_default()
    }

    /// Whether the stat has an entry (even a zero one)
    pub fn contains(&self, stat: &str) -> bool {
        self.0.contains_key(stat)
    }

    /// Add a value to a stat
    pub fn add(&mut self, stat: &str, value: impl Into<StatValue>) {
        let value = value.into();
        match self.0.get_mut(stat) {
            Some(existing) => *existing += value,
            None => {
                self.0.insert(stat.to_string(), value);
            }
        }
    }

    /// Add every entry of `other` into this mapping
    pub fn merge(&mut self, other: &Modifiers) {
        for (stat, value) in &other.0 {
            self.add(stat, *value);
        }
    }

    /// Remove a stat, returning the value it held (whole zero if absent)
    pub fn remove(&mut self, stat: &str) -> StatValue {
        self.0.remove(stat).unwrap_or_default()
    }

    /// Iterate entries in stat-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_f64()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First entry whose value is NaN or infinite
    pub fn first_non_finite(&self) -> Option<(&str, f64)> {
        self.iter().find(|(_, v)| !v.is_finite())
    }

    /// Sum a sequence of mappings into one
    pub fn sum<'a>(maps: impl IntoIterator<Item = &'a Modifiers>) -> Modifiers {
        let mut total = Modifiers::new();
        for map in maps {
            total.merge(map);
        }
        total
    }
}

impl<K: Into<String>, V: Into<StatValue>> FromIterator<(K, V)> for Modifiers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mods = Modifiers::new();
        for (stat, value) in iter {
            let stat = stat.into();
            mods.add(&stat, value);
        }
        mods
    }
}

impl<const N: usize, V: Into<StatValue>> From<[(&str, V); N]> for Modifiers {
    fn from(entries: [(&str, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
