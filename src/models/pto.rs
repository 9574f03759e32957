//! Paid-time-off values.
//!
//! `PtoValue` is what sits in the stored blob (a number, or a string written
//! by older versions). `PtoInput` is the raw text typed by the user while a
//! week is being edited; it may be transiently invalid (`""`, `"."`, `"4."`)
//! and is only turned into a number through the total parse below.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PtoValue {
    Number(f64),
    Text(String),
}

impl PtoValue {
    /// Hours contributed by this value; unparseable text counts as 0.
    pub fn hours(&self) -> f64 {
        match self {
            PtoValue::Number(n) => sanitize(*n),
            PtoValue::Text(s) => parse_float(s).map(sanitize).unwrap_or(0.0),
        }
    }
}

impl fmt::Display for PtoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PtoValue::Number(n) => write!(f, "{}", n),
            PtoValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PtoInput(String);

impl PtoInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty() || self.0 == "."
    }

    /// Never fails: blank, `.` and non-numeric text give 0.
    pub fn hours(&self) -> f64 {
        if self.is_blank() {
            return 0.0;
        }
        parse_float(&self.0).map(sanitize).unwrap_or(0.0)
    }

    /// Value to persist, `None` when nothing usable was typed.
    pub fn to_stored(&self) -> Option<f64> {
        if self.is_blank() {
            return None;
        }
        parse_float(&self.0).filter(|v| v.is_finite() && *v >= 0.0)
    }
}

impl From<&str> for PtoInput {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Option<&PtoValue>> for PtoInput {
    fn from(v: Option<&PtoValue>) -> Self {
        match v {
            Some(PtoValue::Text(s)) if s.is_empty() => Self::default(),
            Some(v) => Self::new(v.to_string()),
            None => Self::default(),
        }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid float regex")
    })
}

/// Leading-number parse: surrounding whitespace is ignored and trailing
/// garbage after a valid number is dropped (`"4h"` → 4). `None` when the text
/// does not start with a number.
pub fn parse_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let m = float_prefix().find(trimmed)?;
    m.as_str().parse::<f64>().ok()
}
