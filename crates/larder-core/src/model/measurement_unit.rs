use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    Grams,
    Liters,
    Units,
}

impl MeasurementUnit {
    pub const ALL: [MeasurementUnit; 3] = [
        MeasurementUnit::Grams,
        MeasurementUnit::Liters,
        MeasurementUnit::Units,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementUnit::Grams => "grams",
            MeasurementUnit::Liters => "liters",
            MeasurementUnit::Units => "units",
        }
    }
}

impl FromStr for MeasurementUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MeasurementUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_record("measurementUnit", format!("unknown unit `{s}`")))
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
