use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::domain::phrases::Camera;

/// Tripod height, stored in whole centimeters so labels stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripodHeight(u16);

impl TripodHeight {
    pub const fn from_centimeters(centimeters: u16) -> Self {
        Self(centimeters)
    }

    pub fn centimeters(&self) -> u16 {
        self.0
    }

    /// Meters without trailing zeros: `1`, `0.5`, `0.25`.
    pub fn meters_label(&self) -> String {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;
        if fraction == 0 {
            format!("{}", whole)
        } else if fraction % 10 == 0 {
            format!("{}.{}", whole, fraction / 10)
        } else {
            format!("{}.{:02}", whole, fraction)
        }
    }

    /// Prose form substituted into camera phrases: `1 meter`, `0.5 meters`.
    pub fn phrase(&self) -> String {
        if self.0 == 100 {
            "1 meter".to_string()
        } else {
            format!("{} meters", self.meters_label())
        }
    }

    fn from_meters(meters: f64) -> Option<Self> {
        if !meters.is_finite() || meters <= 0.0 {
            return None;
        }
        let centimeters = (meters * 100.0).round();
        if centimeters < 1.0 || centimeters > f64::from(u16::MAX) {
            return None;
        }
        Some(Self(centimeters as u16))
    }
}

impl FromStr for TripodHeight {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('m').trim();
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(TripodHeight::from_meters)
            .ok_or_else(|| AppError::InvalidSelection(format!("Invalid tripod height '{}'", s)))
    }
}

impl fmt::Display for TripodHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.meters_label())
    }
}

impl Serialize for TripodHeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.meters_label())
    }
}

impl<'de> Deserialize<'de> for TripodHeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Raw::Number(meters) => TripodHeight::from_meters(meters)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid tripod height {}", meters))),
        }
    }
}

/// Canonical tripod height for each camera rig.
pub fn tripod_height_for(camera: Camera) -> TripodHeight {
    let centimeters = match camera {
        Camera::Camera001 => 100,
        Camera::Camera002 => 30,
        Camera::Camera003 => 50,
        Camera::Camera004 => 200,
        Camera::Camera005 => 250,
        Camera::Camera006 => 120,
        Camera::Camera007 => 80,
        Camera::Camera008 => 150,
        Camera::Camera009 => 140,
        Camera::Camera010 => 20,
    };
    TripodHeight::from_centimeters(centimeters)
}

/// Canonical height for a camera id; `None` for ids outside the rig table.
pub fn tripod_height_for_id(camera_id: &str) -> Option<TripodHeight> {
    Camera::from_id(camera_id).map(tripod_height_for)
}
