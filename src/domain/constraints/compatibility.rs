//! Film-stock and camera advisory rules.
//!
//! Rules never block composition. They produce [`Advisory`] records and
//! reciprocal [`Suggestion`]s that callers surface next to the prompt.

use serde::{Deserialize, Serialize};

use crate::domain::phrases::{Camera, FilmStock};

/// Advisory severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Info => f.write_str("info"),
        }
    }
}

/// One non-blocking compatibility finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: Severity::Info, message: message.into() }
    }
}

/// Compatible values for the counterpart field of the current choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Field the suggestion applies to (`camera` or `film_stock`).
    pub field: &'static str,
    /// Choice that produced the suggestion.
    pub because_of: String,
    pub values: Vec<&'static str>,
}

/// Emulsion color response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emulsion {
    Color,
    Tungsten,
    Monochrome,
}

/// Speed and color response of a film stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockProfile {
    pub iso: u16,
    pub emulsion: Emulsion,
}

pub const SLOW_ISO_MAX: u16 = 100;
pub const FAST_ISO_MIN: u16 = 800;

impl StockProfile {
    pub fn is_slow(&self) -> bool {
        self.iso <= SLOW_ISO_MAX
    }

    pub fn is_fast(&self) -> bool {
        self.iso >= FAST_ISO_MIN
    }
}

pub fn stock_profile(stock: FilmStock) -> StockProfile {
    let (iso, emulsion) = match stock {
        FilmStock::KodakPortra160 => (160, Emulsion::Color),
        FilmStock::KodakPortra400 => (400, Emulsion::Color),
        FilmStock::KodakPortra800 => (800, Emulsion::Color),
        FilmStock::KodakEktar100 => (100, Emulsion::Color),
        FilmStock::FujiVelvia50 => (50, Emulsion::Color),
        FilmStock::FujiPro400h => (400, Emulsion::Color),
        FilmStock::Cinestill800t => (800, Emulsion::Tungsten),
        FilmStock::KodakVision3500t => (500, Emulsion::Tungsten),
        FilmStock::IlfordHp5Plus => (400, Emulsion::Monochrome),
        FilmStock::KodakTriX400 => (400, Emulsion::Monochrome),
        FilmStock::IlfordDelta3200 => (3200, Emulsion::Monochrome),
        FilmStock::IlfordPanF50 => (50, Emulsion::Monochrome),
    };
    StockProfile { iso, emulsion }
}

/// How a camera rig frames the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigProfile {
    pub dramatic_angle: bool,
    pub color_emphasis: bool,
    pub cool_leaning: bool,
}

pub fn rig_profile(camera: Camera) -> RigProfile {
    let dramatic_angle = matches!(
        camera,
        Camera::Camera002
            | Camera::Camera004
            | Camera::Camera005
            | Camera::Camera006
            | Camera::Camera010
    );
    let color_emphasis = matches!(camera, Camera::Camera007 | Camera::Camera009);
    let cool_leaning = matches!(camera, Camera::Camera010);
    RigProfile { dramatic_angle, color_emphasis, cool_leaning }
}

/// Cameras that pair well with each film stock.
pub fn compatible_cameras(stock: FilmStock) -> &'static [Camera] {
    use Camera::*;
    match stock {
        FilmStock::KodakPortra160 => &[Camera001, Camera003, Camera008, Camera009],
        FilmStock::KodakPortra400 => &[Camera001, Camera003, Camera007, Camera008, Camera009],
        FilmStock::KodakPortra800 => &[Camera002, Camera004, Camera005, Camera006, Camera010],
        FilmStock::KodakEktar100 => &[Camera001, Camera003, Camera007, Camera009],
        FilmStock::FujiVelvia50 => &[Camera001, Camera007, Camera008, Camera009],
        FilmStock::FujiPro400h => &[Camera001, Camera003, Camera008, Camera009],
        FilmStock::Cinestill800t => &[Camera002, Camera004, Camera006],
        FilmStock::KodakVision3500t => &[Camera002, Camera004, Camera005, Camera006, Camera008],
        FilmStock::IlfordHp5Plus => &[Camera002, Camera004, Camera006, Camera010],
        FilmStock::KodakTriX400 => &[Camera001, Camera002, Camera004, Camera006],
        FilmStock::IlfordDelta3200 => &[Camera002, Camera005, Camera006, Camera010],
        FilmStock::IlfordPanF50 => &[Camera001, Camera003, Camera008],
    }
}

/// Film stocks that list the camera as compatible, in dictionary order.
pub fn compatible_stocks(camera: Camera) -> Vec<FilmStock> {
    FilmStock::ALL
        .iter()
        .copied()
        .filter(|stock| compatible_cameras(*stock).contains(&camera))
        .collect()
}

pub fn is_compatible(stock: FilmStock, camera: Camera) -> bool {
    compatible_cameras(stock).contains(&camera)
}

/// Evaluate every film-stock/camera rule against one pairing.
pub fn check_pair(stock: FilmStock, camera: Camera) -> Vec<Advisory> {
    let film = stock_profile(stock);
    let rig = rig_profile(camera);
    let mut advisories = Vec::new();

    if film.emulsion == Emulsion::Monochrome && rig.color_emphasis {
        advisories.push(Advisory::warning(format!(
            "{} is a black and white stock but {} emphasizes color",
            stock, camera
        )));
    }
    if film.is_slow() && rig.dramatic_angle {
        advisories.push(Advisory::warning(format!(
            "{} (ISO {}) is slow for the dramatic angle of {}",
            stock, film.iso, camera
        )));
    }
    if film.is_fast() && !rig.dramatic_angle {
        advisories.push(Advisory::info(format!(
            "{} (ISO {}) is unnecessary for the standard angle of {}",
            stock, film.iso, camera
        )));
    }
    if film.emulsion == Emulsion::Tungsten && rig.cool_leaning {
        advisories.push(Advisory::warning(format!(
            "{} is tungsten balanced and will push the cool fill of {} further toward blue",
            stock, camera
        )));
    }

    advisories
}

/// Reciprocal suggestions for a pairing; empty when the pair is already compatible.
pub fn suggest(stock: Option<FilmStock>, camera: Option<Camera>) -> Vec<Suggestion> {
    if let (Some(stock), Some(camera)) = (stock, camera) {
        if is_compatible(stock, camera) {
            return Vec::new();
        }
    }

    let mut suggestions = Vec::new();
    if let Some(stock) = stock {
        suggestions.push(Suggestion {
            field: "camera",
            because_of: stock.id().to_string(),
            values: compatible_cameras(stock).iter().map(|camera| camera.id()).collect(),
        });
    }
    if let Some(camera) = camera {
        suggestions.push(Suggestion {
            field: "film_stock",
            because_of: camera.id().to_string(),
            values: compatible_stocks(camera).into_iter().map(|stock| stock.id()).collect(),
        });
    }
    suggestions
}
