//! Cosmetic settings: dark mode, fullscreen, background presets and a
//! user-defined background.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::FocusTimerError;

/// Name shown for the user-defined background.
pub const CUSTOM_NAME: &str = "Custom";

/// Most color stops a custom background may hold.
pub const MAX_COLOR_STOPS: usize = 5;

/// Largest gradient angle, in degrees.
pub const MAX_ANGLE: u16 = 360;

/// Degrees moved by one angle step.
pub const ANGLE_STEP: u16 = 15;

/// Angles reachable with the angle preset key.
pub const ANGLE_PRESETS: [u16; 5] = [0, 45, 90, 135, 180];

/// Color given to a newly added stop.
const NEW_STOP: Rgb = Rgb(0x66, 0x7E, 0xEA);

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse `#rrggbb` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` for anything else.
    pub fn parse(raw: &str) -> Result<Self, FocusTimerError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FocusTimerError::InvalidSetting(format!(
                "Expected a color like #667eea, got {raw:?}"
            )));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|e| FocusTimerError::InvalidSetting(format!("Bad color {raw:?}: {e}")))
    }

    /// Linear blend towards `other`; `t` is clamped to 0.0 - 1.0.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Relative brightness, used to pick readable text.
    #[must_use]
    pub fn is_light(self) -> bool {
        let luma = 0.299 * f64::from(self.0) + 0.587 * f64::from(self.1) + 0.114 * f64::from(self.2);
        luma > 150.0
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// How a background fills the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Single color.
    Solid,
    /// Evenly spaced color stops along `angle`.
    Gradient,
}

impl BackgroundKind {
    /// Parse `solid` or `gradient`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` for any other word.
    pub fn parse(raw: &str) -> Result<Self, FocusTimerError> {
        match raw.trim().to_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "gradient" => Ok(Self::Gradient),
            other => Err(FocusTimerError::InvalidSetting(format!(
                "Expected solid or gradient, got {other:?}"
            ))),
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Solid => Self::Gradient,
            Self::Gradient => Self::Solid,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
        }
    }
}

/// A named background. Presets borrow static data; the custom one owns its stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Background {
    pub name: Cow<'static, str>,
    pub kind: BackgroundKind,
    pub colors: Cow<'static, [Rgb]>,
    /// CSS-style angle in degrees: 0 points up, 90 points right.
    pub angle: u16,
}

const fn solid(name: &'static str, colors: &'static [Rgb]) -> Background {
    Background {
        name: Cow::Borrowed(name),
        kind: BackgroundKind::Solid,
        colors: Cow::Borrowed(colors),
        angle: 135,
    }
}

const fn gradient(name: &'static str, colors: &'static [Rgb], angle: u16) -> Background {
    Background {
        name: Cow::Borrowed(name),
        kind: BackgroundKind::Gradient,
        colors: Cow::Borrowed(colors),
        angle,
    }
}

/// Built-in backgrounds, in cycling order.
pub static PRESETS: [Background; 10] = [
    solid("Pure White", &[Rgb(0xFF, 0xFF, 0xFF)]),
    solid("Pure Black", &[Rgb(0x00, 0x00, 0x00)]),
    solid("Focus Only", &[Rgb(0x00, 0x7F, 0xFF)]),
    solid("Introspection Only", &[Rgb(0x00, 0x9E, 0x60)]),
    solid("Creative Only", &[Rgb(0xF5, 0xDE, 0xB3)]),
    solid("Systematic & Practical Effect", &[Rgb(0x00, 0xFF, 0xFF)]),
    gradient(
        "Love, Harmony & Peace Effect",
        &[
            Rgb(0xFF, 0xFF, 0x00),
            Rgb(0xC5, 0x4B, 0x8C),
            Rgb(0xC5, 0x4B, 0x8C),
        ],
        45,
    ),
    gradient(
        "Focus & Achievements",
        &[
            Rgb(0x00, 0xFF, 0xFF),
            Rgb(0x00, 0x7F, 0xFF),
            Rgb(0xEB, 0x28, 0x4F),
        ],
        45,
    ),
    gradient(
        "Freedom Light, Deep Thinking & Unique as Leader",
        &[
            Rgb(0xCC, 0xCC, 0xFF),
            Rgb(0xC5, 0x4B, 0x8C),
            Rgb(0xEB, 0x28, 0x4F),
        ],
        90,
    ),
    gradient(
        "Degrade Negative Thoughts by Allowing Every Thought",
        &[
            Rgb(0xB2, 0x22, 0x22),
            Rgb(0xCC, 0xCC, 0xFF),
            Rgb(0xC5, 0x4B, 0x8C),
            Rgb(0xFF, 0xFF, 0x00),
        ],
        45,
    ),
];

/// Find a preset index by name, ignoring case.
#[must_use]
pub fn find_preset(name: &str) -> Option<usize> {
    let needle = name.trim();
    PRESETS
        .iter()
        .position(|preset| preset.name.eq_ignore_ascii_case(needle))
}

impl Background {
    /// Build a user-defined background.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if there are no stops, more
    /// than five, or the angle is above 360.
    pub fn custom(kind: BackgroundKind, colors: Vec<Rgb>, angle: u16) -> Result<Self, FocusTimerError> {
        if colors.is_empty() {
            return Err(FocusTimerError::InvalidSetting(
                "Custom background needs at least one color".to_string(),
            ));
        }
        if colors.len() > MAX_COLOR_STOPS {
            return Err(FocusTimerError::InvalidSetting(format!(
                "Custom background takes at most {MAX_COLOR_STOPS} colors, got {}",
                colors.len()
            )));
        }
        if angle > MAX_ANGLE {
            return Err(FocusTimerError::InvalidSetting(format!(
                "Gradient angle must be between 0 and {MAX_ANGLE}, got {angle}"
            )));
        }
        Ok(Self {
            name: Cow::Borrowed(CUSTOM_NAME),
            kind,
            colors: Cow::Owned(colors),
            angle,
        })
    }

    /// Copy of this background under the custom name, ready for editing.
    #[must_use]
    pub fn to_custom(&self) -> Self {
        Self {
            name: Cow::Borrowed(CUSTOM_NAME),
            kind: self.kind,
            colors: Cow::Owned(self.colors.to_vec()),
            angle: self.angle,
        }
    }

    /// Switch between solid and gradient.
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    /// Turn the gradient by one step, wrapping within 0 - 359.
    pub fn step_angle(&mut self, forward: bool) {
        let full = u32::from(MAX_ANGLE);
        let step = if forward {
            u32::from(ANGLE_STEP)
        } else {
            full - u32::from(ANGLE_STEP)
        };
        // Always below 360, so it fits
        #[allow(clippy::cast_possible_truncation)]
        let angle = ((u32::from(self.angle) + step) % full) as u16;
        self.angle = angle;
    }

    /// Jump to the next of 0/45/90/135/180, wrapping to 0.
    pub fn next_angle_preset(&mut self) {
        self.angle = ANGLE_PRESETS
            .iter()
            .copied()
            .find(|&preset| preset > self.angle)
            .unwrap_or(ANGLE_PRESETS[0]);
    }

    /// Append a stop. Returns false when already at the limit.
    pub fn add_color(&mut self) -> bool {
        if self.colors.len() >= MAX_COLOR_STOPS {
            return false;
        }
        self.colors.to_mut().push(NEW_STOP);
        true
    }

    /// Drop the last stop. Returns false when only one remains.
    pub fn remove_color(&mut self) -> bool {
        if self.colors.len() <= 1 {
            return false;
        }
        self.colors.to_mut().pop();
        true
    }

    /// Color at normalized position `(x, y)`, both 0.0 - 1.0 from the top left.
    #[must_use]
    pub fn color_at(&self, x: f64, y: f64) -> Rgb {
        let Some(&first) = self.colors.first() else {
            return Rgb(0, 0, 0);
        };
        if self.kind == BackgroundKind::Solid || self.colors.len() == 1 {
            return first;
        }

        // Project onto the gradient line; screen y grows downwards.
        let theta = f64::from(self.angle).to_radians();
        let (dx, dy) = (theta.sin(), -theta.cos());
        let half = 0.5 * (dx.abs() + dy.abs());
        if half <= f64::EPSILON {
            return first;
        }
        let projected = (x - 0.5) * dx + (y - 0.5) * dy;
        let t = ((projected + half) / (2.0 * half)).clamp(0.0, 1.0);

        #[allow(clippy::cast_precision_loss)]
        let segments = (self.colors.len() - 1) as f64;
        let scaled = t * segments;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (scaled.floor() as usize).min(self.colors.len() - 2);
        #[allow(clippy::cast_precision_loss)]
        let local = scaled - index as f64;
        self.colors[index].lerp(self.colors[index + 1], local)
    }
}

/// Which background is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Preset(usize),
    Custom,
}

/// Default custom background: a two-stop diagonal gradient.
#[must_use]
pub fn default_custom() -> Background {
    Background {
        name: Cow::Borrowed(CUSTOM_NAME),
        kind: BackgroundKind::Gradient,
        colors: Cow::Owned(vec![NEW_STOP, Rgb(0x76, 0x4B, 0xA2)]),
        angle: 135,
    }
}

/// Dark mode, fullscreen and background selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub dark_mode: bool,
    pub fullscreen: bool,
    selection: Selection,
    custom: Background,
}

impl Appearance {
    /// Create an appearance; an out-of-range preset index falls back to the first preset.
    #[must_use]
    pub fn new(dark_mode: bool, fullscreen: bool, background_index: usize) -> Self {
        Self {
            dark_mode,
            fullscreen,
            selection: Selection::Preset(if background_index < PRESETS.len() {
                background_index
            } else {
                0
            }),
            custom: default_custom(),
        }
    }

    /// Replace the custom background, leaving the selection alone.
    #[must_use]
    pub fn with_custom(mut self, custom: Background) -> Self {
        self.custom = custom;
        self
    }

    /// Show the custom background.
    pub fn select_custom(&mut self) {
        self.selection = Selection::Custom;
    }

    /// Show preset `index`; out of range is ignored.
    pub fn select_preset(&mut self, index: usize) {
        if index < PRESETS.len() {
            self.selection = Selection::Preset(index);
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.selection == Selection::Custom
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Select the next background: presets in order, then custom, wrapping around.
    pub fn next_background(&mut self) {
        self.selection = match self.selection {
            Selection::Preset(i) if i + 1 < PRESETS.len() => Selection::Preset(i + 1),
            Selection::Preset(_) => Selection::Custom,
            Selection::Custom => Selection::Preset(0),
        };
    }

    /// Select the previous background, wrapping around.
    pub fn previous_background(&mut self) {
        self.selection = match self.selection {
            Selection::Preset(0) => Selection::Custom,
            Selection::Preset(i) => Selection::Preset(i - 1),
            Selection::Custom => Selection::Preset(PRESETS.len() - 1),
        };
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        match self.selection {
            Selection::Preset(i) => &PRESETS[i],
            Selection::Custom => &self.custom,
        }
    }

    /// The custom background, selected for editing.
    ///
    /// Editing while a preset shows starts from a copy of that preset.
    pub fn edit_custom(&mut self) -> &mut Background {
        if let Selection::Preset(i) = self.selection {
            self.custom = PRESETS[i].to_custom();
            self.selection = Selection::Custom;
        }
        &mut self.custom
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(false, false, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_and_display() {
        let color = Rgb::from_hex(0x00_7F_FF);
        assert_eq!(color, Rgb(0, 127, 255));
        assert_eq!(color.to_string(), "#007fff");
    }

    #[test]
    fn test_lerp() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Rgb(128, 128, 128));
        assert_eq!(black.lerp(white, 7.0), white);
    }

    #[test]
    fn test_solid_is_uniform() {
        let background = &PRESETS[2];
        assert_eq!(background.color_at(0.0, 0.0), Rgb::from_hex(0x00_7F_FF));
        assert_eq!(background.color_at(1.0, 1.0), Rgb::from_hex(0x00_7F_FF));
    }

    #[test]
    fn test_horizontal_gradient_endpoints() {
        let background = &PRESETS[8];
        assert_eq!(background.angle, 90);
        assert_eq!(background.color_at(0.0, 0.5), background.colors[0]);
        assert_eq!(background.color_at(1.0, 0.5), background.colors[2]);
        assert_eq!(background.color_at(0.5, 0.5), background.colors[1]);
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("pure black"), Some(1));
        assert_eq!(find_preset(" Focus & Achievements "), Some(7));
        assert_eq!(find_preset("neon"), None);
    }

    #[test]
    fn test_background_cycling_wraps_through_custom() {
        let mut appearance = Appearance::default();
        appearance.previous_background();
        assert!(appearance.is_custom());
        assert_eq!(appearance.background().name, CUSTOM_NAME);
        appearance.previous_background();
        assert_eq!(appearance.background().name, PRESETS[PRESETS.len() - 1].name);
        appearance.next_background();
        appearance.next_background();
        assert_eq!(appearance.background().name, "Pure White");
    }

    #[test]
    fn test_out_of_range_index_falls_back() {
        let appearance = Appearance::new(true, false, 99);
        assert_eq!(appearance.background().name, "Pure White");
        assert!(appearance.dark_mode);
    }

    #[test]
    fn test_is_light() {
        assert!(Rgb(255, 255, 255).is_light());
        assert!(!Rgb(0, 0, 0).is_light());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#667eea").unwrap(), Rgb(0x66, 0x7E, 0xEA));
        assert_eq!(Rgb::parse(" FF0000 ").unwrap(), Rgb(255, 0, 0));
        assert!(Rgb::parse("#fff").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_custom_validation() {
        assert!(Background::custom(BackgroundKind::Solid, vec![], 0).is_err());
        assert!(Background::custom(BackgroundKind::Gradient, vec![Rgb(0, 0, 0); 6], 0).is_err());
        assert!(Background::custom(BackgroundKind::Gradient, vec![Rgb(0, 0, 0)], 361).is_err());

        let custom = Background::custom(BackgroundKind::Gradient, vec![Rgb(0, 0, 0); 5], 360).unwrap();
        assert_eq!(custom.name, CUSTOM_NAME);
    }

    #[test]
    fn test_custom_color_at() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);

        let vertical = Background::custom(BackgroundKind::Gradient, vec![black, white], 180).unwrap();
        assert_eq!(vertical.color_at(0.5, 0.0), black);
        assert_eq!(vertical.color_at(0.5, 1.0), white);
        assert_eq!(vertical.color_at(0.5, 0.5), Rgb(128, 128, 128));

        let mut solid = Background::custom(BackgroundKind::Solid, vec![white, black], 180).unwrap();
        assert_eq!(solid.color_at(0.5, 1.0), white);
        solid.toggle_kind();
        assert_eq!(solid.color_at(0.5, 1.0), black);
    }

    #[test]
    fn test_angle_stepping() {
        let mut custom = default_custom();
        custom.angle = 350;
        custom.step_angle(true);
        assert_eq!(custom.angle, 5);
        custom.step_angle(false);
        assert_eq!(custom.angle, 350);

        custom.angle = 0;
        custom.step_angle(false);
        assert_eq!(custom.angle, 345);

        custom.angle = 50;
        custom.next_angle_preset();
        assert_eq!(custom.angle, 90);
        custom.angle = 180;
        custom.next_angle_preset();
        assert_eq!(custom.angle, 0);
    }

    #[test]
    fn test_color_stops_keep_bounds() {
        let mut custom = Background::custom(BackgroundKind::Solid, vec![Rgb(1, 2, 3)], 0).unwrap();
        assert!(!custom.remove_color());
        assert_eq!(custom.colors.len(), 1);

        for _ in 1..MAX_COLOR_STOPS {
            assert!(custom.add_color());
        }
        assert!(!custom.add_color());
        assert_eq!(custom.colors.len(), MAX_COLOR_STOPS);
        assert_eq!(custom.colors[1], Rgb(0x66, 0x7E, 0xEA));
    }

    #[test]
    fn test_edit_custom_starts_from_preset() {
        let mut appearance = Appearance::new(false, false, 7);
        appearance.edit_custom().toggle_kind();

        assert!(appearance.is_custom());
        let background = appearance.background();
        assert_eq!(background.kind, BackgroundKind::Solid);
        assert_eq!(background.colors, PRESETS[7].colors);
        assert_eq!(PRESETS[7].kind, BackgroundKind::Gradient);

        appearance.edit_custom().step_angle(true);
        assert_eq!(appearance.background().angle, 60);
        assert_eq!(appearance.background().kind, BackgroundKind::Solid);
    }
}
