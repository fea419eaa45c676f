//! The avatar parameter set and its validity rules.
//!
//! [`AvatarConfig`] is an immutable value. Every update returns a new config
//! with the edited field coerced and clamped; callers replace their copy
//! wholesale. Out-of-range numbers are clamped to the nearest bound, never
//! rejected, so the control surface can always show a renderable state.
//!
//! Besides the per-field ranges, the nose must stay at least
//! [`NOSE_MOUTH_MARGIN`] pixels above the mouth. The field that changes last
//! wins: editing `noseY` pulls the nose up, editing `mouthY` pushes the mouth
//! down.

use crate::color::Rgb;
use crate::error::AvatarError;
use crate::params::{json_type_name, value_as_int, value_as_str};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

/// Minimum vertical distance between the nose center and the mouth line.
pub const NOSE_MOUTH_MARGIN: i32 = 10;

const DEFAULT_SKIN_COLOR: Rgb = Rgb::from_u32(0xffdbac);
const DEFAULT_CLOTHING_COLOR: Rgb = Rgb::from_u32(0x3498db);
const DEFAULT_HAIR_COLOR: Rgb = Rgb::from_u32(0x2c3e50);

/// Closed integer range `[min, max]` for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRange {
    pub min: i32,
    pub max: i32,
}

impl FieldRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range, saturating values outside `i32`.
    pub fn clamp(self, value: i64) -> i32 {
        value.clamp(i64::from(self.min), i64::from(self.max)) as i32
    }

    pub fn contains(self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Nose shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoseType {
    #[default]
    Triangle,
    Round,
    Square,
}

impl NoseType {
    pub const ALL: [NoseType; 3] = [NoseType::Triangle, NoseType::Round, NoseType::Square];

    pub fn name(self) -> &'static str {
        match self {
            NoseType::Triangle => "triangle",
            NoseType::Round => "round",
            NoseType::Square => "square",
        }
    }

    /// Maps a control-surface value to a shape. Unrecognized names fall back
    /// to [`NoseType::Triangle`].
    pub fn from_name_lossy(name: &str) -> Self {
        match name {
            "round" => NoseType::Round,
            "square" => NoseType::Square,
            _ => NoseType::Triangle,
        }
    }
}

/// Hairstyle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairStyle {
    Bald,
    #[default]
    Bowl,
    Curly,
}

impl HairStyle {
    pub const ALL: [HairStyle; 3] = [HairStyle::Bald, HairStyle::Bowl, HairStyle::Curly];

    pub fn name(self) -> &'static str {
        match self {
            HairStyle::Bald => "bald",
            HairStyle::Bowl => "bowl",
            HairStyle::Curly => "curly",
        }
    }

    /// Maps a control-surface value to a style. Unrecognized names draw no
    /// hair, so they fall back to [`HairStyle::Bald`].
    pub fn from_name_lossy(name: &str) -> Self {
        match name {
            "bowl" => HairStyle::Bowl,
            "curly" => HairStyle::Curly,
            _ => HairStyle::Bald,
        }
    }
}

/// Names every field of [`AvatarConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    SkinColor,
    ClothingColor,
    HairColor,
    EyeSize,
    EyeY,
    EyeSpacing,
    MouthWidth,
    MouthY,
    EarSize,
    EarY,
    NoseSize,
    NoseY,
    NoseType,
    HairStyle,
}

/// What kind of raw value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Color,
    Integer(FieldRange),
    NoseType,
    HairStyle,
}

impl ConfigField {
    /// All fields in declaration order.
    pub const ALL: [ConfigField; 14] = [
        ConfigField::SkinColor,
        ConfigField::ClothingColor,
        ConfigField::HairColor,
        ConfigField::EyeSize,
        ConfigField::EyeY,
        ConfigField::EyeSpacing,
        ConfigField::MouthWidth,
        ConfigField::MouthY,
        ConfigField::EarSize,
        ConfigField::EarY,
        ConfigField::NoseSize,
        ConfigField::NoseY,
        ConfigField::NoseType,
        ConfigField::HairStyle,
    ];

    /// The camelCase name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            ConfigField::SkinColor => "skinColor",
            ConfigField::ClothingColor => "clothingColor",
            ConfigField::HairColor => "hairColor",
            ConfigField::EyeSize => "eyeSize",
            ConfigField::EyeY => "eyeY",
            ConfigField::EyeSpacing => "eyeSpacing",
            ConfigField::MouthWidth => "mouthWidth",
            ConfigField::MouthY => "mouthY",
            ConfigField::EarSize => "earSize",
            ConfigField::EarY => "earY",
            ConfigField::NoseSize => "noseSize",
            ConfigField::NoseY => "noseY",
            ConfigField::NoseType => "noseType",
            ConfigField::HairStyle => "hairStyle",
        }
    }

    /// Looks up a field by its wire name.
    ///
    /// Returns `AvatarError::UnknownField` if no field has that name.
    pub fn from_name(name: &str) -> Result<Self, AvatarError> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| AvatarError::UnknownField(name.to_string()))
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ConfigField::SkinColor | ConfigField::ClothingColor | ConfigField::HairColor => {
                FieldKind::Color
            }
            ConfigField::NoseType => FieldKind::NoseType,
            ConfigField::HairStyle => FieldKind::HairStyle,
            ConfigField::EyeSize => FieldKind::Integer(FieldRange::new(5, 30)),
            ConfigField::EyeY => FieldKind::Integer(FieldRange::new(80, 140)),
            ConfigField::EyeSpacing => FieldKind::Integer(FieldRange::new(20, 70)),
            ConfigField::MouthWidth => FieldKind::Integer(FieldRange::new(10, 90)),
            ConfigField::MouthY => FieldKind::Integer(FieldRange::new(160, 230)),
            ConfigField::EarSize => FieldKind::Integer(FieldRange::new(15, 35)),
            ConfigField::EarY => FieldKind::Integer(FieldRange::new(130, 170)),
            ConfigField::NoseSize => FieldKind::Integer(FieldRange::new(10, 30)),
            ConfigField::NoseY => FieldKind::Integer(FieldRange::new(140, 180)),
        }
    }

    /// The declared range of a numeric field, `None` for colors and enums.
    pub fn range(self) -> Option<FieldRange> {
        match self.kind() {
            FieldKind::Integer(range) => Some(range),
            _ => None,
        }
    }

    fn description(self) -> &'static str {
        match self {
            ConfigField::SkinColor => "Skin color of head, ears and neck",
            ConfigField::ClothingColor => "Shirt color",
            ConfigField::HairColor => "Hair color",
            ConfigField::EyeSize => "Eye radius in pixels",
            ConfigField::EyeY => "Vertical position of the eye centers",
            ConfigField::EyeSpacing => "Horizontal offset of each eye from the center line",
            ConfigField::MouthWidth => "Mouth width in pixels",
            ConfigField::MouthY => "Vertical position of the mouth",
            ConfigField::EarSize => "Ear radius in pixels",
            ConfigField::EarY => "Vertical position of the ear centers",
            ConfigField::NoseSize => "Nose size in pixels",
            ConfigField::NoseY => "Vertical position of the nose center",
            ConfigField::NoseType => "Nose shape",
            ConfigField::HairStyle => "Hairstyle",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigField {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::from_name(s)
    }
}

/// The full parameter set describing one avatar.
///
/// Fields are private so that every instance satisfies the range and
/// nose/mouth invariants. Build one with [`Default`], [`AvatarConfig::from_json`]
/// or the randomizer, then derive new values with the `update`/`with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarConfig {
    pub(crate) skin_color: Rgb,
    pub(crate) clothing_color: Rgb,
    pub(crate) hair_color: Rgb,
    pub(crate) eye_size: i32,
    pub(crate) eye_y: i32,
    pub(crate) eye_spacing: i32,
    pub(crate) mouth_width: i32,
    pub(crate) mouth_y: i32,
    pub(crate) ear_size: i32,
    pub(crate) ear_y: i32,
    pub(crate) nose_size: i32,
    pub(crate) nose_type: NoseType,
    pub(crate) nose_y: i32,
    pub(crate) hair_style: HairStyle,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            skin_color: DEFAULT_SKIN_COLOR,
            clothing_color: DEFAULT_CLOTHING_COLOR,
            hair_color: DEFAULT_HAIR_COLOR,
            eye_size: 12,
            eye_y: 110,
            eye_spacing: 40,
            mouth_width: 50,
            mouth_y: 190,
            ear_size: 20,
            ear_y: 150,
            nose_size: 15,
            nose_type: NoseType::Triangle,
            nose_y: 160,
            hair_style: HairStyle::Bowl,
        }
    }
}

impl AvatarConfig {
    pub fn skin_color(&self) -> Rgb {
        self.skin_color
    }

    pub fn clothing_color(&self) -> Rgb {
        self.clothing_color
    }

    pub fn hair_color(&self) -> Rgb {
        self.hair_color
    }

    /// Eye radius in pixels.
    pub fn eye_size(&self) -> i32 {
        self.eye_size
    }

    pub fn eye_y(&self) -> i32 {
        self.eye_y
    }

    pub fn eye_spacing(&self) -> i32 {
        self.eye_spacing
    }

    pub fn mouth_width(&self) -> i32 {
        self.mouth_width
    }

    pub fn mouth_y(&self) -> i32 {
        self.mouth_y
    }

    /// Ear radius in pixels.
    pub fn ear_size(&self) -> i32 {
        self.ear_size
    }

    pub fn ear_y(&self) -> i32 {
        self.ear_y
    }

    pub fn nose_size(&self) -> i32 {
        self.nose_size
    }

    pub fn nose_type(&self) -> NoseType {
        self.nose_type
    }

    pub fn nose_y(&self) -> i32 {
        self.nose_y
    }

    pub fn hair_style(&self) -> HairStyle {
        self.hair_style
    }

    /// Current value of a numeric field, `None` for colors and enums.
    pub fn number(&self, field: ConfigField) -> Option<i32> {
        match field {
            ConfigField::EyeSize => Some(self.eye_size),
            ConfigField::EyeY => Some(self.eye_y),
            ConfigField::EyeSpacing => Some(self.eye_spacing),
            ConfigField::MouthWidth => Some(self.mouth_width),
            ConfigField::MouthY => Some(self.mouth_y),
            ConfigField::EarSize => Some(self.ear_size),
            ConfigField::EarY => Some(self.ear_y),
            ConfigField::NoseSize => Some(self.nose_size),
            ConfigField::NoseY => Some(self.nose_y),
            _ => None,
        }
    }

    /// Current value of a color field, `None` for the others.
    pub fn color(&self, field: ConfigField) -> Option<Rgb> {
        match field {
            ConfigField::SkinColor => Some(self.skin_color),
            ConfigField::ClothingColor => Some(self.clothing_color),
            ConfigField::HairColor => Some(self.hair_color),
            _ => None,
        }
    }

    /// Applies one control-surface edit and returns the resulting config.
    ///
    /// `raw` may be a JSON number or string. Numeric fields are coerced,
    /// clamped to their range and then to the nose/mouth margin; colors are
    /// parsed as hex; unknown enum names fall back to the renderer's default
    /// branch. `self` is left untouched.
    ///
    /// Returns `AvatarError::UnknownField` for an unknown `name`,
    /// `AvatarError::ParamTypeMismatch` when `raw` cannot be read as the
    /// field's type, and `AvatarError::InvalidColor` for malformed hex.
    pub fn update(&self, name: &str, raw: &Value) -> Result<AvatarConfig, AvatarError> {
        let field = ConfigField::from_name(name)?;
        let mut next = self.clone();
        next.set_raw(field, raw)?;
        next.enforce_margin(field);
        Ok(next)
    }

    /// Sets a numeric field, clamping to its range and to the nose/mouth margin.
    ///
    /// Non-numeric fields return the config unchanged.
    pub fn with_number(&self, field: ConfigField, value: i64) -> AvatarConfig {
        let mut next = self.clone();
        if next.set_number(field, value) {
            next.enforce_margin(field);
        }
        next
    }

    /// Sets a color field. Non-color fields return the config unchanged.
    pub fn with_color(&self, field: ConfigField, color: Rgb) -> AvatarConfig {
        let mut next = self.clone();
        match field {
            ConfigField::SkinColor => next.skin_color = color,
            ConfigField::ClothingColor => next.clothing_color = color,
            ConfigField::HairColor => next.hair_color = color,
            _ => {}
        }
        next
    }

    pub fn with_nose_type(&self, nose_type: NoseType) -> AvatarConfig {
        AvatarConfig {
            nose_type,
            ..self.clone()
        }
    }

    pub fn with_hair_style(&self, hair_style: HairStyle) -> AvatarConfig {
        AvatarConfig {
            hair_style,
            ..self.clone()
        }
    }

    /// Builds a config from a JSON object, replacing the whole parameter set.
    ///
    /// Missing keys take their defaults; present keys are coerced and
    /// range-clamped like [`AvatarConfig::update`]. Because no field is
    /// "last" in a wholesale replacement, the margin is restored by moving
    /// the mouth down to `noseY + 10`.
    pub fn from_json(params: &Value) -> Result<AvatarConfig, AvatarError> {
        let object = params
            .as_object()
            .ok_or_else(|| AvatarError::ParamTypeMismatch {
                name: "config".into(),
                expected: "object".into(),
                got: json_type_name(params).into(),
            })?;
        let mut config = AvatarConfig::default();
        for field in ConfigField::ALL {
            if let Some(raw) = object.get(field.name()) {
                config.set_raw(field, raw)?;
            }
        }
        config.enforce_margin(ConfigField::MouthY);
        Ok(config)
    }

    /// Serializes the config to a JSON object with camelCase keys.
    pub fn to_json(&self) -> Value {
        json!({
            "skinColor": self.skin_color.to_hex(),
            "clothingColor": self.clothing_color.to_hex(),
            "hairColor": self.hair_color.to_hex(),
            "eyeSize": self.eye_size,
            "eyeY": self.eye_y,
            "eyeSpacing": self.eye_spacing,
            "mouthWidth": self.mouth_width,
            "mouthY": self.mouth_y,
            "earSize": self.ear_size,
            "earY": self.ear_y,
            "noseSize": self.nose_size,
            "noseType": self.nose_type.name(),
            "noseY": self.nose_y,
            "hairStyle": self.hair_style.name(),
        })
    }

    /// Schema describing every field: type, range, default and options.
    pub fn param_schema() -> Value {
        let defaults = AvatarConfig::default();
        let mut schema = Map::new();
        for field in ConfigField::ALL {
            let entry = match field.kind() {
                FieldKind::Color => json!({
                    "type": "color",
                    "default": defaults.color(field).map(Rgb::to_hex),
                    "description": field.description(),
                }),
                FieldKind::Integer(range) => json!({
                    "type": "integer",
                    "default": defaults.number(field),
                    "min": range.min,
                    "max": range.max,
                    "description": field.description(),
                }),
                FieldKind::NoseType => json!({
                    "type": "enum",
                    "default": defaults.nose_type.name(),
                    "options": NoseType::ALL.map(NoseType::name),
                    "description": field.description(),
                }),
                FieldKind::HairStyle => json!({
                    "type": "enum",
                    "default": defaults.hair_style.name(),
                    "options": HairStyle::ALL.map(HairStyle::name),
                    "description": field.description(),
                }),
            };
            schema.insert(field.name().to_string(), entry);
        }
        Value::Object(schema)
    }

    /// Coerces `raw` into `field` and range-clamps it. Does not touch the margin.
    fn set_raw(&mut self, field: ConfigField, raw: &Value) -> Result<(), AvatarError> {
        let mismatch = |expected: &str| AvatarError::ParamTypeMismatch {
            name: field.name().to_string(),
            expected: expected.to_string(),
            got: json_type_name(raw).to_string(),
        };
        match field.kind() {
            FieldKind::Color => {
                let hex = value_as_str(raw).ok_or_else(|| mismatch("hex color string"))?;
                *self = self.with_color(field, Rgb::from_hex(hex)?);
            }
            FieldKind::Integer(_) => {
                let value = value_as_int(raw).ok_or_else(|| mismatch("integer"))?;
                self.set_number(field, value);
            }
            FieldKind::NoseType => {
                let name = value_as_str(raw).ok_or_else(|| mismatch("string"))?;
                self.nose_type = NoseType::from_name_lossy(name);
            }
            FieldKind::HairStyle => {
                let name = value_as_str(raw).ok_or_else(|| mismatch("string"))?;
                self.hair_style = HairStyle::from_name_lossy(name);
            }
        }
        Ok(())
    }

    /// Range-clamps and stores a numeric field. Returns false for non-numeric fields.
    fn set_number(&mut self, field: ConfigField, value: i64) -> bool {
        let Some(range) = field.range() else {
            return false;
        };
        let value = range.clamp(value);
        let slot = match field {
            ConfigField::EyeSize => &mut self.eye_size,
            ConfigField::EyeY => &mut self.eye_y,
            ConfigField::EyeSpacing => &mut self.eye_spacing,
            ConfigField::MouthWidth => &mut self.mouth_width,
            ConfigField::MouthY => &mut self.mouth_y,
            ConfigField::EarSize => &mut self.ear_size,
            ConfigField::EarY => &mut self.ear_y,
            ConfigField::NoseSize => &mut self.nose_size,
            ConfigField::NoseY => &mut self.nose_y,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Restores `noseY + margin <= mouthY`, yielding the field that was not just edited.
    fn enforce_margin(&mut self, changed: ConfigField) {
        match changed {
            ConfigField::NoseY => {
                self.nose_y = self.nose_y.min(self.mouth_y - NOSE_MOUTH_MARGIN);
            }
            ConfigField::MouthY => {
                self.mouth_y = self.mouth_y.max(self.nose_y + NOSE_MOUTH_MARGIN);
            }
            _ => {}
        }
    }
}

impl<'de> Deserialize<'de> for AvatarConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AvatarConfig::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every numeric field of a config satisfies its range and the margin.
    fn assert_valid(config: &AvatarConfig) {
        for field in ConfigField::ALL {
            if let (Some(range), Some(value)) = (field.range(), config.number(field)) {
                assert!(
                    range.contains(value),
                    "{field} = {value} outside [{}, {}]",
                    range.min,
                    range.max
                );
            }
        }
        assert!(
            config.nose_y() + NOSE_MOUTH_MARGIN <= config.mouth_y(),
            "nose {} too close to mouth {}",
            config.nose_y(),
            config.mouth_y()
        );
    }

    // -- Defaults --

    #[test]
    fn default_matches_documented_values() {
        let c = AvatarConfig::default();
        assert_eq!(c.skin_color().to_hex(), "#ffdbac");
        assert_eq!(c.clothing_color().to_hex(), "#3498db");
        assert_eq!(c.hair_color().to_hex(), "#2c3e50");
        assert_eq!(c.eye_size(), 12);
        assert_eq!(c.eye_y(), 110);
        assert_eq!(c.eye_spacing(), 40);
        assert_eq!(c.mouth_width(), 50);
        assert_eq!(c.mouth_y(), 190);
        assert_eq!(c.ear_size(), 20);
        assert_eq!(c.ear_y(), 150);
        assert_eq!(c.nose_size(), 15);
        assert_eq!(c.nose_type(), NoseType::Triangle);
        assert_eq!(c.nose_y(), 160);
        assert_eq!(c.hair_style(), HairStyle::Bowl);
        assert_valid(&c);
    }

    // -- ConfigField --

    #[test]
    fn field_names_round_trip() {
        for field in ConfigField::ALL {
            assert_eq!(ConfigField::from_name(field.name()).unwrap(), field);
            assert_eq!(field.name().parse::<ConfigField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_an_error() {
        assert!(matches!(
            ConfigField::from_name("beardLength"),
            Err(AvatarError::UnknownField(name)) if name == "beardLength"
        ));
    }

    #[test]
    fn only_numeric_fields_have_ranges() {
        assert_eq!(ConfigField::EyeSize.range(), Some(FieldRange::new(5, 30)));
        assert_eq!(ConfigField::NoseY.range(), Some(FieldRange::new(140, 180)));
        assert_eq!(ConfigField::SkinColor.range(), None);
        assert_eq!(ConfigField::HairStyle.range(), None);
    }

    // -- Range clamping --

    #[test]
    fn every_numeric_field_clamps_to_its_bounds() {
        let base = AvatarConfig::default();
        for field in ConfigField::ALL {
            let Some(range) = field.range() else {
                continue;
            };
            // NoseY/MouthY also move under the margin rule; test them from a
            // state where the margin cannot interfere.
            let below = base.with_number(field, i64::from(range.min) - 100);
            let above = base.with_number(field, i64::from(range.max) + 100);
            match field {
                ConfigField::NoseY => {
                    assert_eq!(below.nose_y(), range.min);
                    assert_eq!(above.nose_y(), base.mouth_y() - NOSE_MOUTH_MARGIN);
                }
                ConfigField::MouthY => {
                    assert_eq!(below.mouth_y(), base.nose_y() + NOSE_MOUTH_MARGIN);
                    assert_eq!(above.mouth_y(), range.max);
                }
                _ => {
                    assert_eq!(below.number(field), Some(range.min), "{field} min");
                    assert_eq!(above.number(field), Some(range.max), "{field} max");
                }
            }
        }
    }

    #[test]
    fn in_range_values_are_stored_verbatim() {
        let c = AvatarConfig::default().with_number(ConfigField::EarSize, 33);
        assert_eq!(c.ear_size(), 33);
    }

    #[test]
    fn huge_values_saturate_instead_of_wrapping() {
        let c = AvatarConfig::default().with_number(ConfigField::EyeY, i64::MAX);
        assert_eq!(c.eye_y(), 140);
        let c = AvatarConfig::default().with_number(ConfigField::EyeY, i64::MIN);
        assert_eq!(c.eye_y(), 80);
    }

    // -- Nose/mouth margin --

    #[test]
    fn raising_nose_y_past_margin_clamps_to_mouth_minus_ten() {
        let c = AvatarConfig::default()
            .with_number(ConfigField::MouthY, 170)
            .with_number(ConfigField::NoseY, 175);
        assert_eq!(c.mouth_y(), 170);
        assert_eq!(c.nose_y(), 160);
    }

    #[test]
    fn lowering_mouth_y_past_margin_clamps_to_nose_plus_ten() {
        let c = AvatarConfig::default().with_number(ConfigField::MouthY, 165);
        assert_eq!(c.nose_y(), 160);
        assert_eq!(c.mouth_y(), 170);
    }

    #[test]
    fn margin_is_inclusive() {
        let c = AvatarConfig::default().with_number(ConfigField::NoseY, 180);
        assert_eq!(c.nose_y(), 180);
        let c = c.with_number(ConfigField::MouthY, 190);
        assert_eq!(c.mouth_y(), 190);
    }

    // -- update() --

    #[test]
    fn update_accepts_numeric_strings() {
        let c = AvatarConfig::default()
            .update("eyeSize", &json!("25"))
            .unwrap();
        assert_eq!(c.eye_size(), 25);
        let c = c.update("eyeSpacing", &json!("64px")).unwrap();
        assert_eq!(c.eye_spacing(), 64);
    }

    #[test]
    fn update_accepts_json_numbers() {
        let c = AvatarConfig::default().update("earY", &json!(161.9)).unwrap();
        assert_eq!(c.ear_y(), 161);
    }

    #[test]
    fn update_clamps_out_of_range_without_error() {
        let c = AvatarConfig::default()
            .update("mouthWidth", &json!("500"))
            .unwrap();
        assert_eq!(c.mouth_width(), 90);
    }

    #[test]
    fn update_applies_margin_rule() {
        let c = AvatarConfig::default().update("noseY", &json!(185)).unwrap();
        assert_eq!(c.nose_y(), 180);
        let c = AvatarConfig::default()
            .update("mouthY", &json!("150"))
            .unwrap();
        assert_eq!(c.mouth_y(), 170);
    }

    #[test]
    fn update_does_not_mutate_receiver() {
        let original = AvatarConfig::default();
        let updated = original.update("eyeY", &json!(90)).unwrap();
        assert_eq!(original.eye_y(), 110);
        assert_eq!(updated.eye_y(), 90);
    }

    #[test]
    fn update_rejects_unknown_field() {
        let err = AvatarConfig::default()
            .update("beardLength", &json!(3))
            .unwrap_err();
        assert!(matches!(err, AvatarError::UnknownField(_)));
    }

    #[test]
    fn update_rejects_unparseable_number() {
        let err = AvatarConfig::default()
            .update("eyeSize", &json!("big"))
            .unwrap_err();
        assert!(matches!(
            err,
            AvatarError::ParamTypeMismatch { ref name, .. } if name == "eyeSize"
        ));
        assert!(AvatarConfig::default()
            .update("eyeSize", &json!(true))
            .is_err());
    }

    #[test]
    fn update_parses_colors() {
        let c = AvatarConfig::default()
            .update("hairColor", &json!("#E67E22"))
            .unwrap();
        assert_eq!(c.hair_color(), Rgb::new(0xe6, 0x7e, 0x22));
        assert!(matches!(
            c.update("skinColor", &json!("#zzzzzz")),
            Err(AvatarError::InvalidColor(_))
        ));
        assert!(matches!(
            c.update("skinColor", &json!(0xffdbac)),
            Err(AvatarError::ParamTypeMismatch { .. })
        ));
    }

    #[test]
    fn update_maps_enum_names_with_fallbacks() {
        let c = AvatarConfig::default();
        assert_eq!(
            c.update("noseType", &json!("round")).unwrap().nose_type(),
            NoseType::Round
        );
        assert_eq!(
            c.update("noseType", &json!("hooked")).unwrap().nose_type(),
            NoseType::Triangle
        );
        assert_eq!(
            c.update("hairStyle", &json!("curly")).unwrap().hair_style(),
            HairStyle::Curly
        );
        assert_eq!(
            c.update("hairStyle", &json!("mohawk")).unwrap().hair_style(),
            HairStyle::Bald
        );
    }

    // -- JSON --

    #[test]
    fn from_json_fills_missing_keys_with_defaults() {
        let c = AvatarConfig::from_json(&json!({"eyeSize": 20})).unwrap();
        assert_eq!(c.eye_size(), 20);
        assert_eq!(c.mouth_y(), 190);
        assert_eq!(c.hair_style(), HairStyle::Bowl);
    }

    #[test]
    fn from_json_restores_margin_by_moving_mouth() {
        let c = AvatarConfig::from_json(&json!({"noseY": 175, "mouthY": 165})).unwrap();
        assert_eq!(c.nose_y(), 175);
        assert_eq!(c.mouth_y(), 185);
        assert_valid(&c);
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(matches!(
            AvatarConfig::from_json(&json!([1, 2])),
            Err(AvatarError::ParamTypeMismatch { .. })
        ));
    }

    #[test]
    fn to_json_uses_camel_case_and_hex() {
        let v = AvatarConfig::default().to_json();
        assert_eq!(v["skinColor"], "#ffdbac");
        assert_eq!(v["eyeY"], 110);
        assert_eq!(v["noseType"], "triangle");
        assert_eq!(v["hairStyle"], "bowl");
        assert_eq!(v.as_object().unwrap().len(), ConfigField::ALL.len());
    }

    #[test]
    fn serde_and_to_json_agree() {
        let c = AvatarConfig::default()
            .with_hair_style(HairStyle::Curly)
            .with_nose_type(NoseType::Square);
        assert_eq!(serde_json::to_value(&c).unwrap(), c.to_json());
        let back: AvatarConfig = serde_json::from_value(c.to_json()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn deserialize_clamps_instead_of_failing() {
        let c: AvatarConfig = serde_json::from_str(r#"{"eyeSize": 400, "earY": "10"}"#).unwrap();
        assert_eq!(c.eye_size(), 30);
        assert_eq!(c.ear_y(), 130);
    }

    #[test]
    fn param_schema_describes_every_field() {
        let schema = AvatarConfig::param_schema();
        for field in ConfigField::ALL {
            assert!(schema.get(field.name()).is_some(), "missing {field}");
        }
        assert_eq!(schema["eyeSize"]["type"], "integer");
        assert_eq!(schema["eyeSize"]["min"], 5);
        assert_eq!(schema["eyeSize"]["max"], 30);
        assert_eq!(schema["eyeSize"]["default"], 12);
        assert_eq!(schema["skinColor"]["default"], "#ffdbac");
        assert_eq!(schema["noseType"]["options"], json!(["triangle", "round", "square"]));
        assert_eq!(schema["hairStyle"]["options"], json!(["bald", "bowl", "curly"]));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn numeric_field() -> impl Strategy<Value = ConfigField> {
            prop::sample::select(
                ConfigField::ALL
                    .into_iter()
                    .filter(|f| f.range().is_some())
                    .collect::<Vec<_>>(),
            )
        }

        proptest! {
            #[test]
            fn any_sequence_of_numeric_updates_stays_valid(
                edits in prop::collection::vec((numeric_field(), -1000_i64..1000), 0..40)
            ) {
                let config = edits
                    .into_iter()
                    .fold(AvatarConfig::default(), |c, (field, v)| c.with_number(field, v));
                assert_valid(&config);
            }

            #[test]
            fn string_updates_match_number_updates(field in numeric_field(), v in -500_i64..500) {
                let base = AvatarConfig::default();
                let via_str = base.update(field.name(), &json!(v.to_string())).unwrap();
                prop_assert_eq!(via_str, base.with_number(field, v));
            }
        }
    }
}
