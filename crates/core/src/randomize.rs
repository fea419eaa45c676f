//! Random avatar generation.
//!
//! Numeric fields are sampled uniformly from their declared ranges and colors
//! from fixed palettes. The nose and mouth are sampled jointly so that the
//! mouth always sits at least [`RANDOM_NOSE_MOUTH_GAP`] pixels below the nose
//! and never above the top of its own range, without going through the clamp
//! path.

use crate::color::Rgb;
use crate::config::{AvatarConfig, ConfigField, FieldRange, HairStyle, NoseType};
use crate::prng::Xorshift64;

/// Skin tones offered by the randomizer.
pub const SKIN_TONES: [Rgb; 8] = [
    Rgb::from_u32(0xffdbac),
    Rgb::from_u32(0xf1c27d),
    Rgb::from_u32(0xe0ac69),
    Rgb::from_u32(0x8d5524),
    Rgb::from_u32(0xc68642),
    Rgb::from_u32(0x573719),
    Rgb::from_u32(0xffcc99),
    Rgb::from_u32(0x3e2723),
];

/// Shirt colors offered by the randomizer.
pub const CLOTHING_COLORS: [Rgb; 7] = [
    Rgb::from_u32(0xe74c3c),
    Rgb::from_u32(0x3498db),
    Rgb::from_u32(0x9b59b6),
    Rgb::from_u32(0x2ecc71),
    Rgb::from_u32(0xf1c40f),
    Rgb::from_u32(0x34495e),
    Rgb::from_u32(0x95a5a6),
];

/// Hair colors offered by the randomizer.
pub const HAIR_COLORS: [Rgb; 8] = [
    Rgb::from_u32(0x2c3e50),
    Rgb::from_u32(0x8e44ad),
    Rgb::from_u32(0xf1c40f),
    Rgb::from_u32(0xe67e22),
    Rgb::from_u32(0xe74c3c),
    Rgb::from_u32(0x95a5a6),
    Rgb::from_u32(0x000000),
    Rgb::from_u32(0x5a3a2a),
];

/// Range the randomizer draws `noseY` from (narrower than the editable range).
pub const RANDOM_NOSE_Y: FieldRange = FieldRange::new(140, 170);

/// Minimum distance between a random nose and a random mouth.
pub const RANDOM_NOSE_MOUTH_GAP: i32 = 15;

/// Produces a valid config with every field drawn independently from `rng`.
pub fn randomize(rng: &mut Xorshift64) -> AvatarConfig {
    let mut sample = |field: ConfigField| -> i32 {
        // Every field passed here is numeric; fall back to a degenerate
        // range instead of panicking if that ever changes.
        let range = field.range().unwrap_or(FieldRange::new(0, 0));
        rng.next_int_inclusive(range.min, range.max)
    };

    let eye_size = sample(ConfigField::EyeSize);
    let eye_y = sample(ConfigField::EyeY);
    let eye_spacing = sample(ConfigField::EyeSpacing);
    let mouth_width = sample(ConfigField::MouthWidth);
    let ear_size = sample(ConfigField::EarSize);
    let ear_y = sample(ConfigField::EarY);
    let nose_size = sample(ConfigField::NoseSize);

    let mouth_range = ConfigField::MouthY.range().unwrap_or(FieldRange::new(
        RANDOM_NOSE_Y.max + RANDOM_NOSE_MOUTH_GAP,
        RANDOM_NOSE_Y.max + RANDOM_NOSE_MOUTH_GAP,
    ));
    let nose_y = rng.next_int_inclusive(RANDOM_NOSE_Y.min, RANDOM_NOSE_Y.max);
    // A high nose would allow a mouth above the mouth range; the range floor wins.
    let mouth_min = (nose_y + RANDOM_NOSE_MOUTH_GAP).max(mouth_range.min);
    let mouth_y = rng.next_int_inclusive(mouth_min, mouth_range.max);

    AvatarConfig {
        skin_color: *rng.choose(&SKIN_TONES),
        clothing_color: *rng.choose(&CLOTHING_COLORS),
        hair_color: *rng.choose(&HAIR_COLORS),
        eye_size,
        eye_y,
        eye_spacing,
        mouth_width,
        mouth_y,
        ear_size,
        ear_y,
        nose_size,
        nose_type: *rng.choose(&NoseType::ALL),
        nose_y,
        hair_style: *rng.choose(&HairStyle::ALL),
    }
}
