//! Error types for the avatar-engine core.

use thiserror::Error;

/// Errors produced by config updates, surfaces and export.
///
/// Out-of-range numeric values are never an error: they are clamped. These
/// variants cover input that cannot be interpreted at all.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// Width or height was zero (or too large) when creating a surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An update named a field the config does not have.
    #[error("unknown config field: {0}")]
    UnknownField(String),

    /// A raw value could not be coerced into the field's type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Writing an exported image failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Encoding the surface to an image format failed.
    #[error("encode error: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = AvatarError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn unknown_field_includes_name() {
        let err = AvatarError::UnknownField("beardLength".into());
        let msg = format!("{err}");
        assert!(msg.contains("beardLength"), "missing field name in: {msg}");
    }

    #[test]
    fn param_type_mismatch_includes_all_fields() {
        let err = AvatarError::ParamTypeMismatch {
            name: "eyeSize".into(),
            expected: "integer".into(),
            got: "boolean".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("eyeSize"), "missing param name in: {msg}");
        assert!(msg.contains("integer"), "missing expected type in: {msg}");
        assert!(msg.contains("boolean"), "missing got type in: {msg}");
    }

    #[test]
    fn invalid_color_echoes_input() {
        let msg = AvatarError::InvalidColor("#12345g".into()).to_string();
        assert_eq!(msg, "invalid color: #12345g");
    }

    #[test]
    fn io_and_encode_include_message() {
        let io = AvatarError::Io("disk full".into());
        let enc = AvatarError::Encode("buffer mismatch".into());
        assert!(io.to_string().contains("disk full"));
        assert!(enc.to_string().contains("buffer mismatch"));
    }

    #[test]
    fn avatar_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AvatarError>();
    }

    #[test]
    fn avatar_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<AvatarError>();
    }
}
