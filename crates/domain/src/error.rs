//! Common error types used across the workspace.
//!
//! Each layer converts into [`BrewlinkError`] via `#[from]`; no `String`
//! variants. The HTTP adapter maps the top-level variants onto status codes.

/// Top-level error for registry and service operations.
#[derive(Debug, thiserror::Error)]
pub enum BrewlinkError {
    /// The request named something the device does not support.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested device does not exist.
    #[error("device not found")]
    NotFound(#[from] NotFoundError),
}

/// A request violated a domain invariant.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Device descriptors must carry a non-empty friendly name.
    #[error("friendly name must not be empty")]
    EmptyName,

    /// The requested brew strength is outside the supported set.
    #[error("unsupported brew strength \"{value}\" (expected one of: light, medium, strong)")]
    UnsupportedBrewStrength {
        /// The offending value as sent by the platform.
        value: String,
    },

    /// The mode directive targeted an instance this device does not expose.
    #[error("unsupported mode instance \"{instance}\"")]
    UnsupportedInstance {
        /// The instance named in the directive header.
        instance: String,
    },

    /// The namespace/name pair does not map to a supported operation.
    #[error("unsupported directive {namespace}.{name}")]
    UnsupportedDirective {
        /// Directive header namespace.
        namespace: String,
        /// Directive header name.
        name: String,
    },

    /// A required envelope field was absent.
    #[error("missing required field {field}")]
    MissingField {
        /// Dotted path of the missing field.
        field: &'static str,
    },
}

/// Lookup failure for a named entity.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BrewStrength;

    #[test]
    fn should_name_offending_value_in_brew_strength_error() {
        let err = ValidationError::UnsupportedBrewStrength {
            value: "espresso".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("espresso"));
    }

    #[test]
    fn should_list_every_supported_strength_in_brew_strength_error() {
        let err = ValidationError::UnsupportedBrewStrength {
            value: "espresso".to_string(),
        };
        let message = err.to_string();
        for strength in BrewStrength::ALL {
            assert!(
                message.contains(strength.as_str()),
                "error message should mention {strength}"
            );
        }
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: BrewlinkError = ValidationError::EmptyName.into();
        assert!(matches!(err, BrewlinkError::Validation(_)));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "coffee_maker_123".to_string(),
        };
        assert_eq!(err.to_string(), "Device coffee_maker_123 not found");
    }
}
