use thiserror::Error;

/// Convenient result alias for the SafarPak library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the catalog or graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the source and destination of a route are the same location.
    #[error("source and destination are both {name}")]
    DegenerateQuery { name: String },

    /// Raised when a proximity threshold is not a finite positive distance.
    #[error("invalid proximity threshold: {value} km (must be finite and greater than zero)")]
    InvalidThreshold { value: f64 },

    /// Raised when travel settings (speed, fuel average, fuel price) are unusable.
    #[error("invalid travel configuration: {message}")]
    InvalidTravelConfig { message: String },

    /// Raised when city data fails validation.
    #[error("invalid location data: {message}")]
    CatalogValidation { message: String },

    /// Raised when a route result lacks any locations.
    #[error("route was empty")]
    EmptyRoute,

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for city data")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_lists_single_suggestion() {
        let err = Error::UnknownLocation {
            name: "Lahor".to_string(),
            suggestions: vec!["Lahore".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown location: Lahor. Did you mean 'Lahore'?"
        );
    }

    #[test]
    fn unknown_location_without_suggestions_is_terse() {
        let err = Error::UnknownLocation {
            name: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown location: Atlantis");
    }

    #[test]
    fn unknown_location_lists_multiple_suggestions() {
        let err = Error::UnknownLocation {
            name: "Gul".to_string(),
            suggestions: vec!["Gulberg Lahore".to_string(), "Gulbahar".to_string()],
        };
        assert!(err
            .to_string()
            .ends_with("Did you mean one of: 'Gulberg Lahore', 'Gulbahar'?"));
    }
}
