use crate::validation::ValidationFailure;

/// Domain-level failures raised by the service layer.
///
/// The HTTP layer renders each variant into a status code and envelope; the
/// `Display` text of `NotFound` and `BadRequest` is what clients see.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = CoreError::NotFound { entity: "category" };
        assert_eq!(err.to_string(), "category not found");
    }

    #[test]
    fn bad_request_displays_message_verbatim() {
        let err = CoreError::BadRequest("category did not exists".into());
        assert_eq!(err.to_string(), "category did not exists");
    }
}
