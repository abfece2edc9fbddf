//! Geometry pipeline error types.

/// Errors from the route geometry pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// No points survived normalization, so there is nothing to close
    /// into a loop.
    #[error("invalid geometry: cannot close an empty point sequence")]
    EmptyRoute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            GeometryError::EmptyRoute.to_string(),
            "invalid geometry: cannot close an empty point sequence"
        );
    }
}
