/// Errors raised while validating scene parameters
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid mesh resolution {0}: must be between 1 and 255")]
    InvalidResolution(u32),

    #[error("invalid camera distance {0}: must be finite and greater than 1")]
    InvalidDistance(f64),

    #[error("invalid device pixel ratio {0}: must be finite and greater than 1")]
    InvalidPixelRatio(f64),

    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_display() {
        let err = SceneError::InvalidResolution(0);
        assert_eq!(
            err.to_string(),
            "invalid mesh resolution 0: must be between 1 and 255"
        );

        let err = SceneError::InvalidDistance(0.0);
        assert_eq!(
            err.to_string(),
            "invalid camera distance 0: must be finite and greater than 1"
        );

        let err = SceneError::Config("expected value".into());
        assert_eq!(err.to_string(), "config error: expected value");
    }
}
