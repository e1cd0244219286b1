use spiral_core::SceneError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    #[error("Browser does not support WebGL")]
    NoContext,

    #[error("Error in {stage} shader:  {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("Link error in program:  {0}")]
    ProgramLink(String),

    #[error("could not create {0}")]
    ResourceCreation(&'static str),

    #[error("shader input not found: {0}")]
    ShaderInput(&'static str),

    #[error("a frame is already being drawn")]
    Busy,

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ViewerError {
    fn from(value: JsValue) -> Self {
        ViewerError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_error_display() {
        let err = ViewerError::ShaderCompile {
            stage: "vertex",
            log: "ERROR: 0:3: syntax error".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error in vertex shader:  ERROR: 0:3: syntax error"
        );

        let err = ViewerError::ProgramLink("missing main".into());
        assert_eq!(err.to_string(), "Link error in program:  missing main");

        let err = ViewerError::NoContext;
        assert_eq!(err.to_string(), "Browser does not support WebGL");

        let err = ViewerError::ElementNotFound("draw".into());
        assert_eq!(err.to_string(), "element not found: #draw");
    }

    #[test]
    fn viewer_error_from_scene() {
        let err: ViewerError = SceneError::InvalidDistance(0.0).into();
        assert!(matches!(err, ViewerError::Scene(_)));
        assert!(err.to_string().contains("camera distance"));
    }
}
