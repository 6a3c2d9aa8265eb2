use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
    #[error("invalid enhancer config: {0}")]
    Config(#[from] serde_json::Error),
}

impl EnhanceError {
    /// Wraps a failed web-sys call, keeping whatever text the JS error carried.
    pub fn js(context: &'static str) -> impl FnOnce(JsValue) -> EnhanceError {
        move |value| EnhanceError::Js {
            context,
            message: value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_mention_the_parser_failure() {
        let err: EnhanceError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid enhancer config"));
    }

    #[test]
    fn js_errors_carry_their_context() {
        let err = EnhanceError::Js {
            context: "observe",
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "observe: boom");
    }
}
