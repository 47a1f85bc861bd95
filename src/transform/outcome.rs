use serde::Serialize;

use super::TransformResult;

/// Flat success/result/error record handed to callers that cannot match on
/// a `Result`. Exactly one of `result` and `error` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransformOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl From<TransformResult> for TransformOutcome {
    fn from(res: TransformResult) -> Self {
        match res {
            Ok(text) => TransformOutcome {
                success: true,
                result: Some(text),
                error: None,
                code: None,
            },
            Err(err) => TransformOutcome {
                success: false,
                result: None,
                error: Some(err.to_string()),
                code: Some(err.code()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::TransformError;

    #[test]
    fn test_outcome_json_shape() {
        let ok = TransformOutcome::from(Ok("1609459200000".to_string()));
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"success":true,"result":"1609459200000"}"#
        );

        let failed = TransformOutcome::from(Err(TransformError::EmptySelection));
        assert!(!failed.success);
        assert!(failed.result.is_none());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({
                "success": false,
                "error": "please select text to convert",
                "code": "empty_selection",
            })
        );
    }
}
