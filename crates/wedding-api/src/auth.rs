//! Shared-password authentication.
//!
//! The site has one password, stored in Secrets Manager as
//! `{"password": "..."}`. A request is authenticated when the `password`
//! field of its body is exactly that string.

use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Extract the submitted password from a parsed request body.
///
/// Missing, `null`, `false`, `0` and `""` all count as "no password".
pub fn submitted_password(request: &Value) -> ApiResult<&Value> {
    request
        .get("password")
        .filter(|value| is_truthy(value))
        .ok_or(ApiError::PasswordRequired)
}

/// Read the expected password out of the secret's string value.
///
/// Only a non-empty string counts. A secret such as `{"password": 1234}` is
/// reported as misconfigured instead of being compared, since no submitted
/// string could ever equal it.
pub fn expected_password(secret: Option<&str>) -> ApiResult<String> {
    let secret = secret.ok_or(ApiError::AuthConfiguration)?;
    let parsed: Value = serde_json::from_str(secret).map_err(|_| ApiError::AuthConfiguration)?;

    parsed
        .get("password")
        .and_then(Value::as_str)
        .filter(|password| !password.is_empty())
        .map(str::to_owned)
        .ok_or(ApiError::AuthConfiguration)
}

/// Exact, case-sensitive comparison. Non-string submissions never match.
pub fn verify(submitted: &Value, expected: &str) -> ApiResult<()> {
    if submitted.as_str() == Some(expected) {
        Ok(())
    } else {
        Err(ApiError::InvalidPassword)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_submitted_password_present() {
        let request = json!({"password": "correct"});
        assert_eq!(submitted_password(&request), Ok(&json!("correct")));
    }

    #[test]
    fn test_submitted_password_missing_or_falsy() {
        for request in [
            json!({}),
            json!({"password": null}),
            json!({"password": ""}),
            json!({"password": false}),
            json!({"password": 0}),
            json!({"pass": "correct"}),
            json!(null),
            json!("correct"),
            json!(["correct"]),
            json!(42),
        ] {
            assert_eq!(
                submitted_password(&request),
                Err(ApiError::PasswordRequired),
                "{}",
                request
            );
        }
    }

    #[test]
    fn test_expected_password() {
        assert_eq!(
            expected_password(Some(r#"{"password":"correct"}"#)),
            Ok("correct".to_string())
        );
        assert_eq!(
            expected_password(Some(r#"{"password":"correct","note":"rotated"}"#)),
            Ok("correct".to_string())
        );
    }

    #[test]
    fn test_expected_password_misconfigured() {
        for secret in [
            None,
            Some(""),
            Some("correct"),
            Some("{not json"),
            Some("null"),
            Some("{}"),
            Some(r#"{"password":""}"#),
            Some(r#"{"password":null}"#),
            Some(r#"{"password":1234}"#),
            Some(r#"{"Password":"correct"}"#),
        ] {
            assert_eq!(
                expected_password(secret),
                Err(ApiError::AuthConfiguration),
                "{:?}",
                secret
            );
        }
    }

    #[test]
    fn test_verify_is_exact() {
        assert_eq!(verify(&json!("correct"), "correct"), Ok(()));

        for submitted in ["Correct", "correct ", " correct", "correc", "correctt", "wrong"] {
            assert_eq!(
                verify(&json!(submitted), "correct"),
                Err(ApiError::InvalidPassword),
                "{}",
                submitted
            );
        }
    }

    #[test]
    fn test_verify_rejects_non_strings() {
        assert_eq!(verify(&json!(1234), "1234"), Err(ApiError::InvalidPassword));
        assert_eq!(verify(&json!(true), "true"), Err(ApiError::InvalidPassword));
        assert_eq!(
            verify(&json!({"password": "correct"}), "correct"),
            Err(ApiError::InvalidPassword)
        );
    }
}
