pub mod rate;

use serde_json::json;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn plain(exit_code: u8, line: impl Into<String>) -> Self {
        Self { exit_code, output: line.into() }
    }

    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = json!({
            "command": command,
            "status": "ok",
            "error_class": null,
            "message": message.into(),
        });
        Self { exit_code: 0, output: payload.to_string() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = json!({
            "command": command,
            "status": "error",
            "error_class": error_class,
            "message": message.into(),
        });
        Self { exit_code, output: payload.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::CommandResult;

    #[test]
    fn failure_payload_escapes_message_text() {
        let result = CommandResult::failure("rate", "config_validation", "bad \"path\" \\ here", 2);
        let payload: Value = serde_json::from_str(&result.output).expect("valid JSON");

        assert_eq!(result.exit_code, 2);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
        assert_eq!(payload["message"], "bad \"path\" \\ here");
    }

    #[test]
    fn success_payload_has_null_error_class() {
        let payload: Value =
            serde_json::from_str(&CommandResult::success("rate", "ok").output).expect("valid JSON");

        assert_eq!(payload["command"], "rate");
        assert!(payload["error_class"].is_null());
    }
}
