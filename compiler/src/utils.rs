use crate::error::FbsError;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

pub fn error(msg: &str, line: usize, column: usize) -> FbsError {
    FbsError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_error_carries_position() {
        let err = error("boom", 3, 7);
        assert_eq!(err.to_string(), "Parse error at line 3, column 7: boom");
    }
}
