use serde_json::Value;

use super::error::BridgeError;

/// Default ceiling on the joined prompt, in characters
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 10_000;

/// Prompt fragments accepted by the bridge.
///
/// A single string is treated as a one-element sequence. `None` elements
/// of a sequence are skipped when the prompt is assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum Messages {
    Single(String),
    Many(Vec<Option<String>>),
}

impl Messages {
    /// Trim every fragment and join them with newlines
    pub fn join(&self) -> String {
        match self {
            Messages::Single(text) => text.trim().to_string(),
            Messages::Many(parts) => parts
                .iter()
                .flatten()
                .map(|part| part.trim())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Build the prompt and enforce the emptiness and length invariants.
    pub fn into_prompt(self, max_chars: usize) -> Result<String, BridgeError> {
        let prompt = self.join();

        if prompt.trim().is_empty() {
            return Err(BridgeError::EmptyPrompt);
        }

        let length = prompt.chars().count();
        if length > max_chars {
            return Err(BridgeError::PromptTooLong {
                length,
                limit: max_chars,
            });
        }

        Ok(prompt)
    }
}

impl From<String> for Messages {
    fn from(text: String) -> Self {
        Messages::Single(text)
    }
}

impl From<&str> for Messages {
    fn from(text: &str) -> Self {
        Messages::Single(text.to_string())
    }
}

impl From<Vec<String>> for Messages {
    fn from(parts: Vec<String>) -> Self {
        Messages::Many(parts.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for Messages {
    fn from(parts: Vec<&str>) -> Self {
        Messages::Many(parts.into_iter().map(|p| Some(p.to_string())).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Messages {
    fn from(parts: [&str; N]) -> Self {
        Messages::Many(parts.iter().map(|p| Some(p.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for Messages {
    fn from(parts: Vec<Option<String>>) -> Self {
        Messages::Many(parts)
    }
}

impl TryFrom<&Value> for Messages {
    type Error = BridgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Messages::Single(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Ok(Some(text.clone())),
                    Value::Null => Ok(None),
                    _ => Err(BridgeError::InvalidParameterType),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Messages::Many),
            _ => Err(BridgeError::InvalidParameterType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_trimmed_fragments_with_newlines() {
        let messages = Messages::from(vec!["  Translate:  ", "\tSun is shining.\n"]);
        assert_eq!(messages.join(), "Translate:\nSun is shining.");
    }

    #[test]
    fn skips_absent_fragments() {
        let messages = Messages::from(vec![Some("a".to_string()), None, Some(" b ".to_string())]);
        assert_eq!(messages.into_prompt(DEFAULT_MAX_PROMPT_CHARS).unwrap(), "a\nb");
    }

    #[test]
    fn whitespace_only_is_empty() {
        let err = Messages::from("   \n\t").into_prompt(DEFAULT_MAX_PROMPT_CHARS).unwrap_err();
        assert!(matches!(err, BridgeError::EmptyPrompt));

        let err = Messages::Many(vec![None, Some("  ".into())])
            .into_prompt(DEFAULT_MAX_PROMPT_CHARS)
            .unwrap_err();
        assert!(matches!(err, BridgeError::EmptyPrompt));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 10k Cyrillic letters are 20k bytes but still within the limit
        let text = "ж".repeat(DEFAULT_MAX_PROMPT_CHARS);
        assert!(Messages::from(text).into_prompt(DEFAULT_MAX_PROMPT_CHARS).is_ok());

        let text = "x".repeat(DEFAULT_MAX_PROMPT_CHARS + 1);
        let err = Messages::from(text).into_prompt(DEFAULT_MAX_PROMPT_CHARS).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::PromptTooLong {
                length: 10_001,
                limit: 10_000
            }
        ));
    }

    #[test]
    fn dynamic_values_are_type_checked() {
        assert_eq!(
            Messages::try_from(&json!("hi")).unwrap(),
            Messages::Single("hi".into())
        );
        assert_eq!(
            Messages::try_from(&json!(["a", null])).unwrap(),
            Messages::Many(vec![Some("a".into()), None])
        );

        let invalid = [
            json!(12345),
            json!(true),
            json!({"text": "hi"}),
            json!(null),
            json!(["a", 1]),
        ];
        for bad in invalid {
            assert!(matches!(
                Messages::try_from(&bad),
                Err(BridgeError::InvalidParameterType)
            ));
        }
    }
}
