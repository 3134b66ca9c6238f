//! Strict parse-then-validate pipeline for raw model output.
//!
//! The model's output is untrusted free text expected to be JSON. This
//! module never fabricates values for missing fields and never coerces a
//! failure into a default response; a silently wrong translation is worse
//! than a visible failure.

use serde_json::{Map, Value};

use super::errors::{MalformedOutputError, OutputParseError, SchemaValidationError};
use super::response::{
    TranslationCorrections, TranslationInput, TranslationOutput, TranslationResponse,
};

/// Turns raw provider text into a validated [`TranslationResponse`].
///
/// `new_message` is the verbatim message from the request; the parsed
/// `input.raw` must match it exactly, since the model is not trusted to
/// echo the input faithfully.
///
/// # Errors
///
/// - [`MalformedOutputError`] when the raw text is not valid JSON.
/// - [`SchemaValidationError`] when the JSON is missing a section or field,
///   carries a non-string value, or echoes a different `input.raw`.
pub fn parse_response(
    raw: &str,
    new_message: &str,
) -> Result<TranslationResponse, OutputParseError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| MalformedOutputError::new(e.to_string()))?;
    let root = value
        .as_object()
        .ok_or(SchemaValidationError::NotAnObject)?;

    let input = parse_input(section(root, "input")?)?;

    // Key absent or JSON null both mean "no corrections section". An
    // empty-but-present object is not tolerated as absence; it fails
    // field validation like any other malformed section.
    let corrections = match root.get("corrections") {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_corrections(as_section(value, "corrections")?)?),
    };

    let output = parse_output(section(root, "output")?)?;

    if input.raw != new_message {
        return Err(SchemaValidationError::RawMismatch.into());
    }

    Ok(TranslationResponse {
        input,
        corrections,
        output,
    })
}

fn parse_input(fields: &Map<String, Value>) -> Result<TranslationInput, SchemaValidationError> {
    Ok(TranslationInput {
        raw: required_string(fields, "input", "raw")?,
        english: required_string(fields, "input", "en-us")?,
        mandarin: required_string(fields, "input", "zh-cn")?,
        pinyin: required_string(fields, "input", "zh-pinyin")?,
    })
}

fn parse_corrections(
    fields: &Map<String, Value>,
) -> Result<TranslationCorrections, SchemaValidationError> {
    Ok(TranslationCorrections {
        critiques: required_string(fields, "corrections", "critiques")?,
        reasoning: required_string(fields, "corrections", "reasoning")?,
        mandarin: required_string(fields, "corrections", "zh-cn")?,
        pinyin: required_string(fields, "corrections", "zh-pinyin")?,
    })
}

fn parse_output(fields: &Map<String, Value>) -> Result<TranslationOutput, SchemaValidationError> {
    Ok(TranslationOutput {
        english: required_string(fields, "output", "en-us")?,
        mandarin: required_string(fields, "output", "zh-cn")?,
        pinyin: required_string(fields, "output", "zh-pinyin")?,
    })
}

fn section<'a>(
    root: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Map<String, Value>, SchemaValidationError> {
    let value = root
        .get(name)
        .ok_or(SchemaValidationError::MissingSection(name))?;
    as_section(value, name)
}

fn as_section<'a>(
    value: &'a Value,
    name: &'static str,
) -> Result<&'a Map<String, Value>, SchemaValidationError> {
    value
        .as_object()
        .ok_or(SchemaValidationError::SectionNotObject(name))
}

fn required_string(
    fields: &Map<String, Value>,
    section: &'static str,
    field: &'static str,
) -> Result<String, SchemaValidationError> {
    match fields.get(field) {
        None => Err(SchemaValidationError::MissingField { section, field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SchemaValidationError::WrongType { section, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NEW_MESSAGE: &str = "我想学习中文。";

    fn valid_output() -> serde_json::Value {
        serde_json::json!({
            "input": {
                "raw": NEW_MESSAGE,
                "en-us": "I want to learn Chinese.",
                "zh-cn": "我想学习中文。",
                "zh-pinyin": "wǒ xiǎng xuéxí zhōngwén."
            },
            "corrections": {
                "critiques": "\"学习\" (xuéxí) is fine here, but \"学\" (xué) is more conversational.",
                "reasoning": "Both are correct; the shorter form sounds more natural in chat.",
                "zh-cn": "我想学中文。",
                "zh-pinyin": "wǒ xiǎng xué zhōngwén."
            },
            "output": {
                "en-us": "That's great! Let's chat in Chinese.",
                "zh-cn": "太好了！我们用中文聊天吧。",
                "zh-pinyin": "tài hǎo le! wǒmen yòng zhōngwén liáotiān ba."
            }
        })
    }

    #[test]
    fn parses_a_complete_response() {
        let raw = valid_output().to_string();
        let response = parse_response(&raw, NEW_MESSAGE).unwrap();

        assert_eq!(response.input.raw, NEW_MESSAGE);
        assert_eq!(response.input.english, "I want to learn Chinese.");
        assert!(response.corrections.is_some());
        assert_eq!(response.output.mandarin, "太好了！我们用中文聊天吧。");
    }

    #[test]
    fn invalid_json_is_malformed_output() {
        let err = parse_response("not json", NEW_MESSAGE).unwrap_err();
        assert!(matches!(err, OutputParseError::Malformed(_)));
    }

    #[test]
    fn non_object_json_fails_schema_validation() {
        let err = parse_response("[1, 2, 3]", NEW_MESSAGE).unwrap_err();
        assert_eq!(
            err,
            OutputParseError::Schema(SchemaValidationError::NotAnObject)
        );
    }

    #[test]
    fn missing_output_section_is_named() {
        let mut value = valid_output();
        value.as_object_mut().unwrap().remove("output");
        let err = parse_response(&value.to_string(), NEW_MESSAGE).unwrap_err();
        assert_eq!(
            err,
            OutputParseError::Schema(SchemaValidationError::MissingSection("output"))
        );
    }

    #[test]
    fn missing_field_names_section_and_key() {
        let mut value = valid_output();
        value["output"].as_object_mut().unwrap().remove("zh-cn");
        value["output"].as_object_mut().unwrap().remove("zh-pinyin");
        let err = parse_response(&value.to_string(), NEW_MESSAGE).unwrap_err();
        assert_eq!(
            err,
            OutputParseError::Schema(SchemaValidationError::MissingField {
                section: "output",
                field: "zh-cn",
            })
        );
    }

    #[test]
    fn non_string_field_is_wrong_type() {
        let mut value = valid_output();
        value["input"]["zh-pinyin"] = serde_json::json!(42);
        let err = parse_response(&value.to_string(), NEW_MESSAGE).unwrap_err();
        assert_eq!(
            err,
            OutputParseError::Schema(SchemaValidationError::WrongType {
                section: "input",
                field: "zh-pinyin",
            })
        );
    }

    #[test]
    fn absent_corrections_parses_as_none() {
        let mut value = valid_output();
        value.as_object_mut().unwrap().remove("corrections");
        let response = parse_response(&value.to_string(), NEW_MESSAGE).unwrap();
        assert!(response.corrections.is_none());
    }

    #[test]
    fn null_corrections_parses_as_none() {
        let mut value = valid_output();
        value["corrections"] = serde_json::Value::Null;
        let response = parse_response(&value.to_string(), NEW_MESSAGE).unwrap();
        assert!(response.corrections.is_none());
    }

    #[test]
    fn empty_corrections_object_is_not_absence() {
        let mut value = valid_output();
        value["corrections"] = serde_json::json!({});
        let err = parse_response(&value.to_string(), NEW_MESSAGE).unwrap_err();
        assert_eq!(
            err,
            OutputParseError::Schema(SchemaValidationError::MissingField {
                section: "corrections",
                field: "critiques",
            })
        );
    }

    #[test]
    fn reserializing_absent_corrections_omits_the_key() {
        let mut value = valid_output();
        value.as_object_mut().unwrap().remove("corrections");
        let response = parse_response(&value.to_string(), NEW_MESSAGE).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("corrections").is_none());
    }

    #[test]
    fn mismatched_raw_is_rejected() {
        let mut value = valid_output();
        value["input"]["raw"] = serde_json::json!("something else entirely");
        let err = parse_response(&value.to_string(), NEW_MESSAGE).unwrap_err();
        assert_eq!(
            err,
            OutputParseError::Schema(SchemaValidationError::RawMismatch)
        );
    }

    fn arb_input(raw: String) -> impl Strategy<Value = TranslationInput> {
        (any::<String>(), any::<String>(), any::<String>()).prop_map(
            move |(english, mandarin, pinyin)| TranslationInput {
                raw: raw.clone(),
                english,
                mandarin,
                pinyin,
            },
        )
    }

    fn arb_corrections() -> impl Strategy<Value = Option<TranslationCorrections>> {
        proptest::option::of(
            (
                any::<String>(),
                any::<String>(),
                any::<String>(),
                any::<String>(),
            )
                .prop_map(|(critiques, reasoning, mandarin, pinyin)| TranslationCorrections {
                    critiques,
                    reasoning,
                    mandarin,
                    pinyin,
                }),
        )
    }

    fn arb_response() -> impl Strategy<Value = TranslationResponse> {
        (any::<String>(), any::<String>(), any::<String>(), any::<String>())
            .prop_flat_map(|(raw, english, mandarin, pinyin)| {
                (
                    arb_input(raw),
                    arb_corrections(),
                    Just(TranslationOutput {
                        english,
                        mandarin,
                        pinyin,
                    }),
                )
            })
            .prop_map(|(input, corrections, output)| TranslationResponse {
                input,
                corrections,
                output,
            })
    }

    proptest! {
        // Serialization to the wire format is the exact inverse of the
        // strict parser, with absent corrections preserved absent.
        #[test]
        fn wire_round_trip(response in arb_response()) {
            let raw = serde_json::to_string(&response).unwrap();
            let parsed = parse_response(&raw, &response.input.raw).unwrap();
            prop_assert_eq!(parsed, response);
        }
    }
}
