//! The validated shape of model output.
//!
//! Internal field names are plain English; the wire format uses hyphenated
//! locale-style keys (`en-us`, `zh-cn`, `zh-pinyin`) via serde renames, so
//! serialization is the exact inverse of parsing.

use serde::{Deserialize, Serialize};

/// The user's message and its translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationInput {
    /// The user's original input, reiterated verbatim.
    pub raw: String,
    #[serde(rename = "en-us")]
    pub english: String,
    #[serde(rename = "zh-cn")]
    pub mandarin: String,
    #[serde(rename = "zh-pinyin")]
    pub pinyin: String,
}

/// Corrections to the user's Chinese, present only when warranted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCorrections {
    /// Exposition of the corrections needed.
    pub critiques: String,
    /// How the recommended changes alter the meaning of the message.
    pub reasoning: String,
    #[serde(rename = "zh-cn")]
    pub mandarin: String,
    #[serde(rename = "zh-pinyin")]
    pub pinyin: String,
}

/// The assistant's reply and its translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOutput {
    #[serde(rename = "en-us")]
    pub english: String,
    #[serde(rename = "zh-cn")]
    pub mandarin: String,
    #[serde(rename = "zh-pinyin")]
    pub pinyin: String,
}

/// The structured response returned to the caller.
///
/// `output` is always present. `corrections` is `None` when the model
/// determined no correction was warranted; the key is then omitted from
/// serialized output entirely, never emitted as `null` or as an
/// empty-but-present object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub input: TranslationInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrections: Option<TranslationCorrections>,
    pub output: TranslationOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response(corrections: Option<TranslationCorrections>) -> TranslationResponse {
        TranslationResponse {
            input: TranslationInput {
                raw: "我想学习中文。".to_string(),
                english: "I want to learn Chinese.".to_string(),
                mandarin: "我想学习中文。".to_string(),
                pinyin: "wǒ xiǎng xuéxí zhōngwén.".to_string(),
            },
            corrections,
            output: TranslationOutput {
                english: "That's great! What would you like to practice?".to_string(),
                mandarin: "太好了！你想练习什么？".to_string(),
                pinyin: "tài hǎo le! nǐ xiǎng liànxí shénme?".to_string(),
            },
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_response(None)).unwrap();
        assert!(json["input"].get("en-us").is_some());
        assert!(json["input"].get("zh-cn").is_some());
        assert!(json["input"].get("zh-pinyin").is_some());
        assert!(json["input"].get("english").is_none());
        assert!(json["output"].get("en-us").is_some());
    }

    #[test]
    fn absent_corrections_key_is_omitted() {
        let json = serde_json::to_value(sample_response(None)).unwrap();
        assert!(json.get("corrections").is_none());
    }

    #[test]
    fn present_corrections_serialize_in_full() {
        let response = sample_response(Some(TranslationCorrections {
            critiques: "\"名字\" (míngzi) would be more natural here.".to_string(),
            reasoning: "The original phrasing reads as a literal translation.".to_string(),
            mandarin: "我想学中文。".to_string(),
            pinyin: "wǒ xiǎng xué zhōngwén.".to_string(),
        }));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["corrections"].get("critiques").is_some());
        assert!(json["corrections"].get("zh-cn").is_some());
    }

    #[test]
    fn deserializes_null_corrections_as_absent() {
        let mut json = serde_json::to_value(sample_response(None)).unwrap();
        json["corrections"] = serde_json::Value::Null;
        let parsed: TranslationResponse = serde_json::from_value(json).unwrap();
        assert!(parsed.corrections.is_none());
    }
}
