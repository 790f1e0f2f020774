use serde::{Deserialize, Serialize};

/// Edit request sent by the extension to the host.
///
/// Serialized field order follows declaration order: `text`, `editor`,
/// `args`, then `ext` when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Text to edit. Arbitrary Unicode, including control characters and
    /// multi-byte scripts.
    pub text: String,
    /// Path or name of the editor command. May be empty, in which case the
    /// host picks a fallback.
    pub editor: String,
    /// Argument vector passed to the editor.
    pub args: Vec<String>,
    /// Optional file extension hint for the scratch file (e.g. "txt").
    ///
    /// Absence and an empty string are distinct states; both survive a
    /// round-trip unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

impl Message {
    /// Create a message with no extension hint.
    pub fn new(
        text: impl Into<String>,
        editor: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            editor: editor.into(),
            args: args.into_iter().map(Into::into).collect(),
            ext: None,
        }
    }

    /// Set the extension hint.
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }
}

/// Edit reply sent by the host back to the extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    /// The (possibly updated) text.
    pub text: String,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ext_absent_is_omitted_from_json() {
        let msg = Message::new("a", "", ["-c"]);
        let json = serde_json::to_value(&msg).unwrap();

        assert!(json.get("ext").is_none());
    }

    #[test]
    fn ext_empty_string_is_kept() {
        let msg = Message::new("a", "", ["-c"]).with_ext("");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json.get("ext").and_then(|v| v.as_str()), Some(""));
    }

    #[test]
    fn field_order_matches_wire_fixtures() {
        let msg = Message::new("a", "", ["-c", ":set ft=markdown"]).with_ext("txt");
        let json = serde_json::to_string(&msg).unwrap();

        assert_eq!(
            json,
            r#"{"text":"a","editor":"","args":["-c",":set ft=markdown"],"ext":"txt"}"#
        );
    }

    #[test]
    fn reply_serializes_text_only() {
        let reply = Reply::new("updated");
        let json = serde_json::to_string(&reply).unwrap();

        assert_eq!(json, r#"{"text":"updated"}"#);
    }
}
