//! Context-typed escaping for generated markup
//!
//! Every value interpolated into an embed template is wrapped in one of the
//! types below. Each type can only be built through its escaping constructor,
//! so a template context field declared as `HtmlText` cannot hold raw author
//! text by accident. All of them serialize as plain strings and the templates
//! emit them with triple braces, so mustache never escapes a second time.
//!
//! | Type          | Context                                   |
//! |---------------|-------------------------------------------|
//! | `HtmlText`    | element content                           |
//! | `AttrValue`   | double-quoted attribute value             |
//! | `JsString`    | body of a double-quoted JS string literal |
//! | `JsonData`    | JS object literal in a `<script>` block   |
//! | `CssValue`    | a declaration value in a `<style>` block  |
//! | `TrustedHtml` | markup built by this crate                |

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! escaped_string_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

escaped_string_type!(
    /// Text escaped for HTML element content
    HtmlText
);
escaped_string_type!(
    /// Text escaped for a double-quoted HTML attribute
    AttrValue
);
escaped_string_type!(
    /// Text escaped for the inside of a `"..."` JavaScript string literal
    JsString
);
escaped_string_type!(
    /// A JSON value safe to place inside a `<script>` block
    JsonData
);
escaped_string_type!(
    /// A CSS value passed through verbatim, minus block terminators
    CssValue
);
escaped_string_type!(
    /// Markup assembled by this crate from already-escaped parts
    TrustedHtml
);

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a string for a double- or single-quoted JavaScript literal
///
/// Besides quotes and backslashes this breaks up `</` and `<!--`, so the
/// literal can never terminate or comment out the enclosing `<script>`.
pub fn escape_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' => match chars.peek() {
                Some('/') | Some('!') => out.push_str("\\x3C"),
                _ => out.push('<'),
            },
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Neutralize sequences that would close a `<style>` or `<script>` block
pub fn escape_block_terminators(text: &str) -> String {
    text.replace("</", "<\\/")
}

impl HtmlText {
    pub fn new(text: &str) -> Self {
        Self(escape_html(text))
    }
}

impl AttrValue {
    pub fn new(text: &str) -> Self {
        Self(escape_html(text))
    }
}

impl JsString {
    pub fn new(text: &str) -> Self {
        Self(escape_js(text))
    }
}

impl CssValue {
    /// CSS values are not validated; invalid CSS is the author's to fix.
    /// Only `<`, `{` and `}` are dropped so a value cannot leave its
    /// declaration or the surrounding `<style>` block.
    pub fn new(value: &str) -> Self {
        Self(
            value
                .chars()
                .filter(|c| !matches!(c, '<' | '{' | '}'))
                .collect(),
        )
    }
}

impl JsonData {
    /// Serialize `value` as JSON and make it inert inside `<script>`
    ///
    /// `<`, `>` and `&` only occur inside JSON strings, so replacing them
    /// with unicode escapes keeps the value identical once parsed.
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_string(value)?;
        let mut out = String::with_capacity(json.len());
        for ch in json.chars() {
            match ch {
                '<' => out.push_str("\\u003c"),
                '>' => out.push_str("\\u003e"),
                '&' => out.push_str("\\u0026"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                c => out.push(c),
            }
        }
        Ok(Self(out))
    }
}

impl TrustedHtml {
    /// Markup from this crate's own builders or static catalogs
    pub(crate) fn from_markup(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    pub fn push(&mut self, other: &TrustedHtml) {
        self.0.push_str(&other.0);
    }

    pub(crate) fn push_markup(&mut self, markup: &str) {
        self.0.push_str(markup);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_html(text));
    }
}

impl From<HtmlText> for TrustedHtml {
    fn from(text: HtmlText) -> Self {
        Self(text.0)
    }
}
