//! Supported locale registry for CareLingo.
//!
//! Speech capture runs on full locale tags (`es-MX`), while the external
//! translation providers only understand two-letter ISO 639-1 codes.
//! [`LanguageTag`] carries the full tag and reduces it on demand;
//! [`SUPPORTED_LANGUAGES`] is the static table the language picker is
//! built from.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default source locale when nothing is configured.
pub const DEFAULT_SOURCE: &str = "en-US";

/// Default target locale when nothing is configured.
pub const DEFAULT_TARGET: &str = "es-ES";

/// A locale identifier such as `en-US` or `pt-BR`.
///
/// The tag is kept verbatim; no normalization happens on construction.
/// Providers that require a bare ISO 639-1 code get it via
/// [`LanguageTag::primary`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "en-US")]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag: everything before the first `-`.
    ///
    /// `en-US` becomes `en`; a tag without a region part is returned
    /// unchanged.
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Whether the tag appears in [`SUPPORTED_LANGUAGES`].
    pub fn is_supported(&self) -> bool {
        find(&self.0).is_some()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One supported locale with its display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Full locale tag, e.g. `es-MX`.
    #[schema(example = "es-MX")]
    pub code: &'static str,
    /// English display name.
    #[schema(example = "Spanish (Mexico)")]
    pub name: &'static str,
    /// Name in the language itself.
    #[schema(example = "Español (México)")]
    pub native_name: &'static str,
}

/// Locales offered by the product, in picker order.
pub const SUPPORTED_LANGUAGES: [Language; 16] = [
    Language { code: "en-US", name: "English (US)", native_name: "English (US)" },
    Language { code: "en-GB", name: "English (UK)", native_name: "English (UK)" },
    Language { code: "es-ES", name: "Spanish (Spain)", native_name: "Español (España)" },
    Language { code: "es-MX", name: "Spanish (Mexico)", native_name: "Español (México)" },
    Language { code: "fr-FR", name: "French", native_name: "Français" },
    Language { code: "de-DE", name: "German", native_name: "Deutsch" },
    Language { code: "it-IT", name: "Italian", native_name: "Italiano" },
    Language { code: "pt-PT", name: "Portuguese (Portugal)", native_name: "Português (Portugal)" },
    Language { code: "pt-BR", name: "Portuguese (Brazil)", native_name: "Português (Brasil)" },
    Language { code: "ru-RU", name: "Russian", native_name: "Русский" },
    Language { code: "zh-CN", name: "Chinese (Simplified)", native_name: "中文（简体）" },
    Language { code: "zh-TW", name: "Chinese (Traditional)", native_name: "中文（繁體）" },
    Language { code: "ja-JP", name: "Japanese", native_name: "日本語" },
    Language { code: "ko-KR", name: "Korean", native_name: "한국어" },
    Language { code: "hi-IN", name: "Hindi", native_name: "हिन्दी" },
    Language { code: "ar-SA", name: "Arabic", native_name: "العربية" },
];

/// Look up a supported locale by its full tag.
pub fn find(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}
