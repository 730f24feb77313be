use std::borrow::Cow;

use eyre::WrapErr;
use regex::{NoExpand, Regex};

mod terms;

struct TermRule {
    pattern: Regex,
    replacement: String,
}

/// Ordered substitution rules for one target language.
///
/// Rule order is load-bearing: each rule runs over the output of the previous
/// one, so compound terms (초등학교, 학년도, 안내문) must be declared before
/// the shorter terms they contain (학교, 학년, 안내).
struct TermMap {
    rules: Vec<TermRule>,
}

impl TermMap {
    fn from_entries(entries: &[(&str, &str)]) -> eyre::Result<Self> {
        let rules = entries
            .iter()
            .map(|(korean, translated)| {
                let pattern = Regex::new(&regex::escape(korean))
                    .wrap_err_with(|| format!("failed to compile pattern for term `{korean}`"))?;
                Ok(TermRule {
                    pattern,
                    replacement: (*translated).to_string(),
                })
            })
            .collect::<eyre::Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    fn apply(&self, text: &str) -> String {
        let mut translated = text.to_string();
        for rule in &self.rules {
            // NoExpand keeps `$` in replacement text literal.
            if let Cow::Owned(next) = rule
                .pattern
                .replace_all(&translated, NoExpand(&rule.replacement))
            {
                translated = next;
            }
        }
        translated
    }
}

/// Rewrites Korean school-administration vocabulary into a target language by
/// literal substring substitution.
///
/// The dictionaries are built once at startup and read-only afterwards; every
/// call is an independent, deterministic transformation of its input.
pub struct Translator {
    dictionary: Vec<(String, TermMap)>,
}

impl Translator {
    /// Builds a translator from `(language_code, entries)` tables. Fails if a
    /// term does not compile into a pattern, so bad tables are caught at load
    /// instead of surfacing mid-request.
    pub fn from_entries(languages: &[(&str, &[(&str, &str)])]) -> eyre::Result<Self> {
        let dictionary = languages
            .iter()
            .map(|(language, entries)| {
                let map = TermMap::from_entries(entries)
                    .wrap_err_with(|| format!("failed to load term map for `{language}`"))?;
                Ok(((*language).to_string(), map))
            })
            .collect::<eyre::Result<Vec<_>>>()?;
        Ok(Self { dictionary })
    }

    /// The built-in school-notice vocabulary: en, zh-CN, vi, ru.
    pub fn builtin() -> eyre::Result<Self> {
        Self::from_entries(terms::BUILTIN)
    }

    /// Language codes with a term map, in declaration order.
    pub fn supported_languages(&self) -> Vec<String> {
        self.dictionary
            .iter()
            .map(|(language, _)| language.clone())
            .collect()
    }

    fn term_map(&self, language: &str) -> Option<&TermMap> {
        self.dictionary
            .iter()
            .find(|(candidate, _)| candidate == language)
            .map(|(_, map)| map)
    }

    /// Applies every substitution rule of `target_language` to `text`.
    ///
    /// Blank input returns an empty string; a language without a term map
    /// passes the text through unchanged. This never fails and never panics,
    /// whatever the caller sends.
    pub fn translate(&self, text: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        match self.term_map(target_language) {
            Some(map) => map.apply(text),
            None => {
                tracing::debug!(%target_language, "no term map for target language, passing through");
                text.to_string()
            }
        }
    }

    /// Element-wise [`Self::translate`], preserving input order and length.
    pub fn translate_batch(&self, texts: &[String], target_language: &str) -> Vec<String> {
        texts
            .iter()
            .map(|text| self.translate(text, target_language))
            .collect()
    }
}
