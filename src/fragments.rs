//! The code fragment store
//!
//! Every generator draws its output text from a set of named string
//! templates ("code fragments"). The store loads the fragment set for a
//! generator exactly once from its embedded backing resource, caches the
//! parsed mapping for the process lifetime, and serves fragments by key
//! thereafter. The cache is read-mostly: warm it before sharing the
//! store across threads and it is safe to read concurrently.
//!
//! Resources use a properties-style line format: `key=value` pairs,
//! `#` comment lines, blank lines ignored, and `\n`, `\t`, `\r`, `\\`
//! escapes in values. Fragments carry positional `{0}`..`{9}`
//! placeholders filled in by [`format_fragment`].

use crate::error::{Error, Result};
use crate::options::GeneratorOptions;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A parsed fragment set, shared between the cache and its users
pub type FragmentSet = Arc<IndexMap<String, String>>;

/// Embedded backing resources, keyed by generator id
static RESOURCES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("dtd", include_str!("generators/dtd.fragments"));
    m
});

/// Loads and caches per-generator code fragments
#[derive(Debug, Default)]
pub struct FragmentStore {
    cache: RwLock<HashMap<String, FragmentSet>>,
}

impl FragmentStore {
    /// Create an empty store; fragment sets are loaded on first use
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the fragment set for a generator, parsing the backing
    /// resource on the first call and serving the cached mapping on
    /// every later one.
    pub fn load(&self, generator_id: &str) -> Result<FragmentSet> {
        // A writer that panicked mid-insert leaves at worst a complete,
        // already-parsed entry, so a poisoned lock is still readable.
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        if let Some(set) = cache.get(generator_id) {
            return Ok(Arc::clone(set));
        }
        drop(cache);

        let resource = RESOURCES.get(generator_id).ok_or_else(|| Error::TemplateLoadFailed {
            generator: generator_id.to_string(),
            reason: "no fragment resource for this generator".to_string(),
        })?;
        let parsed = Arc::new(parse_resource(generator_id, resource)?);

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have raced the parse; keep the first entry.
        let set = cache
            .entry(generator_id.to_string())
            .or_insert(parsed);
        Ok(Arc::clone(set))
    }

    /// Get one fragment by key
    pub fn get(&self, generator_id: &str, key: &str) -> Result<String> {
        let set = self.load(generator_id)?;
        set.get(key).cloned().ok_or_else(|| Error::TemplateNotFound {
            generator: generator_id.to_string(),
            key: key.to_string(),
        })
    }

    /// Get a fragment when `option` is set to `value`, otherwise the
    /// supplied default
    pub fn get_if_option_set(
        &self,
        generator_id: &str,
        key: &str,
        option: &str,
        value: &str,
        default: &str,
        options: &GeneratorOptions,
    ) -> Result<String> {
        if options.is_set(option, value) {
            self.get(generator_id, key)
        } else {
            Ok(default.to_string())
        }
    }

    /// Get a fragment unless `option` is set to `value`, in which case
    /// the supplied default
    pub fn get_unless_option_set(
        &self,
        generator_id: &str,
        key: &str,
        option: &str,
        value: &str,
        default: &str,
        options: &GeneratorOptions,
    ) -> Result<String> {
        if options.is_set(option, value) {
            Ok(default.to_string())
        } else {
            self.get(generator_id, key)
        }
    }
}

/// Parse a properties-style fragment resource
fn parse_resource(generator_id: &str, text: &str) -> Result<IndexMap<String, String>> {
    let mut fragments = IndexMap::new();
    for (number, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (key, value) = trimmed.split_once('=').ok_or_else(|| Error::TemplateLoadFailed {
            generator: generator_id.to_string(),
            reason: format!("line {} has no '=' separator", number + 1),
        })?;
        fragments.insert(key.trim().to_string(), unescape(value)?);
    }
    if fragments.is_empty() {
        return Err(Error::TemplateLoadFailed {
            generator: generator_id.to_string(),
            reason: "resource contains no fragments".to_string(),
        });
    }
    Ok(fragments)
}

fn unescape(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Ok(out)
}

/// Fill positional `{0}`..`{9}` placeholders in a fragment.
///
/// Placeholders without a corresponding argument are left verbatim.
pub fn format_fragment(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' {
            if let Some(&d) = chars.peek() {
                if let Some(index) = d.to_digit(10) {
                    let mut ahead = chars.clone();
                    ahead.next();
                    if ahead.peek() == Some(&'}') {
                        if let Some(arg) = args.get(index as usize) {
                            out.push_str(arg);
                            chars.next();
                            chars.next();
                            continue;
                        }
                    }
                }
            }
        }
        out.push(c);
    }
    out
}
