//! Shared rendering helpers
//!
//! Small free functions used by the generators: character-reference
//! escaping for entity replacement text, and list joining for content
//! specs and enumerated attribute types.

use crate::error::{Error, Result};

/// Join rendered pieces with a separator.
///
/// Thin wrapper so rendering code reads the same whether the pieces are
/// already owned strings or need collecting first.
pub fn join<I>(separator: &str, pieces: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, piece) in pieces.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(piece.as_ref());
    }
    out
}

/// Escape a string for use as a quoted entity value.
///
/// Every character that is not part of an already well-formed `&...;`
/// reference is replaced by a hexadecimal numeric character reference
/// (`&#xXXXX;`). Existing references are copied through unchanged. An
/// `&` with no closing `;` before end of input is malformed.
pub fn to_character_references(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len() * 8);
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c == '&' {
            // Copy the whole reference through untouched.
            let mut reference = String::from('&');
            let mut terminated = false;
            for r in chars.by_ref() {
                reference.push(r);
                if r == ';' {
                    terminated = true;
                    break;
                }
            }
            if !terminated {
                return Err(Error::MalformedReference(value.to_string()));
            }
            out.push_str(&reference);
        } else {
            out.push_str(&format!("&#x{:04X};", c as u32));
        }
    }

    Ok(out)
}

/// Resolve numeric character references back to their characters.
///
/// Handles decimal (`&#65;`) and hexadecimal (`&#x41;`) forms; named
/// references are copied through unchanged. Inverse of
/// [`to_character_references`] for strings without pre-existing
/// references.
pub fn resolve_character_references(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }

        let mut reference = String::new();
        let mut terminated = false;
        for r in chars.by_ref() {
            if r == ';' {
                terminated = true;
                break;
            }
            reference.push(r);
        }
        if !terminated {
            return Err(Error::MalformedReference(value.to_string()));
        }

        let resolved = if let Some(hex) = reference.strip_prefix("#x") {
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        } else if let Some(dec) = reference.strip_prefix('#') {
            dec.parse::<u32>().ok().and_then(char::from_u32)
        } else {
            None
        };

        match resolved {
            Some(ch) => out.push(ch),
            // Named reference, keep it verbatim.
            None => {
                out.push('&');
                out.push_str(&reference);
                out.push(';');
            }
        }
    }

    Ok(out)
}
