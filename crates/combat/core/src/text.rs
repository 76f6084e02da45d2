//! Message templates.
//!
//! The engine emits plain strings built from `%s`/`%d` templates. Slots are
//! filled positionally; `%%` renders a literal percent sign. Chat formatting
//! (buttons, attachments, colours) is the presentation layer's business.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// A message template with positional `%s` / `%d` slots.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Template(Cow<'static, str>);

impl Template {
    pub const fn new(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    pub fn owned(text: impl Into<String>) -> Self {
        Self(Cow::Owned(text.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of `%s`/`%d` slots in the template.
    pub fn slots(&self) -> usize {
        let mut count = 0;
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '%' {
                match chars.peek() {
                    Some('s') | Some('d') => {
                        count += 1;
                        chars.next();
                    }
                    Some('%') => {
                        chars.next();
                    }
                    _ => {}
                }
            }
        }
        count
    }

    /// Fills slots left to right. Surplus slots render empty, surplus
    /// arguments are ignored.
    pub fn fill(&self, args: &[&dyn fmt::Display]) -> String {
        let mut out = String::with_capacity(self.0.len() + 16);
        let mut args = args.iter();
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '%' {
                match chars.peek() {
                    Some('s') | Some('d') => {
                        chars.next();
                        if let Some(arg) = args.next() {
                            let _ = write!(out, "{arg}");
                        }
                        continue;
                    }
                    Some('%') => {
                        chars.next();
                        out.push('%');
                        continue;
                    }
                    _ => {}
                }
            }
            out.push(c);
        }
        out
    }
}

impl From<&'static str> for Template {
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Damage as shown in messages: `*12* damage`, or `no damage` for zero.
pub fn damage_text(damage: u32) -> String {
    if damage == 0 {
        "no damage".to_string()
    } else {
        format!("*{damage}* damage")
    }
}

/// Suffix appended after the damage text of a critical hit.
pub const CRIT_SUFFIX: &str = " (critical hit!)";

pub fn crit_suffix(did_crit: bool) -> &'static str {
    if did_crit { CRIT_SUFFIX } else { "" }
}
