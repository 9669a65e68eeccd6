//! Rendering of aggregate failure reports.

use alloc::string::String;
use core::fmt::Write;

use crate::types::{MultiError, RuleError};

/// Trait for customizing how aggregate failures are laid out.
///
/// Only the building blocks need overriding; [`format_multi`](Self::format_multi)
/// walks nested aggregates and asks for a prefix at each depth.
pub trait ReportFormatter {
    fn header(&self) -> &str {
        MultiError::HEADER
    }

    fn separator(&self) -> &str {
        "\n"
    }

    /// Text written before an item at `depth` (1 for direct children).
    fn item_prefix(&self, depth: usize, out: &mut String) {
        let _ = (depth, out);
    }

    fn format_multi(&self, multi: &MultiError) -> String {
        let mut out = String::with_capacity(multi.len() * 32 + self.header().len());
        write_multi(self, multi, 1, &mut out);
        out
    }
}

fn write_multi<F>(formatter: &F, multi: &MultiError, depth: usize, out: &mut String)
where
    F: ReportFormatter + ?Sized,
{
    out.push_str(formatter.header());
    for error in multi {
        out.push_str(formatter.separator());
        formatter.item_prefix(depth, out);
        match error {
            RuleError::Multiple(nested) => write_multi(formatter, nested, depth + 1, out),
            other => {
                let _ = write!(out, "{}", other);
            },
        }
    }
}

/// Configuration-based report formatter.
///
/// # Examples
///
/// ```
/// use rule_rail::{MultiError, ReportFormat, RuleError};
///
/// let multi = MultiError::new([
///     RuleError::unmet("a"),
///     RuleError::multiple(MultiError::new([RuleError::unmet("b")])),
/// ]);
///
/// assert_eq!(
///     multi.format_with(&ReportFormat::pretty()),
///     "multiple errors:\n  - a\n  - multiple errors:\n    - b"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    pub header: String,
    pub separator: String,
    pub bullet: Option<String>,
    pub indent: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            header: MultiError::HEADER.into(),
            separator: "\n".into(),
            bullet: None,
            indent: String::new(),
        }
    }
}

impl ReportFormat {
    /// Indented bullet list, used by the alternate (`{:#}`) display.
    #[inline]
    pub fn pretty() -> Self {
        Self { bullet: Some("- ".into()), indent: "  ".into(), ..Default::default() }
    }

    /// Everything on one line.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: "; ".into(), ..Default::default() }
    }
}

impl ReportFormatter for ReportFormat {
    fn header(&self) -> &str {
        &self.header
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn item_prefix(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(&self.indent);
        }
        if let Some(bullet) = &self.bullet {
            out.push_str(bullet);
        }
    }
}
