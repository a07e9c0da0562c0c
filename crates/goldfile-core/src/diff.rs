//! Diff between a normalized golden file (expected) and normalized actual
//! output, computed with [`difference::Changeset`].
//!
//! The diff is only ever computed after the two texts compared unequal; it
//! explains a mismatch, it does not decide one.

use std::fmt;
use std::str::FromStr;

use difference::{Changeset, Difference};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Granularity
// ---------------------------------------------------------------------------

/// Token size the diff works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffGranularity {
    /// Whole lines (`\n`-separated).
    #[default]
    Line,
    /// Space-separated words.
    Word,
    /// Single characters.
    Char,
}

impl DiffGranularity {
    /// Separator handed to [`Changeset::new`].
    pub fn separator(self) -> &'static str {
        match self {
            DiffGranularity::Line => "\n",
            DiffGranularity::Word => " ",
            DiffGranularity::Char => "",
        }
    }
}

impl fmt::Display for DiffGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffGranularity::Line => write!(f, "line"),
            DiffGranularity::Word => write!(f, "word"),
            DiffGranularity::Char => write!(f, "char"),
        }
    }
}

impl FromStr for DiffGranularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(DiffGranularity::Line),
            "word" => Ok(DiffGranularity::Word),
            "char" => Ok(DiffGranularity::Char),
            other => Err(format!("unknown diff granularity: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------

/// What happened to a span going from expected to actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    Equal,
    /// Present in the actual output only.
    Insert,
    /// Present in the golden file only.
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSpan {
    pub op: DiffOp,
    pub text: String,
}

/// Span counts of a [`TextDiff`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
}

// ---------------------------------------------------------------------------
// TextDiff
// ---------------------------------------------------------------------------

/// An ordered insert/delete/equal diff of two texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiff {
    pub granularity: DiffGranularity,
    pub spans: Vec<DiffSpan>,
    /// Edit distance reported by the changeset.
    pub distance: i32,
}

impl TextDiff {
    pub fn compute(expected: &str, actual: &str, granularity: DiffGranularity) -> Self {
        let changeset = Changeset::new(expected, actual, granularity.separator());
        let spans = changeset
            .diffs
            .into_iter()
            .map(|d| match d {
                Difference::Same(text) => DiffSpan { op: DiffOp::Equal, text },
                Difference::Add(text) => DiffSpan { op: DiffOp::Insert, text },
                Difference::Rem(text) => DiffSpan { op: DiffOp::Delete, text },
            })
            .collect();
        Self {
            granularity,
            spans,
            distance: changeset.distance,
        }
    }

    /// True when no span was inserted or deleted.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.op == DiffOp::Equal)
    }

    pub fn stats(&self) -> DiffStats {
        self.spans.iter().fold(DiffStats::default(), |mut stats, span| {
            match span.op {
                DiffOp::Equal => stats.equal += 1,
                DiffOp::Insert => stats.inserted += 1,
                DiffOp::Delete => stats.deleted += 1,
            }
            stats
        })
    }

    /// Render without colour.
    ///
    /// Line diffs prefix every line with `  `, `- ` or `+ `. Word and char
    /// diffs mark spans inline as `[-deleted-]` and `{+inserted+}`.
    pub fn render_plain(&self) -> String {
        match self.granularity {
            DiffGranularity::Line => self
                .spans
                .iter()
                .flat_map(|span| {
                    let prefix = match span.op {
                        DiffOp::Equal => "  ",
                        DiffOp::Delete => "- ",
                        DiffOp::Insert => "+ ",
                    };
                    span.text.split('\n').map(move |line| format!("{prefix}{line}"))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            DiffGranularity::Word | DiffGranularity::Char => self
                .spans
                .iter()
                .map(|span| match span.op {
                    DiffOp::Equal => span.text.clone(),
                    DiffOp::Delete => format!("[-{}-]", span.text),
                    DiffOp::Insert => format!("{{+{}+}}", span.text),
                })
                .collect::<Vec<_>>()
                .join(self.granularity.separator()),
        }
    }
}

impl fmt::Display for TextDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_plain())
    }
}
