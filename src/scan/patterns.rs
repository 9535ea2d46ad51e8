use anyhow::{Context, Result};
use grep::{
    matcher::Matcher,
    regex::{RegexMatcher, RegexMatcherBuilder},
};
use itertools::Itertools;
use strum::{Display, EnumIter, IntoEnumIterator};

/// A fixed family of labelled patterns. Declaration order of the enum is the
/// order in which patterns are evaluated against a line.
pub trait Pattern: IntoEnumIterator + std::fmt::Display + Copy {
    fn pattern(self) -> &'static str;
}

#[derive(Display, EnumIter, PartialEq, Eq, Copy, Clone, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum PatternLabel {
    CapnpSuccess,
    CopiedSchema,
    SchemaPreview,
    FoundGenerated,
    MovedGenerated,
    CouldntRead,
    IncludeExample,
}

impl Pattern for PatternLabel {
    fn pattern(self) -> &'static str {
        match self {
            PatternLabel::CapnpSuccess => "capnp codegen succeeded",
            PatternLabel::CopiedSchema => "copied schema:",
            PatternLabel::SchemaPreview => "schema-preview:",
            PatternLabel::FoundGenerated => "found generated file",
            PatternLabel::MovedGenerated => "moved generated",
            PatternLabel::CouldntRead => "couldn't read",
            PatternLabel::IncludeExample => {
                r#"include!\(concat!\(env!\("OUT_DIR"\), "/example_capnp\.rs"\)\)"#
            }
        }
    }
}

/// Conditions of the `capnpc` location search. Both are case sensitive and
/// evaluated independently, so one line may satisfy both.
#[derive(Display, EnumIter, PartialEq, Eq, Copy, Clone, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum LocationProbe {
    CapnpcLabel,
    CommandCheck,
}

impl Pattern for LocationProbe {
    fn pattern(self) -> &'static str {
        match self {
            LocationProbe::CapnpcLabel => "capnpc:",
            LocationProbe::CommandCheck => "command -v capnpc",
        }
    }
}

pub struct PatternSet<P> {
    entries: Vec<(P, RegexMatcher)>,
    any: RegexMatcher,
}

impl<P: Pattern> PatternSet<P> {
    pub fn compile(case_insensitive: bool) -> Result<Self> {
        let mut builder = RegexMatcherBuilder::new();
        builder
            .line_terminator(Some(b'\n'))
            .case_insensitive(case_insensitive);

        let entries = P::iter()
            .map(|label| {
                builder
                    .build(label.pattern())
                    .map(|matcher| (label, matcher))
                    .with_context(|| format!("failed to compile pattern '{label}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        let alternation = P::iter()
            .map(|label| format!("(?:{})", label.pattern()))
            .join("|");
        let any = builder
            .build(&alternation)
            .context("failed to compile combined pattern")?;

        Ok(Self { entries, any })
    }

    /// Matcher accepting every line that at least one entry accepts.
    pub fn any(&self) -> &RegexMatcher {
        &self.any
    }

    /// Labels of all entries matching `line`, in declaration order.
    pub fn matching<'a>(&'a self, line: &'a str) -> impl Iterator<Item = P> + 'a {
        self.entries
            .iter()
            .filter(move |(_, matcher)| matches!(matcher.is_match(line.as_bytes()), Ok(true)))
            .map(|(label, _)| *label)
    }
}
