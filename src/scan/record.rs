use super::{patterns::PatternLabel, source::SourceText};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    pub line_number: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub line_number: u64,
    pub label: PatternLabel,
    pub text: String,
    pub context: Vec<ContextLine>,
}

impl MatchRecord {
    pub fn new(
        source: &SourceText,
        line_number: u64,
        label: PatternLabel,
        radius: u64,
    ) -> Option<Self> {
        let text = source.line(line_number)?.to_owned();
        let context = source
            .window(line_number, radius)?
            .filter_map(|n| {
                source.line(n).map(|text| ContextLine {
                    line_number: n,
                    text: text.into(),
                })
            })
            .collect();

        Some(Self {
            line_number,
            label,
            text,
            context,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryHit {
    pub line_number: u64,
    pub text: String,
}

impl SecondaryHit {
    pub fn new(line_number: u64, text: &str) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn numbered(total: usize) -> SourceText {
        SourceText::from((1..=total).map(|n| format!("line {n}")).join("\n"))
    }

    #[test]
    fn window_contains_matched_line() {
        let source = numbered(20);
        for line_number in 1..=20 {
            let record =
                MatchRecord::new(&source, line_number, PatternLabel::CouldntRead, 3).unwrap();
            let numbers = record.context.iter().map(|c| c.line_number).collect_vec();

            assert!(numbers.len() <= 7);
            assert!(numbers.contains(&line_number));
            assert!(numbers.iter().all(|&n| (1..=20).contains(&n)));
            assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }

    #[test]
    fn context_text_follows_source() {
        let record = MatchRecord::new(&numbered(10), 9, PatternLabel::CouldntRead, 3).unwrap();
        assert_eq!(record.text, "line 9");
        assert_eq!(
            record.context,
            (6..=10)
                .map(|n| ContextLine {
                    line_number: n,
                    text: format!("line {n}"),
                })
                .collect_vec()
        );
    }

    #[test]
    fn no_record_outside_source() {
        assert_eq!(
            MatchRecord::new(&numbered(3), 4, PatternLabel::CapnpSuccess, 3),
            None
        );
    }
}
