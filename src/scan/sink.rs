use grep::searcher::{Searcher, Sink, SinkMatch};
use std::{io, ops::Range};

use super::{
    patterns::{LocationProbe, PatternLabel, PatternSet},
    record::{MatchRecord, SecondaryHit},
    source::SourceText,
};
use crate::report::Report;

/// Line numbers covered by a match reported by the searcher.
fn matched_lines(sink_match: &SinkMatch) -> io::Result<Range<u64>> {
    let first = sink_match
        .line_number()
        .ok_or(io::ErrorKind::InvalidData)?;
    let count = sink_match.lines().count() as u64;
    Ok(first..first + count)
}

pub(crate) struct DiagnosticSink<'a, R>
where
    R: Report,
{
    source: &'a SourceText,
    patterns: &'a PatternSet<PatternLabel>,
    radius: u64,
    report: &'a mut R,
    found: usize,
}

impl<'a, R> DiagnosticSink<'a, R>
where
    R: Report,
{
    pub(crate) fn new(
        source: &'a SourceText,
        patterns: &'a PatternSet<PatternLabel>,
        radius: u64,
        report: &'a mut R,
    ) -> Self {
        Self {
            source,
            patterns,
            radius,
            report,
            found: 0,
        }
    }

    pub(crate) fn found(&self) -> usize {
        self.found
    }
}

impl<R> Sink for DiagnosticSink<'_, R>
where
    R: Report,
{
    type Error = io::Error;

    fn matched(&mut self, _: &Searcher, sink_match: &SinkMatch) -> Result<bool, io::Error> {
        for line_number in matched_lines(sink_match)? {
            let text = self
                .source
                .line(line_number)
                .ok_or(io::ErrorKind::InvalidData)?;

            for label in self.patterns.matching(text) {
                let record = MatchRecord::new(self.source, line_number, label, self.radius)
                    .ok_or(io::ErrorKind::InvalidData)?;
                self.report.match_found(&record)?;
                self.found += 1;
            }
        }

        Ok(true)
    }
}

pub(crate) struct LocationSink<'a, R>
where
    R: Report,
{
    source: &'a SourceText,
    probes: &'a PatternSet<LocationProbe>,
    report: &'a mut R,
    found: usize,
}

impl<'a, R> LocationSink<'a, R>
where
    R: Report,
{
    pub(crate) fn new(
        source: &'a SourceText,
        probes: &'a PatternSet<LocationProbe>,
        report: &'a mut R,
    ) -> Self {
        Self {
            source,
            probes,
            report,
            found: 0,
        }
    }

    pub(crate) fn found(&self) -> usize {
        self.found
    }
}

impl<R> Sink for LocationSink<'_, R>
where
    R: Report,
{
    type Error = io::Error;

    fn matched(&mut self, _: &Searcher, sink_match: &SinkMatch) -> Result<bool, io::Error> {
        for line_number in matched_lines(sink_match)? {
            let text = self
                .source
                .line(line_number)
                .ok_or(io::ErrorKind::InvalidData)?;

            // a line satisfying both probes is reported once per probe
            for probe in self.probes.matching(text) {
                tracing::trace!(line_number, %probe, "capnpc location");
                self.report
                    .location_hit(&SecondaryHit::new(line_number, text))?;
                self.found += 1;
            }
        }

        Ok(true)
    }
}
