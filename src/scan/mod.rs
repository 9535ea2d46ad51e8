pub mod patterns;
pub mod record;
mod sink;
pub mod source;

use crate::report::Report;
use anyhow::{Context, Result};
use grep::{
    matcher::LineTerminator,
    searcher::{BinaryDetection, Searcher, SearcherBuilder},
};
use patterns::{LocationProbe, PatternLabel, PatternSet};
use sink::{DiagnosticSink, LocationSink};
pub use source::SourceText;

pub const DEFAULT_CONTEXT: u64 = 3;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub matches: usize,
    pub locations: usize,
}

pub struct Scanner {
    diagnostics: PatternSet<PatternLabel>,
    probes: PatternSet<LocationProbe>,
    context: u64,
}

impl Scanner {
    pub fn new(context: u64) -> Result<Self> {
        Ok(Self {
            diagnostics: PatternSet::compile(true)?,
            probes: PatternSet::compile(false)?,
            context,
        })
    }

    /// Runs the diagnostic scan followed by the `capnpc` location search and
    /// finishes the report.
    pub fn scan<R: Report>(&self, source: &SourceText, report: &mut R) -> Result<ScanSummary> {
        if source.is_empty() {
            tracing::debug!("log is empty");
        }

        let matches = self.scan_diagnostics(source, report)?;
        if matches == 0 {
            report.no_matches().context("failed to write report")?;
        }

        let locations = self.scan_locations(source, report)?;
        report.complete().context("failed to write report")?;

        let summary = ScanSummary { matches, locations };
        tracing::debug!(?summary, lines = source.len(), "scan finished");
        Ok(summary)
    }

    fn scan_diagnostics<R: Report>(&self, source: &SourceText, report: &mut R) -> Result<usize> {
        let mut sink = DiagnosticSink::new(source, &self.diagnostics, self.context, report);
        line_searcher()
            .search_slice(self.diagnostics.any(), source.as_bytes(), &mut sink)
            .context("diagnostic scan failed")?;
        Ok(sink.found())
    }

    fn scan_locations<R: Report>(&self, source: &SourceText, report: &mut R) -> Result<usize> {
        report.location_header().context("failed to write report")?;

        let mut sink = LocationSink::new(source, &self.probes, report);
        line_searcher()
            .search_slice(self.probes.any(), source.as_bytes(), &mut sink)
            .context("capnpc location search failed")?;
        Ok(sink.found())
    }
}

fn line_searcher() -> Searcher {
    SearcherBuilder::new()
        .binary_detection(BinaryDetection::none())
        .bom_sniffing(false)
        .line_terminator(LineTerminator::byte(b'\n'))
        .line_number(true)
        .multi_line(false)
        .build()
}
