use crate::scan::record::{MatchRecord, SecondaryHit};
use std::io::{self, Write};

/// Receives scan results in the order they are discovered.
#[cfg_attr(test, mockall::automock)]
pub trait Report {
    fn match_found(&mut self, record: &MatchRecord) -> io::Result<()>;
    fn no_matches(&mut self) -> io::Result<()>;
    fn location_header(&mut self) -> io::Result<()>;
    fn location_hit(&mut self, hit: &SecondaryHit) -> io::Result<()>;
    fn complete(&mut self) -> io::Result<()>;
}

/// Plain text report, one block per match.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Report for TextReport<W> {
    fn match_found(&mut self, record: &MatchRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "--- Match ({}) at line {} ---",
            record.label, record.line_number
        )?;
        for line in &record.context {
            if line.line_number == record.line_number {
                writeln!(self.out, ">> {}: {}", record.line_number, record.text)?;
            } else {
                writeln!(self.out, "   {}: {}", line.line_number, line.text)?;
            }
        }
        writeln!(self.out)
    }

    fn no_matches(&mut self) -> io::Result<()> {
        writeln!(self.out, "No matches for patterns found in log")
    }

    fn location_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- capnpc location search ---")
    }

    fn location_hit(&mut self, hit: &SecondaryHit) -> io::Result<()> {
        writeln!(self.out, "{}: {}", hit.line_number, hit.text)
    }

    fn complete(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nParsing complete")?;
        self.out.flush()
    }
}
