use rayon::prelude::*;
use std::path::PathBuf;

use crate::sections::SectionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Derives every section from the same country list. Sections are computed
    /// on the current rayon pool; `collect` keeps them in `SectionKind::ALL` order.
    pub fn build(countries: &[String]) -> Self {
        let sections = SectionKind::ALL
            .par_iter()
            .map(|&kind| Section {
                kind,
                body: kind.derive(countries),
            })
            .collect();
        Report { sections }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Each section as a blank line, its header, then its body.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        for section in &self.sections {
            lines.push("");
            lines.push(section.kind.header());
            lines.extend(section.body.iter().map(String::as_str));
        }
        lines
    }

    /// The file contents: every line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub country_count: usize,
    pub section_count: usize,
    pub line_count: usize,
}
