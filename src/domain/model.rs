use std::fmt;

/// One distinct name with the rank of its first table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub name: String,
    pub rank: String,
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.rank)
    }
}

/// Everything extracted from one report file. `entries` is sorted by name
/// and holds each name once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReport {
    pub year: String,
    pub entries: Vec<RankEntry>,
}

impl NameReport {
    /// `[year, "name rank", ...]`
    pub fn to_lines(&self) -> Vec<String> {
        std::iter::once(self.year.clone())
            .chain(self.entries.iter().map(RankEntry::to_string))
            .collect()
    }

    pub fn render(&self) -> String {
        self.to_lines().join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    SummaryFile(String),
}

pub fn summary_path(input: &str) -> String {
    format!("{}.summary", input)
}
