use crate::domain::model::{NameReport, RankEntry};
use crate::utils::error::{BabyNamesError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Popularity in (\d{4})").unwrap());
static RE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<td>(\d+)</td><td>(\p{Alphabetic}+)</td><td>(\p{Alphabetic}+)</td>").unwrap()
});

/// Pulls the year and the name ranks out of one report's text.
///
/// `source` only labels errors. Rows that do not match the
/// `<td>rank</td><td>boy</td><td>girl</td>` shape are skipped. A name seen in
/// more than one row keeps the rank of its first row.
pub fn extract_names(text: &str, source: &str) -> Result<NameReport> {
    let year = RE_YEAR
        .captures(text)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| BabyNamesError::ParseError {
            path: source.to_string(),
            message: "year not found (expected 'Popularity in YYYY')".to_string(),
        })?;
    tracing::debug!("{}: report year {}", source, year);

    // BTreeMap keeps names ordered; `or_insert` never overwrites.
    let mut names_to_rank: BTreeMap<&str, &str> = BTreeMap::new();
    let mut rows = 0usize;
    for caps in RE_ROW.captures_iter(text) {
        let (_, [rank, boy_name, girl_name]) = caps.extract();
        names_to_rank.entry(boy_name).or_insert(rank);
        names_to_rank.entry(girl_name).or_insert(rank);
        rows += 1;
    }
    tracing::debug!(
        "{}: matched {} rows, {} distinct names",
        source,
        rows,
        names_to_rank.len()
    );

    let entries = names_to_rank
        .into_iter()
        .map(|(name, rank)| RankEntry {
            name: name.to_string(),
            rank: rank.to_string(),
        })
        .collect();

    Ok(NameReport { year, entries })
}

/// Reads `path` and returns `[year, "name rank", ...]`.
pub fn extract_file(path: &str) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| BabyNamesError::io(path, e))?;
    Ok(extract_names(&text, path)?.to_lines())
}
