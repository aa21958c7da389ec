use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Fixed-schema header written above the body. Values are emitted as-is,
/// without YAML quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub date: NaiveDate,
    pub url: &'a str,
}

impl fmt::Display for FrontMatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "author: {}", self.author)?;
        writeln!(f, "date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "url: {}", self.url)?;
        writeln!(f, "---")
    }
}

/// The converted article without the front-matter rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPost {
    pub title: String,
    pub author: String,
    pub contents: String,
    pub date: String,
    pub url: String,
}
