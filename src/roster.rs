//! Reading the names to print from a class roster.
//!
//! A roster is a CSV file with a header row. The name column is found by
//! normalising headers (see [normalize_header]), so `Full name`, `full_name` and
//! `FULL NAME` are all accepted. A second CSV of `netid,preferred_name` pairs may
//! override the printed name for any student whose email address (the part
//! before the `@`) matches a netid.

use crate::NametagError;
use csv::{ReaderBuilder, StringRecord};
use derive_more::{Deref, Display};
use serde::Deserialize;
use std::{collections::HashMap, fs::File, io::Read, path::Path};

/// Normalised headers that name the full-name column, most specific first
const NAME_COLUMNS: [&str; 4] = ["fullname", "name", "studentname", "student"];

/// Preferred names keyed by netid
pub type PreferredNames = HashMap<String, String>;

/// The text printed on a nametag: trimmed, never empty, with runs of whitespace
/// collapsed to single spaces
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
pub struct DisplayName(String);

impl DisplayName {
    /// Clean up a raw roster value, returning [None] if nothing printable is left.
    /// Surrounding double quotes left over from sloppy exports are dropped.
    pub fn new(raw: &str) -> Option<DisplayName> {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let cleaned = collapsed.trim_matches('"').trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(DisplayName(cleaned.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercase `header` and drop everything but ASCII letters and digits, so
/// `" Full Name "` becomes `"fullname"`
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Index of the column holding full names: the first of the well-known headers
/// present, otherwise the first header containing "name"
pub fn detect_name_column<'a, I>(headers: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized: Vec<String> = headers.into_iter().map(normalize_header).collect();
    NAME_COLUMNS
        .iter()
        .find_map(|key| normalized.iter().position(|header| header == key))
        .or_else(|| normalized.iter().position(|header| header.contains("name")))
}

/// Index of the first column whose header contains "email"
pub fn detect_email_column<'a, I>(headers: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .position(|header| normalize_header(header).contains("email"))
}

/// The part of an email address before the `@`, if it has one
fn netid_of(email: &str) -> Option<&str> {
    let email = email.trim();
    email
        .split_once('@')
        .map(|(local, _)| local.trim())
        .filter(|local| !local.is_empty())
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

#[derive(Debug, Deserialize)]
struct PreferredNameRecord {
    #[serde(default)]
    netid: String,
    #[serde(default)]
    preferred_name: String,
}

/// Read `netid,preferred_name` pairs. Rows without a netid are skipped; empty
/// preferred names are kept but never override anything.
pub fn read_preferred_names<R: Read>(source: R) -> Result<PreferredNames, NametagError> {
    let mut preferred = PreferredNames::new();
    for record in csv_reader(source).deserialize() {
        let record: PreferredNameRecord = record?;
        let netid = record.netid.trim();
        if netid.is_empty() {
            continue;
        }
        preferred.insert(netid.to_string(), record.preferred_name.trim().to_string());
    }
    Ok(preferred)
}

/// Load the preferred-names file at `path`
pub fn load_preferred_names<P: AsRef<Path>>(path: P) -> Result<PreferredNames, NametagError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(NametagError::PreferredNamesNotFound {
            path: path.to_path_buf(),
        });
    }
    let preferred = read_preferred_names(File::open(path)?)?;
    tracing::debug!(path = %path.display(), count = preferred.len(), "loaded preferred names");
    Ok(preferred)
}

/// The preferred name for the student in `record`, if one is on file and not blank
fn preferred_for<'p>(
    record: &StringRecord,
    email_column: Option<usize>,
    preferred: &'p PreferredNames,
) -> Option<(&'p str, DisplayName)> {
    let email = record.get(email_column?)?;
    let (netid, name) = preferred.get_key_value(netid_of(email)?)?;
    DisplayName::new(name).map(|name| (netid.as_str(), name))
}

/// Read display names from a roster, in file order. `source` names the roster in
/// errors.
pub fn read_roster<R: Read>(
    reader: R,
    source: &Path,
    preferred: Option<&PreferredNames>,
) -> Result<Vec<DisplayName>, NametagError> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers()?.clone();

    let name_column =
        detect_name_column(headers.iter()).ok_or_else(|| NametagError::MissingNameColumn {
            path: source.to_path_buf(),
        })?;
    let email_column = detect_email_column(headers.iter());
    tracing::debug!(
        name = headers.get(name_column),
        email = email_column.and_then(|i| headers.get(i)),
        "detected roster columns"
    );

    let mut names = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let Some(full_name) = record.get(name_column).and_then(DisplayName::new) else {
            skipped += 1;
            continue;
        };

        let override_name = preferred.and_then(|p| preferred_for(&record, email_column, p));
        match override_name {
            Some((netid, name)) => {
                tracing::debug!(netid, from = %full_name, to = %name, "using preferred name");
                names.push(name);
            }
            None => names.push(full_name),
        }
    }

    tracing::debug!(
        path = %source.display(),
        names = names.len(),
        skipped,
        "read roster"
    );
    Ok(names)
}

/// Read display names from the roster file at `path`
pub fn load_roster<P: AsRef<Path>>(
    path: P,
    preferred: Option<&PreferredNames>,
) -> Result<Vec<DisplayName>, NametagError> {
    let path = path.as_ref();
    read_roster(File::open(path)?, path, preferred)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(csv: &str, preferred: Option<&PreferredNames>) -> Result<Vec<DisplayName>, NametagError> {
        read_roster(csv.as_bytes(), Path::new("roster.csv"), preferred)
    }

    fn strings(names: Vec<DisplayName>) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn display_names_are_cleaned() {
        assert_eq!(DisplayName::new("  Bob   Smith ").unwrap().as_str(), "Bob Smith");
        assert_eq!(DisplayName::new("\"Ada\tLovelace\"").unwrap().as_str(), "Ada Lovelace");
        assert_eq!(DisplayName::new("   "), None);
        assert_eq!(DisplayName::new("\"\""), None);
    }

    #[test]
    fn headers_normalise_to_lowercase_alphanumerics() {
        assert_eq!(normalize_header(" Full Name "), "fullname");
        assert_eq!(normalize_header("student_name"), "studentname");
        assert_eq!(normalize_header("E-mail #2"), "email2");
        assert_eq!(normalize_header("\u{feff}Name"), "name");
    }

    #[test]
    fn name_column_prefers_well_known_headers() {
        assert_eq!(detect_name_column(["Email", "Full name"]), Some(1));
        // "name" outranks an earlier header that merely contains it
        assert_eq!(detect_name_column(["Nickname", "Name"]), Some(1));
        assert_eq!(detect_name_column(["ID", "Student"]), Some(1));
        assert_eq!(detect_name_column(["ID", "student_name"]), Some(1));
        assert_eq!(detect_name_column(["Given Name", "Family Name"]), Some(0));
        assert_eq!(detect_name_column(["First", "Last"]), None);
        assert_eq!(detect_name_column(Vec::<&str>::new()), None);
    }

    #[test]
    fn duplicate_headers_resolve_to_the_first() {
        assert_eq!(detect_name_column(["Name", "name "]), Some(0));
        assert_eq!(detect_name_column(["ID", "Full Name", "full_name"]), Some(1));
        assert_eq!(detect_email_column(["Email", "E-mail", "email"]), Some(0));

        let names = roster("Name,name \nAda Lovelace,Ada L.\n", None).expect("roster parses");
        assert_eq!(strings(names), vec!["Ada Lovelace"]);
    }

    #[test]
    fn email_column_is_the_first_mentioning_email() {
        assert_eq!(detect_email_column(["Name", "Email Address", "Alt email"]), Some(1));
        assert_eq!(detect_email_column(["Name", "NetID"]), None);
    }

    #[test]
    fn netids_are_the_local_part_of_emails() {
        assert_eq!(netid_of(" al123@x.edu "), Some("al123"));
        assert_eq!(netid_of("no-at-sign"), None);
        assert_eq!(netid_of("@x.edu"), None);
    }

    #[test]
    fn reads_names_in_order_skipping_blanks() {
        let csv = "Full name,Email\nAda Lovelace,al123@x.edu\n  Bob  Smith ,bs@x.edu\n   ,x@x.edu\n";
        let names = roster(csv, None).expect("roster parses");
        assert_eq!(strings(names), vec!["Ada Lovelace", "Bob Smith"]);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let csv = "Email,Full name\nal123@x.edu\nbs@x.edu,Bob Smith\n";
        let names = roster(csv, None).expect("roster parses");
        assert_eq!(strings(names), vec!["Bob Smith"]);
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let err = roster("First,Last\nAda,Lovelace\n", None).unwrap_err();
        assert!(matches!(err, NametagError::MissingNameColumn { .. }));
    }

    #[test]
    fn preferred_names_override_by_netid() {
        let preferred = read_preferred_names(
            "netid,preferred_name\nal123,Ada L.\nbs, \n,Nobody\n".as_bytes(),
        )
        .expect("preferred names parse");
        assert_eq!(preferred.len(), 2);
        assert_eq!(preferred.get("bs").map(String::as_str), Some(""));

        let csv = "Full name,Email\nAda Lovelace,al123@x.edu\nBob Smith,bs@x.edu\nCy Young,cy@x.edu\n";
        let names = roster(csv, Some(&preferred)).expect("roster parses");
        assert_eq!(strings(names), vec!["Ada L.", "Bob Smith", "Cy Young"]);
    }

    #[test]
    fn preferred_names_need_an_email_column() {
        let mut preferred = PreferredNames::new();
        preferred.insert("al123".to_string(), "Ada L.".to_string());
        let names = roster("Name\nAda Lovelace\n", Some(&preferred)).expect("roster parses");
        assert_eq!(strings(names), vec!["Ada Lovelace"]);
    }

    #[test]
    fn missing_preferred_names_file_is_reported() {
        let err = load_preferred_names("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, NametagError::PreferredNamesNotFound { .. }));
    }
}
