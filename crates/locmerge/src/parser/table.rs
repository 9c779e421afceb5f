use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::take_till;

use super::error::ParseError;

/// Field separator. Not configurable and never escaped.
pub const SEPARATOR: char = ';';

/// How a single table line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `#` or `//`.
    Comment,
    /// Anything else; split into fields.
    Record,
}

/// Classify one line (without its terminator).
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if line.starts_with('#') || line.starts_with("//") {
        LineKind::Comment
    } else {
        LineKind::Record
    }
}

/// Split a line on [`SEPARATOR`]. Always yields at least one field.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut input = line;
    fields(&mut input).unwrap_or_else(|_| vec![line])
}

fn fields<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(1.., take_till(0.., SEPARATOR), SEPARATOR).parse_next(input)
}

/// The header line of a table.
///
/// Column 0 labels the key column and is ignored. Every later column names a
/// language; names are trimmed but otherwise kept verbatim, recognized or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub key_label: &'a str,
    /// Language names for columns 1.., in file order.
    pub languages: Vec<&'a str>,
}

impl<'a> Header<'a> {
    fn parse(line: &'a str) -> Self {
        let mut columns = split_fields(line).into_iter().map(str::trim);
        let key_label = columns.next().unwrap_or_default();
        Self {
            key_label,
            languages: columns.collect(),
        }
    }

    /// Language named by field column `column` (1-based, as in the file).
    pub fn language(&self, column: usize) -> Option<&'a str> {
        column
            .checked_sub(1)
            .and_then(|index| self.languages.get(index))
            .copied()
    }

    /// Total number of columns, key column included.
    pub fn width(&self) -> usize {
        self.languages.len() + 1
    }
}

/// One data row with a non-empty key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    /// 1-based line number in the source.
    pub line: usize,
    /// Trimmed key.
    pub key: &'a str,
    /// Raw values for columns 1.., untrimmed.
    pub values: Vec<&'a str>,
}

impl<'a> TableRow<'a> {
    /// Pairs each value with the header's language for the same column.
    ///
    /// Columns missing from either the header or the row are dropped, as are
    /// columns whose header cell is empty.
    pub fn cells(&self, header: &Header<'a>) -> Vec<(&'a str, &'a str)> {
        header
            .languages
            .iter()
            .zip(&self.values)
            .filter(|(language, _)| !language.is_empty())
            .map(|(language, value)| (*language, *value))
            .collect()
    }

    /// Number of fields on the line, key included.
    pub fn width(&self) -> usize {
        self.values.len() + 1
    }
}

/// A parsed table borrowing from its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    pub header: Header<'a>,
    pub rows: Vec<TableRow<'a>>,
}

/// Parse a table.
///
/// Returns [`ParseError::NoRows`] when the header is the only line, matching
/// how an empty plugin table is reported. A table with lines after the header
/// that are all blank or comments parses successfully with no rows.
pub fn parse_table(content: &str) -> Result<Table<'_>, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();
    let header = lines.next().map(Header::parse).ok_or(ParseError::Empty)?;

    let mut rows = Vec::new();
    let mut saw_line = false;
    for (offset, line) in lines.enumerate() {
        saw_line = true;
        if classify_line(line) != LineKind::Record {
            continue;
        }
        let mut fields = split_fields(line).into_iter();
        let Some(key) = fields.next().map(str::trim) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        rows.push(TableRow {
            line: offset + 2,
            key,
            values: fields.collect(),
        });
    }

    if !saw_line {
        return Err(ParseError::NoRows);
    }
    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split_fields("greet;;Salut;"), vec!["greet", "", "Salut", ""]);
    }

    #[test]
    fn test_split_empty_line_yields_one_field() {
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn test_classify_comments() {
        assert_eq!(classify_line("# note"), LineKind::Comment);
        assert_eq!(classify_line("// note"), LineKind::Comment);
        assert_eq!(classify_line("/ not a comment"), LineKind::Record);
        assert_eq!(classify_line(" # indented"), LineKind::Record);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_header_trims_language_names() {
        let table = parse_table("Key; English ;Français\nhello;Hi;Salut").unwrap();
        assert_eq!(table.header.key_label, "Key");
        assert_eq!(table.header.languages, vec!["English", "Français"]);
        assert_eq!(table.header.language(1), Some("English"));
        assert_eq!(table.header.language(0), None);
    }

    #[test]
    fn test_rows_record_line_numbers() {
        let table = parse_table("Key;English\n\n# comment\nhello;Hi\n  ;orphan\nbye;Bye").unwrap();
        let lines: Vec<usize> = table.rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, vec![4, 6]);
    }

    #[test]
    fn test_key_is_trimmed_values_are_not() {
        let table = parse_table("Key;English\n  hello ; Hi ").unwrap();
        assert_eq!(table.rows[0].key, "hello");
        assert_eq!(table.rows[0].values, vec![" Hi "]);
    }

    #[test]
    fn test_header_only_is_no_rows() {
        assert_eq!(parse_table("Key;English\n"), Err(ParseError::NoRows));
        assert_eq!(parse_table(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_crlf_lines() {
        let table = parse_table("Key;English\r\nhello;Hi\r\n").unwrap();
        assert_eq!(table.header.languages, vec!["English"]);
        assert_eq!(table.rows[0].values, vec!["Hi"]);
    }

    #[test]
    fn test_cells_stop_at_shorter_side() {
        let table = parse_table("Key;English;;Deutsch\nhello;Hi;x;Hallo;extra").unwrap();
        assert_eq!(
            table.rows[0].cells(&table.header),
            vec![("English", "Hi"), ("Deutsch", "Hallo")]
        );
    }
}
