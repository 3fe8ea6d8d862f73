//! Answer-choice cells of the multiple choice dataset.
//!
//! The cells hold a mapping literal such as `{'A': 'Ampicillin', 'B': "Ceftriaxone"}`.
//! Keys and values may use either quote style; numeric values are kept as
//! their literal text.

use std::collections::BTreeMap;

use tracing::trace;

use super::error::OptionsParseError;

/// Answer choices attached to a grounding record.
///
/// Only [`AnswerOptions::Parsed`] carries choices; every other variant reads
/// as an empty mapping through [`AnswerOptions::to_map`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnswerOptions {
    /// The source has no multiple choice structure.
    #[default]
    NotApplicable,
    /// The cell was empty or the column is absent.
    Missing,
    Parsed(BTreeMap<String, String>),
    /// The cell could not be parsed; the raw text is kept for inspection.
    Malformed { raw: String, error: OptionsParseError },
}

impl AnswerOptions {
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell.map(str::trim) {
            None | Some("") => AnswerOptions::Missing,
            Some(raw) => match parse_options(raw) {
                Ok(map) => AnswerOptions::Parsed(map),
                Err(error) => AnswerOptions::Malformed {
                    raw: raw.to_string(),
                    error,
                },
            },
        }
    }

    pub fn parsed(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            AnswerOptions::Parsed(map) => Some(map),
            _ => None,
        }
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.parsed().cloned().unwrap_or_default()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.parsed()
            .and_then(|map| map.get(label))
            .map(String::as_str)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, AnswerOptions::Malformed { .. })
    }
}

/// Parse a mapping literal into label → text pairs.
pub fn parse_options(raw: &str) -> Result<BTreeMap<String, String>, OptionsParseError> {
    trace!(?raw, "parsing options literal");
    let mut parser = Parser {
        chars: raw.chars().collect(),
        pos: 0,
    };
    let map = parser.mapping()?;
    parser.skip_ws();
    if parser.pos < parser.chars.len() {
        return Err(OptionsParseError::TrailingInput(parser.pos));
    }
    Ok(map)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), OptionsParseError> {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(OptionsParseError::Expected {
                expected,
                offset: self.pos,
            })
        }
    }

    fn mapping(&mut self) -> Result<BTreeMap<String, String>, OptionsParseError> {
        let mut map = BTreeMap::new();
        self.expect('{')?;
        self.skip_ws();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(map);
        }

        loop {
            let key = self.scalar()?;
            self.expect(':')?;
            let value = self.scalar()?;
            map.insert(key, value);

            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    self.skip_ws();
                    if self.peek() == Some('}') {
                        self.pos += 1;
                        return Ok(map);
                    }
                }
                Some('}') => {
                    self.pos += 1;
                    return Ok(map);
                }
                _ => {
                    return Err(OptionsParseError::Expected {
                        expected: '}',
                        offset: self.pos,
                    })
                }
            }
        }
    }

    fn scalar(&mut self) -> Result<String, OptionsParseError> {
        self.skip_ws();
        match self.peek() {
            Some(q @ ('\'' | '"')) => self.string(q),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => Ok(self.number()),
            _ => Err(OptionsParseError::UnsupportedValue(self.pos)),
        }
    }

    fn string(&mut self, quote: char) -> Result<String, OptionsParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                c if c == quote => return Ok(out),
                '\\' => {
                    let Some(escaped) = self.peek() else { break };
                    self.pos += 1;
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        '\\' | '\'' | '"' => out.push(escaped),
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                c => out.push(c),
            }
        }
        Err(OptionsParseError::UnterminatedString(start))
    }

    fn number(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}
