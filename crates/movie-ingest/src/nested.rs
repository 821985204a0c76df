//! Decoding of nested cells.
//!
//! The franchise, production-country and production-company columns hold
//! structured values serialized either as JSON or as Python literals
//! (`{'id': 10194, 'name': 'Toy Story Collection'}`). Both notations are read
//! into a [`serde_json::Value`] and then narrowed to [`NamedRef`]s.

use movie_model::NamedRef;
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// A nested cell that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestedValueError {
    /// The text is not a valid literal.
    #[error("malformed nested value at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    /// The literal parsed but does not have the expected structure.
    #[error("unexpected nested value: {message}")]
    Shape { message: String },
}

impl NestedValueError {
    fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }
}

type ParseResult<T> = std::result::Result<T, NestedValueError>;

struct LiteralParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error<T>(&self, message: impl Into<String>) -> ParseResult<T> {
        Err(NestedValueError::Syntax {
            position: self.pos,
            message: message.into(),
        })
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        self.skip_whitespace();
        match self.bump() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => self.error(format!("expected '{expected}', found '{ch}'")),
            None => self.error(format!("expected '{expected}', found end of input")),
        }
    }

    fn parse_document(mut self) -> ParseResult<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return self.error("trailing characters");
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some('{') => self.parse_dict(),
            Some('[') => self.parse_sequence('[', ']'),
            Some('(') => self.parse_sequence('(', ')'),
            Some(quote @ ('\'' | '"')) => self.parse_string(quote).map(Value::String),
            Some(ch) if ch == '-' || ch == '+' || ch == '.' || ch.is_ascii_digit() => {
                self.parse_number()
            }
            Some(ch) if ch.is_ascii_alphabetic() => self.parse_keyword(),
            Some(ch) => self.error(format!("unexpected character '{ch}'")),
            None => self.error("unexpected end of input"),
        }
    }

    fn parse_dict(&mut self) -> ParseResult<Value> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }
            let key = match self.parse_value()? {
                Value::String(key) => key,
                Value::Number(number) => number.to_string(),
                _ => return self.error("dictionary keys must be strings or numbers"),
            };
            self.expect(':')?;
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(Value::Object(map)),
                _ => return self.error("expected ',' or '}' in dictionary"),
            }
        }
    }

    fn parse_sequence(&mut self, open: char, close: char) -> ParseResult<Value> {
        self.expect(open)?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(Value::Array(items));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(ch) if ch == close => return Ok(Value::Array(items)),
                _ => return self.error(format!("expected ',' or '{close}' in sequence")),
            }
        }
    }

    fn parse_string(&mut self, quote: char) -> ParseResult<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return self.error("unterminated string"),
                Some(ch) if ch == quote => return Ok(out),
                Some('\\') => {
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('0') => '\0',
                        Some('/') => '/',
                        Some('x') => self.parse_code_point(2)?,
                        Some('u') => self.parse_code_point(4)?,
                        Some(other @ ('\\' | '\'' | '"')) => other,
                        // Unknown escapes keep their backslash, as Python does.
                        Some(other) => {
                            out.push('\\');
                            other
                        }
                        None => return self.error("unterminated escape"),
                    };
                    out.push(escaped);
                }
                Some(ch) => out.push(ch),
            }
        }
    }

    fn parse_code_point(&mut self, digits: usize) -> ParseResult<char> {
        let rest = self.rest();
        let Some(hex) = rest.get(..digits) else {
            return self.error("truncated escape sequence");
        };
        let Ok(code) = u32::from_str_radix(hex, 16) else {
            return self.error(format!("invalid escape digits '{hex}'"));
        };
        self.pos += digits;
        match char::from_u32(code) {
            Some(ch) => Ok(ch),
            None => self.error(format!("invalid code point {code:#x}")),
        }
    }

    fn parse_number(&mut self) -> ParseResult<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'))
        {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        match text.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(number) => Ok(Value::Number(number)),
            None => self.error(format!("invalid number '{text}'")),
        }
    }

    fn parse_keyword(&mut self) -> ParseResult<Value> {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            self.bump();
        }
        match &self.input[start..self.pos] {
            "None" | "null" | "nan" | "NaN" => Ok(Value::Null),
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            other => self.error(format!("unknown keyword '{other}'")),
        }
    }
}

/// Parse a JSON or Python-literal value.
///
/// # Errors
///
/// Returns [`NestedValueError`] with the byte offset of the first problem.
///
/// # Examples
///
/// ```
/// use movie_ingest::parse_literal;
///
/// let value = parse_literal("{'name': \"Lucasfilm's\", 'id': 1}").unwrap();
/// assert_eq!(value["name"], "Lucasfilm's");
/// ```
pub fn parse_literal(input: &str) -> Result<Value, NestedValueError> {
    LiteralParser::new(input).parse_document()
}

fn named_from_object(value: &Value) -> Option<NamedRef> {
    match value.get("name")? {
        Value::String(name) => Some(NamedRef::new(name.trim())),
        _ => None,
    }
}

/// Decode an optional single `{name}` cell (the franchise column).
///
/// Blank cells and `None`/`null` decode to `None`.
///
/// # Errors
///
/// Fails when the cell is not a dictionary with a string `name`.
pub fn parse_named_ref(cell: &str) -> Result<Option<NamedRef>, NestedValueError> {
    if cell.trim().is_empty() {
        return Ok(None);
    }
    match parse_literal(cell)? {
        Value::Null => Ok(None),
        value @ Value::Object(_) => named_from_object(&value)
            .map(Some)
            .ok_or_else(|| NestedValueError::shape("dictionary has no string 'name'")),
        _ => Err(NestedValueError::shape("expected a dictionary")),
    }
}

/// Decode a list-of-`{name}` cell into a de-duplicated, order-preserving set.
///
/// Blank cells and `None`/`null` decode to an empty set.
///
/// # Errors
///
/// Fails when the cell is not a list of dictionaries with string names.
pub fn parse_named_list(cell: &str) -> Result<Vec<NamedRef>, NestedValueError> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items = match parse_literal(cell)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => return Err(NestedValueError::shape("expected a list")),
    };
    let mut names: Vec<NamedRef> = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let named = named_from_object(item).ok_or_else(|| {
            NestedValueError::shape(format!("list item {idx} has no string 'name'"))
        })?;
        if !names.contains(&named) {
            names.push(named);
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_python_collection() {
        let cell = "{'id': 10194, 'name': 'Toy Story Collection', \
                    'poster_path': '/7G9915LfUQ2lVfwMEEhDsn3kT4B.jpg', 'backdrop_path': None}";
        assert_eq!(
            parse_named_ref(cell).unwrap(),
            Some(NamedRef::new("Toy Story Collection"))
        );
    }

    #[test]
    fn parses_json_collection() {
        let cell = r#"{"name":"Toy Story Collection"}"#;
        assert_eq!(
            parse_named_ref(cell).unwrap(),
            Some(NamedRef::new("Toy Story Collection"))
        );
    }

    #[test]
    fn blank_and_none_collections_are_absent() {
        assert_eq!(parse_named_ref("").unwrap(), None);
        assert_eq!(parse_named_ref("None").unwrap(), None);
        assert_eq!(parse_named_ref("null").unwrap(), None);
    }

    #[test]
    fn parses_python_list_with_apostrophes() {
        let cell = "[{'name': \"Lucasfilm's Studio\", 'id': 1}, {'name': 'Pixar', 'id': 3}]";
        assert_eq!(
            parse_named_list(cell).unwrap(),
            vec![NamedRef::new("Lucasfilm's Studio"), NamedRef::new("Pixar")]
        );
    }

    #[test]
    fn list_deduplicates_names() {
        let cell = "[{'name': 'France'}, {'name': 'France'}, {'name': 'Spain'}]";
        assert_eq!(
            parse_named_list(cell).unwrap(),
            vec![NamedRef::new("France"), NamedRef::new("Spain")]
        );
    }

    #[test]
    fn escapes_are_decoded() {
        let value = parse_literal(r"['caf\xe9', 'a\'b', 'á']").unwrap();
        assert_eq!(value[0], "café");
        assert_eq!(value[1], "a'b");
        assert_eq!(value[2], "á");
    }

    #[test]
    fn numbers_and_keywords() {
        let value = parse_literal("{'a': -1, 'b': 2.5, 'c': True, 'd': False, 'e': (1, 2)}").unwrap();
        assert_eq!(value["a"], -1);
        assert_eq!(value["b"], 2.5);
        assert_eq!(value["c"], true);
        assert_eq!(value["d"], false);
        assert_eq!(value["e"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn syntax_errors_carry_the_offset() {
        assert_eq!(
            parse_literal("[1, 2"),
            Err(NestedValueError::Syntax {
                position: 5,
                message: "expected ',' or ']' in sequence".to_string(),
            })
        );
        let error = parse_literal("{'name': 'A'} extra").unwrap_err();
        assert!(matches!(error, NestedValueError::Syntax { position: 14, .. }));
    }

    #[test]
    fn shape_errors_have_no_offset() {
        assert_eq!(
            parse_named_list("False"),
            Err(NestedValueError::Shape {
                message: "expected a list".to_string(),
            })
        );
        assert_eq!(
            parse_named_list("[{'name': 'A'}, {'id': 1}]"),
            Err(NestedValueError::Shape {
                message: "list item 1 has no string 'name'".to_string(),
            })
        );
        assert!(matches!(
            parse_named_ref("[{'name': 'A'}]"),
            Err(NestedValueError::Shape { .. })
        ));
        assert!(!parse_named_ref("{'id': 1}")
            .unwrap_err()
            .to_string()
            .contains("byte"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(parse_named_list("False").is_err());
        assert!(parse_named_list("[{'name': 'A'}").is_err());
        assert!(parse_named_list("[{'id': 1}]").is_err());
        assert!(parse_named_ref("[{'name': 'A'}]").is_err());
        assert!(parse_named_ref("{'name': 'A'} extra").is_err());
        assert!(parse_literal("'unterminated").is_err());
    }
}
