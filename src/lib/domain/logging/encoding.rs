//! Length-prefixed text encoding of log payloads
//!
//! | value   | encoding                          |
//! |---------|-----------------------------------|
//! | null    | `N;`                              |
//! | boolean | `b:1;` / `b:0;`                   |
//! | integer | `i:42;`                           |
//! | float   | `d:1.5;`                          |
//! | string  | `s:<byte length>:"<raw text>";`   |
//! | array   | `a:<n>:{i:0;<value>i:1;<value>}`  |
//! | object  | `a:<n>:{s:3:"key";<value>}`       |
//!
//! Strings are written raw, so embedded newlines and control characters
//! survive encoding and are dealt with by the sanitizer afterwards.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Errors that can occur when decoding an encoded payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended in the middle of a value
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A different token was expected
    #[error("expected {expected} at byte {position}")]
    Unexpected {
        /// Byte offset of the offending token
        position: usize,
        /// What should have been there
        expected: &'static str,
    },

    /// A number could not be parsed
    #[error("invalid number at byte {0}")]
    InvalidNumber(usize),

    /// A string length does not match its contents
    #[error("invalid string length at byte {0}")]
    InvalidLength(usize),

    /// Input continues after the top-level value
    #[error("trailing characters at byte {0}")]
    TrailingCharacters(usize),
}

/// Encodes a value.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("N;"),
        Value::Bool(flag) => {
            out.push_str(if *flag { "b:1;" } else { "b:0;" });
        }
        Value::Number(number) => write_number(out, number),
        Value::String(text) => write_string(out, text),
        Value::Array(items) => {
            out.push_str(&format!("a:{}:{{", items.len()));
            for (index, item) in items.iter().enumerate() {
                out.push_str(&format!("i:{};", index));
                write_value(out, item);
            }
            out.push('}');
        }
        Value::Object(fields) => {
            out.push_str(&format!("a:{}:{{", fields.len()));
            for (key, item) in fields {
                write_string(out, key);
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_number(out: &mut String, number: &Number) {
    if number.is_f64() {
        out.push_str(&format!("d:{};", number));
    } else {
        out.push_str(&format!("i:{};", number));
    }
}

fn write_string(out: &mut String, text: &str) {
    out.push_str(&format!("s:{}:\"{}\";", text.len(), text));
}

/// Decodes the output of [`encode`].
pub fn decode(input: &str) -> Result<Value, DecodeError> {
    let mut decoder = Decoder { input, position: 0 };

    let value = decoder.value()?;

    if decoder.position != input.len() {
        return Err(DecodeError::TrailingCharacters(decoder.position));
    }

    Ok(value)
}

enum Key {
    Index(u64),
    Name(String),
}

struct Decoder<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Decoder<'a> {
    fn value(&mut self) -> Result<Value, DecodeError> {
        match self.peek()? {
            b'N' => {
                self.expect("N;")?;
                Ok(Value::Null)
            }
            b'b' => {
                self.expect("b:")?;
                let flag = match self.peek()? {
                    b'0' => false,
                    b'1' => true,
                    _ => return Err(self.unexpected("0 or 1")),
                };
                self.position += 1;
                self.expect(";")?;
                Ok(Value::Bool(flag))
            }
            b'i' => {
                self.expect("i:")?;
                let start = self.position;
                let raw = self.until(b';')?;
                let number = match raw.parse::<i64>() {
                    Ok(number) => Number::from(number),
                    Err(_) => raw
                        .parse::<u64>()
                        .map(Number::from)
                        .map_err(|_| DecodeError::InvalidNumber(start))?,
                };
                Ok(Value::Number(number))
            }
            b'd' => {
                self.expect("d:")?;
                let start = self.position;
                let raw = self.until(b';')?;
                raw.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or(DecodeError::InvalidNumber(start))
            }
            b's' => self.string().map(Value::String),
            b'a' => self.composite(),
            _ => Err(self.unexpected("a value")),
        }
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        self.expect("s:")?;
        let length = self.length(b':')?;
        self.expect("\"")?;

        let start = self.position;
        let end = start + length;
        let text = self
            .input
            .get(start..end)
            .ok_or(DecodeError::InvalidLength(start))?;
        self.position = end;

        self.expect("\";")?;
        Ok(text.to_string())
    }

    fn composite(&mut self) -> Result<Value, DecodeError> {
        self.expect("a:")?;
        let count = self.length(b':')?;
        self.expect("{")?;

        let mut entries = Vec::new();
        for _ in 0..count {
            let key = self.key()?;
            let value = self.value()?;
            entries.push((key, value));
        }
        self.expect("}")?;

        let sequential = entries
            .iter()
            .enumerate()
            .all(|(index, (key, _))| matches!(key, Key::Index(i) if *i == index as u64));

        if sequential {
            return Ok(Value::Array(entries.into_iter().map(|(_, v)| v).collect()));
        }

        let fields: Map<String, Value> = entries
            .into_iter()
            .map(|(key, value)| match key {
                Key::Index(index) => (index.to_string(), value),
                Key::Name(name) => (name, value),
            })
            .collect();

        Ok(Value::Object(fields))
    }

    fn key(&mut self) -> Result<Key, DecodeError> {
        match self.peek()? {
            b'i' => {
                self.expect("i:")?;
                let start = self.position;
                self.until(b';')?
                    .parse()
                    .map(Key::Index)
                    .map_err(|_| DecodeError::InvalidNumber(start))
            }
            b's' => self.string().map(Key::Name),
            _ => Err(self.unexpected("a key")),
        }
    }

    fn length(&mut self, terminator: u8) -> Result<usize, DecodeError> {
        let start = self.position;
        self.until(terminator)?
            .parse()
            .map_err(|_| DecodeError::InvalidLength(start))
    }

    /// Consumes up to and including `terminator`, returning what came before.
    fn until(&mut self, terminator: u8) -> Result<&'a str, DecodeError> {
        let input = self.input;
        let rest = &input.as_bytes()[self.position..];
        let offset = rest
            .iter()
            .position(|byte| *byte == terminator)
            .ok_or(DecodeError::UnexpectedEnd)?;

        let start = self.position;
        self.position += offset + 1;
        Ok(&input[start..start + offset])
    }

    fn expect(&mut self, token: &'static str) -> Result<(), DecodeError> {
        if self.input[self.position..].starts_with(token) {
            self.position += token.len();
            return Ok(());
        }

        if self.input.len() - self.position < token.len() {
            return Err(DecodeError::UnexpectedEnd);
        }

        Err(self.unexpected(token))
    }

    fn peek(&self) -> Result<u8, DecodeError> {
        self.input
            .as_bytes()
            .get(self.position)
            .copied()
            .ok_or(DecodeError::UnexpectedEnd)
    }

    fn unexpected(&self, expected: &'static str) -> DecodeError {
        DecodeError::Unexpected {
            position: self.position,
            expected,
        }
    }
}
