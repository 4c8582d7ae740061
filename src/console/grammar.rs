//! console::grammar
//!
//! Line grammar for the interactive contract console.
//!
//! # Grammar
//!
//! One line of input is either a bare meta-command keyword or a function
//! call:
//!
//! ```text
//! statement  := "abi" | call
//! call       := identifier '(' [ arg { ',' arg } ] ')'
//! identifier := [A-Za-z][A-Za-z0-9_]*
//!             | '_' [A-Za-z0-9_ ]+          (embedded spaces allowed)
//! arg        := bool | fileref | number | string
//! bool       := "true" | "false"
//! fileref    := "f:" string
//! number     := '-'? [0-9]+ ( '.' [0-9]+ )?
//! string     := '"' dchar* '"' | '\'' schar* '\''
//! ```
//!
//! Whitespace is insignificant between tokens and around commas and
//! parentheses; inside string literals it is preserved. Inside a string,
//! backslash starts a JSON-style escape (`\n \t \r \b \f \" \' \\ \/` and
//! `\uXXXX`); any other escape is an error.
//!
//! # Parse outcomes
//!
//! Parsing distinguishes three cases:
//!
//! - a complete [`Statement`];
//! - [`Parsed::Incomplete`] - the line ended in the middle of a production
//!   (unbalanced parentheses, unterminated string, a bare identifier that
//!   is not a meta-command). Not an error: the caller echoes the line and
//!   keeps going;
//! - [`ParseError`] - the line can never become a statement (unexpected
//!   character, malformed escape, trailing input).
//!
//! The parser is deterministic recursive descent, so a line has at most
//! one parse; there is no candidate set to disambiguate.
//!
//! # Example
//!
//! ```
//! use meridian_cli::console::grammar::{parse_line, Literal, Parsed, Statement};
//!
//! match parse_line(r#"set("key", 42, true)"#).unwrap() {
//!     Parsed::Statement(Statement::Call { name, args }) => {
//!         assert_eq!(name, "set");
//!         assert_eq!(args[0], Literal::Str("key".into()));
//!         assert_eq!(args[1], Literal::Int(42));
//!         assert_eq!(args[2], Literal::Bool(true));
//!     }
//!     other => panic!("unexpected parse: {other:?}"),
//! }
//!
//! assert_eq!(parse_line("set(1, 2").unwrap(), Parsed::Incomplete);
//! ```

use thiserror::Error;

/// Errors for lines that can never become a statement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected character '{found}' at column {column}")]
    UnexpectedChar { found: char, column: usize },

    #[error("unexpected input after statement at column {column}")]
    TrailingInput { column: usize },

    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,

    #[error("integer literal out of range: {0}")]
    IntOutOfRange(String),
}

/// A parsed, typed constant appearing as a function argument.
///
/// Exactly one kind and one semantic value per literal. The kind decides
/// how dispatch treats the value; in particular [`Literal::FileRef`] carries
/// only the path - no file I/O happens during parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    FileRef(String),
}

/// Local console commands, recognized as bare keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// Print the loaded contract interface.
    Abi,
}

impl MetaCommand {
    /// Resolve a bare keyword to a meta-command, if it is one.
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "abi" => Some(MetaCommand::Abi),
            _ => None,
        }
    }
}

/// A fully parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A local console command.
    Meta(MetaCommand),
    /// A named remote call with positional arguments in source order.
    Call { name: String, args: Vec<Literal> },
}

/// Result of parsing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Statement(Statement),
    /// The line is a prefix of a valid statement but ended too early.
    Incomplete,
}

/// Internal failure mode; `Incomplete` is surfaced as `Ok(Parsed::Incomplete)`.
enum Fail {
    Incomplete,
    Error(ParseError),
}

type PResult<T> = Result<T, Fail>;

/// Parse one line of console input.
///
/// The line is expected without its trailing newline. An empty or
/// whitespace-only line is incomplete, not an error.
pub fn parse_line(line: &str) -> Result<Parsed, ParseError> {
    let mut parser = Parser::new(line);
    match parser.statement() {
        Ok(statement) => Ok(Parsed::Statement(statement)),
        Err(Fail::Incomplete) => Ok(Parsed::Incomplete),
        Err(Fail::Error(e)) => Err(e),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// 1-based column of the next unconsumed character.
    fn column(&self) -> usize {
        self.pos + 1
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// The next character, failing with `Incomplete` at end of line.
    fn expect_any(&mut self) -> PResult<char> {
        self.bump().ok_or(Fail::Incomplete)
    }

    fn unexpected(&self, found: char) -> Fail {
        Fail::Error(ParseError::UnexpectedChar {
            found,
            column: self.column(),
        })
    }

    /// statement := "abi" | identifier '(' args ')'
    fn statement(&mut self) -> PResult<Statement> {
        self.skip_ws();
        if self.peek().is_none() {
            return Err(Fail::Incomplete);
        }
        let name = self.identifier()?;
        self.skip_ws();
        match self.peek() {
            Some('(') => {
                let args = self.arg_list()?;
                self.skip_ws();
                if self.peek().is_some() {
                    return Err(Fail::Error(ParseError::TrailingInput {
                        column: self.column(),
                    }));
                }
                Ok(Statement::Call { name, args })
            }
            None => match MetaCommand::from_keyword(&name) {
                Some(meta) => Ok(Statement::Meta(meta)),
                // A bare identifier is the prefix of a call that never
                // got its parentheses.
                None => Err(Fail::Incomplete),
            },
            Some(c) => Err(self.unexpected(c)),
        }
    }

    /// identifier := [A-Za-z][A-Za-z0-9_]* | '_' [A-Za-z0-9_ ]+
    ///
    /// The underscore form admits embedded spaces; spaces immediately
    /// before the opening parenthesis separate tokens and are not part
    /// of the name.
    fn identifier(&mut self) -> PResult<String> {
        let first = self.expect_any()?;
        let mut name = String::new();
        name.push(first);
        if first == '_' {
            let mut rest = String::new();
            while let Some(c) = self.peek() {
                if c.is_ascii_alphanumeric() || c == '_' || c == ' ' {
                    rest.push(c);
                    self.pos += 1;
                } else {
                    break;
                }
            }
            if rest.is_empty() {
                return match self.peek() {
                    None => Err(Fail::Incomplete),
                    Some(c) => Err(self.unexpected(c)),
                };
            }
            name.push_str(rest.trim_end_matches(' '));
            Ok(name)
        } else if first.is_ascii_alphabetic() {
            while let Some(c) = self.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    name.push(c);
                    self.pos += 1;
                } else {
                    break;
                }
            }
            Ok(name)
        } else {
            self.pos -= 1;
            Err(self.unexpected(first))
        }
    }

    /// args := '(' ')' | '(' arg { ',' arg } ')'
    fn arg_list(&mut self) -> PResult<Vec<Literal>> {
        self.bump(); // '('
        self.skip_ws();
        let mut args = Vec::new();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(args);
        }
        loop {
            args.push(self.arg()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_ws();
                }
                Some(')') => {
                    self.bump();
                    return Ok(args);
                }
                None => return Err(Fail::Incomplete),
                Some(c) => return Err(self.unexpected(c)),
            }
        }
    }

    /// arg := bool | fileref | number | string
    ///
    /// `true`/`false` take priority over identifiers here; identifiers are
    /// not valid arguments at all.
    fn arg(&mut self) -> PResult<Literal> {
        match self.peek() {
            Some('"') | Some('\'') => Ok(Literal::Str(self.string()?)),
            Some('t') => {
                self.keyword("true")?;
                Ok(Literal::Bool(true))
            }
            Some('f') => {
                if self.peek_at(1) == Some(':') {
                    self.pos += 2; // "f:"
                    match self.peek() {
                        Some('"') | Some('\'') => Ok(Literal::FileRef(self.string()?)),
                        None => Err(Fail::Incomplete),
                        Some(c) => Err(self.unexpected(c)),
                    }
                } else {
                    self.keyword("false")?;
                    Ok(Literal::Bool(false))
                }
            }
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            None => Err(Fail::Incomplete),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    /// Match an exact keyword; the following character must not extend it
    /// into an identifier.
    fn keyword(&mut self, word: &str) -> PResult<()> {
        for expected in word.chars() {
            match self.peek() {
                Some(c) if c == expected => {
                    self.pos += 1;
                }
                None => return Err(Fail::Incomplete),
                Some(c) => return Err(self.unexpected(c)),
            }
        }
        match self.peek() {
            Some(c) if c.is_ascii_alphanumeric() || c == '_' => Err(self.unexpected(c)),
            _ => Ok(()),
        }
    }

    /// number := '-'? [0-9]+ ( '.' [0-9]+ )?
    ///
    /// A fractional part selects a decimal literal; otherwise the numeral
    /// is a signed integer. Leading zeros are decimal, never octal.
    fn number(&mut self) -> PResult<Literal> {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.pos += 1;
        }
        let digits = self.digits()?;
        text.push_str(&digits);
        if self.peek() == Some('.') {
            text.push('.');
            self.pos += 1;
            text.push_str(&self.digits()?);
            match text.parse::<f64>() {
                Ok(value) => Ok(Literal::Float(value)),
                Err(_) => Err(Fail::Error(ParseError::IntOutOfRange(text))),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(Literal::Int(value)),
                Err(_) => Err(Fail::Error(ParseError::IntOutOfRange(text))),
            }
        }
    }

    /// One or more decimal digits.
    fn digits(&mut self) -> PResult<String> {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        if digits.is_empty() {
            return match self.peek() {
                None => Err(Fail::Incomplete),
                Some(c) => Err(self.unexpected(c)),
            };
        }
        Ok(digits)
    }

    /// string := '"' dchar* '"' | '\'' schar* '\''
    ///
    /// Any character except the delimiter and backslash passes through
    /// literally; a backslash starts an escape sequence.
    fn string(&mut self) -> PResult<String> {
        let delim = self.expect_any()?;
        let mut value = String::new();
        loop {
            let c = self.expect_any()?;
            if c == delim {
                return Ok(value);
            }
            if c == '\\' {
                value.push(self.escape()?);
            } else {
                value.push(c);
            }
        }
    }

    /// JSON-style escape after a backslash.
    fn escape(&mut self) -> PResult<char> {
        let c = self.expect_any()?;
        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            'b' => Ok('\u{8}'),
            'f' => Ok('\u{c}'),
            '"' => Ok('"'),
            '\'' => Ok('\''),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let h = self.expect_any()?;
                    let digit = h
                        .to_digit(16)
                        .ok_or(Fail::Error(ParseError::InvalidUnicodeEscape))?;
                    code = code * 16 + digit;
                }
                char::from_u32(code).ok_or(Fail::Error(ParseError::InvalidUnicodeEscape))
            }
            other => Err(Fail::Error(ParseError::InvalidEscape(other))),
        }
    }
}
