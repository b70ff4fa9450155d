use super::{
    error::ScanError,
    keywords,
    token::{Token, TokenType},
};

pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0')
}

/// Single-character punctuation that always ends the current lexeme.
pub fn is_special(c: char) -> bool {
    matches!(c, '(' | ')' | '+' | '-' | ',' | '.' | '=' | ';')
}

pub fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Start of a comparison or wildcard symbol (`<`, `>`, `<>`, `!=`, `*`).
pub fn is_operator(c: char) -> bool {
    matches!(c, '<' | '>' | '!' | '*')
}

/// Reads tokens one at a time from a single SQL statement.
///
/// Tokens handed back with [`Scanner::push_back`] are replayed last-in
/// first-out before any more source text is read.
pub struct Scanner {
    source: Vec<char>,
    start: usize,
    current: usize,
    pushed: Vec<Token>,
}

impl Scanner {
    /// Fails with [`ScanError::InvalidInput`] when no statement is given.
    pub fn new<'a>(sql: impl Into<Option<&'a str>>) -> Result<Self, ScanError> {
        let sql = sql.into().ok_or(ScanError::InvalidInput)?;
        Ok(Scanner {
            source: sql.trim_matches(is_separator).chars().collect(),
            start: 0,
            current: 0,
            pushed: Vec::new(),
        })
    }

    pub fn has_next(&self) -> bool {
        !self.pushed.is_empty() || !self.is_at_end()
    }

    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        if let Some(token) = self.pushed.pop() {
            return Ok(token);
        }

        while self.peek().is_some_and(is_separator) {
            self.current += 1;
        }
        self.start = self.current;
        let c = self.advance().ok_or(ScanError::UnexpectedEndOfInput)?;

        if is_quote(c) {
            let text = self.quoted(c);
            if c == '\'' {
                return Ok(Token::new(TokenType::Character, text));
            }
            return Ok(classify(text));
        }
        if is_special(c) {
            return Ok(classify(c.to_string()));
        }
        if is_operator(c) {
            return Ok(classify(self.operator(c)));
        }
        let text = self.free_form(c)?;
        Ok(classify(text))
    }

    pub fn push_back(&mut self, token: Token) {
        self.pushed.push(token);
    }

    /// Content between `quote` delimiters; a doubled delimiter stands for
    /// itself. An unterminated literal yields what was read so far.
    fn quoted(&mut self, quote: char) -> String {
        let mut text = String::new();
        while let Some(c) = self.advance() {
            if c != quote {
                text.push(c);
                continue;
            }
            match self.advance() {
                Some(next) if next == quote => text.push(quote),
                Some(_) => {
                    self.unread();
                    break;
                }
                None => break,
            }
        }
        text
    }

    fn operator(&mut self, first: char) -> String {
        let mut text = first.to_string();
        match (first, self.peek()) {
            ('<', Some('>')) | ('!', Some('=')) => {
                text.extend(self.advance());
            }
            _ => {}
        }
        text
    }

    /// A bare word or number. A digit-led lexeme may hold one decimal point;
    /// any other special character ends the lexeme and is left unread.
    fn free_form(&mut self, first: char) -> Result<String, ScanError> {
        let numeric = first.is_ascii_digit();
        let mut dots = 0;
        let mut text = String::new();
        let mut c = first;
        loop {
            if ends_lexeme(c, numeric) {
                self.unread();
                break;
            }
            text.push(c);
            if c == '.' {
                dots += 1;
                if dots > 1 {
                    return Err(ScanError::InvalidNumericFormat {
                        fragment: text,
                        position: self.start,
                    });
                }
            }
            match self.advance() {
                Some(next) => c = next,
                None => break,
            }
        }
        Ok(text)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source.get(self.current).copied()?;
        self.current += 1;
        Some(c)
    }

    fn unread(&mut self) {
        self.current -= 1;
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.next_token())
    }
}

fn ends_lexeme(c: char, numeric: bool) -> bool {
    is_separator(c) || is_operator(c) || (is_special(c) && !(numeric && c == '.'))
}

fn classify(text: String) -> Token {
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        return Token::new(TokenType::Numeric, text);
    }
    let kind = keywords::lookup(&text).unwrap_or(TokenType::Identifier);
    Token::new(kind, text)
}

/// Scans a whole statement.
pub fn tokenize(sql: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(sql)?.collect()
}
