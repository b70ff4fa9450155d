#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenType {
    // Keywords
    And, As, Between, By, Delete, Distinct, Exists, From, Having,
    Inner, Insert, Into, Join, Left, Not, Null, On, Or, Order,
    Outer, Right, Select, Update, Where, Xor,

    // Symbols
    Asterisk, Comma, Equals, Less, LParen, Minus, More,
    NotEquals, NotEquals2, Period, Plus, RParen, Semi,

    // Literals
    Character, Numeric, Identifier,
}

impl TokenType {
    pub const KEYWORDS: [TokenType; 25] = [
        TokenType::And, TokenType::As, TokenType::Between, TokenType::By,
        TokenType::Delete, TokenType::Distinct, TokenType::Exists, TokenType::From,
        TokenType::Having, TokenType::Inner, TokenType::Insert, TokenType::Into,
        TokenType::Join, TokenType::Left, TokenType::Not, TokenType::Null,
        TokenType::On, TokenType::Or, TokenType::Order, TokenType::Outer,
        TokenType::Right, TokenType::Select, TokenType::Update, TokenType::Where,
        TokenType::Xor,
    ];

    pub const SYMBOLS: [TokenType; 13] = [
        TokenType::Asterisk, TokenType::Comma, TokenType::Equals, TokenType::Less,
        TokenType::LParen, TokenType::Minus, TokenType::More, TokenType::NotEquals,
        TokenType::NotEquals2, TokenType::Period, TokenType::Plus, TokenType::RParen,
        TokenType::Semi,
    ];

    /// Canonical spelling used for exact-match recognition. Keywords spell
    /// as their upper-case name; literal kinds have no fixed spelling.
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            Self::And => "AND",
            Self::As => "AS",
            Self::Between => "BETWEEN",
            Self::By => "BY",
            Self::Delete => "DELETE",
            Self::Distinct => "DISTINCT",
            Self::Exists => "EXISTS",
            Self::From => "FROM",
            Self::Having => "HAVING",
            Self::Inner => "INNER",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Join => "JOIN",
            Self::Left => "LEFT",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::On => "ON",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Outer => "OUTER",
            Self::Right => "RIGHT",
            Self::Select => "SELECT",
            Self::Update => "UPDATE",
            Self::Where => "WHERE",
            Self::Xor => "XOR",
            Self::Asterisk => "*",
            Self::Comma => ",",
            Self::Equals => "=",
            Self::Less => "<",
            Self::LParen => "(",
            Self::Minus => "-",
            Self::More => ">",
            Self::NotEquals => "<>",
            Self::NotEquals2 => "!=",
            Self::Period => ".",
            Self::Plus => "+",
            Self::RParen => ")",
            Self::Semi => ";",
            Self::Character | Self::Numeric | Self::Identifier => return None,
        };
        Some(text)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Asterisk => "ASTERISK",
            Self::Comma => "COMMA",
            Self::Equals => "EQUALS",
            Self::Less => "LESS",
            Self::LParen => "LPAREN",
            Self::Minus => "MINUS",
            Self::More => "MORE",
            Self::NotEquals => "NOTEQUALS",
            Self::NotEquals2 => "NOTEQUALS2",
            Self::Period => "PERIOD",
            Self::Plus => "PLUS",
            Self::RParen => "RPAREN",
            Self::Semi => "SEMI",
            Self::Character => "CHARACTER",
            Self::Numeric => "NUMERIC",
            Self::Identifier => "IDENTIFIER",
            keyword => keyword.spelling().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenType, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}
