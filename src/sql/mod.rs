pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use error::ScanError;
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenType};

use crate::procedures::{Procedure, ProcedureCatalog};

/// A token of a statement, paired with the catalog procedure it calls
/// when it is a name directly followed by `(`.
#[derive(Debug, Clone)]
pub struct ScannedToken<'c> {
    pub token: Token,
    pub procedure: Option<&'c Procedure>,
}

pub fn procedure_calls<'c>(
    sql: &str,
    catalog: &'c ProcedureCatalog,
) -> Result<Vec<ScannedToken<'c>>, ScanError> {
    let mut scanner = Scanner::new(sql)?;
    let mut tokens = Vec::new();
    while scanner.has_next() {
        let token = scanner.next_token()?;
        let mut procedure = None;
        if token.kind == TokenType::Identifier && scanner.has_next() {
            let next = scanner.next_token()?;
            if next.kind == TokenType::LParen {
                procedure = catalog.get(&token.text);
            }
            scanner.push_back(next);
        }
        tokens.push(ScannedToken { token, procedure });
    }
    Ok(tokens)
}
