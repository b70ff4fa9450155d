use std::fmt;

/// How the `tokens` command prints a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TokenFormat {
    /// `KIND text`, one token per line
    #[default]
    Plain,
    /// Tab-separated `kind`, `text`, `procedure` columns
    Tsv,
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenFormat::Plain => write!(f, "plain"),
            TokenFormat::Tsv => write!(f, "tsv"),
        }
    }
}
