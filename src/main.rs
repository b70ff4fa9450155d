use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use paradox_sql::{
    blob::BlobFile,
    config::TokenFormat,
    procedures::ProcedureCatalog,
    results::ParadoxFieldType,
    rowset::{ClobDescriptor, ParadoxClob},
    sql,
};

#[derive(Parser)]
#[command(name = "paradox-sql", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a SQL statement
    Tokens {
        /// Statement to scan; read from stdin when omitted
        sql: Option<String>,

        #[arg(long, value_enum, default_value_t = TokenFormat::Plain)]
        format: TokenFormat,
    },
    /// Print a memo value stored in a .MB file
    Clob {
        /// Path to the .MB file; not needed when the offset is 0
        file: Option<PathBuf>,

        /// Blob offset from the table field
        #[arg(long)]
        offset: u32,

        /// Blob length from the table field
        #[arg(long)]
        length: u32,

        /// Leader bytes from the table field, used when the offset is 0
        #[arg(long)]
        leader: Option<String>,
    },
    /// Print the Paradox field type to SQL type mapping
    Types,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Tokens { sql, format } => {
            let sql = match sql {
                Some(sql) => sql,
                None => {
                    let mut input = String::new();
                    io::stdin()
                        .read_to_string(&mut input)
                        .context("read statement from stdin")?;
                    input
                }
            };
            if sql.trim().is_empty() {
                bail!("no SQL input provided");
            }
            let catalog = ProcedureCatalog::default();
            let tokens = sql::procedure_calls(&sql, &catalog).context("scan statement")?;
            for scanned in tokens {
                let kind = scanned.token.kind.name();
                let procedure = scanned.procedure.map(|p| p.name);
                match format {
                    TokenFormat::Plain => match procedure {
                        Some(name) => println!("{kind} {} (procedure {name})", scanned.token.text),
                        None => println!("{kind} {}", scanned.token.text),
                    },
                    TokenFormat::Tsv => println!(
                        "{kind}\t{}\t{}",
                        scanned.token.text,
                        procedure.unwrap_or_default()
                    ),
                }
            }
        }
        Command::Clob {
            file,
            offset,
            length,
            leader,
        } => {
            let source = match (offset, file) {
                (0, _) => None,
                (_, Some(file)) => Some(
                    BlobFile::open(&file)
                        .with_context(|| format!("open blob file {}", file.display()))?,
                ),
                (_, None) => bail!("a blob file is needed for offset {offset:#x}"),
            };
            let descriptor = ClobDescriptor {
                leader: leader.map(Bytes::from),
                offset,
                length,
                modificator: 0,
            };
            let mut clob = ParadoxClob::new(descriptor, source);
            let mut value = String::new();
            clob.character_stream()
                .context("load clob")?
                .read_to_string(&mut value)
                .context("decode clob")?;
            println!("{value}");
        }
        Command::Types => {
            for field_type in ParadoxFieldType::ALL {
                println!(
                    "{:#04x}\t{}\t{}",
                    field_type.code(),
                    field_type.name(),
                    field_type.sql_type()
                );
            }
        }
    }

    Ok(())
}
