use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Subcommand};
use thiserror::Error;

use crate::store::{Store, StoreError};

use self::{create::Create, delete::Delete, read::Read, update::Update};

mod create;
mod delete;
mod read;
mod update;

pub(self) trait Execute {
    fn execute(&mut self) -> Result<(), CommandError>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Create(create::CreateArgs),
    Read(read::ReadArgs),
    Update(update::UpdateArgs),
    Delete(delete::DeleteArgs),
}

impl Command {
    pub fn run(&self) -> Result<(), CommandError> {
        match self {
            Command::Create(args) => Create::from(args).execute(),
            Command::Read(args) => Read::from(args).execute(),
            Command::Update(args) => Update::from(args).execute(),
            Command::Delete(args) => Delete::from(args).execute(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// JSON file holding the records.
    #[arg(short, long, default_value = "records.json")]
    pub file: PathBuf,
}

impl From<&'_ StoreArgs> for Store {
    fn from(args: &'_ StoreArgs) -> Self {
        Store::new(&args.file)
    }
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to write output")]
    WriteOutput(#[source] io::Error),
}

fn stdout_writer<'a>() -> Box<dyn Write + 'a> {
    Box::new(io::stdout())
}

fn output_line(writer: &mut impl Write, line: impl std::fmt::Display) -> Result<(), CommandError> {
    writeln!(writer, "{line}").map_err(CommandError::WriteOutput)
}
