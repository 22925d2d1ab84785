use std::io::Write;

use clap::Args;

use crate::store::{RecordPatch, Store};

use super::{output_line, stdout_writer, CommandError, Execute, StoreArgs};

#[derive(Args, Debug)]
/// Overwrite some fields of the record at a position.
///
/// Fields that are not given keep their current value.
pub struct UpdateArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Zero-based position of the record.
    #[arg(short, long, allow_negative_numbers = true)]
    pub index: i64,

    /// New name.
    #[arg(long)]
    pub name: Option<String>,

    /// New email address.
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// New message.
    #[arg(long)]
    pub message: Option<String>,
}

pub struct Update<'a> {
    pub store: Store,
    pub index: i64,
    pub patch: RecordPatch,
    pub output: Box<dyn Write + 'a>,
}

impl From<&'_ UpdateArgs> for Update<'_> {
    fn from(args: &'_ UpdateArgs) -> Self {
        Self {
            store: (&args.store).into(),
            index: args.index,
            patch: RecordPatch {
                name: args.name.clone(),
                email: args.email.clone(),
                phone: args.phone.clone(),
                message: args.message.clone(),
            },
            output: stdout_writer(),
        }
    }
}

impl Execute for Update<'_> {
    fn execute(&mut self) -> Result<(), CommandError> {
        let index = self.index;
        match self.store.update(index, &self.patch)? {
            Some(_) => output_line(&mut self.output, format_args!("Record {index} updated.")),
            None => output_line(&mut self.output, format_args!("Record {index} not found.")),
        }
    }
}
