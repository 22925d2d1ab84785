use std::io::Write;

use clap::Args;

use crate::store::Store;

use super::{output_line, stdout_writer, CommandError, Execute, StoreArgs};

#[derive(Args, Debug)]
/// Remove the record at a position. Later records move down by one.
pub struct DeleteArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Zero-based position of the record.
    #[arg(short, long, allow_negative_numbers = true)]
    pub index: i64,
}

pub struct Delete<'a> {
    pub store: Store,
    pub index: i64,
    pub output: Box<dyn Write + 'a>,
}

impl From<&'_ DeleteArgs> for Delete<'_> {
    fn from(args: &'_ DeleteArgs) -> Self {
        Self {
            store: (&args.store).into(),
            index: args.index,
            output: stdout_writer(),
        }
    }
}

impl Execute for Delete<'_> {
    fn execute(&mut self) -> Result<(), CommandError> {
        let index = self.index;
        match self.store.delete(index)? {
            Some(_) => output_line(&mut self.output, format_args!("Record {index} deleted.")),
            None => output_line(&mut self.output, format_args!("Record {index} not found.")),
        }
    }
}
