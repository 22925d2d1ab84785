use std::io::Write;

use clap::Args;

use crate::store::{Record, Store};

use super::{output_line, stdout_writer, CommandError, Execute, StoreArgs};

#[derive(Args, Debug)]
/// Print every record in the store.
///
/// An unreadable or malformed store file is logged and shown as empty.
pub struct ReadArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Print the records as a JSON array instead of a listing.
    #[arg(long)]
    pub json: bool,
}

pub struct Read<'a> {
    pub store: Store,
    pub json: bool,
    pub output: Box<dyn Write + 'a>,
}

impl From<&'_ ReadArgs> for Read<'_> {
    fn from(args: &'_ ReadArgs) -> Self {
        Self {
            store: (&args.store).into(),
            json: args.json,
            output: stdout_writer(),
        }
    }
}

impl Execute for Read<'_> {
    fn execute(&mut self) -> Result<(), CommandError> {
        let records = self.store.read();

        if self.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(crate::store::StoreError::SerializeStore)?;
            return output_line(&mut self.output, json);
        }

        if records.is_empty() {
            return output_line(&mut self.output, "No records.");
        }

        for (index, record) in records.iter().enumerate() {
            write_record(&mut self.output, index, record)?;
        }

        Ok(())
    }
}

fn write_record(
    writer: &mut impl Write,
    index: usize,
    record: &Record,
) -> Result<(), CommandError> {
    output_line(writer, format_args!("[{index}]"))?;
    output_line(writer, format_args!("  name:    {}", record.name))?;
    output_line(writer, format_args!("  email:   {}", record.email))?;
    output_line(writer, format_args!("  phone:   {}", record.phone))?;
    output_line(writer, format_args!("  message: {}", record.message))?;

    for (key, value) in &record.extra {
        match value {
            serde_json::Value::String(s) => output_line(writer, format_args!("  {key}: {s}"))?,
            other => output_line(writer, format_args!("  {key}: {other}"))?,
        }
    }

    Ok(())
}
