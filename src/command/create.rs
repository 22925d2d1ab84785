use std::io::Write;

use clap::Args;

use crate::store::{Record, Store};

use super::{output_line, stdout_writer, CommandError, Execute, StoreArgs};

#[derive(Args, Debug)]
/// Append a new record to the store.
pub struct CreateArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Name of the user.
    #[arg(long)]
    pub name: String,

    /// Email address of the user.
    #[arg(long)]
    pub email: String,

    /// Phone number of the user.
    #[arg(long)]
    pub phone: String,

    /// Message left by the user.
    #[arg(long)]
    pub message: String,
}

pub struct Create<'a> {
    pub store: Store,
    pub record: Record,
    pub output: Box<dyn Write + 'a>,
}

impl From<&'_ CreateArgs> for Create<'_> {
    fn from(args: &'_ CreateArgs) -> Self {
        Self {
            store: (&args.store).into(),
            record: Record::new(
                args.name.as_str(),
                args.email.as_str(),
                args.phone.as_str(),
                args.message.as_str(),
            ),
            output: stdout_writer(),
        }
    }
}

impl Execute for Create<'_> {
    fn execute(&mut self) -> Result<(), CommandError> {
        let index = self.store.create(self.record.clone())?;
        output_line(&mut self.output, format_args!("Record created at index {index}."))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::{CommandError, Execute},
        store::{Record, Store, StoreError},
    };

    use super::Create;

    #[test]
    fn appends_and_confirms() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("records.json"));
        store.save(&[Record::new("A", "B", "C", "D")]).unwrap();

        let mut output_vector: Vec<u8> = vec![];
        let mut c = Create {
            store: store.clone(),
            record: Record::new("Ana", "ana@x.com", "555", "Hi"),
            output: Box::new(&mut output_vector),
        };

        c.execute().unwrap();
        drop(c);

        assert_eq!(
            String::from_utf8(output_vector).unwrap(),
            "Record created at index 1.\n"
        );
        assert_eq!(
            store.load().unwrap(),
            vec![
                Record::new("A", "B", "C", "D"),
                Record::new("Ana", "ana@x.com", "555", "Hi"),
            ]
        );
    }

    #[test]
    fn malformed_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("records.json"));
        std::fs::write(store.path(), "not json").unwrap();

        let mut output_vector: Vec<u8> = vec![];
        let mut c = Create {
            store,
            record: Record::new("Ana", "ana@x.com", "555", "Hi"),
            output: Box::new(&mut output_vector),
        };

        assert!(c.execute().is_err());
        drop(c);

        assert!(output_vector.is_empty());
    }

    #[test]
    fn failed_save_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("missing").join("records.json"));

        let mut output_vector: Vec<u8> = vec![];
        let mut c = Create {
            store: store.clone(),
            record: Record::new("Ana", "ana@x.com", "555", "Hi"),
            output: Box::new(&mut output_vector),
        };

        let result = c.execute();
        drop(c);

        assert!(matches!(
            result,
            Err(CommandError::Store(StoreError::WriteStore(..)))
        ));
        assert!(output_vector.is_empty());
        assert!(!store.path().exists());
    }
}
