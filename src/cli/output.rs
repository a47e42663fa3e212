use crate::{prelude::*, snapshot::Snapshot, tables::build_snapshot_table};

#[derive(Copy, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,

    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    pub fn print(self, snapshot: &Snapshot) -> Result {
        match self {
            Self::Table => println!("{}", build_snapshot_table(snapshot)),
            Self::Json => println!("{}", serde_json::to_string(snapshot)?),
        }
        Ok(())
    }
}
