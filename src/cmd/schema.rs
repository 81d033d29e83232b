//! Schema command - print the JSON Schema of the result document

use crate::tax::RegimeResult;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = schema_for!(RegimeResult);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
