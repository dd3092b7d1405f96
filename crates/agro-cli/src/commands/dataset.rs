use serde_json::{Map, Value};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::DatasetArgs;
use crate::context::AppContext;
use crate::output::{output, table, table_options};

/// Handle `agro dataset`.
pub fn handle(args: &DatasetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dataset = ctx.dataset(args.path.as_deref())?;
    match flags.format {
        OutputFormat::Raw => {
            println!("{}", dataset.as_prompt_text());
            Ok(())
        }
        OutputFormat::Table => {
            let headers: Vec<&str> = dataset.headers().iter().map(String::as_str).collect();
            println!("{}", table::render_table(&headers, dataset.rows(), table_options()));
            Ok(())
        }
        OutputFormat::Json => {
            let records: Vec<Value> = dataset
                .rows()
                .iter()
                .map(|row| {
                    let map: Map<String, Value> = dataset
                        .headers()
                        .iter()
                        .cloned()
                        .zip(row.iter().cloned().map(Value::String))
                        .collect();
                    Value::Object(map)
                })
                .collect();
            output(&records, flags.format)
        }
    }
}
