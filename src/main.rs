use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use typetest::core::schema;
use typetest::{AppConfig, FixtureProcedure, GenericTable, INSERT_TYPETEST, MemoryExecutor, TableAdapter};

/// Insert one typetest row and show what was stored
#[derive(Parser, Debug)]
#[command(name = "typetest")]
#[command(about = "Bind and insert a typetest row (canonical fixture or first row of a JSON table)", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "TYPETEST_CONFIG")]
    config: Option<PathBuf>,

    /// JSON table whose first row is inserted instead of the fixture
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Print the bound INSERT statement for each stored row
    #[arg(long)]
    sql: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    let mut executor = MemoryExecutor::new(config.executor.clone());

    let code = if let Some(path) = &args.table {
        tracing::info!(path = %path.display(), "loading table");
        let mut table: GenericTable = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        TableAdapter::new(&mut executor).bind_and_insert_from_table(&mut table)?
    } else {
        tracing::info!("inserting canonical fixture");
        FixtureProcedure::new(&mut executor).run(0)?
    };
    tracing::info!(code, rows = executor.len(), "insert complete");

    let mut output = Table::new();
    output
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(schema::COLUMNS.iter().map(|(name, _)| *name));
    for row in executor.rows() {
        output.add_row(row.iter().map(typetest::Value::to_display_string));
    }
    println!("{output}");

    if args.sql {
        for row in executor.rows() {
            println!("{}", INSERT_TYPETEST.render(row));
        }
    }

    Ok(())
}
