use anyhow::Result;

fn main() -> Result<()> {
    folio_cli::main_entry()
}
