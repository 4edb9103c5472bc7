use cams::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
