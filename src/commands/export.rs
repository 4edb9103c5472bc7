//! Exporting records to CSV, JSON, or Excel files.

use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum)]
    data: Option<ExportData>,
    /// Output format
    #[arg(long, short, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path, defaults to a timestamped name in the current directory
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let data = match args.data {
        Some(data) => data,
        None => match select_data()? {
            Some(data) => data,
            None => return Ok(()),
        },
    };

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(data)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}

fn select_data() -> Result<Option<ExportData>> {
    let options = [
        ("Students", ExportData::Students),
        ("Courses", ExportData::Courses),
        ("Enrollments", ExportData::Enrollments),
        ("Class schedules", ExportData::Schedules),
    ];
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectExportData.to_string())
        .items(&labels)
        .interact()?;

    Ok(Some(options[selection].1))
}
