use crate::{
    db::departments::{Department, Departments},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    command: Option<DepartmentCommand>,
}

#[derive(Debug, Subcommand)]
enum DepartmentCommand {
    /// Create a new department
    Create {
        /// Department name
        name: String,
    },
    /// List all departments
    List,
    /// Edit a department
    Edit {
        /// Department id
        id: i64,
        /// New department name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete a department
    Delete {
        /// Department id
        id: i64,
    },
}

pub fn cmd(args: DepartmentArgs) -> Result<()> {
    match args.command {
        Some(DepartmentCommand::Create { name }) => handle_create(name),
        Some(DepartmentCommand::List) => handle_list(),
        Some(DepartmentCommand::Edit { id, name }) => handle_edit(id, name),
        Some(DepartmentCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(name: String) -> Result<()> {
    let mut departments = Departments::new()?;

    if departments.get_by_name(&name)?.is_some() {
        msg_error!(Message::DepartmentAlreadyExists(name));
        return Ok(());
    }

    departments.create(&Department::new(name.clone()))?;

    msg_success!(Message::DepartmentCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut departments = Departments::new()?;
    let list = departments.list()?;

    if list.is_empty() {
        msg_info!(Message::NoDepartmentsFound);
        return Ok(());
    }

    msg_print!(Message::DepartmentListHeader, true);
    View::departments(&list)?;
    Ok(())
}

fn handle_edit(id: i64, name: Option<String>) -> Result<()> {
    let mut departments = Departments::new()?;

    let department = match departments.get_by_id(id)? {
        Some(d) => d,
        None => {
            msg_error!(Message::DepartmentNotFound(id.to_string()));
            return Ok(());
        }
    };

    let new_name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDepartmentName.to_string())
            .default(department.name.clone())
            .interact_text()?,
    };

    departments.update(id, &new_name)?;
    msg_success!(Message::DepartmentUpdated(new_name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut departments = Departments::new()?;

    let department = match departments.get_by_id(id)? {
        Some(d) => d,
        None => {
            msg_error!(Message::DepartmentNotFound(id.to_string()));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteDepartment(department.name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        departments.delete(id)?;
        msg_success!(Message::DepartmentDeleted(department.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create department", "List departments", "Edit department", "Delete department"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectDepartmentAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let name = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDepartmentName.to_string())
                .interact_text()?;
            handle_create(name)
        }
        1 => handle_list(),
        2 => match select_department(Message::SelectDepartmentToEdit)? {
            Some(id) => handle_edit(id, None),
            None => Ok(()),
        },
        3 => match select_department(Message::SelectDepartmentToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn select_department(prompt: Message) -> Result<Option<i64>> {
    let mut departments = Departments::new()?;
    let list = departments.list()?;
    if list.is_empty() {
        msg_info!(Message::NoDepartmentsFound);
        return Ok(None);
    }

    let names: Vec<String> = list.iter().map(|d| d.name.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&names)
        .interact()?;

    Ok(list[selection].id)
}
