use crate::{
    db::teachers::{Teacher, Teachers},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TeacherArgs {
    #[command(subcommand)]
    command: Option<TeacherCommand>,
}

#[derive(Debug, Subcommand)]
enum TeacherCommand {
    /// Create a new teacher
    Create {
        /// Teacher name
        name: String,
        /// Teacher email, must be unique
        #[arg(short, long)]
        email: String,
    },
    /// List all teachers
    List,
    /// Edit a teacher
    Edit {
        /// Teacher id
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a teacher
    Delete {
        /// Teacher id
        id: i64,
    },
}

pub fn cmd(args: TeacherArgs) -> Result<()> {
    match args.command {
        Some(TeacherCommand::Create { name, email }) => handle_create(name, email),
        Some(TeacherCommand::List) => handle_list(),
        Some(TeacherCommand::Edit { id, name, email }) => handle_edit(id, name, email),
        Some(TeacherCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(name: String, email: String) -> Result<()> {
    let mut teachers = Teachers::new()?;

    if teachers.get_by_email(&email)?.is_some() {
        msg_error!(Message::TeacherEmailExists(email));
        return Ok(());
    }

    teachers.create(&Teacher::new(name.clone(), email))?;

    msg_success!(Message::TeacherCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut teachers = Teachers::new()?;
    let list = teachers.list()?;

    if list.is_empty() {
        msg_info!(Message::NoTeachersFound);
        return Ok(());
    }

    msg_print!(Message::TeacherListHeader, true);
    View::teachers(&list)?;
    Ok(())
}

fn handle_edit(id: i64, name: Option<String>, email: Option<String>) -> Result<()> {
    let mut teachers = Teachers::new()?;

    let mut teacher = match teachers.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_error!(Message::TeacherNotFound(id.to_string()));
            return Ok(());
        }
    };

    teacher.name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTeacherName.to_string())
            .default(teacher.name.clone())
            .interact_text()?,
    };

    teacher.email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTeacherEmail.to_string())
            .default(teacher.email.clone())
            .interact_text()?,
    };

    teachers.update(id, &teacher)?;
    msg_success!(Message::TeacherUpdated(teacher.name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut teachers = Teachers::new()?;

    let teacher = match teachers.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_error!(Message::TeacherNotFound(id.to_string()));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTeacher(teacher.name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        teachers.delete(id)?;
        msg_success!(Message::TeacherDeleted(teacher.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create teacher", "List teachers", "Edit teacher", "Delete teacher"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTeacherAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTeacherName.to_string())
                .interact_text()?;
            let email: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTeacherEmail.to_string())
                .interact_text()?;
            handle_create(name, email)
        }
        1 => handle_list(),
        2 => match select_teacher(Message::SelectTeacherToEdit)? {
            Some(id) => handle_edit(id, None, None),
            None => Ok(()),
        },
        3 => match select_teacher(Message::SelectTeacherToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

pub(crate) fn select_teacher(prompt: Message) -> Result<Option<i64>> {
    let mut teachers = Teachers::new()?;
    let list = teachers.list()?;
    if list.is_empty() {
        msg_info!(Message::NoTeachersFound);
        return Ok(None);
    }

    let labels: Vec<String> = list.iter().map(|t| format!("{} <{}>", t.name, t.email)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(list[selection].id)
}
