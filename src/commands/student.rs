use crate::{
    db::students::{Student, Students},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    command: Option<StudentCommand>,
}

#[derive(Debug, Subcommand)]
enum StudentCommand {
    /// Create a new student
    Create {
        /// Student name
        name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(short, long)]
        dob: String,
        /// Student email, must be unique
        #[arg(short, long)]
        email: String,
    },
    /// List all students
    List,
    /// Edit a student
    Edit {
        /// Student id
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New date of birth, YYYY-MM-DD
        #[arg(short, long)]
        dob: Option<String>,
        /// New email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a student
    Delete {
        /// Student id
        id: i64,
    },
}

pub fn cmd(args: StudentArgs) -> Result<()> {
    match args.command {
        Some(StudentCommand::Create { name, dob, email }) => handle_create(name, dob, email),
        Some(StudentCommand::List) => handle_list(),
        Some(StudentCommand::Edit { id, name, dob, email }) => handle_edit(id, name, dob, email),
        Some(StudentCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn parse_dob(value: &str) -> Result<Option<NaiveDate>> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            msg_error!(Message::InvalidDate(value.to_string()));
            Ok(None)
        }
    }
}

fn handle_create(name: String, dob: String, email: String) -> Result<()> {
    let mut students = Students::new()?;

    let dob = match parse_dob(&dob)? {
        Some(date) => date,
        None => return Ok(()),
    };

    if students.get_by_email(&email)?.is_some() {
        msg_error!(Message::StudentEmailExists(email));
        return Ok(());
    }

    students.create(&Student::new(name.clone(), dob, email))?;

    msg_success!(Message::StudentCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut students = Students::new()?;
    let list = students.list()?;

    if list.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }

    msg_print!(Message::StudentListHeader, true);
    View::students(&list)?;
    Ok(())
}

fn handle_edit(id: i64, name: Option<String>, dob: Option<String>, email: Option<String>) -> Result<()> {
    let mut students = Students::new()?;

    let mut student = match students.get_by_id(id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::StudentNotFound(id.to_string()));
            return Ok(());
        }
    };

    student.name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStudentName.to_string())
            .default(student.name.clone())
            .interact_text()?,
    };

    let dob = match dob {
        Some(value) => value,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStudentDob.to_string())
            .default(student.dob.to_string())
            .interact_text()?,
    };
    student.dob = match parse_dob(&dob)? {
        Some(date) => date,
        None => return Ok(()),
    };

    student.email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStudentEmail.to_string())
            .default(student.email.clone())
            .interact_text()?,
    };

    students.update(id, &student)?;
    msg_success!(Message::StudentUpdated(student.name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut students = Students::new()?;

    let student = match students.get_by_id(id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::StudentNotFound(id.to_string()));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteStudent(student.name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        students.delete(id)?;
        msg_success!(Message::StudentDeleted(student.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create student", "List students", "Edit student", "Delete student"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectStudentAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStudentName.to_string())
                .interact_text()?;
            let dob: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStudentDob.to_string())
                .interact_text()?;
            let email: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStudentEmail.to_string())
                .interact_text()?;
            handle_create(name, dob, email)
        }
        1 => handle_list(),
        2 => match select_student(Message::SelectStudentToEdit)? {
            Some(id) => handle_edit(id, None, None, None),
            None => Ok(()),
        },
        3 => match select_student(Message::SelectStudentToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

pub(crate) fn select_student(prompt: Message) -> Result<Option<i64>> {
    let mut students = Students::new()?;
    let list = students.list()?;
    if list.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(None);
    }

    let labels: Vec<String> = list.iter().map(|s| format!("{} <{}>", s.name, s.email)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(list[selection].id)
}
