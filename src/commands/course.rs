use crate::{
    db::courses::{Course, Courses},
    db::departments::Departments,
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct CourseArgs {
    #[command(subcommand)]
    command: Option<CourseCommand>,
}

#[derive(Debug, Subcommand)]
enum CourseCommand {
    /// Create a new course
    Create {
        /// Course name
        name: String,
        /// Course credit, e.g. "3"
        #[arg(short, long)]
        credit: String,
        /// Owning department id
        #[arg(short, long)]
        department: Option<i64>,
    },
    /// List all courses with their departments
    List,
    /// Edit a course
    Edit {
        /// Course id
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New credit
        #[arg(short, long)]
        credit: Option<String>,
        /// New owning department id
        #[arg(short, long)]
        department: Option<i64>,
    },
    /// Delete a course
    Delete {
        /// Course id
        id: i64,
    },
}

pub fn cmd(args: CourseArgs) -> Result<()> {
    match args.command {
        Some(CourseCommand::Create { name, credit, department }) => handle_create(name, credit, department),
        Some(CourseCommand::List) => handle_list(),
        Some(CourseCommand::Edit {
            id,
            name,
            credit,
            department,
        }) => handle_edit(id, name, credit, department),
        Some(CourseCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(name: String, credit: String, department: Option<i64>) -> Result<()> {
    if let Some(department_id) = department {
        if Departments::new()?.get_by_id(department_id)?.is_none() {
            msg_error!(Message::DepartmentNotFound(department_id.to_string()));
            return Ok(());
        }
    }

    let mut courses = Courses::new()?;
    courses.create(&Course::new(name.clone(), credit, department))?;

    msg_success!(Message::CourseCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut courses = Courses::new()?;
    let list = courses.list_detailed()?;

    if list.is_empty() {
        msg_info!(Message::NoCoursesFound);
        return Ok(());
    }

    msg_print!(Message::CourseListHeader, true);
    View::courses(&list)?;
    Ok(())
}

fn handle_edit(id: i64, name: Option<String>, credit: Option<String>, department: Option<i64>) -> Result<()> {
    let mut courses = Courses::new()?;

    let mut course = match courses.get_by_id(id)? {
        Some(c) => c,
        None => {
            msg_error!(Message::CourseNotFound(id.to_string()));
            return Ok(());
        }
    };

    course.name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCourseName.to_string())
            .default(course.name.clone())
            .interact_text()?,
    };

    course.credit = match credit {
        Some(credit) => credit,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCourseCredit.to_string())
            .default(course.credit.clone())
            .interact_text()?,
    };

    if let Some(department_id) = department {
        if Departments::new()?.get_by_id(department_id)?.is_none() {
            msg_error!(Message::DepartmentNotFound(department_id.to_string()));
            return Ok(());
        }
        course.department_id = Some(department_id);
    }

    courses.update(id, &course)?;
    msg_success!(Message::CourseUpdated(course.name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut courses = Courses::new()?;

    let course = match courses.get_by_id(id)? {
        Some(c) => c,
        None => {
            msg_error!(Message::CourseNotFound(id.to_string()));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteCourse(course.name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        courses.delete(id)?;
        msg_success!(Message::CourseDeleted(course.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create course", "List courses", "Edit course", "Delete course"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectCourseAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCourseName.to_string())
                .interact_text()?;
            let credit: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCourseCredit.to_string())
                .interact_text()?;
            let department = select_department_optional()?;
            handle_create(name, credit, department)
        }
        1 => handle_list(),
        2 => match select_course(Message::SelectCourseToEdit)? {
            Some(id) => handle_edit(id, None, None, None),
            None => Ok(()),
        },
        3 => match select_course(Message::SelectCourseToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn select_department_optional() -> Result<Option<i64>> {
    let mut departments = Departments::new()?;
    let list = departments.list()?;
    if list.is_empty() {
        return Ok(None);
    }

    let mut names: Vec<String> = list.iter().map(|d| d.name.clone()).collect();
    names.push("(none)".to_string());
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectDepartment.to_string())
        .items(&names)
        .interact()?;

    if selection == list.len() {
        return Ok(None);
    }
    Ok(list[selection].id)
}

pub(crate) fn select_course(prompt: Message) -> Result<Option<i64>> {
    let mut courses = Courses::new()?;
    let list = courses.list()?;
    if list.is_empty() {
        msg_info!(Message::NoCoursesFound);
        return Ok(None);
    }

    let labels: Vec<String> = list.iter().map(|c| c.name.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(list[selection].id)
}
