use crate::{
    commands::{course::select_course, student::select_student},
    db::enrollments::{Enrollment, Enrollments},
    db::students::Students,
    libs::{config::Config, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct EnrollmentArgs {
    #[command(subcommand)]
    command: Option<EnrollmentCommand>,
}

#[derive(Debug, Subcommand)]
enum EnrollmentCommand {
    /// Enroll a student in a course
    Create {
        /// Student id
        #[arg(short, long)]
        student: i64,
        /// Course id
        #[arg(short, long)]
        course: i64,
        /// Semester, e.g. "2026-FALL"; defaults to the configured semester
        #[arg(long)]
        semester: Option<String>,
        /// Grade; defaults to "-" until recorded
        #[arg(short, long)]
        grade: Option<String>,
    },
    /// List all enrollments
    List,
    /// List enrollments of one student
    Student {
        /// Student id
        id: i64,
    },
    /// Edit an enrollment
    Edit {
        /// Enrollment id
        id: i64,
        /// New student id
        #[arg(short, long)]
        student: Option<i64>,
        /// New course id
        #[arg(short, long)]
        course: Option<i64>,
        /// New semester
        #[arg(long)]
        semester: Option<String>,
        /// New grade
        #[arg(short, long)]
        grade: Option<String>,
    },
    /// Record or change a grade
    Grade {
        /// Enrollment id
        id: i64,
        /// Grade value, e.g. "A"
        grade: String,
    },
    /// Delete an enrollment
    Delete {
        /// Enrollment id
        id: i64,
    },
}

pub fn cmd(args: EnrollmentArgs) -> Result<()> {
    match args.command {
        Some(EnrollmentCommand::Create {
            student,
            course,
            semester,
            grade,
        }) => handle_create(student, course, semester, grade),
        Some(EnrollmentCommand::List) => handle_list(),
        Some(EnrollmentCommand::Student { id }) => handle_list_by_student(id),
        Some(EnrollmentCommand::Edit {
            id,
            student,
            course,
            semester,
            grade,
        }) => handle_edit(id, student, course, semester, grade),
        Some(EnrollmentCommand::Grade { id, grade }) => handle_grade(id, grade),
        Some(EnrollmentCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(student_id: i64, course_id: i64, semester: Option<String>, grade: Option<String>) -> Result<()> {
    let semester = match semester.or(Config::read()?.default_semester) {
        Some(semester) => semester,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSemester.to_string())
            .interact_text()?,
    };
    let grade = grade.unwrap_or_else(|| "-".to_string());

    let mut enrollments = Enrollments::new()?;

    if enrollments.exists(student_id, course_id, &semester)? {
        msg_warning!(Message::EnrollmentAlreadyExists(semester));
        return Ok(());
    }

    enrollments.create(&Enrollment::new(student_id, course_id, semester, grade))?;

    msg_success!(Message::EnrollmentCreated);
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut enrollments = Enrollments::new()?;
    let list = enrollments.list_detailed()?;

    if list.is_empty() {
        msg_info!(Message::NoEnrollmentsFound);
        return Ok(());
    }

    msg_print!(Message::EnrollmentListHeader, true);
    View::enrollments(&list)?;
    Ok(())
}

fn handle_list_by_student(student_id: i64) -> Result<()> {
    let mut students = Students::new()?;
    let student = match students.get_by_id(student_id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::StudentNotFound(student_id.to_string()));
            return Ok(());
        }
    };

    let mut enrollments = Enrollments::new()?;
    let list = enrollments.list_by_student(student_id)?;

    if list.is_empty() {
        msg_info!(Message::NoEnrollmentsFound);
        return Ok(());
    }

    // Filter the joined view down to this student's rows so names render.
    let detailed = enrollments.list_detailed()?;
    let ids: Vec<i64> = list.iter().filter_map(|e| e.id).collect();
    let rows: Vec<_> = detailed.into_iter().filter(|d| ids.contains(&d.id)).collect();

    msg_print!(Message::EnrollmentsForStudent(student.name), true);
    View::enrollments(&rows)?;
    Ok(())
}

fn handle_edit(id: i64, student: Option<i64>, course: Option<i64>, semester: Option<String>, grade: Option<String>) -> Result<()> {
    let mut enrollments = Enrollments::new()?;

    let mut enrollment = match enrollments.get_by_id(id)? {
        Some(e) => e,
        None => {
            msg_error!(Message::EnrollmentNotFound(id));
            return Ok(());
        }
    };

    if let Some(student_id) = student {
        enrollment.student_id = student_id;
    }
    if let Some(course_id) = course {
        enrollment.course_id = course_id;
    }
    if let Some(semester) = semester {
        enrollment.semester = semester;
    }
    if let Some(grade) = grade {
        enrollment.grade = grade;
    }

    enrollments.update(id, &enrollment)?;
    msg_success!(Message::EnrollmentUpdated(id));
    Ok(())
}

fn handle_grade(id: i64, grade: String) -> Result<()> {
    let mut enrollments = Enrollments::new()?;

    if enrollments.get_by_id(id)?.is_none() {
        msg_error!(Message::EnrollmentNotFound(id));
        return Ok(());
    }

    enrollments.update_grade(id, &grade)?;
    msg_success!(Message::GradeUpdated(id, grade));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut enrollments = Enrollments::new()?;

    if enrollments.get_by_id(id)?.is_none() {
        msg_error!(Message::EnrollmentNotFound(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteEnrollment(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        enrollments.delete(id)?;
        msg_success!(Message::EnrollmentDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Enroll student", "List enrollments", "Record grade", "Delete enrollment"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectEnrollmentAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let student = match select_student(Message::SelectStudent)? {
                Some(id) => id,
                None => return Ok(()),
            };
            let course = match select_course(Message::SelectCourse)? {
                Some(id) => id,
                None => return Ok(()),
            };
            let semester: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSemester.to_string())
                .default(Config::read()?.default_semester.unwrap_or_default())
                .interact_text()?;
            let grade: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGrade.to_string())
                .default("-".to_string())
                .interact_text()?;
            handle_create(student, course, Some(semester), Some(grade))
        }
        1 => handle_list(),
        2 => {
            let id: String = Input::with_theme(&ColorfulTheme::default()).with_prompt("Enrollment id").interact_text()?;
            let id: i64 = match id.parse() {
                Ok(id) => id,
                Err(_) => {
                    msg_error!(Message::InvalidId(id));
                    return Ok(());
                }
            };
            let grade: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGrade.to_string())
                .interact_text()?;
            handle_grade(id, grade)
        }
        3 => {
            let id: String = Input::with_theme(&ColorfulTheme::default()).with_prompt("Enrollment id").interact_text()?;
            match id.parse() {
                Ok(id) => handle_delete(id),
                Err(_) => {
                    msg_error!(Message::InvalidId(id));
                    Ok(())
                }
            }
        }
        _ => Ok(()),
    }
}
