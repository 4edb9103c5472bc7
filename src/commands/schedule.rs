//! Class schedule management.
//!
//! `add` and `edit` run the room/teacher exclusivity checks inside the
//! writing transaction; `check` answers the same question without writing
//! anything, so a registrar can probe an assignment before committing to it.

use crate::{
    commands::{course::select_course, room::select_room, teacher::select_teacher, timeslot::select_timeslot},
    db::schedules::Schedules,
    libs::{
        messages::Message,
        schedule::{Assignment, ClassSchedule, Conflict},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    command: Option<ScheduleCommand>,
}

#[derive(Debug, Subcommand)]
enum ScheduleCommand {
    /// Schedule a class: course, teacher, time slot and room together
    Add {
        /// Course id
        #[arg(long)]
        course: i64,
        /// Teacher id
        #[arg(long)]
        teacher: i64,
        /// Time slot id
        #[arg(long)]
        timeslot: i64,
        /// Room id
        #[arg(long)]
        room: i64,
    },
    /// List all class schedules
    List,
    /// Edit a class schedule
    Edit {
        /// Schedule id
        id: i64,
        /// New course id
        #[arg(long)]
        course: Option<i64>,
        /// New teacher id
        #[arg(long)]
        teacher: Option<i64>,
        /// New time slot id
        #[arg(long)]
        timeslot: Option<i64>,
        /// New room id
        #[arg(long)]
        room: Option<i64>,
    },
    /// Delete a class schedule
    Delete {
        /// Schedule id
        id: i64,
    },
    /// Check a candidate assignment for conflicts without writing it
    Check {
        /// Course id
        #[arg(long)]
        course: i64,
        /// Teacher id
        #[arg(long)]
        teacher: i64,
        /// Time slot id
        #[arg(long)]
        timeslot: i64,
        /// Room id
        #[arg(long)]
        room: i64,
        /// Schedule id to exclude, as an update would
        #[arg(long)]
        exclude: Option<i64>,
    },
}

pub fn cmd(args: ScheduleArgs) -> Result<()> {
    match args.command {
        Some(ScheduleCommand::Add {
            course,
            teacher,
            timeslot,
            room,
        }) => handle_add(ClassSchedule::new(course, teacher, timeslot, room)),
        Some(ScheduleCommand::List) => handle_list(),
        Some(ScheduleCommand::Edit {
            id,
            course,
            teacher,
            timeslot,
            room,
        }) => handle_edit(id, course, teacher, timeslot, room),
        Some(ScheduleCommand::Delete { id }) => handle_delete(id),
        Some(ScheduleCommand::Check {
            course,
            teacher,
            timeslot,
            room,
            exclude,
        }) => handle_check(
            Assignment {
                course_id: course,
                teacher_id: teacher,
                timeslot_id: timeslot,
                room_id: room,
            },
            exclude,
        ),
        None => handle_interactive(),
    }
}

/// Prints the user-recoverable conflict reason, or propagates anything that
/// is not a conflict (including a storage-level uniqueness violation).
fn report_conflict(error: anyhow::Error) -> Result<()> {
    match error.downcast_ref::<Conflict>() {
        Some(Conflict::Room) => {
            msg_error!(Message::RoomConflict);
            Ok(())
        }
        Some(Conflict::Teacher) => {
            msg_error!(Message::TeacherConflict);
            Ok(())
        }
        None => Err(error),
    }
}

fn handle_add(schedule: ClassSchedule) -> Result<()> {
    let mut schedules = Schedules::new()?;

    match schedules.insert_checked(&schedule) {
        Ok(id) => {
            msg_success!(Message::ScheduleCreated(id));
            Ok(())
        }
        Err(error) => report_conflict(error),
    }
}

fn handle_list() -> Result<()> {
    let mut schedules = Schedules::new()?;
    let list = schedules.list_detailed()?;

    if list.is_empty() {
        msg_info!(Message::NoSchedulesFound);
        return Ok(());
    }

    msg_print!(Message::ScheduleListHeader, true);
    View::schedules(&list)?;
    Ok(())
}

fn handle_edit(id: i64, course: Option<i64>, teacher: Option<i64>, timeslot: Option<i64>, room: Option<i64>) -> Result<()> {
    let mut schedules = Schedules::new()?;

    let mut schedule = match schedules.get_by_id(id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::ScheduleNotFound(id));
            return Ok(());
        }
    };

    if let Some(course_id) = course {
        schedule.course_id = course_id;
    }
    if let Some(teacher_id) = teacher {
        schedule.teacher_id = teacher_id;
    }
    if let Some(timeslot_id) = timeslot {
        schedule.timeslot_id = timeslot_id;
    }
    if let Some(room_id) = room {
        schedule.room_id = room_id;
    }

    match schedules.update_checked(id, &schedule) {
        Ok(()) => {
            msg_success!(Message::ScheduleUpdated(id));
            Ok(())
        }
        Err(error) => report_conflict(error),
    }
}

fn handle_delete(id: i64) -> Result<()> {
    let mut schedules = Schedules::new()?;

    if schedules.get_by_id(id)?.is_none() {
        msg_error!(Message::ScheduleNotFound(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteSchedule(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        schedules.delete(id)?;
        msg_success!(Message::ScheduleDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_check(candidate: Assignment, exclude: Option<i64>) -> Result<()> {
    let mut schedules = Schedules::new()?;

    match schedules.check(&candidate, exclude)? {
        None => msg_success!(Message::NoScheduleConflict),
        Some(Conflict::Room) => msg_error!(Message::RoomConflict),
        Some(Conflict::Teacher) => msg_error!(Message::TeacherConflict),
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Add class schedule", "List class schedules", "Edit class schedule", "Delete class schedule"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectScheduleAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let parts = select_assignment()?;
            match parts {
                Some(schedule) => handle_add(schedule),
                None => Ok(()),
            }
        }
        1 => handle_list(),
        2 => match select_schedule(Message::SelectScheduleToEdit)? {
            Some(id) => match select_assignment()? {
                Some(schedule) => handle_edit(id, Some(schedule.course_id), Some(schedule.teacher_id), Some(schedule.timeslot_id), Some(schedule.room_id)),
                None => Ok(()),
            },
            None => Ok(()),
        },
        3 => match select_schedule(Message::SelectScheduleToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn select_assignment() -> Result<Option<ClassSchedule>> {
    let course = match select_course(Message::SelectCourse)? {
        Some(id) => id,
        None => return Ok(None),
    };
    let teacher = match select_teacher(Message::SelectTeacher)? {
        Some(id) => id,
        None => return Ok(None),
    };
    let timeslot = match select_timeslot(Message::SelectTimeSlot)? {
        Some(id) => id,
        None => return Ok(None),
    };
    let room = match select_room(Message::SelectRoom)? {
        Some(id) => id,
        None => return Ok(None),
    };

    Ok(Some(ClassSchedule::new(course, teacher, timeslot, room)))
}

fn select_schedule(prompt: Message) -> Result<Option<i64>> {
    let mut schedules = Schedules::new()?;
    let list = schedules.list_detailed()?;
    if list.is_empty() {
        msg_info!(Message::NoSchedulesFound);
        return Ok(None);
    }

    let labels: Vec<String> = list
        .iter()
        .map(|s| format!("#{} {} / {} / {} / room {}", s.id, s.course, s.teacher, s.timeslot, s.room))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(Some(list[selection].id))
}
