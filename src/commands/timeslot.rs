use crate::{
    db::timeslots::{TimeSlot, TimeSlots},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveTime;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TimeSlotArgs {
    #[command(subcommand)]
    command: Option<TimeSlotCommand>,
}

#[derive(Debug, Subcommand)]
enum TimeSlotCommand {
    /// Create a new time slot
    Create {
        /// Start time, HH:MM
        start: String,
        /// End time, HH:MM
        end: String,
    },
    /// List all time slots
    List,
    /// Edit a time slot
    Edit {
        /// Time slot id
        id: i64,
        /// New start time, HH:MM
        #[arg(short, long)]
        start: Option<String>,
        /// New end time, HH:MM
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Delete a time slot
    Delete {
        /// Time slot id
        id: i64,
    },
}

pub fn cmd(args: TimeSlotArgs) -> Result<()> {
    match args.command {
        Some(TimeSlotCommand::Create { start, end }) => handle_create(start, end),
        Some(TimeSlotCommand::List) => handle_list(),
        Some(TimeSlotCommand::Edit { id, start, end }) => handle_edit(id, start, end),
        Some(TimeSlotCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn parse_time(value: &str) -> Result<Option<NaiveTime>> {
    match NaiveTime::parse_from_str(value, "%H:%M") {
        Ok(time) => Ok(Some(time)),
        Err(_) => {
            msg_error!(Message::InvalidTime(value.to_string()));
            Ok(None)
        }
    }
}

fn handle_create(start: String, end: String) -> Result<()> {
    let (start, end) = match (parse_time(&start)?, parse_time(&end)?) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(()),
    };

    if end <= start {
        msg_error!(Message::SlotEndBeforeStart);
        return Ok(());
    }

    let mut slots = TimeSlots::new()?;
    let slot = TimeSlot::new(start, end);

    if slots.exists(start, end)? {
        msg_error!(Message::TimeSlotAlreadyExists(slot.to_string()));
        return Ok(());
    }

    slots.create(&slot)?;

    msg_success!(Message::TimeSlotCreated(slot.to_string()));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut slots = TimeSlots::new()?;
    let list = slots.list()?;

    if list.is_empty() {
        msg_info!(Message::NoTimeSlotsFound);
        return Ok(());
    }

    msg_print!(Message::TimeSlotListHeader, true);
    View::timeslots(&list)?;
    Ok(())
}

fn handle_edit(id: i64, start: Option<String>, end: Option<String>) -> Result<()> {
    let mut slots = TimeSlots::new()?;

    let mut slot = match slots.get_by_id(id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::TimeSlotNotFound(id));
            return Ok(());
        }
    };

    let start = match start {
        Some(value) => value,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSlotStart.to_string())
            .default(slot.start_time.format("%H:%M").to_string())
            .interact_text()?,
    };
    let end = match end {
        Some(value) => value,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSlotEnd.to_string())
            .default(slot.end_time.format("%H:%M").to_string())
            .interact_text()?,
    };

    (slot.start_time, slot.end_time) = match (parse_time(&start)?, parse_time(&end)?) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(()),
    };

    if slot.end_time <= slot.start_time {
        msg_error!(Message::SlotEndBeforeStart);
        return Ok(());
    }

    slots.update(id, &slot)?;
    msg_success!(Message::TimeSlotUpdated(slot.to_string()));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut slots = TimeSlots::new()?;

    let slot = match slots.get_by_id(id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::TimeSlotNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTimeSlot(slot.to_string()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        slots.delete(id)?;
        msg_success!(Message::TimeSlotDeleted(slot.to_string()));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create time slot", "List time slots", "Edit time slot", "Delete time slot"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTimeSlotAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let start: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSlotStart.to_string())
                .interact_text()?;
            let end: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSlotEnd.to_string())
                .interact_text()?;
            handle_create(start, end)
        }
        1 => handle_list(),
        2 => match select_timeslot(Message::SelectTimeSlotToEdit)? {
            Some(id) => handle_edit(id, None, None),
            None => Ok(()),
        },
        3 => match select_timeslot(Message::SelectTimeSlotToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

pub(crate) fn select_timeslot(prompt: Message) -> Result<Option<i64>> {
    let mut slots = TimeSlots::new()?;
    let list = slots.list()?;
    if list.is_empty() {
        msg_info!(Message::NoTimeSlotsFound);
        return Ok(None);
    }

    let labels: Vec<String> = list.iter().map(|s| s.to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(list[selection].id)
}
