use crate::{
    db::rooms::{Room, Rooms},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct RoomArgs {
    #[command(subcommand)]
    command: Option<RoomCommand>,
}

#[derive(Debug, Subcommand)]
enum RoomCommand {
    /// Create a new room
    Create {
        /// Room number, must be unique
        number: String,
        /// Seating capacity
        #[arg(short, long, default_value_t = 30)]
        capacity: i64,
    },
    /// List all rooms
    List,
    /// Edit a room
    Edit {
        /// Room id
        id: i64,
        /// New room number
        #[arg(short, long)]
        number: Option<String>,
        /// New capacity
        #[arg(short, long)]
        capacity: Option<i64>,
    },
    /// Delete a room
    Delete {
        /// Room id
        id: i64,
    },
}

pub fn cmd(args: RoomArgs) -> Result<()> {
    match args.command {
        Some(RoomCommand::Create { number, capacity }) => handle_create(number, capacity),
        Some(RoomCommand::List) => handle_list(),
        Some(RoomCommand::Edit { id, number, capacity }) => handle_edit(id, number, capacity),
        Some(RoomCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(number: String, capacity: i64) -> Result<()> {
    let mut rooms = Rooms::new()?;

    if rooms.get_by_number(&number)?.is_some() {
        msg_error!(Message::RoomNumberExists(number));
        return Ok(());
    }

    rooms.create(&Room::new(number.clone(), capacity))?;

    msg_success!(Message::RoomCreated(number));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut rooms = Rooms::new()?;
    let list = rooms.list()?;

    if list.is_empty() {
        msg_info!(Message::NoRoomsFound);
        return Ok(());
    }

    msg_print!(Message::RoomListHeader, true);
    View::rooms(&list)?;
    Ok(())
}

fn handle_edit(id: i64, number: Option<String>, capacity: Option<i64>) -> Result<()> {
    let mut rooms = Rooms::new()?;

    let mut room = match rooms.get_by_id(id)? {
        Some(r) => r,
        None => {
            msg_error!(Message::RoomNotFound(id.to_string()));
            return Ok(());
        }
    };

    room.room_number = match number {
        Some(number) => number,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRoomNumber.to_string())
            .default(room.room_number.clone())
            .interact_text()?,
    };

    room.capacity = match capacity {
        Some(capacity) => capacity,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRoomCapacity.to_string())
            .default(room.capacity)
            .interact_text()?,
    };

    rooms.update(id, &room)?;
    msg_success!(Message::RoomUpdated(room.room_number));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut rooms = Rooms::new()?;

    let room = match rooms.get_by_id(id)? {
        Some(r) => r,
        None => {
            msg_error!(Message::RoomNotFound(id.to_string()));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteRoom(room.room_number.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        rooms.delete(id)?;
        msg_success!(Message::RoomDeleted(room.room_number));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create room", "List rooms", "Edit room", "Delete room"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectRoomAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let number: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRoomNumber.to_string())
                .interact_text()?;
            let capacity: i64 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRoomCapacity.to_string())
                .default(30)
                .interact_text()?;
            handle_create(number, capacity)
        }
        1 => handle_list(),
        2 => match select_room(Message::SelectRoomToEdit)? {
            Some(id) => handle_edit(id, None, None),
            None => Ok(()),
        },
        3 => match select_room(Message::SelectRoomToDelete)? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

pub(crate) fn select_room(prompt: Message) -> Result<Option<i64>> {
    let mut rooms = Rooms::new()?;
    let list = rooms.list()?;
    if list.is_empty() {
        msg_info!(Message::NoRoomsFound);
        return Ok(None);
    }

    let labels: Vec<String> = list.iter().map(|r| format!("{} (capacity {})", r.room_number, r.capacity)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(list[selection].id)
}
