pub mod course;
pub mod department;
pub mod enrollment;
pub mod export;
pub mod init;
pub mod migrations;
pub mod room;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod timeslot;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage departments")]
    Department(department::DepartmentArgs),
    #[command(about = "Manage students")]
    Student(student::StudentArgs),
    #[command(about = "Manage teachers")]
    Teacher(teacher::TeacherArgs),
    #[command(about = "Manage courses")]
    Course(course::CourseArgs),
    #[command(about = "Manage enrollments")]
    Enrollment(enrollment::EnrollmentArgs),
    #[command(about = "Manage rooms")]
    Room(room::RoomArgs),
    #[command(about = "Manage time slots")]
    Timeslot(timeslot::TimeSlotArgs),
    #[command(about = "Manage class schedules and check conflicts")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "Export records to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        // Route messages through tracing when debug mode is active.
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Department(args) => department::cmd(args),
            Commands::Student(args) => student::cmd(args),
            Commands::Teacher(args) => teacher::cmd(args),
            Commands::Course(args) => course::cmd(args),
            Commands::Enrollment(args) => enrollment::cmd(args),
            Commands::Room(args) => room::cmd(args),
            Commands::Timeslot(args) => timeslot::cmd(args),
            Commands::Schedule(args) => schedule::cmd(args),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
