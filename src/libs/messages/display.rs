//! Display implementation for cams application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum, turning
//! structured message data into human-readable text for terminal output. All
//! user-facing wording lives here so command modules never hard-code strings.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DEPARTMENT MESSAGES ===
            Message::DepartmentCreated(name) => format!("Department '{}' created", name),
            Message::DepartmentUpdated(name) => format!("Department '{}' updated", name),
            Message::DepartmentDeleted(name) => format!("Department '{}' deleted", name),
            Message::DepartmentNotFound(ident) => format!("Department '{}' not found", ident),
            Message::DepartmentAlreadyExists(name) => format!("Department '{}' already exists", name),
            Message::NoDepartmentsFound => "No departments found".to_string(),
            Message::DepartmentListHeader => "🏛️ Departments".to_string(),
            Message::ConfirmDeleteDepartment(name) => format!("Delete department '{}'?", name),
            Message::SelectDepartmentAction => "What would you like to do?".to_string(),
            Message::SelectDepartment => "Select department".to_string(),
            Message::SelectDepartmentToEdit => "Select department to edit".to_string(),
            Message::SelectDepartmentToDelete => "Select department to delete".to_string(),
            Message::PromptDepartmentName => "Department name".to_string(),

            // === STUDENT MESSAGES ===
            Message::StudentCreated(name) => format!("Student '{}' created", name),
            Message::StudentUpdated(name) => format!("Student '{}' updated", name),
            Message::StudentDeleted(name) => format!("Student '{}' deleted", name),
            Message::StudentNotFound(ident) => format!("Student '{}' not found", ident),
            Message::StudentEmailExists(email) => format!("A student with email '{}' already exists", email),
            Message::NoStudentsFound => "No students found".to_string(),
            Message::StudentListHeader => "🎓 Students".to_string(),
            Message::ConfirmDeleteStudent(name) => format!("Delete student '{}'?", name),
            Message::SelectStudentAction => "What would you like to do?".to_string(),
            Message::SelectStudent => "Select student".to_string(),
            Message::SelectStudentToEdit => "Select student to edit".to_string(),
            Message::SelectStudentToDelete => "Select student to delete".to_string(),
            Message::PromptStudentName => "Student name".to_string(),
            Message::PromptStudentDob => "Date of birth (YYYY-MM-DD)".to_string(),
            Message::PromptStudentEmail => "Student email".to_string(),
            Message::InvalidDate(value) => format!("'{}' is not a valid date, expected YYYY-MM-DD", value),

            // === TEACHER MESSAGES ===
            Message::TeacherCreated(name) => format!("Teacher '{}' created", name),
            Message::TeacherUpdated(name) => format!("Teacher '{}' updated", name),
            Message::TeacherDeleted(name) => format!("Teacher '{}' deleted", name),
            Message::TeacherNotFound(ident) => format!("Teacher '{}' not found", ident),
            Message::TeacherEmailExists(email) => format!("A teacher with email '{}' already exists", email),
            Message::NoTeachersFound => "No teachers found".to_string(),
            Message::TeacherListHeader => "👩‍🏫 Teachers".to_string(),
            Message::ConfirmDeleteTeacher(name) => format!("Delete teacher '{}'?", name),
            Message::SelectTeacherAction => "What would you like to do?".to_string(),
            Message::SelectTeacher => "Select teacher".to_string(),
            Message::SelectTeacherToEdit => "Select teacher to edit".to_string(),
            Message::SelectTeacherToDelete => "Select teacher to delete".to_string(),
            Message::PromptTeacherName => "Teacher name".to_string(),
            Message::PromptTeacherEmail => "Teacher email".to_string(),

            // === COURSE MESSAGES ===
            Message::CourseCreated(name) => format!("Course '{}' created", name),
            Message::CourseUpdated(name) => format!("Course '{}' updated", name),
            Message::CourseDeleted(name) => format!("Course '{}' deleted", name),
            Message::CourseNotFound(ident) => format!("Course '{}' not found", ident),
            Message::NoCoursesFound => "No courses found".to_string(),
            Message::CourseListHeader => "📚 Courses".to_string(),
            Message::ConfirmDeleteCourse(name) => format!("Delete course '{}'?", name),
            Message::SelectCourseAction => "What would you like to do?".to_string(),
            Message::SelectCourse => "Select course".to_string(),
            Message::SelectCourseToEdit => "Select course to edit".to_string(),
            Message::SelectCourseToDelete => "Select course to delete".to_string(),
            Message::PromptCourseName => "Course name".to_string(),
            Message::PromptCourseCredit => "Course credit".to_string(),

            // === ENROLLMENT MESSAGES ===
            Message::EnrollmentCreated => "Enrollment created".to_string(),
            Message::EnrollmentUpdated(id) => format!("Enrollment #{} updated", id),
            Message::EnrollmentDeleted(id) => format!("Enrollment #{} deleted", id),
            Message::EnrollmentNotFound(id) => format!("Enrollment #{} not found", id),
            Message::EnrollmentAlreadyExists(semester) => {
                format!("The student is already enrolled in this course for {}", semester)
            }
            Message::NoEnrollmentsFound => "No enrollments found".to_string(),
            Message::EnrollmentListHeader => "📝 Enrollments".to_string(),
            Message::EnrollmentsForStudent(name) => format!("📝 Enrollments for {}", name),
            Message::GradeUpdated(id, grade) => format!("Enrollment #{} graded '{}'", id, grade),
            Message::ConfirmDeleteEnrollment(id) => format!("Delete enrollment #{}?", id),
            Message::SelectEnrollmentAction => "What would you like to do?".to_string(),
            Message::PromptSemester => "Semester".to_string(),
            Message::PromptGrade => "Grade".to_string(),

            // === ROOM MESSAGES ===
            Message::RoomCreated(number) => format!("Room '{}' created", number),
            Message::RoomUpdated(number) => format!("Room '{}' updated", number),
            Message::RoomDeleted(number) => format!("Room '{}' deleted", number),
            Message::RoomNotFound(ident) => format!("Room '{}' not found", ident),
            Message::RoomNumberExists(number) => format!("Room '{}' already exists", number),
            Message::NoRoomsFound => "No rooms found".to_string(),
            Message::RoomListHeader => "🚪 Rooms".to_string(),
            Message::ConfirmDeleteRoom(number) => format!("Delete room '{}'?", number),
            Message::SelectRoomAction => "What would you like to do?".to_string(),
            Message::SelectRoom => "Select room".to_string(),
            Message::SelectRoomToEdit => "Select room to edit".to_string(),
            Message::SelectRoomToDelete => "Select room to delete".to_string(),
            Message::PromptRoomNumber => "Room number".to_string(),
            Message::PromptRoomCapacity => "Room capacity".to_string(),

            // === TIME SLOT MESSAGES ===
            Message::TimeSlotCreated(span) => format!("Time slot {} created", span),
            Message::TimeSlotUpdated(span) => format!("Time slot {} updated", span),
            Message::TimeSlotDeleted(span) => format!("Time slot {} deleted", span),
            Message::TimeSlotNotFound(id) => format!("Time slot #{} not found", id),
            Message::TimeSlotAlreadyExists(span) => format!("Time slot {} already exists", span),
            Message::NoTimeSlotsFound => "No time slots found".to_string(),
            Message::TimeSlotListHeader => "🕐 Time slots".to_string(),
            Message::ConfirmDeleteTimeSlot(span) => format!("Delete time slot {}?", span),
            Message::SelectTimeSlotAction => "What would you like to do?".to_string(),
            Message::SelectTimeSlot => "Select time slot".to_string(),
            Message::SelectTimeSlotToEdit => "Select time slot to edit".to_string(),
            Message::SelectTimeSlotToDelete => "Select time slot to delete".to_string(),
            Message::PromptSlotStart => "Start time (HH:MM)".to_string(),
            Message::PromptSlotEnd => "End time (HH:MM)".to_string(),
            Message::InvalidTime(value) => format!("'{}' is not a valid time, expected HH:MM", value),
            Message::SlotEndBeforeStart => "End time must be after start time".to_string(),

            // === SCHEDULE MESSAGES ===
            Message::ScheduleCreated(id) => format!("Class schedule #{} created", id),
            Message::ScheduleUpdated(id) => format!("Class schedule #{} updated", id),
            Message::ScheduleDeleted(id) => format!("Class schedule #{} deleted", id),
            Message::ScheduleNotFound(id) => format!("Class schedule #{} not found", id),
            Message::NoSchedulesFound => "No class schedules found".to_string(),
            Message::ScheduleListHeader => "📅 Class schedules".to_string(),
            Message::ConfirmDeleteSchedule(id) => format!("Delete class schedule #{}?", id),
            Message::SelectScheduleAction => "What would you like to do?".to_string(),
            Message::SelectScheduleToEdit => "Select class schedule to edit".to_string(),
            Message::SelectScheduleToDelete => "Select class schedule to delete".to_string(),
            Message::RoomConflict => "There is already a class scheduled in this room at this time".to_string(),
            Message::TeacherConflict => "The selected teacher is already scheduled for another class at this time".to_string(),
            Message::NoScheduleConflict => "No conflict: the assignment is free".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully!".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptDatabasePath => "Database file path (leave empty for default)".to_string(),
            Message::PromptDefaultSemester => "Default semester for enrollments".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::NoDataToExport => "Nothing to export".to_string(),
            Message::SelectExportData => "Select data to export".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidId(value) => format!("'{}' is not a valid id", value),
        };

        write!(f, "{}", text)
    }
}
