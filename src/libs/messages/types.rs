#[derive(Debug, Clone)]
pub enum Message {
    // === DEPARTMENT MESSAGES ===
    DepartmentCreated(String),
    DepartmentUpdated(String),
    DepartmentDeleted(String),
    DepartmentNotFound(String),
    DepartmentAlreadyExists(String),
    NoDepartmentsFound,
    DepartmentListHeader,
    ConfirmDeleteDepartment(String),
    SelectDepartmentAction,
    SelectDepartment,
    SelectDepartmentToEdit,
    SelectDepartmentToDelete,
    PromptDepartmentName,

    // === STUDENT MESSAGES ===
    StudentCreated(String),
    StudentUpdated(String),
    StudentDeleted(String),
    StudentNotFound(String),
    StudentEmailExists(String),
    NoStudentsFound,
    StudentListHeader,
    ConfirmDeleteStudent(String),
    SelectStudentAction,
    SelectStudent,
    SelectStudentToEdit,
    SelectStudentToDelete,
    PromptStudentName,
    PromptStudentDob,
    PromptStudentEmail,
    InvalidDate(String),

    // === TEACHER MESSAGES ===
    TeacherCreated(String),
    TeacherUpdated(String),
    TeacherDeleted(String),
    TeacherNotFound(String),
    TeacherEmailExists(String),
    NoTeachersFound,
    TeacherListHeader,
    ConfirmDeleteTeacher(String),
    SelectTeacherAction,
    SelectTeacher,
    SelectTeacherToEdit,
    SelectTeacherToDelete,
    PromptTeacherName,
    PromptTeacherEmail,

    // === COURSE MESSAGES ===
    CourseCreated(String),
    CourseUpdated(String),
    CourseDeleted(String),
    CourseNotFound(String),
    NoCoursesFound,
    CourseListHeader,
    ConfirmDeleteCourse(String),
    SelectCourseAction,
    SelectCourse,
    SelectCourseToEdit,
    SelectCourseToDelete,
    PromptCourseName,
    PromptCourseCredit,

    // === ENROLLMENT MESSAGES ===
    EnrollmentCreated,
    EnrollmentUpdated(i64),
    EnrollmentDeleted(i64),
    EnrollmentNotFound(i64),
    EnrollmentAlreadyExists(String),
    NoEnrollmentsFound,
    EnrollmentListHeader,
    EnrollmentsForStudent(String),
    GradeUpdated(i64, String),
    ConfirmDeleteEnrollment(i64),
    SelectEnrollmentAction,
    PromptSemester,
    PromptGrade,

    // === ROOM MESSAGES ===
    RoomCreated(String),
    RoomUpdated(String),
    RoomDeleted(String),
    RoomNotFound(String),
    RoomNumberExists(String),
    NoRoomsFound,
    RoomListHeader,
    ConfirmDeleteRoom(String),
    SelectRoomAction,
    SelectRoom,
    SelectRoomToEdit,
    SelectRoomToDelete,
    PromptRoomNumber,
    PromptRoomCapacity,

    // === TIME SLOT MESSAGES ===
    TimeSlotCreated(String),
    TimeSlotUpdated(String),
    TimeSlotDeleted(String),
    TimeSlotNotFound(i64),
    TimeSlotAlreadyExists(String),
    NoTimeSlotsFound,
    TimeSlotListHeader,
    ConfirmDeleteTimeSlot(String),
    SelectTimeSlotAction,
    SelectTimeSlot,
    SelectTimeSlotToEdit,
    SelectTimeSlotToDelete,
    PromptSlotStart,
    PromptSlotEnd,
    InvalidTime(String),
    SlotEndBeforeStart,

    // === SCHEDULE MESSAGES ===
    ScheduleCreated(i64),
    ScheduleUpdated(i64),
    ScheduleDeleted(i64),
    ScheduleNotFound(i64),
    NoSchedulesFound,
    ScheduleListHeader,
    ConfirmDeleteSchedule(i64),
    SelectScheduleAction,
    SelectScheduleToEdit,
    SelectScheduleToDelete,
    RoomConflict,
    TeacherConflict,
    NoScheduleConflict,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    PromptDatabasePath,
    PromptDefaultSemester,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NoDataToExport,
    SelectExportData,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    InvalidId(String),
}
