use crate::db::courses::CourseDetail;
use crate::db::departments::Department;
use crate::db::enrollments::EnrollmentDetail;
use crate::db::rooms::Room;
use crate::db::schedules::ScheduleDetail;
use crate::db::students::Student;
use crate::db::teachers::Teacher;
use crate::db::timeslots::TimeSlot;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn departments(departments: &[Department]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for department in departments {
            table.add_row(row![department.id.unwrap_or(0), department.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn students(students: &[Student]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DATE OF BIRTH", "EMAIL"]);
        for student in students {
            table.add_row(row![student.id.unwrap_or(0), student.name, student.dob, student.email]);
        }
        table.printstd();

        Ok(())
    }

    pub fn teachers(teachers: &[Teacher]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL"]);
        for teacher in teachers {
            table.add_row(row![teacher.id.unwrap_or(0), teacher.name, teacher.email]);
        }
        table.printstd();

        Ok(())
    }

    pub fn courses(courses: &[CourseDetail]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CREDIT", "DEPARTMENT"]);
        for course in courses {
            table.add_row(row![course.id, course.name, course.credit, course.department]);
        }
        table.printstd();

        Ok(())
    }

    pub fn enrollments(enrollments: &[EnrollmentDetail]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "STUDENT", "COURSE", "SEMESTER", "GRADE"]);
        for enrollment in enrollments {
            table.add_row(row![
                enrollment.id,
                enrollment.student,
                enrollment.course,
                enrollment.semester,
                enrollment.grade
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn rooms(rooms: &[Room]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "ROOM NUMBER", "CAPACITY"]);
        for room in rooms {
            table.add_row(row![room.id.unwrap_or(0), room.room_number, room.capacity]);
        }
        table.printstd();

        Ok(())
    }

    pub fn timeslots(slots: &[TimeSlot]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END"]);
        for slot in slots {
            table.add_row(row![slot.id.unwrap_or(0), slot.start_time.format("%H:%M"), slot.end_time.format("%H:%M")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn schedules(schedules: &[ScheduleDetail]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "COURSE", "TEACHER", "TIME SLOT", "ROOM"]);
        for schedule in schedules {
            table.add_row(row![schedule.id, schedule.course, schedule.teacher, schedule.timeslot, schedule.room]);
        }
        table.printstd();

        Ok(())
    }

    pub fn migrations(history: &[(u32, String, String)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();

        Ok(())
    }

    pub fn record_counts(counts: &[(String, i64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TABLE", "RECORDS"]);
        for (name, rows) in counts {
            table.add_row(row![name, rows]);
        }
        table.printstd();

        Ok(())
    }
}
