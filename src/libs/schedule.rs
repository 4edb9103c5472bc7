//! Class schedule domain types and the conflict validator.
//!
//! A class schedule assigns a course, a teacher, a time slot, and a room
//! together. Two exclusivity rules guard the live set:
//!
//! - **Room exclusivity**: no two schedules may share `(timeslot_id, room_id)`.
//! - **Teacher exclusivity**: no two schedules may share `(teacher_id, timeslot_id)`.
//!
//! [`validate`] is the pure in-memory form of the check, used before any insert
//! or update. The database layer re-runs the same checks inside the writing
//! transaction and keeps matching `UNIQUE` constraints as the final guard, so
//! a concurrent writer can never persist a violation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored class schedule record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSchedule {
    pub id: Option<i64>,
    pub course_id: i64,
    pub teacher_id: i64,
    pub timeslot_id: i64,
    pub room_id: i64,
}

impl ClassSchedule {
    pub fn new(course_id: i64, teacher_id: i64, timeslot_id: i64, room_id: i64) -> Self {
        Self {
            id: None,
            course_id,
            teacher_id,
            timeslot_id,
            room_id,
        }
    }

    pub fn assignment(&self) -> Assignment {
        Assignment {
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            timeslot_id: self.timeslot_id,
            room_id: self.room_id,
        }
    }
}

/// A candidate assignment to be validated before it becomes a [`ClassSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub course_id: i64,
    pub teacher_id: i64,
    pub timeslot_id: i64,
    pub room_id: i64,
}

/// A violation of room or teacher exclusivity for a given time slot.
///
/// Both kinds are user-recoverable: the caller presents the reason and lets
/// the user pick a different room, time slot, or teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("there is already a class scheduled in this room at this time")]
    Room,
    #[error("the selected teacher is already scheduled for another class at this time")]
    Teacher,
}

/// Validates a candidate assignment against the existing schedule set.
///
/// The record whose id equals `exclude_id` is skipped, so an update does not
/// conflict with itself. The room check runs before the teacher check and only
/// the first detected conflict is reported. Pure predicate: no side effects,
/// the caller performs the actual write only after `Ok(())`.
pub fn validate(candidate: &Assignment, exclude_id: Option<i64>, existing: &[ClassSchedule]) -> Result<(), Conflict> {
    let others = existing.iter().filter(|s| match (s.id, exclude_id) {
        (Some(id), Some(excluded)) => id != excluded,
        _ => true,
    });

    let mut teacher_clash = false;
    for schedule in others {
        if schedule.timeslot_id == candidate.timeslot_id && schedule.room_id == candidate.room_id {
            return Err(Conflict::Room);
        }
        if schedule.teacher_id == candidate.teacher_id && schedule.timeslot_id == candidate.timeslot_id {
            teacher_clash = true;
        }
    }

    if teacher_clash {
        return Err(Conflict::Teacher);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, course: i64, teacher: i64, slot: i64, room: i64) -> ClassSchedule {
        ClassSchedule {
            id: Some(id),
            course_id: course,
            teacher_id: teacher,
            timeslot_id: slot,
            room_id: room,
        }
    }

    #[test]
    fn accepts_empty_set() {
        let candidate = Assignment {
            course_id: 1,
            teacher_id: 1,
            timeslot_id: 1,
            room_id: 1,
        };
        assert_eq!(validate(&candidate, None, &[]), Ok(()));
    }

    #[test]
    fn rejects_room_clash() {
        let existing = vec![stored(1, 1, 1, 1, 101)];
        let candidate = Assignment {
            course_id: 2,
            teacher_id: 2,
            timeslot_id: 1,
            room_id: 101,
        };
        assert_eq!(validate(&candidate, None, &existing), Err(Conflict::Room));
    }

    #[test]
    fn rejects_teacher_clash() {
        let existing = vec![stored(1, 1, 1, 1, 101)];
        let candidate = Assignment {
            course_id: 2,
            teacher_id: 1,
            timeslot_id: 1,
            room_id: 102,
        };
        assert_eq!(validate(&candidate, None, &existing), Err(Conflict::Teacher));
    }

    #[test]
    fn room_check_wins_over_teacher_check() {
        // Same room and same teacher in the same slot: only the room
        // conflict is reported.
        let existing = vec![stored(1, 1, 1, 1, 101)];
        let candidate = Assignment {
            course_id: 2,
            teacher_id: 1,
            timeslot_id: 1,
            room_id: 101,
        };
        assert_eq!(validate(&candidate, None, &existing), Err(Conflict::Room));
    }

    #[test]
    fn room_conflict_beats_teacher_conflict_across_records() {
        // Teacher clash appears earlier in the scan than the room clash, but
        // the room conflict is still the one reported.
        let existing = vec![stored(1, 1, 7, 1, 102), stored(2, 1, 9, 1, 101)];
        let candidate = Assignment {
            course_id: 3,
            teacher_id: 7,
            timeslot_id: 1,
            room_id: 101,
        };
        assert_eq!(validate(&candidate, None, &existing), Err(Conflict::Room));
    }

    #[test]
    fn accepts_different_slot() {
        let existing = vec![stored(1, 1, 1, 1, 101)];
        let candidate = Assignment {
            course_id: 2,
            teacher_id: 2,
            timeslot_id: 2,
            room_id: 101,
        };
        assert_eq!(validate(&candidate, None, &existing), Ok(()));
    }

    #[test]
    fn self_exclusion_on_update() {
        let existing = vec![stored(5, 1, 1, 1, 101)];
        let candidate = Assignment {
            course_id: 1,
            teacher_id: 1,
            timeslot_id: 1,
            room_id: 101,
        };
        assert_eq!(validate(&candidate, Some(5), &existing), Ok(()));
    }

    #[test]
    fn exclusion_does_not_hide_other_records() {
        let existing = vec![stored(5, 1, 1, 1, 101), stored(6, 2, 2, 1, 101)];
        let candidate = Assignment {
            course_id: 1,
            teacher_id: 1,
            timeslot_id: 1,
            room_id: 101,
        };
        assert_eq!(validate(&candidate, Some(5), &existing), Err(Conflict::Room));
    }
}
