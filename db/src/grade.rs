//! Score → grade mappings.
//!
//! Two independent tables map a course total (CA + exam, nominally 0–100) to a
//! letter grade and to a grade point. Neither ever fails: anything outside the
//! graded bands, including a missing total, lands on `F` / `0`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Number of classes a course runs; attendance is reported against this.
pub const CLASSES_PER_COURSE: i32 = 10;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Grade point (0–5) used to weight GPA.
pub fn grade_point(total_score: Option<i64>) -> i64 {
    match total_score {
        Some(70..=100) => 5,
        Some(60..=69) => 4,
        Some(50..=59) => 3,
        Some(45..=49) => 2,
        Some(40..=44) => 1,
        _ => 0,
    }
}

pub fn letter_grade(total_score: Option<i64>) -> LetterGrade {
    match total_score {
        Some(70..=100) => LetterGrade::A,
        Some(60..=69) => LetterGrade::B,
        Some(50..=59) => LetterGrade::C,
        Some(45..=49) => LetterGrade::D,
        Some(40..=44) => LetterGrade::E,
        _ => LetterGrade::F,
    }
}

/// Sum of the two score components, widened so no input can overflow.
pub fn total_score(ca_score: Option<i32>, exam_score: Option<i32>) -> Option<i64> {
    Some(i64::from(ca_score?) + i64::from(exam_score?))
}

/// Attendance as a percentage of [`CLASSES_PER_COURSE`]. Missing counts read as zero.
pub fn attendance_percentage(classes_attended: Option<i32>) -> f64 {
    f64::from(classes_attended.unwrap_or(0)) * 100.0 / f64::from(CLASSES_PER_COURSE)
}
