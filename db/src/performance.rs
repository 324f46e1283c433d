//! GPA and attendance roll-ups over enrollment records.
//!
//! Everything here is a pure function of already-loaded rows: no database
//! access, no errors. Sums are folded into an immutable [`Tally`] and every
//! average is guarded by "denominator > 0, else 0".
//!
//! A record is *creditable* when its total score is known and its course
//! carries a positive credit unit. Only creditable records enter GPA
//! numerators and denominators; attendance averages and course counts use
//! every record.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::grade::{self, LetterGrade};
use crate::models::{course, enrollment, semester, student};

/// One enrollment together with the course and semester it refers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentRecord {
    pub enrollment: enrollment::Model,
    pub course: course::Model,
    pub semester: semester::Model,
}

impl EnrollmentRecord {
    pub fn total_score(&self) -> Option<i64> {
        self.enrollment.total_score()
    }

    pub fn attendance_percentage(&self) -> f64 {
        self.enrollment.attendance_percentage()
    }

    pub fn is_creditable(&self) -> bool {
        self.total_score().is_some() && self.course.credit_unit > 0
    }
}

/// Running sums for a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    /// Credit units of creditable records.
    pub credit_units: i64,
    /// `grade_point × credit_unit` over creditable records.
    pub weighted_grade_points: i64,
    /// Attendance percentage summed over all records.
    pub attendance_sum: f64,
    /// Number of records seen.
    pub courses: usize,
}

impl Tally {
    pub fn add(self, record: &EnrollmentRecord) -> Self {
        let mut next = self;
        if record.is_creditable() {
            let credit = i64::from(record.course.credit_unit);
            next.credit_units += credit;
            next.weighted_grade_points += grade::grade_point(record.total_score()) * credit;
        }
        next.attendance_sum += record.attendance_percentage();
        next.courses += 1;
        next
    }

    pub fn has_credits(&self) -> bool {
        self.credit_units > 0
    }

    pub fn gpa(&self) -> f64 {
        if self.credit_units > 0 {
            self.weighted_grade_points as f64 / self.credit_units as f64
        } else {
            0.0
        }
    }

    pub fn average_attendance(&self) -> f64 {
        if self.courses > 0 {
            self.attendance_sum / self.courses as f64
        } else {
            0.0
        }
    }
}

impl<'a> FromIterator<&'a EnrollmentRecord> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a EnrollmentRecord>>(iter: I) -> Self {
        iter.into_iter().fold(Tally::default(), Tally::add)
    }
}

/// Per-enrollment row with its derived values, as shown on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentLine {
    pub enrollment_id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    pub credit_unit: i32,
    pub classes_attended: i32,
    pub ca_score: Option<i32>,
    pub exam_score: Option<i32>,
    pub total_score: Option<i64>,
    pub grade: LetterGrade,
    pub grade_point: i64,
    pub attendance_percentage: f64,
}

impl From<&EnrollmentRecord> for EnrollmentLine {
    fn from(record: &EnrollmentRecord) -> Self {
        let e = &record.enrollment;
        Self {
            enrollment_id: e.id,
            course_id: record.course.id,
            course_code: record.course.course_code.clone(),
            course_title: record.course.course_title.clone(),
            credit_unit: record.course.credit_unit,
            classes_attended: e.classes_attended.unwrap_or(0),
            ca_score: e.ca_score,
            exam_score: e.exam_score,
            total_score: e.total_score(),
            grade: e.grade(),
            grade_point: e.grade_point(),
            attendance_percentage: e.attendance_percentage(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    pub semester: semester::Model,
    pub enrollments: Vec<EnrollmentLine>,
    pub gpa: f64,
    pub average_attendance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallSummary {
    pub cgpa: f64,
    pub average_attendance: f64,
    pub total_unique_courses: usize,
}

/// One bar of the score/attendance chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub course_code: String,
    pub total_score: f64,
    pub attendance_percentage: f64,
}

impl From<&EnrollmentRecord> for ChartPoint {
    fn from(record: &EnrollmentRecord) -> Self {
        Self {
            course_code: record.course.course_code.clone(),
            total_score: record.total_score().map_or(0.0, |t| t as f64),
            attendance_percentage: record.attendance_percentage(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentPerformance {
    /// Ordered by academic year, then start date.
    pub semester_summaries: Vec<SemesterSummary>,
    pub overall: OverallSummary,
    /// Original record order.
    pub chart_series: Vec<ChartPoint>,
}

impl StudentPerformance {
    /// The chart series as JSON text, for client-side charting.
    pub fn chart_series_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.chart_series)
    }
}

/// Rolls up one student's enrollments.
pub fn aggregate_student(records: &[EnrollmentRecord]) -> StudentPerformance {
    // Group by semester, first-seen order.
    let mut groups: Vec<(&semester::Model, Vec<&EnrollmentRecord>)> = Vec::new();
    let mut slot_of: HashMap<i64, usize> = HashMap::new();
    for record in records {
        let slot = *slot_of.entry(record.semester.id).or_insert_with(|| {
            groups.push((&record.semester, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    // Stable: semesters with equal keys keep first-seen order.
    groups.sort_by_key(|(semester, _)| semester.sort_key());

    let semester_summaries = groups
        .into_iter()
        .map(|(semester, members)| {
            let tally: Tally = members.iter().copied().collect();
            SemesterSummary {
                semester: semester.clone(),
                enrollments: members.into_iter().map(EnrollmentLine::from).collect(),
                gpa: tally.gpa(),
                average_attendance: tally.average_attendance(),
            }
        })
        .collect();

    let overall_tally: Tally = records.iter().collect();
    let unique_courses: HashSet<i64> = records.iter().map(|r| r.course.id).collect();

    StudentPerformance {
        semester_summaries,
        overall: OverallSummary {
            cgpa: overall_tally.gpa(),
            average_attendance: overall_tally.average_attendance(),
            total_unique_courses: unique_courses.len(),
        },
        chart_series: records.iter().map(ChartPoint::from).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStanding {
    pub student: student::Model,
    pub cgpa: f64,
    pub average_attendance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEnrollmentCount {
    pub course: course::Model,
    pub enrolled_students_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPerformance {
    pub total_students: usize,
    pub total_courses: usize,
    /// Mean CGPA over students with at least one creditable record.
    pub average_cgpa: f64,
    pub students: Vec<StudentStanding>,
    pub courses: Vec<CourseEnrollmentCount>,
}

/// Rolls up a department: every student's whole history, plus a distinct
/// student count for each course the department offers.
pub fn aggregate_department(
    students: Vec<(student::Model, Vec<EnrollmentRecord>)>,
    courses: Vec<(course::Model, Vec<enrollment::Model>)>,
) -> DepartmentPerformance {
    let total_students = students.len();

    let mut cgpa_sum = 0.0;
    let mut graded_students = 0usize;
    let standings: Vec<StudentStanding> = students
        .into_iter()
        .map(|(student, records)| {
            let tally: Tally = records.iter().collect();
            if tally.has_credits() {
                cgpa_sum += tally.gpa();
                graded_students += 1;
            }
            StudentStanding {
                student,
                cgpa: tally.gpa(),
                average_attendance: tally.average_attendance(),
            }
        })
        .collect();

    let average_cgpa = if graded_students > 0 {
        cgpa_sum / graded_students as f64
    } else {
        0.0
    };

    let total_courses = courses.len();
    let courses = courses
        .into_iter()
        .map(|(course, enrollments)| {
            let distinct: HashSet<i64> = enrollments.iter().map(|e| e.student_id).collect();
            CourseEnrollmentCount {
                course,
                enrolled_students_count: distinct.len(),
            }
        })
        .collect();

    DepartmentPerformance {
        total_students,
        total_courses,
        average_cgpa,
        students: standings,
        courses,
    }
}
