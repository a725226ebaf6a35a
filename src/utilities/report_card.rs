use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Deserialize;
use tracing::debug;

const MAX_MARKS: f64 = 100.0;
const PASS_MARKS: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectMark {
    pub subject: String,
    pub marks: f64
}

/// A student and their marks, in the order the subjects were listed.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub marks: Vec<SubjectMark>
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p >= 90.0 => Grade::APlus,
            p if p >= 80.0 => Grade::A,
            p if p >= 70.0 => Grade::B,
            p if p >= 60.0 => Grade::C,
            p if p >= 40.0 => Grade::D,
            _ => Grade::F
        }
    }
}

impl Display for Grade {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F"
        };
        write!(formatter, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportCard {
    pub name: String,
    pub total_marks: f64,
    /// Rounded to two decimal places.
    pub percentage: f64,
    pub grade: Grade,
    pub highest_subject: String,
    pub lowest_subject: String,
    pub passed_subjects: Vec<String>,
    pub failed_subjects: Vec<String>,
    pub subject_count: usize
}

/// Builds a report card, or `None` if the name is blank, there are no subjects,
/// a subject repeats, or any mark is outside `0..=100`.
pub fn generate_report_card(student: &Student) -> Option<ReportCard> {
    if student.name.trim().is_empty() {
        debug!("Student name is blank");
        return None;
    }

    let (first, rest) = student.marks.split_first()?;

    if let Some(invalid) = student.marks.iter().find(|mark| !(0.0..=MAX_MARKS).contains(&mark.marks)) {
        debug!("Marks [{}] for [{}] are out of range", invalid.marks, invalid.subject);
        return None;
    }

    let mut seen = HashSet::new();
    if !student.marks.iter().all(|mark| seen.insert(mark.subject.as_str())) {
        debug!("Student [{}] has a repeated subject", student.name);
        return None;
    }

    let subject_count = student.marks.len();
    let total_marks: f64 = student.marks.iter().map(|mark| mark.marks).sum();
    let percentage = round_to_cents(total_marks / (subject_count as f64 * MAX_MARKS) * 100.0);

    let (highest, lowest) = rest.iter().fold((first, first), |(highest, lowest), mark| (
        if mark.marks > highest.marks { mark } else { highest },
        if mark.marks < lowest.marks { mark } else { lowest }
    ));

    let (passed, failed): (Vec<_>, Vec<_>) = student.marks.iter()
        .partition(|mark| mark.marks >= PASS_MARKS);

    Some(ReportCard {
        name: student.name.clone(),
        total_marks,
        percentage,
        grade: Grade::from_percentage(percentage),
        highest_subject: highest.subject.clone(),
        lowest_subject: lowest.subject.clone(),
        passed_subjects: passed.into_iter().map(|mark| mark.subject.clone()).collect(),
        failed_subjects: failed.into_iter().map(|mark| mark.subject.clone()).collect(),
        subject_count
    })
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
