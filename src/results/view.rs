//! Results view model
//!
//! Everything the results page renders, derived once from a student and
//! the exam descriptor. Rendering layers read these fields and never
//! re-derive them.

use serde::Serialize;

use super::grade::{celebrates, GradeTier};
use crate::dataset::{display_number, ExamDescriptor, Student, StudentId};

/// Color of the unfilled part of the score ring
pub const RING_TRACK_COLOR: &str = "#f0f0f0";

/// Proportional arc showing the percentage in the tier color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRing {
    /// Filled share, clamped to 0-100
    pub percent: f64,
    pub color: &'static str,
}

impl ScoreRing {
    pub fn new(percentage: f64, tier: GradeTier) -> Self {
        let percent = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 100.0)
        };

        Self {
            percent,
            color: tier.color(),
        }
    }

    /// Arc sweep in degrees
    pub fn sweep_degrees(&self) -> f64 {
        self.percent * 3.6
    }

    /// CSS `background` value drawing the ring
    pub fn css_background(&self) -> String {
        format!(
            "conic-gradient({} {}%, {} 0)",
            self.color,
            display_number(self.percent),
            RING_TRACK_COLOR
        )
    }
}

/// Grade badge shown next to the percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeBadge {
    /// The grade exactly as stored
    pub label: String,
    pub tier: GradeTier,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl GradeBadge {
    pub fn new(grade: &str) -> Self {
        let tier = GradeTier::resolve(grade);
        Self {
            label: grade.to_string(),
            tier,
            color: tier.color(),
            emoji: tier.emoji(),
        }
    }

    /// Badge text, emoji first
    pub fn text(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

/// Kind of downloadable document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadKind {
    /// The student's own marked answer sheet
    AnswerSheet,
    /// The exam's model answer
    ModelAnswer,
}

impl DownloadKind {
    pub fn label(&self) -> &'static str {
        match self {
            DownloadKind::AnswerSheet => "📄 Download My Answer Sheet",
            DownloadKind::ModelAnswer => "📋 Download Model Answer",
        }
    }

    /// Style modifier for the download link
    pub fn css_class(&self) -> &'static str {
        match self {
            DownloadKind::AnswerSheet => "student-answer",
            DownloadKind::ModelAnswer => "model-answer",
        }
    }
}

/// A link offered in the downloads section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Download {
    pub kind: DownloadKind,
    pub url: String,
    pub label: &'static str,
}

impl Download {
    fn new(kind: DownloadKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            label: kind.label(),
        }
    }
}

/// Downloads for a student
///
/// The answer sheet is offered only to students who sat the exam and have a
/// link on file. The model answer is always offered.
pub fn downloads_for(student: &Student, exam: &ExamDescriptor) -> Vec<Download> {
    let mut downloads = Vec::with_capacity(2);

    if !student.is_absent() {
        if let Some(url) = student.pdf_url.as_deref().filter(|u| !u.is_empty()) {
            downloads.push(Download::new(DownloadKind::AnswerSheet, url));
        }
    }

    downloads.push(Download::new(
        DownloadKind::ModelAnswer,
        exam.model_answer_url.as_str(),
    ));

    downloads
}

/// Fully derived results page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub student_id: StudentId,
    pub student_name: String,
    pub exam_title: String,
    pub score: f64,
    pub total_marks: f64,
    /// `"{score}/{total_marks}"`
    pub score_label: String,
    pub percentage: f64,
    /// `"{percentage}%"`
    pub percentage_label: String,
    pub badge: GradeBadge,
    pub ring: ScoreRing,
    /// Teacher's remark, only when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub certificate: bool,
    pub downloads: Vec<Download>,
    /// General announcements, in order
    pub announcements: Vec<String>,
    /// Whether the celebratory effect should play
    pub celebrate: bool,
}

impl ResultsView {
    pub fn build(student: &Student, exam: &ExamDescriptor) -> Self {
        let badge = GradeBadge::new(&student.grade);
        let ring = ScoreRing::new(student.percentage, badge.tier);

        Self {
            student_id: student.id,
            student_name: student.name.clone(),
            exam_title: exam.title.clone(),
            score: student.score,
            total_marks: exam.total_marks,
            score_label: format!(
                "{}/{}",
                display_number(student.score),
                display_number(exam.total_marks)
            ),
            percentage: student.percentage,
            percentage_label: format!("{}%", display_number(student.percentage)),
            ring,
            notes: student.notes.clone().filter(|n| !n.is_empty()),
            certificate: student.has_certificate(),
            downloads: downloads_for(student, exam),
            announcements: exam.notes.clone(),
            celebrate: celebrates(&student.grade),
            badge,
        }
    }

    pub fn tier(&self) -> GradeTier {
        self.badge.tier
    }

    pub fn download(&self, kind: DownloadKind) -> Option<&Download> {
        self.downloads.iter().find(|d| d.kind == kind)
    }
}
