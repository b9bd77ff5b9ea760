//! Core data types for the exam results dataset
//!
//! This module defines the records read from `student_data.json`:
//! - `Student`: One student's credentials and exam outcome
//! - `ExamDescriptor`: Exam-wide information shared by every student
//! - `Dataset`: The whole document, one exam plus its students

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{LoadError, LoadResult};

/// Student identifier as it appears in the dataset
pub type StudentId = i64;

/// A single student record
///
/// Read-only once loaded. `name` is matched case-insensitively and
/// `password` exactly by the login flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Unique identifier within the dataset
    pub id: StudentId,
    /// Full name as typed on the login form
    pub name: String,
    /// Plaintext password
    pub password: String,
    /// Contact number, never used for matching
    #[serde(default)]
    pub phone: String,
    /// Raw exam score
    pub score: f64,
    /// Score as a percentage (0-100)
    pub percentage: f64,
    /// Grade label such as "A+", "B" or "F"
    pub grade: String,
    /// Personal remark from the teacher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether a certificate of excellence is offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<bool>,
    /// Whether the student missed the exam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent: Option<bool>,
    /// Link to the student's own marked answer sheet
    #[serde(
        rename = "pdfUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pdf_url: Option<String>,
}

impl Student {
    /// Create a student with the required fields; optional fields start unset
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        password: impl Into<String>,
        score: f64,
        percentage: f64,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            phone: String::new(),
            score,
            percentage,
            grade: grade.into(),
            notes: None,
            certificate: None,
            absent: None,
            pdf_url: None,
        }
    }

    /// Builder method: set the teacher's remark
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builder method: set the certificate flag
    pub fn certificate(mut self, certificate: bool) -> Self {
        self.certificate = Some(certificate);
        self
    }

    /// Builder method: set the absence flag
    pub fn absent(mut self, absent: bool) -> Self {
        self.absent = Some(absent);
        self
    }

    /// Builder method: set the answer sheet link
    pub fn pdf_url(mut self, url: impl Into<String>) -> Self {
        self.pdf_url = Some(url.into());
        self
    }

    /// Builder method: set the phone number
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn is_absent(&self) -> bool {
        self.absent.unwrap_or(false)
    }

    pub fn has_certificate(&self) -> bool {
        self.certificate.unwrap_or(false)
    }
}

/// Exam-wide information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamDescriptor {
    /// Exam title
    pub title: String,
    /// Maximum achievable score
    pub total_marks: f64,
    /// Pass threshold in percent. Informational only, nothing compares against it.
    pub pass_percentage: f64,
    /// Link to the model answer sheet
    pub model_answer_url: String,
    /// General announcements, in display order
    #[serde(default)]
    pub notes: Vec<String>,
}

/// The complete `student_data.json` document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub exam: ExamDescriptor,
    #[serde(default)]
    pub students: Vec<Student>,
}

impl Dataset {
    /// Create a dataset from its parts
    pub fn new(exam: ExamDescriptor, students: Vec<Student>) -> Self {
        Self { exam, students }
    }

    /// Parse and validate a JSON document
    pub fn from_json(bytes: &[u8]) -> LoadResult<Self> {
        let dataset: Dataset = serde_json::from_slice(bytes)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check dataset invariants
    ///
    /// Student identifiers must be unique.
    pub fn validate(&self) -> LoadResult<()> {
        let mut seen = HashSet::with_capacity(self.students.len());
        for student in &self.students {
            if !seen.insert(student.id) {
                return Err(LoadError::DuplicateStudentId(student.id));
            }
        }
        Ok(())
    }

    /// Look up a student by exact identifier
    pub fn find_student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Format a number the way the results page shows it
///
/// Integral values drop the fractional part (`92`, not `92.0`).
pub fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "exam": {
            "title": "Final Exam",
            "total_marks": 100,
            "pass_percentage": 50,
            "model_answer_url": "https://example.com/model.pdf",
            "notes": ["Bring your ID", "Results are final"]
        },
        "students": [
            {
                "id": 1,
                "name": "Amr Ali",
                "phone": "0100",
                "password": "xyz123",
                "score": 81,
                "percentage": 81,
                "grade": "B",
                "pdfUrl": "https://example.com/amr.pdf"
            },
            {
                "id": 2,
                "name": "Mona Adel",
                "password": "m0na",
                "score": 0,
                "percentage": 0,
                "grade": "F",
                "notes": "",
                "absent": true
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample_dataset() {
        let dataset = Dataset::from_json(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.exam.title, "Final Exam");
        assert_eq!(dataset.exam.notes.len(), 2);
        assert_eq!(dataset.len(), 2);

        let amr = dataset.find_student(1).unwrap();
        assert_eq!(amr.pdf_url.as_deref(), Some("https://example.com/amr.pdf"));
        assert!(!amr.is_absent());
        assert!(!amr.has_certificate());
        assert_eq!(amr.notes, None);

        let mona = dataset.find_student(2).unwrap();
        assert!(mona.is_absent());
        assert_eq!(mona.phone, "");
    }

    #[test]
    fn test_find_student_missing() {
        let dataset = Dataset::from_json(SAMPLE.as_bytes()).unwrap();
        assert!(dataset.find_student(3).is_none());
        assert!(dataset.find_student(0).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let exam = ExamDescriptor {
            title: "Quiz".to_string(),
            total_marks: 20.0,
            pass_percentage: 50.0,
            model_answer_url: "/model.pdf".to_string(),
            notes: vec![],
        };
        let dataset = Dataset::new(
            exam,
            vec![
                Student::new(4, "A", "a", 10.0, 50.0, "C"),
                Student::new(4, "B", "b", 12.0, 60.0, "C"),
            ],
        );

        assert!(matches!(
            dataset.validate(),
            Err(LoadError::DuplicateStudentId(4))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Dataset::from_json(b"{\"exam\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_pdf_url_uses_camel_case_key() {
        let student = Student::new(9, "Sara", "pw", 50.0, 50.0, "C").pdf_url("/s.pdf");
        let json = serde_json::to_value(&student).unwrap();

        assert_eq!(json["pdfUrl"], "/s.pdf");
        assert!(json.get("pdf_url").is_none());
        assert!(json.get("absent").is_none());
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(92.0), "92");
        assert_eq!(display_number(0.0), "0");
        assert_eq!(display_number(87.5), "87.5");
    }

    #[test]
    fn test_bundled_dataset_is_valid() {
        let bundled = include_str!("../../data/student_data.json");
        let dataset = Dataset::from_json(bundled.as_bytes()).unwrap();

        let lina = dataset.find_student(7).unwrap();
        assert_eq!(lina.name, "Lina Samir");
        assert_eq!(lina.grade, "A+");
        assert!(lina.has_certificate());
    }
}
