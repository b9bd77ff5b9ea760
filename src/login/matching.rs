//! Credential matching
//!
//! Names compare after Unicode lowercasing (no locale rules), passwords
//! compare exactly. Passwords are plaintext; there is no hashing.

use thiserror::Error;

use crate::dataset::Student;

/// Message shown under the login form when no student matches
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid name or password. Please try again.";

/// Credential mismatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid name or password. Please try again.")]
    InvalidCredentials,
}

/// Name and password as typed on the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

/// Whether a student's name equals `name`, ignoring letter case
pub fn names_match(student_name: &str, name: &str) -> bool {
    student_name.to_lowercase() == name.to_lowercase()
}

/// Find the first student matching the credentials
pub fn authenticate<'a>(
    students: &'a [Student],
    credentials: &Credentials,
) -> Result<&'a Student, AuthError> {
    students
        .iter()
        .find(|s| names_match(&s.name, &credentials.name) && s.password == credentials.password)
        .ok_or(AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students() -> Vec<Student> {
        vec![
            Student::new(1, "Amr Ali", "xyz123", 81.0, 81.0, "B"),
            Student::new(2, "Lina Samir", "p1", 92.0, 92.0, "A+"),
            Student::new(3, "Lina Samir", "other", 40.0, 40.0, "F"),
        ]
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let students = students();
        let found = authenticate(&students, &Credentials::new("AMR ALI", "xyz123")).unwrap();
        assert_eq!(found.id, 1);

        let found = authenticate(&students, &Credentials::new("amr ali", "xyz123")).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let students = students();
        assert_eq!(
            authenticate(&students, &Credentials::new("Amr Ali", "XYZ123")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_first_match_wins_on_shared_names() {
        let students = students();
        let found = authenticate(&students, &Credentials::new("lina samir", "other")).unwrap();
        assert_eq!(found.id, 3);

        let found = authenticate(&students, &Credentials::new("LINA SAMIR", "p1")).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_every_student_can_log_in() {
        let students = students();
        for student in &students {
            let creds = Credentials::new(student.name.to_uppercase(), student.password.clone());
            let found = authenticate(&students, &creds).unwrap();
            assert!(names_match(&found.name, &student.name));
            assert_eq!(found.password, student.password);
        }
    }

    #[test]
    fn test_empty_student_list_never_matches() {
        assert_eq!(
            authenticate(&[], &Credentials::new("Amr Ali", "xyz123")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_whitespace_is_significant() {
        let students = students();
        assert!(authenticate(&students, &Credentials::new(" Amr Ali", "xyz123")).is_err());
    }

    #[test]
    fn test_non_ascii_names_fold() {
        let students = vec![Student::new(5, "ÉLODIE", "pw", 70.0, 70.0, "B")];
        assert!(authenticate(&students, &Credentials::new("élodie", "pw")).is_ok());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            INVALID_CREDENTIALS_MESSAGE
        );
    }
}
