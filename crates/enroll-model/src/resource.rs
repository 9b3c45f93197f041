use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One of the four REST collections exposed by the enrollment API.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    #[default]
    Students,
    Teachers,
    Courses,
    Enrollments,
}

impl Resource {
    /// All resources in navigation order.
    pub const ALL: [Resource; 4] = [
        Resource::Students,
        Resource::Teachers,
        Resource::Courses,
        Resource::Enrollments,
    ];

    /// Collection path segment, without slashes.
    pub const fn segment(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
            Self::Courses => "courses",
            Self::Enrollments => "enrollments",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Students => "Students",
            Self::Teachers => "Teachers",
            Self::Courses => "Courses",
            Self::Enrollments => "Enrollments",
        }
    }

    pub const fn singular(&self) -> &'static str {
        match self {
            Self::Students => "Student",
            Self::Teachers => "Teacher",
            Self::Courses => "Course",
            Self::Enrollments => "Enrollment",
        }
    }

    /// Enrollments can only be created and deleted.
    pub const fn supports_update(&self) -> bool {
        !matches!(self, Self::Enrollments)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for Resource {
    type Err = ModelError;

    /// Accepts the plural or singular name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "students" | "student" => Ok(Self::Students),
            "teachers" | "teacher" => Ok(Self::Teachers),
            "courses" | "course" => Ok(Self::Courses),
            "enrollments" | "enrollment" => Ok(Self::Enrollments),
            _ => Err(ModelError::UnknownResource(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singular_and_plural() {
        assert_eq!("Student".parse::<Resource>(), Ok(Resource::Students));
        assert_eq!("COURSES".parse::<Resource>(), Ok(Resource::Courses));
        assert!("grades".parse::<Resource>().is_err());
    }

    #[test]
    fn only_enrollments_lack_update() {
        let updatable: Vec<_> = Resource::ALL
            .iter()
            .filter(|resource| resource.supports_update())
            .collect();
        assert_eq!(updatable.len(), 3);
        assert!(!Resource::Enrollments.supports_update());
    }
}
