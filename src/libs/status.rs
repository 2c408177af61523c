use std::{fmt, str::FromStr};

use crate::libs::errors::UpdateError;

/// Status of a task line, stored as the single character inside `- [ ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn marker(&self) -> char {
        match self {
            TaskStatus::Pending => ' ',
            TaskStatus::InProgress => '-',
            TaskStatus::Completed => 'x',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pendiente",
            TaskStatus::InProgress => "en_progreso",
            TaskStatus::Completed => "completada",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(TaskStatus::Pending),
            "en_progreso" => Ok(TaskStatus::InProgress),
            "completada" => Ok(TaskStatus::Completed),
            other => Err(UpdateError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_statuses() {
        assert_eq!("pendiente".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!("en_progreso".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("completada".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "invalid_value".parse::<TaskStatus>().unwrap_err();
        assert!(matches!(err, UpdateError::InvalidStatus(ref s) if s == "invalid_value"));
    }

    #[test]
    fn status_names_are_case_sensitive() {
        assert!("Completada".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn markers() {
        assert_eq!(TaskStatus::Pending.marker(), ' ');
        assert_eq!(TaskStatus::InProgress.marker(), '-');
        assert_eq!(TaskStatus::Completed.marker(), 'x');
        assert_eq!(TaskStatus::InProgress.to_string(), "en_progreso");
    }
}
