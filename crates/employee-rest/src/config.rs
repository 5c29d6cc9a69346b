//! Request handling configuration.

use employee_cbor::{Date, Employee, Name};

/// Size of the per-request scratch buffer. Bodies of this length or longer
/// are refused before decoding.
pub const DEFAULT_SCRATCH_SIZE: usize = 10 * 1024;

/// Record served by the example endpoint unless configured otherwise.
pub const EXAMPLE_EMPLOYEE: Employee =
    Employee::new(Name::from_static("John Doe"), 1200.0, Date::new(1, 1, 2000));

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Capacity of the scratch buffer used for request bodies and for
    /// encoding responses.
    pub scratch_size: usize,
    /// Record served by the example endpoint.
    pub example: Employee,
    /// Reject birthdates that are not real calendar dates.
    pub strict_dates: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            scratch_size: DEFAULT_SCRATCH_SIZE,
            example: EXAMPLE_EMPLOYEE,
            strict_dates: false,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scratch_size(mut self, scratch_size: usize) -> Self {
        self.scratch_size = scratch_size;
        self
    }

    pub fn with_example(mut self, example: Employee) -> Self {
        self.example = example;
        self
    }

    pub fn with_strict_dates(mut self, strict_dates: bool) -> Self {
        self.strict_dates = strict_dates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_example_is_john_doe() {
        let config = ServerConfig::default();
        assert_eq!(
            config.example,
            Employee::try_new("John Doe", 1200.0, Date::new(1, 1, 2000)).unwrap()
        );
        assert_eq!(config.scratch_size, DEFAULT_SCRATCH_SIZE);
        assert!(!config.strict_dates);
    }
}
