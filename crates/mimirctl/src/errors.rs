//! Exit codes for mimirctl failure modes.

use mimir_common::StoreError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the knowledge base file is malformed
pub const EXIT_KB_MALFORMED: i32 = 65;

/// Exit code when the knowledge base file is missing, unreadable, or
/// cannot be written
pub const EXIT_KB_IO: i32 = 66;

/// Map a failure to its process exit code.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<StoreError>() {
        Some(StoreError::Parse { .. }) => EXIT_KB_MALFORMED,
        Some(StoreError::Read { .. }) | Some(StoreError::Write { .. }) => EXIT_KB_IO,
        None => EXIT_GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_errors_map_to_malformed() {
        let source = serde_json_error();
        let error = anyhow::Error::new(StoreError::Parse {
            path: PathBuf::from("kb.json"),
            source,
        });
        assert_eq!(exit_code_for(&error), EXIT_KB_MALFORMED);
    }

    #[test]
    fn read_and_write_errors_map_to_io() {
        for make in [make_read_error, make_write_error] {
            let error = anyhow::Error::new(make());
            assert_eq!(exit_code_for(&error), EXIT_KB_IO);
        }
    }

    #[test]
    fn everything_else_is_a_general_error() {
        let error = anyhow::anyhow!("unrelated failure");
        assert_eq!(exit_code_for(&error), EXIT_GENERAL_ERROR);
    }

    fn serde_json_error() -> serde_json::Error {
        serde_json::from_str::<mimir_common::KnowledgeBase>("nope").unwrap_err()
    }

    fn make_read_error() -> StoreError {
        StoreError::Read {
            path: PathBuf::from("kb.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
    }

    fn make_write_error() -> StoreError {
        StoreError::Write {
            path: PathBuf::from("kb.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }
}
