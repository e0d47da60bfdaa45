use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::LoadError;
use crate::models::SetupExport;

pub const DEFAULT_EXPORT_FILE: &str = "trivia_setup.json";

/// Parse a setup document. Nothing is touched on failure.
pub fn parse_setup(json: &str) -> Result<SetupExport, LoadError> {
    serde_json::from_str(json).map_err(|err| {
        if err.is_data() {
            LoadError::Structure(err.to_string())
        } else {
            LoadError::Parse(err)
        }
    })
}

pub fn setup_to_json(setup: &SetupExport) -> Result<String, LoadError> {
    Ok(serde_json::to_string(setup)?)
}

/// Blocking load, used at startup before the terminal is taken over.
pub fn load_setup_from_json<P: AsRef<Path>>(path: P) -> Result<SetupExport, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let setup = parse_setup(&json)?;
    info!(path = %path.display(), questions = setup.question_count(), "loaded setup");
    Ok(setup)
}

pub async fn read_setup<P: AsRef<Path>>(path: P) -> Result<SetupExport, LoadError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_setup(&json)
}

pub async fn write_setup<P: AsRef<Path>>(path: P, setup: &SetupExport) -> Result<(), LoadError> {
    let path = path.as_ref();
    let json = setup_to_json(setup)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| LoadError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), "exported setup");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_setup("{not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_wrong_shape_is_structure_error() {
        assert!(matches!(
            parse_setup(r#"{"categoriesCount":"five"}"#),
            Err(LoadError::Structure(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_setup_from_json("/no/such/setup.json");
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let setup = parse_setup(
            r#"{"categoriesCount":1,"teams":[{"name":"A","score":0}],
                "categories":["Geo"],"questions":{"0":{"0":{"question":"Q","answer":"A","points":100}}}}"#,
        )
        .unwrap();

        write_setup(&path, &setup).await.unwrap();
        assert_eq!(read_setup(&path).await.unwrap(), setup);
        assert_eq!(load_setup_from_json(&path).unwrap(), setup);
    }
}
