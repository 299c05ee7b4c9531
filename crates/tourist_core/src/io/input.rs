use std::{fs, io::Read};

use crate::{Dataset, Error, Result, TouristOptions};

/// Loads the dataset named by `options`: a built-in example, the `--input`
/// file, or JSON on stdin.
pub fn load_dataset(options: &TouristOptions) -> Result<Dataset> {
    if let Some(example) = options.example {
        log::info!("input: using built-in example={example}");
        return Ok(example.dataset());
    }

    let raw = match options.input_path() {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("failed to read dataset {}: {e}", path.display()))
        })?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    parse_dataset(&raw)
}

pub(crate) fn parse_dataset(raw: &str) -> Result<Dataset> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_input("No dataset provided."));
    }
    let dataset = Dataset::from_json(raw)?;
    log::debug!("input: parsed {dataset}");
    Ok(dataset)
}
