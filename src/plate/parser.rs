use super::error::GridError;

/// Parse whitespace-separated floats, skipping `#` comments
///
/// Line numbers in errors are 1-based.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, GridError> {
    let mut values = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(before, _)| before);

        for token in content.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| GridError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}
