//! Strict line-level validation of query files
//!
//! Stricter than [`crate::io::batch::parse_batch`]: the layout must be exactly
//! one header line and one `n c d p` line per query, single spaces, no blank
//! lines, and every value inside the documented domain.

use crate::algorithm::optimizer::Query;
use crate::io::batch::{check_domain, parse_token};
use crate::io::error::{Result, invalid_parameter};

/// Check that `text` is a well-formed query file
///
/// A trailing `\r` on each line is tolerated.
///
/// # Errors
///
/// Returns an error describing the first violation found
pub fn validate_input(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(invalid_parameter("input", &"", &"input is empty"));
    }

    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if let Some(blank) = lines.iter().position(|line| line.is_empty()) {
        return Err(invalid_parameter(
            "input",
            &format!("line {}", blank + 1),
            &"blank lines are not allowed",
        ));
    }

    let Some((header, cases)) = lines.split_first() else {
        return Err(invalid_parameter("input", &"", &"input is empty"));
    };
    let count = parse_token::<usize>(header, 0)?;
    if count == 0 {
        return Err(invalid_parameter("t", &count, &"must be at least 1"));
    }
    if cases.len() != count {
        return Err(invalid_parameter(
            "t",
            &count,
            &format!("announces {count} queries but {} lines follow", cases.len()),
        ));
    }

    for (index, line) in cases.iter().enumerate() {
        let query = parse_case_line(line, index + 1)?;
        check_domain(&query)?;
    }
    Ok(())
}

fn parse_case_line(line: &str, line_number: usize) -> Result<Query> {
    let fields: Vec<&str> = line.split(' ').collect();
    let [n, c, d, p] = fields.as_slice() else {
        return Err(invalid_parameter(
            "input",
            &format!("line {}", line_number + 1),
            &"expected exactly four integers separated by single spaces",
        ));
    };

    let position = 1 + 4 * (line_number - 1);
    Query::new(
        parse_token(n, position)?,
        parse_token(c, position + 1)?,
        parse_token(d, position + 2)?,
        parse_token(p, position + 3)?,
    )
}
