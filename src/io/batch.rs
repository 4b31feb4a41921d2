//! Text batch protocol: a leading count `t`, then `t` whitespace-separated
//! `n c d p` tuples in; one integer per line out

use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;

use crate::algorithm::optimizer::{Outcome, Query};
use crate::io::configuration::{MAX_BATCH_SIZE, MAX_PARADE_MODULUS, MAX_RIBBONS};
use crate::io::error::{KiteError, Result, invalid_parameter, parse_error};

/// How much of the documented domain the reader enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Accept any value the query types can hold
    #[default]
    Lenient,
    /// Also reject values above the documented domain maxima
    Domain,
}

/// Read a query batch
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty or the header is not a positive integer
/// - A token is not an unsigned integer fitting its field
/// - The number of tokens is not exactly `1 + 4t`
/// - A value is zero, or above the domain maxima under [`Strictness::Domain`]
pub fn parse_batch(text: &str, strictness: Strictness) -> Result<Vec<Query>> {
    let tokens: Vec<&str> = text.split_ascii_whitespace().collect();

    let Some(header) = tokens.first() else {
        return Err(invalid_parameter("t", &"", &"input is empty"));
    };
    let count: usize = parse_token(header, 0)?;
    if count == 0 {
        return Err(invalid_parameter("t", &count, &"must be at least 1"));
    }

    let expected = count
        .checked_mul(4)
        .and_then(|values| values.checked_add(1))
        .ok_or_else(|| invalid_parameter("t", &count, &"too many queries"))?;
    if tokens.len() != expected {
        return Err(KiteError::TokenCount {
            expected,
            found: tokens.len(),
        });
    }

    tokens
        .get(1..)
        .unwrap_or_default()
        .chunks_exact(4)
        .enumerate()
        .map(|(index, chunk)| parse_query(chunk, 1 + 4 * index, strictness))
        .collect()
}

fn parse_query(chunk: &[&str], position: usize, strictness: Strictness) -> Result<Query> {
    let [n, c, d, p] = chunk else {
        return Err(KiteError::TokenCount {
            expected: position + 4,
            found: position + chunk.len(),
        });
    };

    let query = Query::new(
        parse_token(n, position)?,
        parse_token(c, position + 1)?,
        parse_token(d, position + 2)?,
        parse_token(p, position + 3)?,
    )?;

    if strictness == Strictness::Domain {
        check_domain(&query)?;
    }
    Ok(query)
}

/// Parse one unsigned decimal token at zero-based `position` of the batch
///
/// Signs, separators and anything but ASCII digits are refused.
///
/// # Errors
///
/// Returns [`KiteError::Parse`] for a non-digit token or one that overflows `T`
pub fn parse_token<T: FromStr>(token: &str, position: usize) -> Result<T> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(parse_error(position, token, "not an unsigned integer"));
    }
    token
        .parse()
        .ok()
        .ok_or_else(|| parse_error(position, token, "out of range"))
}

/// Reject values above the documented query domain
///
/// # Errors
///
/// Returns [`KiteError::InvalidParameter`] naming the first field out of range
pub fn check_domain(query: &Query) -> Result<()> {
    if query.ribbons.get() > MAX_RIBBONS {
        return Err(invalid_parameter("n", &query.ribbons, &format!("exceeds {MAX_RIBBONS}")));
    }
    if query.carton_size.get() > MAX_BATCH_SIZE {
        return Err(invalid_parameter(
            "c",
            &query.carton_size,
            &format!("exceeds {MAX_BATCH_SIZE}"),
        ));
    }
    if query.fleet_size.get() > MAX_BATCH_SIZE {
        return Err(invalid_parameter(
            "d",
            &query.fleet_size,
            &format!("exceeds {MAX_BATCH_SIZE}"),
        ));
    }
    if query.parade_modulus.get() > MAX_PARADE_MODULUS {
        return Err(invalid_parameter(
            "p",
            &query.parade_modulus,
            &format!("exceeds {MAX_PARADE_MODULUS}"),
        ));
    }
    Ok(())
}

/// Write one result per line, `-1` for infeasible queries
///
/// # Errors
///
/// Propagates any error from the underlying writer
pub fn write_outcomes<W: Write + ?Sized>(
    writer: &mut W,
    outcomes: &[Outcome],
) -> std::io::Result<()> {
    for outcome in outcomes {
        writeln!(writer, "{outcome}")?;
    }
    writer.flush()
}

/// Render results in the output protocol
pub fn render_outcomes(outcomes: &[Outcome]) -> String {
    outcomes.iter().fold(String::new(), |mut text, outcome| {
        let _ = writeln!(text, "{outcome}");
        text
    })
}

/// Render queries in the input protocol, one tuple per line
pub fn render_batch(queries: &[Query]) -> String {
    let mut text = format!("{}\n", queries.len());
    for query in queries {
        let _ = writeln!(text, "{query}");
    }
    text
}
