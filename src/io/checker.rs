//! Independent verification of a results file against its query batch
//!
//! The checker never runs the optimizer. A claimed total is accepted when the
//! fleet it implies (`B = m - K`, `A = 2K - m`) meets every constraint; `-1`
//! is accepted unless a necessary condition shows otherwise. The exhaustive
//! mode closes that gap for small queries by consulting the brute-force
//! reference, so non-minimal totals and missed solutions are caught too.

use log::debug;

use crate::algorithm::brute_force::solve_by_enumeration;
use crate::algorithm::composition::Composition;
use crate::algorithm::optimizer::{Outcome, Query};
use crate::io::batch::{Strictness, parse_batch};
use crate::io::configuration::{EXHAUSTIVE_RIBBON_LIMIT, INFEASIBLE_SENTINEL};
use crate::io::error::{Result, WithContext, output_format, rejected};

/// How thoroughly each claimed result is examined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Validate only what follows from the claim itself
    #[default]
    Structural,
    /// Also compare with exhaustive search when `n` is small enough
    Exhaustive,
}

/// Verify a results file
///
/// # Errors
///
/// Returns an error if:
/// - The input batch cannot be parsed
/// - The output breaks the line protocol ([`crate::KiteError::OutputFormat`])
/// - Any case reports a wrong answer ([`crate::KiteError::Rejected`])
pub fn check_output(input: &str, output: &str, mode: CheckMode) -> Result<()> {
    let queries = parse_batch(input, Strictness::Lenient)?;
    let lines = split_lines_strict(output)?;

    if lines.len() != queries.len() {
        return Err(output_format(&format!(
            "expected exactly {} lines of output, got {}",
            queries.len(),
            lines.len()
        )));
    }

    for (index, (line, query)) in lines.iter().zip(&queries).enumerate() {
        let case = index + 1;
        let claimed = parse_claim(line).with_case(case)?;
        check_claim(query, claimed, mode).with_case(case)?;
    }

    debug!("accepted {} results", queries.len());
    Ok(())
}

/// Split output into lines, allowing LF or CRLF and one trailing newline
///
/// # Errors
///
/// Returns [`crate::KiteError::OutputFormat`] for a bare carriage return or
/// more than one trailing newline
pub fn split_lines_strict(output: &str) -> Result<Vec<&str>> {
    if output.replace("\r\n", "\n").contains('\r') {
        return Err(output_format(&"carriage return is only allowed as part of CRLF"));
    }

    let body = match output.strip_suffix('\n') {
        Some(rest) => {
            let rest = rest.strip_suffix('\r').unwrap_or(rest);
            if rest.ends_with('\n') {
                return Err(output_format(&"multiple trailing newlines are not allowed"));
            }
            rest
        }
        None => output,
    };

    if body.is_empty() {
        return Ok(Vec::new());
    }
    Ok(body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect())
}

fn parse_claim(line: &str) -> Result<i64> {
    if line.is_empty() {
        return Err(rejected(&"empty line, expected one integer"));
    }
    if line.trim() != line {
        return Err(rejected(&"leading or trailing whitespace is not allowed"));
    }
    if line.split_whitespace().count() != 1 {
        return Err(rejected(&"expected exactly one token on the line"));
    }

    let digits = line.strip_prefix('-').unwrap_or(line);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(rejected(&format!("expected an integer, got '{line}'")));
    }
    line.parse()
        .ok()
        .ok_or_else(|| rejected(&format!("integer out of range: '{line}'")))
}

/// Judge one claimed result against its query
///
/// # Errors
///
/// Returns [`crate::KiteError::Rejected`] with case number 0 when the claim is
/// wrong; callers attach the case number
pub fn check_claim(query: &Query, claimed: i64, mode: CheckMode) -> Result<()> {
    let ribbons = query.ribbons.get();
    let parade = query.parade_modulus.get();

    // 2A + 4B is always even
    if ribbons % 2 != 0 {
        return expect_infeasible(claimed, "n is odd");
    }

    // K lies in [⌈m/2⌉, m], so no positive multiple of p fits when p > m
    let half = ribbons / 2;
    if parade > half {
        return expect_infeasible(claimed, "p > n/2");
    }

    let reference = (mode == CheckMode::Exhaustive && ribbons <= EXHAUSTIVE_RIBBON_LIMIT)
        .then(|| solve_by_enumeration(query));

    if claimed == INFEASIBLE_SENTINEL {
        return match reference {
            Some(Outcome::Minimum(total)) => Err(rejected(&format!(
                "reported -1 but K={total} is feasible"
            ))),
            _ => Ok(()),
        };
    }

    let Ok(total) = u64::try_from(claimed) else {
        return Err(rejected(&format!(
            "output must be -1 or a positive integer, got {claimed}"
        )));
    };
    if total == 0 {
        return Err(rejected(&"output must be -1 or a positive integer, got 0"));
    }
    if total % parade != 0 {
        return Err(rejected(&format!(
            "A+B must be divisible by p={parade}, got {total}"
        )));
    }

    let Some(composition) = Composition::from_total(ribbons, total) else {
        return Err(rejected(&format!(
            "K={total} is out of the feasible range [{}..{half}]",
            half.div_ceil(2)
        )));
    };

    let carton = query.carton_size.get();
    if composition.twin_tails % u64::from(carton) != 0 {
        return Err(rejected(&format!(
            "derived A={} is not a multiple of c={carton}",
            composition.twin_tails
        )));
    }
    let fleet = query.fleet_size.get();
    if composition.quad_tails % u64::from(fleet) != 0 {
        return Err(rejected(&format!(
            "derived B={} is not a multiple of d={fleet}",
            composition.quad_tails
        )));
    }
    if composition.ribbons() != u128::from(ribbons) {
        return Err(rejected(&format!(
            "derived A, B use {} ribbons instead of {ribbons}",
            composition.ribbons()
        )));
    }

    match reference {
        Some(Outcome::Minimum(minimum)) if minimum < total => Err(rejected(&format!(
            "K={total} is feasible but not minimal, K={minimum} also works"
        ))),
        _ => Ok(()),
    }
}

fn expect_infeasible(claimed: i64, reason: &str) -> Result<()> {
    if claimed == INFEASIBLE_SENTINEL {
        Ok(())
    } else {
        Err(rejected(&format!(
            "{reason}, so output must be -1, got {claimed}"
        )))
    }
}
