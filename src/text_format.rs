use num_traits::Float;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::str::{FromStr, SplitWhitespace};
use crate::data_wrappers::{Edge, Instance};
use crate::{Graph, SteinerError};

/// Significant digits used when printing weights.
const WEIGHT_PRECISION: usize = 6;

/// Whitespace separated tokens of an instance, parsed on demand.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens { inner: input.split_whitespace() }
    }

    fn next<V: FromStr>(&mut self, what: &str) -> Result<V, SteinerError> {
        let token = self.inner.next().ok_or_else(|| {
            SteinerError::MalformedInput(format!("unexpected end of input reading {what}"))
        })?;
        token.parse().map_err(|_| {
            SteinerError::MalformedInput(format!("could not read {what} from {token:?}"))
        })
    }

    fn is_exhausted(&self) -> bool {
        self.inner.clone().next().is_none()
    }
}

/// Parses an instance from its text encoding:
///
/// ```text
/// n m
/// u v w      (m lines)
/// t
/// r          (t terminal ids, any whitespace between them)
/// ```
///
/// Any whitespace separates tokens. If the input ends right after the edges, the terminal
/// set is empty. Edge endpoints are not range checked here.
///
/// # Parameters
/// * `input` - the text to parse.
///
/// # Returns
/// * A result that, if successful, contains the instance. An error is returned if a
///   count, vertex id or weight is missing or cannot be parsed.
///
/// # Examples
/// ```
///use steiner_mst::parse_instance;
///
///let instance = parse_instance("3 2\n0 1 1.5\n1 2 2\n2\n0 2\n").unwrap();
///assert_eq!(instance.graph.n_vertices(), 3);
///assert_eq!(instance.graph.edges().len(), 2);
///assert_eq!(instance.terminals.len(), 2);
/// ```
pub fn parse_instance(input: &str) -> Result<Instance<f64>, SteinerError> {
    let mut tokens = Tokens::new(input);
    let n_vertices: usize = tokens.next("n")?;
    let n_edges: usize = tokens.next("m")?;

    let mut edges = Vec::new();
    for i in 0..n_edges {
        let u: usize = tokens.next(&format!("{i}th edge's first endpoint"))?;
        let v: usize = tokens.next(&format!("{i}th edge's second endpoint"))?;
        let weight: f64 = tokens.next(&format!("{i}th edge's weight"))?;
        edges.push(Edge::new(u, v, weight));
    }

    let mut terminals: BTreeSet<usize> = BTreeSet::new();
    if !tokens.is_exhausted() {
        let n_terminals: usize = tokens.next("t")?;
        for i in 0..n_terminals {
            terminals.insert(tokens.next(&format!("{i}th terminal"))?);
        }
    }

    Ok(Instance { graph: Graph::new(n_vertices, edges), terminals })
}

/// Writes a solution as a `COST <total>` line, an `EDGES` line, and one `<u> <v> <w>` line
/// per edge in the given order.
///
/// # Parameters
/// * `writer` - where to write.
/// * `edges` - the tree edges.
/// * `cost` - the total weight to report.
///
/// # Examples
/// ```
///use steiner_mst::{write_solution, Edge};
///
///let mut out = Vec::new();
///write_solution(&mut out, &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 0.25)], 1.25).unwrap();
///assert_eq!(String::from_utf8(out).unwrap(), "COST 1.25\nEDGES\n0 1 1\n1 2 0.25\n");
/// ```
pub fn write_solution<W: Write, T: Float>(writer: &mut W, edges: &[Edge<T>], cost: T)
    -> io::Result<()> {
    writeln!(writer, "COST {}", format_weight(cost))?;
    writeln!(writer, "EDGES")?;
    for edge in edges {
        writeln!(writer, "{} {} {}", edge.u, edge.v, format_weight(edge.weight))?;
    }
    writer.flush()
}

/// Formats a weight like C's `%g`: six significant digits, trailing zeros dropped, and
/// scientific notation for very small or large magnitudes.
///
/// # Examples
/// ```
///use steiner_mst::format_weight;
///
///assert_eq!(format_weight(4.0), "4");
///assert_eq!(format_weight(0.1 + 0.2), "0.3");
///assert_eq!(format_weight(1234567.0), "1.23457e+06");
///assert_eq!(format_weight(0.00001), "1e-05");
/// ```
pub fn format_weight<T: Float>(weight: T) -> String {
    let value = weight.to_f64().unwrap_or(f64::NAN);
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the target precision first decides the exponent
    let scientific = format!("{:.*e}", WEIGHT_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= WEIGHT_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (WEIGHT_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
