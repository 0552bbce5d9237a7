//! Boolean formulas in conjunctive normal form.
//!
//! Literals are non-zero integers, `v` for variable `v` and `-v`
//! for its negation (variables are 1-based, as in DIMACS).
//!

use std::fmt;
use std::str::FromStr;
use ahash::AHashSet;
use itertools::Itertools;
use log::warn;

use crate::CnfError;

pub type Literal = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    num_vars: usize,
    clauses: Vec<Vec<Literal>>,
}

impl Cnf {
    /// Validate and build a formula. Repeated literals within a
    /// clause are collapsed.
    pub fn new(num_vars: usize, clauses: Vec<Vec<Literal>>) -> Result<Self, CnfError> {
        if clauses.is_empty() {
            return Err(CnfError::NoClauses);
        }
        let mut checked = Vec::with_capacity(clauses.len());
        for clause in clauses {
            if clause.is_empty() {
                return Err(CnfError::EmptyClause);
            }
            let mut seen = AHashSet::default();
            let mut lits = Vec::with_capacity(clause.len());
            for lit in clause {
                if lit == 0 {
                    return Err(CnfError::InvalidLiteral(lit.to_string()));
                }
                if lit.unsigned_abs() as usize > num_vars {
                    return Err(CnfError::VariableOutOfRange { literal: lit, num_vars });
                }
                if seen.insert(lit) {
                    lits.push(lit);
                }
            }
            checked.push(lits);
        }
        Ok(Cnf { num_vars, clauses: checked })
    }

    /// Parse the compact form `"1 2 -3; -1 2"`. The number of
    /// variables is the largest variable mentioned.
    pub fn from_compact(s: &str) -> Result<Self, CnfError> {
        let clauses = s
            .split(';')
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.split_whitespace().map(parse_literal).collect())
            .collect::<Result<Vec<Vec<Literal>>, _>>()?;
        let num_vars = clauses.iter()
            .flatten()
            .map(|l| l.unsigned_abs() as usize)
            .max()
            .unwrap_or(0);
        Cnf::new(num_vars, clauses)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// `assignment[i]` is the value of variable `i + 1`.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        assignment.len() == self.num_vars
            && self.clauses.iter().all(|c| {
                c.iter().any(|&l| assignment[l.unsigned_abs() as usize - 1] == (l > 0))
            })
    }
}

fn parse_literal(token: &str) -> Result<Literal, CnfError> {
    match token.parse::<Literal>() {
        Ok(l) if l != 0 => Ok(l),
        _ => Err(CnfError::InvalidLiteral(token.to_string())),
    }
}

/// Parse a DIMACS CNF file.
impl TryFrom<&str> for Cnf {
    type Error = CnfError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut header: Option<(usize, usize)> = None;
        let mut clauses = Vec::new();
        let mut current = Vec::new();

        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            if line.starts_with('%') {
                break;
            }
            if line.starts_with('p') {
                let fields: Vec<&str> = line.split_whitespace().collect();
                header = match fields.as_slice() {
                    ["p", "cnf", v, c] => match (v.parse(), c.parse()) {
                        (Ok(v), Ok(c)) => Some((v, c)),
                        _ => return Err(CnfError::InvalidHeader(line.to_string())),
                    },
                    _ => return Err(CnfError::InvalidHeader(line.to_string())),
                };
                continue;
            }
            if header.is_none() {
                return Err(CnfError::MissingHeader);
            }
            for token in line.split_whitespace() {
                match token.parse::<Literal>() {
                    Ok(0) => clauses.push(std::mem::take(&mut current)),
                    Ok(l) => current.push(l),
                    Err(_) => return Err(CnfError::InvalidLiteral(token.to_string())),
                }
            }
        }
        if !current.is_empty() {
            clauses.push(current);
        }

        let (num_vars, num_clauses) = header.ok_or(CnfError::MissingHeader)?;
        if clauses.len() != num_clauses {
            warn!("header declares {num_clauses} clauses, found {}", clauses.len());
        }
        Cnf::new(num_vars, clauses)
    }
}

impl FromStr for Cnf {
    type Err = CnfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cnf::try_from(s)
    }
}

impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clause = |c: &Vec<Literal>| {
            format!("({})", c.iter()
                .map(|&l| if l > 0 { format!("x{l}") } else { format!("¬x{}", -l) })
                .join(" ∨ "))
        };
        write!(f, "{}", self.clauses.iter().map(clause).join(" ∧ "))
    }
}
