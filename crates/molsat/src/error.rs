use std::fmt;

use ms_strand::StrandError;
use ms_tube::TubeError;

/// Error type for reading CNF formulas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnfError {
    /// A DIMACS file without a `p cnf` line before its first clause.
    MissingHeader,

    /// A malformed `p` line.
    InvalidHeader(String),

    /// A token that is not a non-zero integer literal.
    InvalidLiteral(String),

    /// A literal whose variable exceeds the declared number of variables.
    VariableOutOfRange { literal: i32, num_vars: usize },

    /// A clause without literals.
    EmptyClause,

    /// A formula without clauses.
    NoClauses,
}

impl fmt::Display for CnfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CnfError::MissingHeader => write!(f, "Missing 'p cnf' header."),
            CnfError::InvalidHeader(line) => write!(f, "Invalid header line '{line}'."),
            CnfError::InvalidLiteral(token) => write!(f, "Invalid literal '{token}'."),
            CnfError::VariableOutOfRange { literal, num_vars } => 
                write!(f, "Literal {literal} exceeds the number of variables ({num_vars})."),
            CnfError::EmptyClause => write!(f, "Empty clause."),
            CnfError::NoClauses => write!(f, "Formula has no clauses."),
        }
    }
}

impl std::error::Error for CnfError {}

/// Error type for setting up and running the solver.
#[derive(Debug)]
pub enum SolverError {
    Cnf(CnfError),
    Strand(StrandError),
    Tube(TubeError),

    /// Node and literal sequences that cannot encode the formula.
    InvalidEncoding(String),

    /// Reading an input or configuration file failed.
    Io(std::io::Error),

    /// A configuration file could not be parsed.
    Config(serde_json::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::Cnf(e) => write!(f, "{e}"),
            SolverError::Strand(e) => write!(f, "{e}"),
            SolverError::Tube(e) => write!(f, "{e}"),
            SolverError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {msg}"),
            SolverError::Io(e) => write!(f, "{e}"),
            SolverError::Config(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Cnf(e) => Some(e),
            SolverError::Strand(e) => Some(e),
            SolverError::Tube(e) => Some(e),
            SolverError::Io(e) => Some(e),
            SolverError::Config(e) => Some(e),
            SolverError::InvalidEncoding(_) => None,
        }
    }
}

impl From<CnfError> for SolverError {
    fn from(e: CnfError) -> Self {
        SolverError::Cnf(e)
    }
}

impl From<StrandError> for SolverError {
    fn from(e: StrandError) -> Self {
        SolverError::Strand(e)
    }
}

impl From<TubeError> for SolverError {
    fn from(e: TubeError) -> Self {
        SolverError::Tube(e)
    }
}

impl From<std::io::Error> for SolverError {
    fn from(e: std::io::Error) -> Self {
        SolverError::Io(e)
    }
}

impl From<serde_json::Error> for SolverError {
    fn from(e: serde_json::Error) -> Self {
        SolverError::Config(e)
    }
}
