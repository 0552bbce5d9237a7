//! Adleman-style encoding of a formula's assignment graph.
//!
//! Every variable `i` gets two random literal sequences (positive,
//! negative), and there are `n + 1` random node sequences. A path
//! through the graph reads
//!
//! ```text
//!   node_0 lit_0 node_1 lit_1 ... lit_{n-1} node_n
//! ```
//!
//! and picks one literal per variable, i.e. one assignment. Edges
//! glue the halves of two neighboring sequences together; the
//! complements of node and literal sequences act as splints that
//! anneal consecutive edges into paths.
//!

use ahash::AHashSet;
use rand::Rng;

use ms_strand::Base;
use ms_strand::BaseVec;
use ms_strand::Strand;
use ms_strand::StrandError;
use ms_strand::complement;
use ms_strand::reverse;

use crate::Literal;
use crate::SolverError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    node_length: usize,
    literals: Vec<[BaseVec; 2]>,
    nodes: Vec<BaseVec>,
    edges: Vec<BaseVec>,
}

impl Encoding {
    /// Draw distinct random sequences of length `node_length` for
    /// all literals and nodes.
    pub fn random<R: Rng + ?Sized>(
        num_vars: usize,
        node_length: usize,
        rng: &mut R,
    ) -> Result<Self, SolverError> {
        let needed = 3 * num_vars + 1;
        let available = 4usize.checked_pow(node_length as u32).unwrap_or(usize::MAX);
        if available < needed {
            return Err(SolverError::InvalidEncoding(format!(
                "{needed} distinct sequences of length {node_length} do not exist"
            )));
        }

        let mut seen = AHashSet::default();
        let mut fresh = || loop {
            let seq = BaseVec::random(node_length, rng);
            if seen.insert(seq.clone()) {
                return seq;
            }
        };
        let literals = (0..num_vars).map(|_| [fresh(), fresh()]).collect();
        let nodes = (0..=num_vars).map(|_| fresh()).collect();
        Encoding::from_sequences(literals, nodes)
    }

    /// Build an encoding from given `[positive, negative]` literal
    /// sequences and node sequences.
    pub fn from_sequences(
        literals: Vec<[BaseVec; 2]>, 
        nodes: Vec<BaseVec>
    ) -> Result<Self, SolverError> {
        let n = literals.len();
        if n == 0 || nodes.len() != n + 1 {
            return Err(SolverError::InvalidEncoding(format!(
                "{n} variables need {} node sequences, got {}", n + 1, nodes.len()
            )));
        }
        let node_length = nodes[0].len();
        if node_length < 2 || node_length % 2 != 0 {
            return Err(SolverError::InvalidEncoding(format!(
                "sequence length {node_length} must be even and at least 2"
            )));
        }
        if literals.iter().flatten().chain(&nodes).any(|s| s.len() != node_length) {
            return Err(SolverError::InvalidEncoding(
                "all sequences must have the same length".to_string()
            ));
        }

        let h = node_length / 2;
        let mut edges = Vec::with_capacity(4 * n);
        for lit in &literals[0] {
            edges.push(glue(&nodes[0], &lit[..h]));
        }
        for lit in &literals[n - 1] {
            edges.push(glue(&lit[h..], &nodes[n]));
        }
        for i in 1..n {
            for lit in &literals[i] {
                edges.push(glue(&nodes[i][h..], &lit[..h]));
            }
        }
        for i in 0..n - 1 {
            for lit in &literals[i] {
                edges.push(glue(&lit[h..], &nodes[i + 1][..h]));
            }
        }

        Ok(Encoding { node_length, literals, nodes, edges })
    }

    pub fn num_vars(&self) -> usize {
        self.literals.len()
    }

    pub fn node_length(&self) -> usize {
        self.node_length
    }

    pub fn nodes(&self) -> &[BaseVec] {
        &self.nodes
    }

    pub fn edges(&self) -> &[BaseVec] {
        &self.edges
    }

    /// The sequence of a (1-based, signed) literal.
    ///
    /// Panics if the variable is not part of the encoding.
    pub fn literal(&self, lit: Literal) -> &BaseVec {
        let var = lit.unsigned_abs() as usize - 1;
        &self.literals[var][if lit > 0 { 0 } else { 1 }]
    }

    /// Length of a complete path through the graph.
    pub fn path_size(&self) -> usize {
        (2 * self.num_vars() + 1) * self.node_length
    }

    /// The initial sample: every edge, plus the complement of every
    /// literal and node sequence.
    pub fn fragments(&self) -> Result<Vec<Strand>, StrandError> {
        self.edges
            .iter()
            .cloned()
            .chain(self.literals.iter().flatten().map(|s| complement(s)))
            .chain(self.nodes.iter().map(|s| complement(s)))
            .map(Strand::single)
            .collect()
    }

    /// Read the assignment off a strand that holds a complete path,
    /// on either of its sequences.
    pub fn decode(&self, strand: &Strand) -> Option<Vec<bool>> {
        let start = &self.nodes[0];
        let path = if strand.primary().starts_with(start) {
            strand.primary().clone()
        } else {
            let secondary = reverse(strand.secondary()?);
            if !secondary.starts_with(start) {
                return None;
            }
            secondary
        };
        if path.len() < self.path_size() {
            return None;
        }
        let l = self.node_length;
        Some((0..self.num_vars())
            .map(|i| path[(2 * i + 1) * l..].starts_with(&self.literals[i][0]))
            .collect())
    }
}

fn glue(a: &[Base], b: &[Base]) -> BaseVec {
    a.iter().chain(b).copied().collect()
}
