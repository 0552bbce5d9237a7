//! The laboratory protocol: from a formula to a surviving strand.

use std::fmt;
use log::info;
use log::warn;
use rand::Rng;

use ms_strand::BaseVec;
use ms_tube::Population;
use ms_tube::SizeRange;

use crate::Cnf;
use crate::Encoding;
use crate::Parameters;
use crate::SolverConfig;
use crate::SolverError;

/// A step of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Sample,
    Amplify { rounds: usize },
    Hybridize,
    SizeSeparate(SizeRange),
    ProbeSeparate { clause: usize },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Sample => write!(f, "add sample"),
            Stage::Amplify { rounds } => write!(f, "amplify ({rounds} rounds)"),
            Stage::Hybridize => write!(f, "hybridize"),
            Stage::SizeSeparate(range) => write!(f, "size separation {range}"),
            Stage::ProbeSeparate { clause } => write!(f, "probe separation (clause {clause})"),
        }
    }
}

/// Tube size after a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub strands: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A satisfying assignment; index `i` holds variable `i + 1`.
    Found(Vec<bool>),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub outcome: Outcome,
    pub stages: Vec<StageReport>,
}

pub struct Solver {
    cnf: Cnf,
    encoding: Encoding,
    params: Parameters,
}

impl Solver {
    /// Validate the configuration and draw a random encoding for `cnf`.
    pub fn new<R: Rng + ?Sized>(
        cnf: Cnf, 
        config: &SolverConfig, 
        rng: &mut R
    ) -> Result<Self, SolverError> {
        let params = config.validate()?;
        let encoding = Encoding::random(cnf.num_vars(), params.node_length, rng)?;
        Ok(Solver { cnf, encoding, params })
    }

    /// Use a given encoding. It must cover every variable of `cnf`.
    pub fn with_encoding(
        cnf: Cnf, 
        encoding: Encoding, 
        config: &SolverConfig
    ) -> Result<Self, SolverError> {
        if encoding.num_vars() != cnf.num_vars() {
            return Err(SolverError::InvalidEncoding(format!(
                "encoding has {} variables, formula has {}", encoding.num_vars(), cnf.num_vars()
            )));
        }
        let params = config.validate()?;
        Ok(Solver { cnf, encoding, params })
    }

    pub fn cnf(&self) -> &Cnf {
        &self.cnf
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Run the whole protocol once:
    ///  1) grow partial paths: sample, PCR, hybridize, keep the long ones,
    ///  2) complete them: fresh sample, PCR, hybridize, keep full paths,
    ///  3) for every clause, keep paths carrying one of its literals.
    pub fn solve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Run, SolverError> {
        let p = &self.params;
        let n = self.cnf.num_vars();
        let l = self.encoding.node_length();
        let fragments = self.encoding.fragments()?;
        let mut stages = Vec::new();
        let mut tube = Population::new();

        tube.extend(fragments.iter().cloned());
        record(&mut stages, Stage::Sample, &tube);
        tube.amplify(p.pcr_rounds, p.copy, rng);
        record(&mut stages, Stage::Amplify { rounds: p.pcr_rounds }, &tube);
        tube.hybridize(&p.hybridization, rng);
        record(&mut stages, Stage::Hybridize, &tube);
        let partial = SizeRange::new((n + 1) * l, self.encoding.path_size())?;
        tube.size_separate(partial);
        record(&mut stages, Stage::SizeSeparate(partial), &tube);

        tube.extend(fragments);
        record(&mut stages, Stage::Sample, &tube);
        tube.amplify(p.pcr_rounds / 2, p.copy, rng);
        record(&mut stages, Stage::Amplify { rounds: p.pcr_rounds / 2 }, &tube);
        tube.hybridize(&p.hybridization, rng);
        record(&mut stages, Stage::Hybridize, &tube);
        let complete = SizeRange::exactly(self.encoding.path_size());
        tube.size_separate(complete);
        record(&mut stages, Stage::SizeSeparate(complete), &tube);
        tube.amplify(2, p.copy, rng);
        record(&mut stages, Stage::Amplify { rounds: 2 }, &tube);

        for (k, clause) in self.cnf.clauses().iter().enumerate() {
            let probes: Vec<BaseVec> = clause.iter()
                .map(|&lit| self.encoding.literal(lit).clone())
                .collect();
            tube.probe_separate(&probes, p.detection, rng);
            record(&mut stages, Stage::ProbeSeparate { clause: k + 1 }, &tube);
        }

        let outcome = match tube.extract_one().and_then(|s| self.encoding.decode(s)) {
            Some(assignment) if self.cnf.is_satisfied_by(&assignment) => Outcome::Found(assignment),
            Some(assignment) => {
                warn!("surviving strand decodes to a non-satisfying assignment {assignment:?}");
                Outcome::NotFound
            }
            None => Outcome::NotFound,
        };
        Ok(Run { outcome, stages })
    }
}

fn record(stages: &mut Vec<StageReport>, stage: Stage, tube: &Population) {
    info!("{stage}: {} strands", tube.len());
    stages.push(StageReport { stage, strands: tube.len() });
}
