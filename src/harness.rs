//! Entry point of the solver and writers for its `.sol` and `.trace` outputs.

use crate::bounded_search::{BranchAndBound, SearchConfig, Termination};
use crate::cust_error::ProcessingError;
use crate::graph::DyUGraph;
use crate::tracker::Improvement;
use fxhash::FxHashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of a solver run. `cover` uses 0-based node ids.
#[derive(Debug, Clone)]
pub struct Solution {
    pub cover: FxHashSet<usize>,
    pub trace: Vec<Improvement>,
    pub termination: Termination,
}

/// Searches a minimum vertex cover of `graph` within `cutoff`.
pub fn solve(graph: &DyUGraph, cutoff: Duration) -> Result<Solution, ProcessingError> {
    solve_with(graph, SearchConfig::with_cutoff(cutoff))
}

/// Like `solve`, with full control over the search. The returned cover is checked against `graph`.
pub fn solve_with(graph: &DyUGraph, config: SearchConfig) -> Result<Solution, ProcessingError> {
    let mut bnb = BranchAndBound::new(graph, config);
    let termination = bnb.run()?;
    let (cover, trace) = bnb.into_result();
    if !graph.is_vertex_cover(&cover) {
        return Err(ProcessingError::InvalidSolution(
                format!("{} nodes leave an edge uncovered", cover.len())))
    }
    Ok(Solution { cover, trace, termination })
}

impl Solution {

    /// Cover in ascending order, 1-based.
    pub fn sorted_cover(&self) -> Vec<usize> {
        let mut cover: Vec<usize> = self.cover.iter().map(|node| node + 1).collect();
        cover.sort_unstable();
        cover
    }

    /// Writes the cover size and, on the next line, the comma separated cover.
    pub fn write_solution<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "{}", self.cover.len())?;
        let line: Vec<String> = self.sorted_cover().iter().map(|node| node.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
        Ok(())
    }

    /// Writes one `time,size` line per improvement.
    pub fn write_trace<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        for improvement in &self.trace {
            writeln!(out, "{:.2},{}", improvement.elapsed.as_secs_f64(), improvement.size)?;
        }
        Ok(())
    }
}

/// Returns the paths of the `.sol` and `.trace` files for a run on `input`, named
/// `<stem>_<alg>_<cutoff>` inside `dir`.
pub fn output_paths(dir: &Path, input: &Path, alg: &str, cutoff: f64) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = format!("{}_{}_{}", stem, alg, cutoff);
    (dir.join(format!("{}.sol", base)), dir.join(format!("{}.trace", base)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn solve_and_write_test() {
        let graph = DyUGraph::read_adj(Cursor::new("6 7 0\n2 3\n1 3 4\n1 2 5\n2 5 6\n3 4\n4\n")).unwrap();
        let solution = solve(&graph, Duration::from_secs(10)).unwrap();
        assert_eq!(solution.termination, Termination::Exhausted);
        assert_eq!(solution.cover.len(), 3);
        let mut sol = Vec::new();
        assert!(solution.write_solution(&mut sol).is_ok());
        let sol = String::from_utf8(sol).unwrap();
        let mut lines = sol.lines();
        assert_eq!(lines.next(), Some("3"));
        let ids: Vec<usize> = lines.next().unwrap().split(',').map(|id| id.parse().unwrap()).collect();
        assert_eq!(ids, solution.sorted_cover());
        assert!(ids.iter().all(|id| (1..=6).contains(id)));
        let mut trace = Vec::new();
        assert!(solution.write_trace(&mut trace).is_ok());
        let trace = String::from_utf8(trace).unwrap();
        assert_eq!(trace.lines().count(), solution.trace.len());
        assert!(trace.lines().last().unwrap().ends_with(",3"));
    }

    #[test]
    fn write_trace_format_test() {
        let solution = Solution {
            cover: vec![0, 2].into_iter().collect(),
            trace: vec![
                Improvement { size: 3, elapsed: Duration::from_millis(10) },
                Improvement { size: 2, elapsed: Duration::from_millis(1250) },
            ],
            termination: Termination::Cutoff,
        };
        let mut out = Vec::new();
        solution.write_trace(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.01,3\n1.25,2\n");
        let mut out = Vec::new();
        solution.write_solution(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n1,3\n");
    }

    #[test]
    fn output_paths_test() {
        let (sol, trace) = output_paths(Path::new("out"), Path::new("data/karate.graph"), "BnB", 600.0);
        assert_eq!(sol, Path::new("out/karate_BnB_600.sol"));
        assert_eq!(trace, Path::new("out/karate_BnB_600.trace"));
    }
}
