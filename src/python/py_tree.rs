//! Validation and rendering bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::analysis::{AnalysisReport, GameTheoryAnalysis};
use crate::render::GraphAttributes;
use crate::validation::Violation;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn report(json: &str) -> PyResult<AnalysisReport> {
    let analysis = GameTheoryAnalysis::from_json(json).map_err(value_error)?;
    AnalysisReport::build(&analysis).map_err(value_error)
}

/// Python wrapper for Violation.
#[pyclass(name = "Violation")]
#[derive(Clone, Debug)]
pub struct PyViolation(pub Violation);

#[pymethods]
impl PyViolation {
    /// `id` of the offending node.
    #[getter]
    fn node_id(&self) -> String {
        self.0.node_id.clone()
    }

    /// Rule name, e.g. "ChoiceCardinality".
    #[getter]
    fn rule(&self) -> &'static str {
        self.0.rule.name()
    }

    #[getter]
    fn message(&self) -> String {
        self.0.message.clone()
    }

    fn __repr__(&self) -> String {
        format!("Violation(node_id={:?}, rule={})", self.0.node_id, self.0.rule)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }
}

/// Validate the game tree of an analysis JSON document.
///
/// Raises ValueError if the document does not parse, has no tree, or the
/// tree references a node cyclically.
#[pyfunction]
pub fn validate_analysis(json: &str) -> PyResult<Vec<PyViolation>> {
    Ok(report(json)?.violations.into_iter().map(PyViolation).collect())
}

/// Render the game tree of an analysis JSON document.
///
/// # Arguments
/// - json: the analysis document
/// - format: "dot" for Graphviz source, "json" for the graph description
#[pyfunction]
#[pyo3(signature = (json, format = "dot"))]
pub fn render_analysis(json: &str, format: &str) -> PyResult<String> {
    let graph = report(json)?.graph;
    match format {
        "dot" => Ok(graph.to_dot(&GraphAttributes::default())),
        "json" => serde_json::to_string(&graph).map_err(value_error),
        other => Err(value_error(format!("unknown format '{}', expected 'dot' or 'json'", other))),
    }
}
