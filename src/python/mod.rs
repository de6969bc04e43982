//! Python bindings for gametree.
//!
//! The analysis pipeline that produces game trees is typically hosted in
//! Python; these bindings let it hand the JSON document straight to the
//! validation and render passes.
//!
//! # Quick Start
//!
//! ```python
//! import gametree
//!
//! for v in gametree.validate_analysis(doc_json):
//!     print(v.rule, v.node_id, v.message)
//!
//! dot = gametree.render_analysis(doc_json)            # Graphviz source
//! graph = gametree.render_analysis(doc_json, "json")  # nodes + edges
//! ```

use pyo3::prelude::*;

mod py_tree;

pub use py_tree::*;

/// gametree: structural validation and rendering of extensive-form games.
#[pymodule]
fn gametree(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyViolation>()?;
    m.add_function(wrap_pyfunction!(validate_analysis, m)?)?;
    m.add_function(wrap_pyfunction!(render_analysis, m)?)?;
    Ok(())
}
