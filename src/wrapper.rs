use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet};

use crate::miner::mine as mine_tracker;
use crate::tracker::Tracker;
use crate::transactions::TransactionStore;
use crate::types::ItemId;

macro_rules! pyfrozenset {
    ($py:expr,$x:expr) => {{
        let set: Py<PyFrozenSet> = PyFrozenSet::new($py, $x)?.into();
        set
    }};
}

#[pymodule]
fn apriori_miner(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine, m)?)?;
    Ok(())
}

/// Frequent itemsets as `{size: {frozenset(items): support}}`.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_frequency, /)")]
fn mine(transactions: Vec<Vec<ItemId>>, min_frequency: f64) -> PyResult<Py<PyDict>> {
    let store = TransactionStore::from_records(transactions);
    let tracker = mine_tracker(&store, min_frequency).map_err(|e| PyValueError::new_err(e.to_string()))?;
    convert_tracker(tracker)
}

fn convert_tracker(tracker: Tracker) -> PyResult<Py<PyDict>> {
    Python::with_gil(|py| {
        let mut layers: Vec<(usize, Py<PyDict>)> = Vec::with_capacity(tracker.layers().len());
        for layer in tracker.into_layers() {
            let size = layer.itemset_len();
            let mut itemset_counts = Vec::with_capacity(layer.len());
            for (itemset, support) in layer.into_counts() {
                itemset_counts.push((pyfrozenset![py, itemset.items()], support));
            }
            let py_itemset_counts: Py<PyDict> = itemset_counts.into_py_dict(py).into();
            layers.push((size, py_itemset_counts));
        }
        Ok(layers.into_py_dict(py).into())
    })
}
