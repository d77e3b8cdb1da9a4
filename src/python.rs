use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::exceptions;

use crate::bag::{BagOfPatterns, Query};
use crate::error::Error;
use crate::tokenizer::{Tokenizer, WordTokenizer};

fn runtime_error(err: Error) -> PyErr {
    PyErr::new::<exceptions::PyRuntimeError, _>(err.to_string())
}

#[pyclass]
pub struct PatternBag {
    bag: BagOfPatterns<WordTokenizer>,
}

// Python wrapper for the bag of patterns.
#[pymethods]
impl PatternBag {
    #[new]
    fn new(py: Python, patterns: &PyDict) -> PyResult<Self> {
        /* Keys of any type are matched by their string form; values which
         * are not text are accepted as empty patterns */
        let corpus = patterns.iter()
            .map(|(key, value)| {
                let key = key.str()?.to_str()?.to_string();
                let text = value.extract::<String>().unwrap_or_default();
                Ok((key, text))
            })
            .collect::<PyResult<Vec<(String, String)>>>()?;

        let bag = py.allow_threads(
            move || {
                BagOfPatterns::from_corpus(WordTokenizer::new(), corpus)
            }).map_err(runtime_error)?;
        Ok(PatternBag { bag })
    }

    /// Returns (index, score) of the best matching pattern, (0, 0.0) if none.
    fn best_for(&self, py: Python, snippet: &str) -> PyResult<(u64, f64)> {
        let bag = &self.bag;
        let result = py.allow_threads(
            move || {
                bag.best_for(snippet)
            }).map_err(runtime_error)?;
        Ok((result.index, result.score))
    }

    fn search(&self, py: Python, snippet: &str, limit: Option<usize>) -> PyResult<Vec<(u64, f64)>> {
        let bag = &self.bag;
        let query = Query::new(snippet).limit(limit);
        let results = py.allow_threads(
            move || {
                bag.search(&query)
            }).map_err(runtime_error)?;
        Ok(results.iter().map(|result| (result.index, result.score)).collect())
    }

    fn __len__(&self) -> usize {
        self.bag.len()
    }
}

/* Token hashes as seen by the bag, useful to debug matching */
#[pyfunction]
fn tokenize(text: &str) -> PyResult<Vec<u64>> {
    let tokens = WordTokenizer::new().tokenize(text).map_err(runtime_error)?;
    Ok(tokens.iter().map(|token| token.hash).collect())
}

#[pymodule]
fn patternbag(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__doc__", "Bag of patterns: TF-IDF pattern matching in Rust")?;
    m.add_class::<PatternBag>()?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    Ok(())
}
