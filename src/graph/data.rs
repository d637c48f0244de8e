use std::collections::BTreeMap;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::graph::traits::EdgeId;

/// Lookup of a floating point weight per edge
pub trait EdgeWeights {
    /// Returns the weight of an edge, or None if the source has no value for it
    fn weight(&self, edge: EdgeId) -> Option<f64>;
}

impl EdgeWeights for [f64] {
    fn weight(&self, edge: EdgeId) -> Option<f64> {
        self.get(edge).copied()
    }
}

impl EdgeWeights for Vec<f64> {
    fn weight(&self, edge: EdgeId) -> Option<f64> {
        self.as_slice().weight(edge)
    }
}

/// A numeric array attached to the vertices or edges of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values")]
pub enum DataArray {
    Double(Vec<f64>),
    Float(Vec<f32>),
    Int(Vec<i64>),
    UnsignedInt(Vec<u64>),
}

impl DataArray {
    /// Number of tuples in the array
    pub fn len(&self) -> usize {
        match self {
            DataArray::Double(values) => values.len(),
            DataArray::Float(values) => values.len(),
            DataArray::Int(values) => values.len(),
            DataArray::UnsignedInt(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index` widened to f64
    pub fn value(&self, index: usize) -> Option<f64> {
        match self {
            DataArray::Double(values) => values.get(index).copied(),
            DataArray::Float(values) => values.get(index).and_then(|v| v.to_f64()),
            DataArray::Int(values) => values.get(index).and_then(|v| v.to_f64()),
            DataArray::UnsignedInt(values) => values.get(index).and_then(|v| v.to_f64()),
        }
    }

    /// Copies the array into double storage
    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.value(i)).collect()
    }
}

impl EdgeWeights for DataArray {
    fn weight(&self, edge: EdgeId) -> Option<f64> {
        self.value(edge)
    }
}

impl From<Vec<f64>> for DataArray {
    fn from(values: Vec<f64>) -> Self {
        DataArray::Double(values)
    }
}

impl From<Vec<f32>> for DataArray {
    fn from(values: Vec<f32>) -> Self {
        DataArray::Float(values)
    }
}

impl From<Vec<i64>> for DataArray {
    fn from(values: Vec<i64>) -> Self {
        DataArray::Int(values)
    }
}

impl From<Vec<u64>> for DataArray {
    fn from(values: Vec<u64>) -> Self {
        DataArray::UnsignedInt(values)
    }
}

/// Named arrays attached to one kind of graph element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataArrays {
    arrays: BTreeMap<String, DataArray>,
}

impl DataArrays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an array, replacing any array with the same name
    pub fn add_array(&mut self, name: impl Into<String>, array: impl Into<DataArray>) {
        self.arrays.insert(name.into(), array.into());
    }

    pub fn array(&self, name: &str) -> Option<&DataArray> {
        self.arrays.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}
