use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{JsonObject, ToJsonObject};
use crate::error::ChartResult;

use super::DataSet;

/// Category labels plus the datasets plotted against them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    labels: Vec<String>,
    datasets: Vec<DataSet>,
}

impl ChartData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: DataSet) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn push_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.labels.push(label.into());
        self
    }

    pub fn push_dataset(&mut self, dataset: DataSet) -> &mut Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut Vec<String> {
        &mut self.labels
    }

    #[must_use]
    pub fn datasets(&self) -> &[DataSet] {
        &self.datasets
    }

    pub fn datasets_mut(&mut self) -> &mut Vec<DataSet> {
        &mut self.datasets
    }

    /// Validates every dataset in order; the first failure wins.
    pub fn validate(&self) -> ChartResult<()> {
        self.datasets.iter().try_for_each(DataSet::validate)
    }
}

impl ToJsonObject for ChartData {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        object.insert("labels".to_owned(), Value::from(self.labels.as_slice()));
        object.insert(
            "datasets".to_owned(),
            Value::Array(self.datasets.iter().map(ToJsonObject::to_value).collect()),
        );
        object
    }
}
