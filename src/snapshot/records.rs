use super::error::SnapshotError;
use crate::engine::VolumeSample;
use serde::Deserialize;
use std::io::Read;

/// One datastore summary as exported by the collector.
///
/// Field names follow the vSphere `DatastoreSummary` object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DatastoreRecord {
    pub name: String,
    pub capacity: Option<f64>,
    pub free_space: Option<f64>,
    pub uncommitted: Option<f64>,
}

impl TryFrom<DatastoreRecord> for VolumeSample {
    type Error = SnapshotError;

    fn try_from(record: DatastoreRecord) -> Result<Self, Self::Error> {
        let Some(free_space_bytes) = record.free_space else {
            return Err(SnapshotError::MissingField { name: record.name, field: "freeSpace" });
        };
        let Some(uncommitted_bytes) = record.uncommitted else {
            return Err(SnapshotError::MissingField { name: record.name, field: "uncommitted" });
        };

        Ok(Self {
            name: record.name,
            capacity_bytes: record.capacity,
            free_space_bytes,
            uncommitted_bytes,
        })
    }
}

/// Parse a JSON array of datastore summaries.
pub(crate) fn parse_snapshot<R: Read>(reader: R) -> Result<Vec<VolumeSample>, SnapshotError> {
    let records: Vec<DatastoreRecord> = serde_json::from_reader(reader)?;
    records.into_iter().map(VolumeSample::try_from).collect()
}
