//! Track records and the host's track selection.
//!
//! A [`TrackRecord`] is produced by the designer when a drawing is saved. It is
//! immutable after creation and handed to a [`TrackSelection`], which keeps at
//! most one custom track alongside an optional catalog pick.

use crate::error::TrackError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Prefix of every custom track identifier.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Where a track comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// A catalog circuit supplied by the host.
    Official,
    /// A track drawn in the designer.
    Custom,
}

impl TrackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Official => "official",
            TrackKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a `custom-<millis>` identifier from `now`.
///
/// Identifiers are strictly increasing within a process, so two saves in the
/// same millisecond still get distinct ids.
pub fn next_track_id(now: DateTime<Utc>) -> String {
    let wanted = now.timestamp_millis();
    let previous = LAST_ID_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(wanted.max(last.saturating_add(1)))
        })
        .unwrap_or(wanted);
    let issued = wanted.max(previous.saturating_add(1));
    format!("{CUSTOM_ID_PREFIX}{issued}")
}

/// A saved custom track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredTrackRecord")]
pub struct TrackRecord {
    id: String,
    name: String,
    kind: TrackKind,
    image_data: String,
    width: u32,
    created: DateTime<Utc>,
}

impl TrackRecord {
    /// Creates a custom track record stamped with the current time.
    ///
    /// Fails with [`TrackError::EmptyName`] when `name` is blank.
    pub fn new_custom(
        name: impl Into<String>,
        image_data: impl Into<String>,
        width: u32,
    ) -> Result<Self, TrackError> {
        Self::new_custom_at(name, image_data, width, Utc::now())
    }

    /// Creates a custom track record with an explicit creation time.
    pub fn new_custom_at(
        name: impl Into<String>,
        image_data: impl Into<String>,
        width: u32,
        created: DateTime<Utc>,
    ) -> Result<Self, TrackError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackError::EmptyName);
        }
        Ok(Self {
            id: next_track_id(created),
            name,
            kind: TrackKind::Custom,
            image_data: image_data.into(),
            width,
            created,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Encoded raster snapshot (a `data:image/png;base64,...` URL).
    pub fn image_data(&self) -> &str {
        &self.image_data
    }

    /// Stroke width in effect when the track was saved.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Read-only view handed to track consumers.
    pub fn summary(&self) -> TrackSummary {
        TrackSummary::from(self)
    }
}

/// Serialized form of a [`TrackRecord`], checked before it becomes one.
#[derive(Deserialize)]
struct StoredTrackRecord {
    id: String,
    name: String,
    kind: TrackKind,
    image_data: String,
    width: u32,
    created: DateTime<Utc>,
}

impl TryFrom<StoredTrackRecord> for TrackRecord {
    type Error = TrackError;

    fn try_from(stored: StoredTrackRecord) -> Result<Self, Self::Error> {
        if stored.name.trim().is_empty() {
            return Err(TrackError::EmptyName);
        }
        Ok(Self {
            id: stored.id,
            name: stored.name,
            kind: stored.kind,
            image_data: stored.image_data,
            width: stored.width,
            created: stored.created,
        })
    }
}

/// The fields track consumers read: name, kind and a descriptive length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    pub kind: TrackKind,
    /// Human readable lap length, e.g. "5.793 km". Absent for custom tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl TrackSummary {
    /// Summary of a catalog circuit.
    pub fn official(name: impl Into<String>, length: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TrackKind::Official,
            length: Some(length.into()),
        }
    }
}

impl From<&TrackRecord> for TrackSummary {
    fn from(record: &TrackRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind,
            length: None,
        }
    }
}

/// Host-side track state: a catalog pick and the latest custom track.
#[derive(Debug, Clone, Default)]
pub struct TrackSelection {
    selected: Option<TrackSummary>,
    custom: Option<TrackRecord>,
}

impl TrackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` as the active custom track, returning the one it replaced.
    pub fn set_custom(&mut self, record: TrackRecord) -> Option<TrackRecord> {
        tracing::debug!(id = record.id(), name = record.name(), "Active custom track replaced");
        self.custom.replace(record)
    }

    pub fn custom(&self) -> Option<&TrackRecord> {
        self.custom.as_ref()
    }

    /// Picks a catalog circuit.
    pub fn select_official(&mut self, summary: TrackSummary) {
        self.selected = Some(summary);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&TrackSummary> {
        self.selected.as_ref()
    }

    /// The track consumers should use: the catalog pick if any, else the custom track.
    pub fn active(&self) -> Option<TrackSummary> {
        self.selected
            .clone()
            .or_else(|| self.custom.as_ref().map(TrackSummary::from))
    }
}
