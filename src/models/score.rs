//! Score model
//!
//! Ordered measures of placed notes. A measure is a growable run of grid
//! subdivisions: inserting a note of duration `d` pushes every later note
//! `d` subdivisions to the right and grows the measure by `d`.

use serde::{Deserialize, Serialize};

use super::errors::EditError;
use super::voice::VoiceId;

/// Subdivisions in a fresh or cleared measure (sixteenth notes in 4/4)
pub const DEFAULT_SUBDIVISIONS: usize = 16;

/// A note placed inside a measure
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// Column within the owning measure (0-based)
    pub column: usize,
    pub voice: VoiceId,
    /// Length in subdivisions (>= 1)
    pub duration: usize,
}

impl Note {
    pub fn new(column: usize, voice: VoiceId, duration: usize) -> Self {
        Self { column, voice, duration }
    }

    fn sort_key(&self) -> (usize, usize) {
        (self.column, self.voice.display_order())
    }
}

/// One measure of the score
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Measure {
    pub subdivisions: usize,
    /// Sorted by (column, voice display order)
    pub notes: Vec<Note>,
}

/// Detached copy of a measure's content, held by the clipboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MeasureSnapshot {
    pub subdivisions: usize,
    pub notes: Vec<Note>,
}

impl Measure {
    pub fn new(subdivisions: usize) -> Self {
        Self {
            subdivisions,
            notes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn note_at(&self, column: usize, voice: VoiceId) -> Option<&Note> {
        self.notes
            .iter()
            .find(|n| n.column == column && n.voice == voice)
    }

    /// Insert a note, shifting every note at or after `column` right by
    /// `duration`.
    ///
    /// The occupancy check runs before anything is touched, so a rejected
    /// insert leaves the measure exactly as it was.
    pub fn insert_note(
        &mut self,
        column: usize,
        voice: VoiceId,
        duration: usize,
    ) -> Result<(), EditError> {
        if duration == 0 {
            return Err(EditError::InvalidDuration(duration));
        }
        if self.note_at(column, voice).is_some() {
            return Err(EditError::SlotOccupied { column, voice });
        }

        for note in self.notes.iter_mut().filter(|n| n.column >= column) {
            note.column += duration;
        }
        self.notes.push(Note::new(column, voice, duration));
        self.subdivisions += duration;
        self.notes.sort_by_key(Note::sort_key);
        Ok(())
    }

    /// Reset to an empty measure. Returns false when nothing changed.
    pub fn clear(&mut self, default_subdivisions: usize) -> bool {
        if self.notes.is_empty() && self.subdivisions == default_subdivisions {
            return false;
        }
        self.notes.clear();
        self.subdivisions = default_subdivisions;
        true
    }

    pub fn snapshot(&self) -> MeasureSnapshot {
        MeasureSnapshot {
            subdivisions: self.subdivisions,
            notes: self.notes.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &MeasureSnapshot) {
        self.subdivisions = snapshot.subdivisions;
        self.notes = snapshot.notes.clone();
        self.notes.sort_by_key(Note::sort_key);
    }
}

/// A note addressed on the concatenated grid of all measures
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalNote {
    pub measure_index: usize,
    pub global_column: usize,
    pub column: usize,
    pub voice: VoiceId,
    pub duration: usize,
}

/// (measure index, column within that measure)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureLocation {
    pub measure_index: usize,
    pub column: usize,
}

/// The whole score: at least one measure, a current measure, a clipboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "ScoreData")]
pub struct Score {
    measures: Vec<Measure>,
    current: usize,
    clipboard: Option<MeasureSnapshot>,
    default_subdivisions: usize,
}

/// Unchecked wire form of `Score`
#[derive(Deserialize)]
struct ScoreData {
    measures: Vec<Measure>,
    current: usize,
    clipboard: Option<MeasureSnapshot>,
    default_subdivisions: usize,
}

impl TryFrom<ScoreData> for Score {
    type Error = EditError;

    fn try_from(data: ScoreData) -> Result<Self, Self::Error> {
        // current must name an existing measure, which also rules out an empty score
        if data.current >= data.measures.len() {
            return Err(EditError::MeasureOutOfRange {
                index: data.current,
                count: data.measures.len(),
            });
        }
        Ok(Self {
            measures: data.measures,
            current: data.current,
            clipboard: data.clipboard,
            default_subdivisions: data.default_subdivisions,
        })
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new(DEFAULT_SUBDIVISIONS)
    }
}

impl Score {
    /// A score with a single empty measure
    pub fn new(default_subdivisions: usize) -> Self {
        Self {
            measures: vec![Measure::new(default_subdivisions)],
            current: 0,
            clipboard: None,
            default_subdivisions,
        }
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    pub fn measure_count(&self) -> usize {
        self.measures.len()
    }

    pub fn measure(&self, index: usize) -> Result<&Measure, EditError> {
        let count = self.measures.len();
        self.measures
            .get(index)
            .ok_or(EditError::MeasureOutOfRange { index, count })
    }

    fn measure_mut(&mut self, index: usize) -> Result<&mut Measure, EditError> {
        let count = self.measures.len();
        self.measures
            .get_mut(index)
            .ok_or(EditError::MeasureOutOfRange { index, count })
    }

    pub fn default_subdivisions(&self) -> usize {
        self.default_subdivisions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Select a measure, clamped to the valid range. Returns the new index.
    pub fn select_measure(&mut self, index: usize) -> usize {
        self.current = index.min(self.measures.len() - 1);
        self.current
    }

    pub fn clipboard(&self) -> Option<&MeasureSnapshot> {
        self.clipboard.as_ref()
    }

    pub fn insert_note(
        &mut self,
        measure_index: usize,
        column: usize,
        voice: VoiceId,
        duration: usize,
    ) -> Result<(), EditError> {
        self.measure_mut(measure_index)?
            .insert_note(column, voice, duration)
    }

    /// Reset a measure to the default subdivision count with no notes
    pub fn clear_measure(&mut self, measure_index: usize) -> Result<bool, EditError> {
        let default_subdivisions = self.default_subdivisions;
        Ok(self.measure_mut(measure_index)?.clear(default_subdivisions))
    }

    /// Append an empty measure and make it current
    pub fn add_measure(&mut self) -> usize {
        self.measures.push(Measure::new(self.default_subdivisions));
        self.current = self.measures.len() - 1;
        self.current
    }

    pub fn copy_measure(&self, measure_index: usize) -> Result<MeasureSnapshot, EditError> {
        Ok(self.measure(measure_index)?.snapshot())
    }

    pub fn paste_measure(
        &mut self,
        measure_index: usize,
        snapshot: &MeasureSnapshot,
    ) -> Result<(), EditError> {
        self.measure_mut(measure_index)?.restore(snapshot);
        Ok(())
    }

    /// Copy a measure into the clipboard
    pub fn copy_to_clipboard(&mut self, measure_index: usize) -> Result<(), EditError> {
        self.clipboard = Some(self.copy_measure(measure_index)?);
        Ok(())
    }

    /// Overwrite a measure with the clipboard content
    pub fn paste_from_clipboard(&mut self, measure_index: usize) -> Result<(), EditError> {
        let snapshot = self.clipboard.clone().ok_or(EditError::ClipboardEmpty)?;
        self.paste_measure(measure_index, &snapshot)
    }

    /// Sum of subdivisions across all measures
    pub fn total_columns(&self) -> usize {
        self.measures.iter().map(|m| m.subdivisions).sum()
    }

    /// Global column at which a measure starts
    pub fn measure_offset(&self, measure_index: usize) -> usize {
        self.measures
            .iter()
            .take(measure_index)
            .map(|m| m.subdivisions)
            .sum()
    }

    /// Find the measure owning a global column.
    ///
    /// Columns past the end clamp to the last column of the last measure,
    /// so a commit always lands inside a real measure.
    pub fn locate(&self, global_column: usize) -> MeasureLocation {
        let mut start = 0;
        for (measure_index, measure) in self.measures.iter().enumerate() {
            if global_column < start + measure.subdivisions {
                return MeasureLocation {
                    measure_index,
                    column: global_column - start,
                };
            }
            start += measure.subdivisions;
        }

        let measure_index = self.measures.len() - 1;
        MeasureLocation {
            measure_index,
            column: self.measures[measure_index].subdivisions.saturating_sub(1),
        }
    }

    /// Every note on the concatenated grid, sorted by (global column, voice order)
    pub fn global_notes(&self) -> Vec<GlobalNote> {
        let mut offset = 0;
        let mut notes = Vec::new();
        for (measure_index, measure) in self.measures.iter().enumerate() {
            notes.extend(measure.notes.iter().map(|n| GlobalNote {
                measure_index,
                global_column: offset + n.column,
                column: n.column,
                voice: n.voice,
                duration: n.duration,
            }));
            offset += measure.subdivisions;
        }
        notes.sort_by_key(|n| (n.global_column, n.voice.display_order()));
        notes
    }
}
