/// Columns of the sessions CSV that the reports read.
///
/// Other columns may be present in the file; they are loaded but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SessionId,
    SnapshotId,
    Timestamp,
    DurationMinutes,
    SessionType,
    ProgressStatus,
    Blockers,
    IssuesEncountered,
    Resolutions,
    SessionFocus,
    Achievements,
    KeyLearnings,
    TechnicalDetails,
    SessionNotes,
}

impl Field {
    /// Every known column, in the order they are usually written.
    pub const ALL: [Field; 14] = [
        Field::SessionId,
        Field::SnapshotId,
        Field::Timestamp,
        Field::DurationMinutes,
        Field::SessionType,
        Field::ProgressStatus,
        Field::Blockers,
        Field::IssuesEncountered,
        Field::Resolutions,
        Field::SessionFocus,
        Field::Achievements,
        Field::KeyLearnings,
        Field::TechnicalDetails,
        Field::SessionNotes,
    ];

    /// Free-text columns scanned by the search report (order matters: first hit wins).
    pub const SEARCHABLE: [Field; 8] = [
        Field::SessionFocus,
        Field::Achievements,
        Field::Blockers,
        Field::IssuesEncountered,
        Field::Resolutions,
        Field::KeyLearnings,
        Field::TechnicalDetails,
        Field::SessionNotes,
    ];

    /// Column name as it appears in the CSV header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SessionId => "session_id",
            Field::SnapshotId => "snapshot_id",
            Field::Timestamp => "timestamp",
            Field::DurationMinutes => "duration_minutes",
            Field::SessionType => "session_type",
            Field::ProgressStatus => "progress_status",
            Field::Blockers => "blockers",
            Field::IssuesEncountered => "issues_encountered",
            Field::Resolutions => "resolutions",
            Field::SessionFocus => "session_focus",
            Field::Achievements => "achievements",
            Field::KeyLearnings => "key_learnings",
            Field::TechnicalDetails => "technical_details",
            Field::SessionNotes => "session_notes",
        }
    }
}
