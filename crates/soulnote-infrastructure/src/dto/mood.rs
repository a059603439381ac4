use soulnote_core::entry::{MoodEntry, MoodScore, UserId};

use crate::storage::line_codec::{
    escape, format_timestamp, join_fields, join_list, labeled, parse_timestamp, split_fields,
    split_list, strip_label, unescape, LineError,
};

const FIELD_COUNT: usize = 5;

pub fn encode(entry: &MoodEntry) -> String {
    let note = entry.note.as_deref().map(escape);
    let tags = join_list(&entry.tags);
    join_fields(&[
        format_timestamp(&entry.timestamp),
        entry.user_id.to_string(),
        format!("Mood: {}/10", entry.score),
        labeled("Note", note.as_deref()),
        labeled("Tags", (!tags.is_empty()).then_some(tags.as_str())),
    ])
}

pub fn decode(line: &str) -> Result<MoodEntry, LineError> {
    let fields = split_fields(line, FIELD_COUNT)?;

    let timestamp = parse_timestamp(fields[0])?;
    let user_id = parse_user_id(fields[1])?;

    let mood = strip_label(fields[2], "Mood")?
        .ok_or_else(|| LineError::InvalidValue("empty mood".to_string()))?;
    let score = mood
        .strip_suffix("/10")
        .and_then(|value| value.parse::<u8>().ok())
        .and_then(MoodScore::new)
        .ok_or_else(|| LineError::InvalidValue(format!("mood '{}'", mood)))?;

    let note = strip_label(fields[3], "Note")?.map(unescape).transpose()?;
    let tags = match strip_label(fields[4], "Tags")? {
        Some(raw) => split_list(raw)?,
        None => Vec::new(),
    };

    Ok(MoodEntry {
        timestamp,
        user_id,
        score,
        note,
        tags,
    })
}

/// Reads only the user id field, for cheap filtering.
pub fn user_id_of(line: &str) -> Option<UserId> {
    let fields = split_fields(line, FIELD_COUNT).ok()?;
    parse_user_id(fields[1]).ok()
}

fn parse_user_id(raw: &str) -> Result<UserId, LineError> {
    raw.parse::<u64>()
        .map(UserId)
        .map_err(|_| LineError::InvalidUserId(raw.to_string()))
}
