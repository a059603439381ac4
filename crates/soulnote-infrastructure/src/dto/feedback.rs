use soulnote_core::entry::{FeedbackEntry, UserId};

use crate::storage::line_codec::{
    escape, format_timestamp, join_fields, parse_timestamp, split_fields, unescape, LineError,
};

const NO_USERNAME: &str = "no username";

pub fn encode(entry: &FeedbackEntry) -> String {
    let username = entry
        .username
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| NO_USERNAME.to_string());
    join_fields(&[
        format_timestamp(&entry.timestamp),
        format!("{} ({})", entry.user_id, username),
        escape(&entry.text),
    ])
}

pub fn decode(line: &str) -> Result<FeedbackEntry, LineError> {
    let fields = split_fields(line, 3)?;
    let timestamp = parse_timestamp(fields[0])?;

    let (id, rest) = fields[1]
        .split_once(" (")
        .ok_or_else(|| LineError::InvalidUserId(fields[1].to_string()))?;
    let user_id = id
        .parse::<u64>()
        .map(UserId)
        .map_err(|_| LineError::InvalidUserId(id.to_string()))?;
    let username = rest
        .strip_suffix(')')
        .ok_or_else(|| LineError::InvalidValue(format!("username '{}'", rest)))?;
    let username = match username {
        NO_USERNAME => None,
        raw => Some(unescape(raw)?),
    };

    Ok(FeedbackEntry {
        timestamp,
        user_id,
        username,
        text: unescape(fields[2])?,
    })
}
