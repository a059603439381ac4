use soulnote_core::entry::{GratitudeEntry, UserId};

use crate::storage::line_codec::{
    escape, format_timestamp, join_fields, labeled, parse_timestamp, split_fields, strip_label,
    unescape, LineError,
};

const SLOT_LABELS: [&str; 3] = ["Gratitude 1", "Gratitude 2", "Gratitude 3"];

pub fn encode(entry: &GratitudeEntry) -> String {
    let mut fields = vec![format_timestamp(&entry.timestamp), entry.user_id.to_string()];
    for (label, item) in SLOT_LABELS.iter().zip(&entry.items) {
        let value = item.as_deref().map(escape);
        fields.push(labeled(label, value.as_deref()));
    }
    join_fields(&fields)
}

pub fn decode(line: &str) -> Result<GratitudeEntry, LineError> {
    let fields = split_fields(line, 2 + SLOT_LABELS.len())?;
    let timestamp = parse_timestamp(fields[0])?;
    let user_id = fields[1]
        .parse::<u64>()
        .map(UserId)
        .map_err(|_| LineError::InvalidUserId(fields[1].to_string()))?;

    let mut items: [Option<String>; 3] = Default::default();
    for (index, label) in SLOT_LABELS.into_iter().enumerate() {
        items[index] = strip_label(fields[2 + index], label)?
            .map(unescape)
            .transpose()?;
    }

    Ok(GratitudeEntry {
        timestamp,
        user_id,
        items,
    })
}
