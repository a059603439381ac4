use chrono::NaiveDate;
use soulnote_core::entry::{
    EntryRepository, FeedbackEntry, GratitudeEntry, MoodEntry, MoodScore, UserId,
};
use soulnote_infrastructure::FileEntryRepository;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn at(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn mood(user: u64, minute: u32, score: u8, note: Option<&str>, tags: &[&str]) -> MoodEntry {
    MoodEntry {
        timestamp: at(21, minute),
        user_id: UserId(user),
        score: MoodScore::new(score).unwrap(),
        note: note.map(str::to_string),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_mood_line_layout() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileEntryRepository::new(temp_dir.path());

    repo.append_mood(&mood(42, 0, 7, Some("Productive day"), &["Work", "Growth"]))
        .await
        .unwrap();

    let content = fs::read_to_string(temp_dir.path().join("mood_diary.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Mood: 7/10"));
    assert!(lines[0].contains("Note: Productive day"));
    assert!(lines[0].contains("Tags: Work, Growth"));
}

#[tokio::test]
async fn test_text_with_delimiters_reads_back_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileEntryRepository::new(temp_dir.path());
    let tricky = mood(
        7,
        0,
        4,
        Some("rain | wind, then\nsun \\o/"),
        &["Work | Life", "Calm, mostly"],
    );

    repo.append_mood(&tricky).await.unwrap();

    let content = fs::read_to_string(temp_dir.path().join("mood_diary.txt")).unwrap();
    assert_eq!(content.lines().count(), 1);
    let entries = repo.recent_mood_entries(UserId(7), 5).await.unwrap();
    assert_eq!(entries, vec![tricky]);
}

#[tokio::test]
async fn test_recent_entries_newest_first_with_limit_and_filter() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileEntryRepository::new(temp_dir.path());

    for (minute, user, score) in [(0, 1, 2), (1, 2, 9), (2, 1, 4), (3, 1, 6), (4, 2, 1), (5, 1, 8)] {
        repo.append_mood(&mood(user, minute, score, None, &[])).await.unwrap();
    }

    let entries = repo.recent_mood_entries(UserId(1), 3).await.unwrap();
    let scores: Vec<u8> = entries.iter().map(|entry| entry.score.value()).collect();
    assert_eq!(scores, vec![8, 6, 4]);
    assert!(entries.iter().all(|entry| entry.user_id == UserId(1)));
}

#[tokio::test]
async fn test_malformed_lines_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileEntryRepository::new(temp_dir.path());
    repo.append_mood(&mood(1, 0, 3, None, &[])).await.unwrap();

    let path = temp_dir.path().join("mood_diary.txt");
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("not a record\n");
    content.push_str("2026-10-18 21:01:00 | 1 | Mood: 12/10 | Note: | Tags:\n");
    content.push_str("2026-10-18 21:02:00 | 1 | Mood: 5/10\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    repo.append_mood(&mood(1, 3, 9, Some("ok"), &[])).await.unwrap();

    let entries = repo.recent_mood_entries(UserId(1), 10).await.unwrap();
    let scores: Vec<u8> = entries.iter().map(|entry| entry.score.value()).collect();
    assert_eq!(scores, vec![9, 3]);
}

#[tokio::test]
async fn test_gratitude_and_feedback_logs() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileEntryRepository::new(temp_dir.path());

    repo.append_gratitude(&GratitudeEntry {
        timestamp: at(9, 0),
        user_id: UserId(5),
        items: [Some("Coffee".to_string()), None, Some("Friends".to_string())],
    })
    .await
    .unwrap();
    repo.append_feedback(&FeedbackEntry {
        timestamp: at(9, 30),
        user_id: UserId(5),
        username: None,
        text: "More tags please".to_string(),
    })
    .await
    .unwrap();

    let gratitude = fs::read_to_string(temp_dir.path().join("gratitude_diary.txt")).unwrap();
    assert_eq!(
        gratitude,
        "2026-10-18 09:00:00 | 5 | Gratitude 1: Coffee | Gratitude 2: | Gratitude 3: Friends\n"
    );
    let feedback = fs::read_to_string(temp_dir.path().join("feedback.txt")).unwrap();
    assert_eq!(
        feedback,
        "2026-10-18 09:30:00 | 5 (no username) | More tags please\n"
    );
    assert!(!repo.has_mood_entries(None).await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_keep_lines_whole() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(FileEntryRepository::new(temp_dir.path()));
    let note = "n".repeat(2000);

    let mut handles = Vec::new();
    for user in 1..=10u64 {
        let repo = repo.clone();
        let note = note.clone();
        handles.push(tokio::spawn(async move {
            for minute in 0..20 {
                repo.append_mood(&mood(user, minute, 5, Some(&note), &["Work"]))
                    .await
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    for user in 1..=10u64 {
        let entries = repo.recent_mood_entries(UserId(user), 100).await.unwrap();
        assert_eq!(entries.len(), 20);
        assert!(entries.iter().all(|entry| entry.note.as_deref() == Some(note.as_str())));
    }
}
