use super::*;
use crate::config::Settings;

fn quiet_settings() -> Settings {
    let mut settings = Settings::default();
    settings.shell.show_menu = false;
    settings.shuffle.seed = Some(3);
    settings
}

/// Feed `script` to a fresh session and return it with everything it printed.
fn run_script(settings: Settings, script: &str) -> (Session, String) {
    let mut session = Session::new(settings);
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

const ADD_THREE: &str = "1\nImagine\nLennon\nRock\n1971\n\
1\nHey Jude\nBeatles\nRock\n1968\n\
1\nYesterday\nBeatles\nPop\n1965\n";

#[test]
fn add_and_print_playlist_in_title_order() {
    let script = format!("{ADD_THREE}7\n8\n");
    let (session, out) = run_script(quiet_settings(), &script);

    assert_eq!(out.matches("Song added successfully").count(), 3);
    let listing: Vec<&str> = out
        .lines()
        .filter(|l| l.contains(" by "))
        .map(|l| l.trim_start_matches("Enter your choice: "))
        .collect();
    assert_eq!(
        listing,
        vec![
            "Hey Jude by Beatles (Rock, 1968)",
            "Imagine by Lennon (Rock, 1971)",
            "Yesterday by Beatles (Pop, 1965)",
        ]
    );
    assert!(out.ends_with("Exiting program...\n"));
    assert_eq!(session.index().len(), 3);
}

#[test]
fn add_records_artist_side_index() {
    let (session, _) = run_script(quiet_settings(), ADD_THREE);
    let artists: Vec<&str> = session
        .artists()
        .iter()
        .map(|e| e.artist.as_str())
        .collect();
    assert_eq!(artists, vec!["Beatles", "Beatles", "Lennon"]);
}

#[test]
fn add_refuses_case_insensitive_duplicate_title() {
    let script = "1\nImagine\nLennon\nRock\n1971\n1\nIMAGINE\n";
    let (session, out) = run_script(quiet_settings(), script);
    assert!(out.contains("A song with the same title already exists."));
    assert_eq!(session.index().len(), 1);
    assert_eq!(session.artists().len(), 1);
}

#[test]
fn add_validates_fields() {
    let script = "1\n\n1\nSong\n\n1\nSong\nArtist\nGenre\nabc\n1\nSong\nArtist\nGenre\n-3\n";
    let (session, out) = run_script(quiet_settings(), script);
    assert!(out.contains("Title cannot be empty."));
    assert!(out.contains("Artist name cannot be empty."));
    assert_eq!(
        out.matches("Year should be a positive number.").count(),
        2
    );
    assert!(session.index().is_empty());
}

#[test]
fn add_rejects_overlong_genre() {
    let script = format!("1\nSong\nArtist\n{}\n", "g".repeat(50));
    let (session, out) = run_script(quiet_settings(), &script);
    assert!(out.contains("Genre cannot be longer than 49 characters."));
    assert!(session.index().is_empty());
}

#[test]
fn filter_by_each_field() {
    let script = format!(
        "{ADD_THREE}2\n1\nhey jude\n2\n2\nbeatles\n2\n3\nJAZZ\n2\n4\n1965\n2\n4\n2000\n2\n9\n2\n5\n"
    );
    let (_, out) = run_script(quiet_settings(), &script);

    assert!(out.contains("Hey Jude by Beatles (Rock, 1968)\n"));
    assert!(out.contains(
        "Songs by artist beatles:\nHey Jude by Beatles (Rock, 1968)\nYesterday by Beatles (Pop, 1965)\n"
    ));
    assert!(out.contains("No songs found with the specified genre."));
    assert!(out.contains("Songs from 1965:\nYesterday by Beatles (Pop, 1965)\n"));
    assert!(out.contains("No songs found for the year."));
    assert!(out.contains("Invalid choice in the Filter submenu"));
}

#[test]
fn filter_by_title_reports_missing_song() {
    let (_, out) = run_script(quiet_settings(), "2\n1\nNowhere\n");
    assert!(out.contains("Song not found"));
}

#[test]
fn delete_existing_and_missing_titles() {
    let script = format!("{ADD_THREE}3\nimagine\n3\nNonexistent\n");
    let (session, out) = run_script(quiet_settings(), &script);
    assert!(out.contains("Song deleted successfully"));
    assert!(out.contains(
        "Song with title 'Nonexistent' not found in the playlist. Cannot delete."
    ));
    assert_eq!(session.index().len(), 2);
    assert!(session.index().find_by_title("Imagine").is_none());
}

#[test]
fn empty_playlist_messages() {
    let (_, out) = run_script(quiet_settings(), "4\n5\n6\n7\n");
    assert!(out.contains("The playlist is empty. Cannot shuffle."));
    assert!(out.contains("There are no songs to find the most common artist."));
    assert!(out.contains("There are no songs to find the most common genre."));
    assert!(out.contains("Playlist is empty."));
}

#[test]
fn most_common_reports_longest_streak() {
    let script = format!("{ADD_THREE}5\n6\n");
    let (_, out) = run_script(quiet_settings(), &script);
    assert!(out.contains("Most common artist: Beatles (1 songs)"));
    assert!(out.contains("Most common genre: Rock (2 songs)"));
}

#[test]
fn seeded_shuffle_lists_every_track_once_and_repeats() {
    let script = format!("{ADD_THREE}4\n");
    let shuffled_lines = |out: &str| -> Vec<String> {
        let after = &out[out.rfind("Song added successfully").unwrap()..];
        after
            .lines()
            .filter(|l| l.contains(" by "))
            .map(|l| l.trim_start_matches("Enter your choice: ").to_string())
            .collect()
    };

    let (_, first) = run_script(quiet_settings(), &script);
    let (_, second) = run_script(quiet_settings(), &script);
    let a = shuffled_lines(&first);
    assert_eq!(a, shuffled_lines(&second));

    let mut sorted = a.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        vec![
            "Hey Jude by Beatles (Rock, 1968)",
            "Imagine by Lennon (Rock, 1971)",
            "Yesterday by Beatles (Pop, 1965)",
        ]
    );
}

#[test]
fn menu_is_printed_with_banner() {
    let mut settings = quiet_settings();
    settings.shell.show_menu = true;
    settings.shell.banner = "Setlist".to_string();
    let (_, out) = run_script(settings, "8\n");
    assert!(out.starts_with("\nSetlist\n-------\n1. Add a song\n"));
    assert!(out.contains("8. Exit\n"));
}

#[test]
fn invalid_choice_and_end_of_input() {
    let (_, out) = run_script(quiet_settings(), "42\nzzz\n");
    assert_eq!(out.matches("Invalid choice").count(), 2);
    // Input ran out without "8": the loop still ends cleanly.
    assert!(!out.contains("Exiting program..."));
}

#[test]
fn end_of_input_mid_entry_ends_session() {
    let (session, _) = run_script(quiet_settings(), "1\nHalf Entered\nSomeone\n");
    assert!(session.index().is_empty());
}
