use std::fmt::Display;
use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::artists::ArtistIndex;
use crate::config::Settings;
use crate::index::{Track, TrackIndex};

use super::ShellError;
use super::input::{Field, check_field, parse_choice, parse_year};

const MAIN_MENU: &[&str] = &[
    "1. Add a song",
    "2. Filter",
    "3. Delete a song",
    "4. Shuffle playlist",
    "5. Find most common artist",
    "6. Find most common genre",
    "7. Print playlist",
    "8. Exit",
];

const FILTER_MENU: &[&str] = &[
    "1. Title",
    "2. Artist",
    "3. Genre",
    "4. Year",
    "5. Back to main menu",
];

/// Whether the main loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented prompt/answer channel.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `text` without a newline and read one answer line.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn say(&mut self, text: impl Display) -> Result<(), ShellError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn list<'a>(&mut self, tracks: impl IntoIterator<Item = &'a Track>) -> Result<(), ShellError> {
        for track in tracks {
            self.say(track)?;
        }
        Ok(())
    }
}

/// One interactive session: the playlist, its artist log and the shell state
/// that drives them.
pub struct Session {
    settings: Settings,
    index: TrackIndex,
    artists: ArtistIndex,
    rng: StdRng,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.shuffle.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            settings,
            index: TrackIndex::new(),
            artists: ArtistIndex::new(),
            rng,
        }
    }

    pub fn index(&self) -> &TrackIndex {
        &self.index
    }

    pub fn artists(&self) -> &ArtistIndex {
        &self.artists
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), ShellError> {
        let mut console = Console { input, output };
        loop {
            if self.settings.shell.show_menu {
                self.print_main_menu(&mut console)?;
            }
            let Some(answer) = console.prompt("\nEnter your choice: ")? else {
                return Ok(());
            };
            let flow = match parse_choice(&answer) {
                Some(1) => self.add(&mut console)?,
                Some(2) => self.filter(&mut console)?,
                Some(3) => self.delete(&mut console)?,
                Some(4) => self.shuffle(&mut console)?,
                Some(5) => self.most_common_artist(&mut console)?,
                Some(6) => self.most_common_genre(&mut console)?,
                Some(7) => self.print_playlist(&mut console)?,
                Some(8) => {
                    console.say("Exiting program...")?;
                    Flow::Exit
                }
                _ => {
                    console.say("Invalid choice")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn print_main_menu<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(), ShellError> {
        let banner = &self.settings.shell.banner;
        console.say(format_args!("\n{banner}"))?;
        console.say("-".repeat(banner.chars().count()))?;
        for line in MAIN_MENU {
            console.say(line)?;
        }
        Ok(())
    }

    fn add<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        let limits = &self.settings.limits;

        let Some(title) = console.prompt("Enter song title: ")? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = check_field(Field::Title, &title, limits) {
            warn!(error = %e, "rejected title");
            console.say(e)?;
            return Ok(Flow::Continue);
        }
        if self.index.find_by_title(&title).is_some() {
            console.say(
                "A song with the same title already exists. Please enter a different title.",
            )?;
            return Ok(Flow::Continue);
        }

        let Some(artist) = console.prompt("Enter artist name: ")? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = check_field(Field::Artist, &artist, limits) {
            warn!(error = %e, "rejected artist");
            console.say(e)?;
            return Ok(Flow::Continue);
        }

        let Some(genre) = console.prompt("Enter genre: ")? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = check_field(Field::Genre, &genre, limits) {
            warn!(error = %e, "rejected genre");
            console.say(e)?;
            return Ok(Flow::Continue);
        }

        let Some(year_input) = console.prompt("Enter year: ")? else {
            return Ok(Flow::Exit);
        };
        let year = match parse_year(&year_input, limits) {
            Ok(year) => year,
            Err(e) => {
                warn!(error = %e, "rejected year");
                console.say(e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.index.insert(title.as_str(), artist.as_str(), genre, year) {
            Ok(()) => {
                info!(title = %title, artist = %artist, "song added");
                self.artists.record(artist, title);
                console.say("Song added successfully")?;
            }
            Err(e) => {
                warn!(error = %e, "insert refused");
                console.say(e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn filter<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        console.say("\nFilter by:")?;
        for line in FILTER_MENU {
            console.say(line)?;
        }
        let Some(answer) = console.prompt("\nEnter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        match parse_choice(&answer) {
            Some(1) => {
                let Some(title) = console.prompt("Enter song title to filter: ")? else {
                    return Ok(Flow::Exit);
                };
                match self.index.find_by_title(&title) {
                    Some(track) => console.say(track)?,
                    None => console.say("Song not found")?,
                }
            }
            Some(2) => {
                let Some(artist) = console.prompt("Enter artist name to filter: ")? else {
                    return Ok(Flow::Exit);
                };
                let found = self.index.find_all_by_artist(&artist);
                if found.is_empty() {
                    console.say("No songs found with the specified artist.")?;
                } else {
                    console.say(format_args!("Songs by artist {artist}:"))?;
                    console.list(found)?;
                }
            }
            Some(3) => {
                let Some(genre) = console.prompt("Enter genre to filter: ")? else {
                    return Ok(Flow::Exit);
                };
                let found = self.index.find_all_by_genre(&genre);
                if found.is_empty() {
                    console.say("No songs found with the specified genre.")?;
                } else {
                    console.say(format_args!("Songs with genre {genre}:"))?;
                    console.list(found)?;
                }
            }
            Some(4) => {
                let Some(year_input) = console.prompt("Enter year to filter: ")? else {
                    return Ok(Flow::Exit);
                };
                let (found, count) = match parse_choice(&year_input) {
                    Some(year) => self.index.find_all_by_year(year),
                    None => (Vec::new(), 0),
                };
                if count == 0 {
                    console.say("No songs found for the year.")?;
                } else {
                    console.say(format_args!("Songs from {}:", year_input.trim()))?;
                    console.list(found)?;
                }
            }
            Some(5) => {}
            _ => console.say("Invalid choice in the Filter submenu")?,
        }
        Ok(Flow::Continue)
    }

    fn delete<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        let Some(title) = console.prompt("Enter song title to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.index.delete(&title) {
            Ok(removed) => {
                info!(title = removed.title(), "song deleted");
                console.say("Song deleted successfully")?;
            }
            Err(e) => {
                warn!(error = %e, "delete refused");
                console.say(format_args!(
                    "Song with title '{title}' not found in the playlist. Cannot delete."
                ))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn shuffle<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        if self.index.is_empty() {
            console.say("The playlist is empty. Cannot shuffle.")?;
        } else {
            let shuffled = self.index.shuffled_with(&mut self.rng);
            console.list(shuffled)?;
        }
        Ok(Flow::Continue)
    }

    fn most_common_artist<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        match self.index.most_common_artist() {
            Some((artist, count)) => {
                console.say(format_args!("Most common artist: {artist} ({count} songs)"))?
            }
            None => console.say(
                "The playlist is empty. There are no songs to find the most common artist.",
            )?,
        }
        Ok(Flow::Continue)
    }

    fn most_common_genre<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        match self.index.most_common_genre() {
            Some((genre, count)) => {
                console.say(format_args!("Most common genre: {genre} ({count} songs)"))?
            }
            None => console.say(
                "The playlist is empty. There are no songs to find the most common genre.",
            )?,
        }
        Ok(Flow::Continue)
    }

    fn print_playlist<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, ShellError> {
        if self.index.is_empty() {
            console.say("Playlist is empty.")?;
        } else {
            console.list(&self.index)?;
        }
        Ok(Flow::Continue)
    }
}
