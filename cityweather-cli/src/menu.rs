use anyhow::Result;
use cityweather_core::{FavoritesError, FavoritesStore, MAX_FAVORITES, WeatherProvider};
use std::io::{BufRead, Write};

const MENU: &str = "\
Welcome to the Weather App!
Please choose one of the following options:
1: Search for the weather details of a city
2: Add a City to Favorites
3: List Favorite Cities
4: Update Favorite Cities
5: Exit";

/// The interactive menu loop.
///
/// Generic over its input and output streams so tests can drive it with
/// in-memory buffers and a mock provider. Owns the favorites store; nothing
/// here is process-global.
pub struct Menu<R, W> {
    input: R,
    output: W,
    favorites: FavoritesStore,
    provider: Box<dyn WeatherProvider>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, provider: Box<dyn WeatherProvider>) -> Self {
        Self { input, output, favorites: FavoritesStore::new(), provider }
    }

    /// Run until the user picks exit or input reaches EOF.
    ///
    /// Every per-action failure is rendered as a message and the menu
    /// redisplays; only I/O errors on the streams themselves escape.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.search_weather().await?,
                "2" => self.add_favorite()?,
                "3" => writeln!(self.output, "\n{}\n", self.favorites.list())?,
                "4" => self.update_favorites()?,
                "5" => {
                    writeln!(self.output, "\nExiting the interface.")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "\nInvalid choice. Please select a valid option.\n")?;
                }
            }
        }

        Ok(())
    }

    async fn search_weather(&mut self) -> Result<()> {
        let Some(city) = self.prompt("Enter the city name: ")? else {
            return Ok(());
        };

        match self.provider.current_weather(&city).await {
            Ok(lookup) => writeln!(self.output, "\n{lookup}\n")?,
            Err(err) => writeln!(self.output, "\nWeather lookup failed: {err}\n")?,
        }

        Ok(())
    }

    fn add_favorite(&mut self) -> Result<()> {
        let Some(city) = self.prompt("Enter the city name: ")? else {
            return Ok(());
        };

        let message = match self.favorites.add(city) {
            Ok(count) => format!(
                "City name added to favorites! {count} out of {MAX_FAVORITES} cities now in favorite's list."
            ),
            Err(err) => err.to_string(),
        };

        writeln!(self.output, "\n{message}\n")?;
        Ok(())
    }

    fn update_favorites(&mut self) -> Result<()> {
        if self.favorites.is_empty() {
            writeln!(self.output, "\nNo favorite cities yet! Please add a city to the list.\n")?;
            return Ok(());
        }

        writeln!(self.output, "Favorite Cities:")?;
        for (i, city) in self.favorites.iter().enumerate() {
            writeln!(self.output, "{}: {city}", i + 1)?;
        }

        let Some(action) =
            self.prompt("Would you like to change a city (c) or remove a city (r)? ")?
        else {
            return Ok(());
        };

        let message = match action.to_lowercase().as_str() {
            "c" => match self.change_city()? {
                Some(message) => message,
                None => return Ok(()),
            },
            "r" => match self.remove_city()? {
                Some(message) => message,
                None => return Ok(()),
            },
            _ => "Invalid choice. Please select change (c) or remove (r).".to_string(),
        };

        writeln!(self.output, "\n{message}\n")?;
        Ok(())
    }

    fn change_city(&mut self) -> Result<Option<String>> {
        let Some(raw) = self.prompt("Enter the number of the city you want to change: ")? else {
            return Ok(None);
        };

        // Validate the number before asking for the replacement name.
        let Some(index) = parse_index(&raw, self.favorites.len()) else {
            return Ok(Some(FavoritesError::InvalidIndex.to_string()));
        };

        let Some(new_name) = self.prompt("Enter the new city name: ")? else {
            return Ok(None);
        };

        let message = match self.favorites.update(index, new_name.clone()) {
            Ok(()) => format!("City number {index} has been updated to {new_name}."),
            Err(err) => err.to_string(),
        };

        Ok(Some(message))
    }

    fn remove_city(&mut self) -> Result<Option<String>> {
        let Some(raw) = self.prompt("Enter the number of the city you want to remove: ")? else {
            return Ok(None);
        };

        let message = match parse_index(&raw, self.favorites.len()) {
            Some(index) => match self.favorites.remove(index) {
                Ok(removed) => format!("{removed} has been removed from favorites."),
                Err(err) => err.to_string(),
            },
            None => FavoritesError::InvalidIndex.to_string(),
        };

        Ok(Some(message))
    }

    /// Write a prompt and read one line. `None` means input reached EOF.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // Strip only the line terminator; city names are stored as typed.
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Parse a user-supplied 1-based index, rejecting non-numeric input and
/// anything outside `[1, len]`.
fn parse_index(raw: &str, len: usize) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|index| (1..=len).contains(index))
}
