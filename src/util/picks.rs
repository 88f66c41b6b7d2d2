//! Static title lists: the popular-movies dropdown and genre quick picks.

#[cfg(test)]
#[path = "picks_test.rs"]
mod picks_test;

pub const POPULAR_MOVIES: [&str; 20] = [
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Inception",
    "Pulp Fiction",
    "Interstellar",
    "The Matrix",
    "Forrest Gump",
    "Fight Club",
    "Goodfellas",
    "The Lord of the Rings: The Return of the King",
    "Star Wars: Episode V - The Empire Strikes Back",
    "Avengers: Endgame",
    "Parasite",
    "Titanic",
    "Gladiator",
    "The Departed",
    "Whiplash",
    "The Prestige",
    "Django Unchained",
];

/// Genre buttons on the home page, keyed by slug.
pub const GENRES: [(&str, &str, &[&str]); 8] = [
    ("action", "Action", &["Die Hard", "Mad Max: Fury Road", "John Wick", "The Dark Knight"]),
    ("superhero", "Superhero", &["The Avengers", "Spider-Man", "Batman Begins", "Iron Man"]),
    ("drama", "Drama", &["The Shawshank Redemption", "Forrest Gump", "The Godfather"]),
    ("horror", "Horror", &["The Conjuring", "IT", "Hereditary", "Get Out"]),
    ("comedy", "Comedy", &["The Hangover", "Superbad", "Bridesmaids", "Anchorman"]),
    ("scifi", "Sci-Fi", &["Inception", "Interstellar", "The Matrix", "Blade Runner"]),
    ("romance", "Romance", &["Titanic", "The Notebook", "Pride and Prejudice"]),
    ("animated", "Animated", &["Toy Story", "Frozen", "The Lion King", "Finding Nemo"]),
];

#[must_use]
pub fn popular_titles() -> Vec<String> {
    POPULAR_MOVIES.iter().map(|t| (*t).to_owned()).collect()
}

/// Sample titles for a genre slug. Unknown slugs have none.
#[must_use]
pub fn genre_titles(slug: &str) -> &'static [&'static str] {
    GENRES.iter().find(|(s, _, _)| *s == slug).map_or(&[], |(_, _, titles)| titles)
}

/// Pick the title at `roll` in `[0, 1)` scaled over the genre's samples.
#[must_use]
pub fn pick_for_genre(slug: &str, roll: f64) -> Option<&'static str> {
    let titles = genre_titles(slug);
    if titles.is_empty() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let idx = ((roll.clamp(0.0, 1.0) * titles.len() as f64).floor() as usize).min(titles.len() - 1);
    Some(titles[idx])
}

/// Uniform random value in `[0, 1)`. Always 0 outside the browser build.
#[must_use]
pub fn random_roll() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
