//! The catalog datasets the pipeline knows how to fetch.

/// One downloadable titles dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// Platform label given to every row from this source
    pub platform: &'static str,
    /// Archive download URL
    pub url: &'static str,
    /// File name of the downloaded archive
    pub archive_name: &'static str,
    /// Name of the titles CSV inside the archive
    pub csv_name: &'static str,
}

/// The three streaming catalogs, in processing order.
pub const SOURCES: &[Source] = &[
    Source {
        platform: "netflix",
        url: "https://www.kaggle.com/api/v1/datasets/download/shivamb/netflix-shows",
        archive_name: "netflix-movies-and-tv-shows.zip",
        csv_name: "netflix_titles.csv",
    },
    Source {
        platform: "amazon-prime",
        url: "https://www.kaggle.com/api/v1/datasets/download/shivamb/amazon-prime-movies-and-tv-shows",
        archive_name: "amazon-prime-movies-and-tv-shows.zip",
        csv_name: "amazon_prime_titles.csv",
    },
    Source {
        platform: "disney-plus",
        url: "https://www.kaggle.com/api/v1/datasets/download/shivamb/disney-movies-and-tv-shows",
        archive_name: "disney-movies-and-tv-shows.zip",
        csv_name: "disney_plus_titles.csv",
    },
];

/// Look up a source by platform label.
pub fn find_source(platform: &str) -> Option<&'static Source> {
    SOURCES.iter().find(|s| s.platform.eq_ignore_ascii_case(platform))
}
