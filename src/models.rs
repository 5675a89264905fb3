/// A movie ready to be stored, built from a TMDB detail response.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingUpdate {
    pub rating: f64,
    pub review: String,
}

/// One TMDB search hit shown on the selection page.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCandidate {
    pub tmdb_id: i32,
    pub title: String,
    pub year: Option<i16>,
    pub overview: String,
    pub poster_url: Option<String>,
}
