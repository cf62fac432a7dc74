//! Request handlers for the two routes.

use axum::{extract::State, response::Html, Form};
use recommender::DEFAULT_RECOMMENDATIONS;
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;
use crate::template::{render_page, PosterCard};

/// Form body of the recommend route
#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    pub movie: String,
}

/// GET / - render the form page with every known title for autocomplete.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let titles = state.model.titles_sorted();
    Html(render_page(&titles, &[], None))
}

/// POST /recommend - look up the submitted title and render up to 5
/// recommendations with their posters.
///
/// An unrecognized title renders the page with an error message; this is
/// user feedback, not a failure, so the response is still 200.
pub async fn recommend(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> Html<String> {
    let titles = state.model.titles_sorted();

    if !state.model.contains_title(&form.movie) {
        let message = format!(
            "Movie '{}' not found. Please choose from the list.",
            form.movie
        );
        return Html(render_page(&titles, &[], Some(&message)));
    }

    let recommendations = state.model.recommend(&form.movie, DEFAULT_RECOMMENDATIONS);
    info!(
        title = %form.movie,
        count = recommendations.len(),
        "Serving recommendations"
    );

    // One poster call per recommended item, awaited in order
    let mut cards = Vec::with_capacity(recommendations.len());
    for rec in recommendations {
        let poster_url = state.posters.poster_url(rec.id).await;
        cards.push(PosterCard {
            title: rec.title,
            poster_url,
        });
    }

    Html(render_page(&titles, &cards, None))
}
