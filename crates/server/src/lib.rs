//! Web front end for the similarity model.
//!
//! Two routes: `GET /` renders the title form, `POST /recommend` renders
//! up to five recommendations with poster images. State is the loaded
//! model plus a poster client, shared read-only across requests.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod template;

pub use config::Config;
pub use routes::create_router;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use pipeline::{SimilarityMatrix, TaggedMovie, Vocabulary};
    use poster_client::{PosterClient, PLACEHOLDER_URL};
    use recommender::SimilarityModel;
    use tower::ServiceExt;

    fn tagged(id: u32, title: &str, tags: &str) -> TaggedMovie {
        TaggedMovie {
            id,
            title: title.to_string(),
            tags: tags.to_string(),
        }
    }

    fn test_state() -> AppState {
        let movies = vec![
            tagged(19995, "Avatar", "epic ocean alien spectacle"),
            tagged(597, "Titanic", "epic ocean romance disaster"),
            tagged(348, "Alien", "alien horror spaceship dread"),
        ];
        let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
        let vocab = Vocabulary::build(&tags, 100);
        let matrix = SimilarityMatrix::from_tag_strings(&tags, &vocab);
        let model = SimilarityModel::new(movies, matrix).unwrap();

        // Point the poster client at a dead endpoint so every lookup
        // degrades to the placeholder without leaving the machine.
        let posters = PosterClient::with_endpoints(
            "test-key",
            "http://127.0.0.1:9",
            "https://image.test/w500",
            PLACEHOLDER_URL,
        );

        AppState::new(model, posters)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_lists_all_titles() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        for title in ["Alien", "Avatar", "Titanic"] {
            assert!(body.contains(&format!("<option value=\"{title}\">")));
        }
    }

    #[tokio::test]
    async fn test_recommend_unknown_title_renders_error() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/recommend")
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from("movie=Tatanic"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("not found"));
        assert!(!body.contains("Recommended for you"));
    }

    #[tokio::test]
    async fn test_recommend_known_title_renders_cards() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/recommend")
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from("movie=Avatar"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Recommended for you"));
        assert!(body.contains("<h3>Titanic</h3>"));
        assert!(body.contains("<h3>Alien</h3>"));
        // Poster endpoint is dead, so every card carries the placeholder
        assert!(body.contains(PLACEHOLDER_URL));
        // The query movie itself is never recommended
        assert!(!body.contains("<h3>Avatar</h3>"));
    }
}
