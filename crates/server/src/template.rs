//! Inline HTML rendering for the two pages.
//!
//! The whole UI is one template: a title form with a datalist for
//! autocomplete, optionally followed by the recommendation cards or an
//! error message. There is no template engine; the page is assembled with
//! `format!` and every interpolated string is HTML-escaped.

/// A recommendation ready for display
pub struct PosterCard {
    pub title: String,
    pub poster_url: String,
}

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background-color: #121212; color: #e0e0e0; margin: 0; padding: 20px; }
.container { max-width: 1200px; margin: auto; text-align: center; }
h1 { color: #bb86fc; margin-bottom: 20px; }
form { margin-bottom: 40px; }
input[type=\"text\"] { width: 60%; padding: 12px; margin: 10px 0; border: 1px solid #333; border-radius: 6px; background-color: #2c2c2c; color: #e0e0e0; font-size: 1rem; }
button { background-color: #bb86fc; color: #121212; border: none; padding: 12px 24px; font-size: 1rem; border-radius: 6px; cursor: pointer; font-weight: bold; }
.results-container { display: flex; flex-wrap: wrap; justify-content: center; gap: 20px; }
.movie-card { background: #1e1e1e; border-radius: 8px; overflow: hidden; width: 200px; box-shadow: 0 4px 20px rgba(0,0,0,0.5); text-align: center; }
.movie-card img { width: 100%; height: 300px; object-fit: cover; }
.movie-card h3 { font-size: 1rem; padding: 10px; margin: 0; color: #e0e0e0; }
h2 { color: #03dac6; }
p.error { color: #cf6679; font-size: 1.2rem; }";

/// Render the full page.
///
/// # Arguments
/// * `titles` - Every known title, already sorted, for the datalist
/// * `recommendations` - Cards to show, or empty for the plain form page
/// * `error` - User-visible error message, shown instead of cards
pub fn render_page(titles: &[&str], recommendations: &[PosterCard], error: Option<&str>) -> String {
    let options: String = titles
        .iter()
        .map(|t| format!("<option value=\"{}\">\n", escape_html(t)))
        .collect();

    let mut body_sections = String::new();

    if !recommendations.is_empty() {
        body_sections.push_str("<h2>Recommended for you:</h2>\n<div class=\"results-container\">\n");
        for card in recommendations {
            body_sections.push_str(&format!(
                "<div class=\"movie-card\">\
                 <img src=\"{}\" alt=\"{} Poster\">\
                 <h3>{}</h3></div>\n",
                escape_html(&card.poster_url),
                escape_html(&card.title),
                escape_html(&card.title),
            ));
        }
        body_sections.push_str("</div>\n");
    }

    if let Some(message) = error {
        body_sections.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Movie Recommender</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <h1>Movie Recommender System</h1>\n\
         <form action=\"/recommend\" method=\"post\">\n\
         <input list=\"movie_titles\" type=\"text\" id=\"movie\" name=\"movie\" \
         placeholder=\"Type a movie you like...\" required>\n\
         <datalist id=\"movie_titles\">\n{options}</datalist>\n\
         <br>\n\
         <button type=\"submit\">Get Recommendations</button>\n\
         </form>\n\
         {body_sections}\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for text and attribute contexts.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
