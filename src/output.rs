use crate::app::detail::DetailState;
use crate::app::list::Fetch;
use crate::model::{Movie, PosterSize};
use crate::ui::detail_view::NOT_FOUND;
use crate::ui::list_view::{LOAD_FAILED, NO_MOVIES};

const TITLE_WIDTH: usize = 24;

/// Plain-text list for `--list`. `Err` carries the message for stderr.
pub fn format_list(movies: &Fetch<Vec<Movie>>) -> Result<String, String> {
    match movies {
        Fetch::Ready(movies) if movies.is_empty() => Ok(format!("{}\n", NO_MOVIES)),
        Fetch::Ready(movies) => {
            let mut out = format!(
                "{:<6} {:<width$} {:<4}  {:<9}  {}\n",
                "ID",
                "TITLE",
                "YEAR",
                "STATUS",
                "POSTER",
                width = TITLE_WIDTH
            );
            for movie in movies {
                out.push_str(&format!(
                    "{:<6} {:<width$} {:<4}  {:<9}  {}\n",
                    movie.id.to_string(),
                    fit_str(&movie.title, TITLE_WIDTH),
                    movie.year.map(|y| y.to_string()).unwrap_or_default(),
                    movie.status.as_str(),
                    movie.poster_url(PosterSize::Thumbnail),
                    width = TITLE_WIDTH
                ));
            }
            Ok(out)
        }
        Fetch::Failed(reason) => Err(format!("{}: {}", LOAD_FAILED, reason)),
        Fetch::Pending => Err(format!("{}: no response", LOAD_FAILED)),
    }
}

/// Plain-text detail for `--show`. Not-found is a normal outcome,
/// only a failed request is an `Err`.
pub fn format_detail(state: &DetailState) -> Result<String, (String, String)> {
    match state {
        DetailState::Loaded(movie) => Ok(format!(
            "Title:    {}\nDirector: {}\nYear:     {}\nStatus:   {}\nPoster:   {}\n",
            movie.title,
            movie.director.as_deref().unwrap_or_default(),
            movie.year.map(|y| y.to_string()).unwrap_or_default(),
            movie.status,
            movie.poster_url(PosterSize::Full),
        )),
        DetailState::NotFound => Ok(format!("{}\n", NOT_FOUND)),
        DetailState::Failed(reason) => Err((format!("{}\n", NOT_FOUND), reason.clone())),
        DetailState::Loading => Err((format!("{}\n", NOT_FOUND), "no response".to_string())),
    }
}

/// Truncate to `width` characters, marking the cut with "..".
fn fit_str(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(2)).collect();
        format!("{}..", kept)
    }
}
