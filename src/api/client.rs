use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::MovieApi;
use crate::error::{Result, WatchlistError};
use crate::model::{Movie, MovieId, NewMovie};

pub const DEFAULT_API_URL: &str = "http://localhost:3020";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Validate the backend URL. Only absolute http(s) URLs are accepted;
    /// a trailing slash is dropped so paths can be appended directly.
    pub fn new(raw_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(raw_url)
            .map_err(|e| WatchlistError::InvalidUrl(format!("{}: {}", raw_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WatchlistError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                raw_url
            )));
        }
        Ok(Self {
            base_url: raw_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn movies_url(&self) -> Result<Url> {
        self.endpoint(None)
    }

    fn movie_url(&self, id: &MovieId) -> Result<Url> {
        self.endpoint(Some(id))
    }

    /// `{base}/movies[/{id}]`, with the id percent-encoded as one segment.
    fn endpoint(&self, id: Option<&MovieId>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| WatchlistError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                WatchlistError::InvalidUrl(format!("{}: cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty().push("movies");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }
}

/// `MovieApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: Client,
    config: ApiConfig,
}

impl HttpMovieApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(WatchlistError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.get_json(self.config.movies_url()?).await
    }

    async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>> {
        let url = self.config.movie_url(id)?;
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        classify_movie_body(status, &body)
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie> {
        let url = self.config.movies_url()?;
        debug!("POST {}", url);
        let resp = self.client.post(url).json(movie).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(WatchlistError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<()> {
        let url = self.config.movie_url(id)?;
        debug!("DELETE {}", url);
        let resp = self.client.delete(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(WatchlistError::Status(status.as_u16()))
        }
    }
}

/// Decide what a `GET /movies/{id}` response means.
///
/// A 404, an `error` field, `null` or `{}` all mean the movie does not
/// exist. Other failure statuses and unparseable bodies are errors.
pub fn classify_movie_body(status: StatusCode, body: &str) -> Result<Option<Movie>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(WatchlistError::Status(status.as_u16()));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body)?;
    match &value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() || map.contains_key("error") => Ok(None),
        _ => Ok(Some(serde_json::from_value(value)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WatchStatus;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned response per entry, in order, on a local port.
    fn serve(responses: Vec<(u16, &'static str)>) -> (String, thread::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = stream.read(&mut chunk).unwrap();
                    buf.extend_from_slice(&chunk[..n]);
                    if n == 0 || request_complete(&buf) {
                        break;
                    }
                }
                seen.push(String::from_utf8_lossy(&buf).into_owned());
                let reply = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(reply.as_bytes()).unwrap();
            }
            seen
        });
        (base, handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..end]
            .lines()
            .find_map(|l| {
                let (k, v) = l.split_once(':')?;
                k.eq_ignore_ascii_case("content-length")
                    .then(|| v.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        buf.len() >= end + 4 + content_length
    }

    fn api(base: &str) -> HttpMovieApi {
        HttpMovieApi::new(ApiConfig::new(base, Some(Duration::from_secs(5))).unwrap()).unwrap()
    }

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = ApiConfig::new("http://localhost:3020/", None).unwrap();
        assert_eq!(config.base_url, "http://localhost:3020");
        assert_eq!(
            config.movie_url(&MovieId::Int(7)).unwrap().as_str(),
            "http://localhost:3020/movies/7"
        );
    }

    #[test]
    fn test_text_id_is_encoded_as_one_segment() {
        let config = ApiConfig::new("http://localhost:3020", None).unwrap();
        let url = config.movie_url(&MovieId::Text("a/b c?#".into())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3020/movies/a%2Fb%20c%3F%23");
        assert_eq!(url.path_segments().unwrap().count(), 2);
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = ApiConfig::new("http://example.com/api/", None).unwrap();
        assert_eq!(
            config.movies_url().unwrap().as_str(),
            "http://example.com/api/movies"
        );
    }

    #[test]
    fn test_config_rejects_bad_urls() {
        assert!(ApiConfig::new("not a url", None).is_err());
        assert!(ApiConfig::new("ftp://example.com", None).is_err());
    }

    #[test]
    fn test_classify_found() {
        let movie = classify_movie_body(StatusCode::OK, r#"{"id":3,"title":"Heat"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(movie.id, MovieId::Int(3));
    }

    #[test]
    fn test_classify_error_payload_is_not_found() {
        let result = classify_movie_body(StatusCode::OK, r#"{"error":"not found"}"#).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_classify_empty_records_are_not_found() {
        for body in ["", "null", "{}"] {
            assert!(classify_movie_body(StatusCode::OK, body).unwrap().is_none(), "{body:?}");
        }
        assert!(classify_movie_body(StatusCode::NOT_FOUND, "oops").unwrap().is_none());
    }

    #[test]
    fn test_classify_failures() {
        assert!(matches!(
            classify_movie_body(StatusCode::INTERNAL_SERVER_ERROR, ""),
            Err(WatchlistError::Status(500))
        ));
        assert!(matches!(
            classify_movie_body(StatusCode::OK, "<html>"),
            Err(WatchlistError::Decode(_))
        ));
        assert!(matches!(
            classify_movie_body(StatusCode::OK, r#"{"id":1}"#),
            Err(WatchlistError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_list_movies_over_http() {
        let (base, server) = serve(vec![(
            200,
            r#"[{"id":1,"title":"Dune","director":"Villeneuve","year":2021,"status":"watched","poster_path":"/abc.jpg"}]"#,
        )]);
        let movies = api(&base).list_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Dune");
        assert_eq!(movies[0].status, WatchStatus::Watched);
        let requests = server.join().unwrap();
        assert!(requests[0].starts_with("GET /movies HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_create_movie_posts_draft_and_returns_backend_id() {
        let (base, server) = serve(vec![(
            201,
            r#"{"id":2,"title":"Arrival","director":"Villeneuve","year":2016,"status":"unwatched","poster_path":""}"#,
        )]);
        let payload = NewMovie {
            title: "Arrival".into(),
            director: "Villeneuve".into(),
            year: Some(2016),
            status: WatchStatus::Unwatched,
            poster_path: String::new(),
        };
        let created = api(&base).create_movie(&payload).await.unwrap();
        assert_eq!(created.id, MovieId::Int(2));
        let requests = server.join().unwrap();
        assert!(requests[0].starts_with("POST /movies HTTP/1.1"));
        assert!(requests[0].contains(r#""title":"Arrival""#));
        assert!(!requests[0].contains(r#""id""#));
    }

    #[tokio::test]
    async fn test_delete_movie_reports_failure_status() {
        let (base, server) = serve(vec![(200, ""), (500, "")]);
        let api = api(&base);
        assert!(api.delete_movie(&MovieId::Int(1)).await.is_ok());
        assert!(matches!(
            api.delete_movie(&MovieId::Int(1)).await,
            Err(WatchlistError::Status(500))
        ));
        let requests = server.join().unwrap();
        assert!(requests[0].starts_with("DELETE /movies/1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_get_movie_error_payload() {
        let (base, server) = serve(vec![(200, r#"{"error":"not found"}"#)]);
        let result = api(&base).get_movie(&MovieId::Int(99)).await.unwrap();
        assert!(result.is_none());
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        assert!(matches!(
            api(&base).list_movies().await,
            Err(WatchlistError::Transport(_))
        ));
    }
}
