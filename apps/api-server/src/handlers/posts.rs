//! Blog post handlers.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_shared::validate_payload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id: i32 = raw_id
        .parse()
        .map_err(|_| AppError::NotFound("Invalid blog post id".to_string()))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Blog post",
            id: raw_id,
        })?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
///
/// The body is taken as raw JSON so that missing or mistyped fields are
/// reported by the validation pipeline with their field name.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let new_post = validate_payload(&body)?;
    let post = state.posts.create(new_post).await?;

    tracing::info!(post_id = post.id, title = %post.title, "Blog post published");
    Ok(HttpResponse::Created().json(post))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{Value, json};

    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;
    use quill_core::{BlogPost, NewBlogPost};

    use super::*;
    use crate::handlers::configure_routes;

    struct FailingRepository;

    #[async_trait]
    impl PostRepository for FailingRepository {
        async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
            Err(RepoError::Connection("connection refused".to_string()))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<BlogPost>, RepoError> {
            Err(RepoError::Connection("connection refused".to_string()))
        }

        async fn create(&self, _post: NewBlogPost) -> Result<BlogPost, RepoError> {
            Err(RepoError::Query("insert failed".to_string()))
        }

        async fn count(&self) -> Result<u64, RepoError> {
            Ok(0)
        }
    }

    fn valid_body() -> Value {
        json!({
            "title": "Hi",
            "category": "A,B",
            "description": "D",
            "coverImage": "http://x",
            "content": "line1\nline2"
        })
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_empty_store_lists_empty_array() {
        let app = app!(AppState::in_memory());
        let req = test::TestRequest::get().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_date() {
        let app = app!(AppState::in_memory());
        let before = Utc::now() - chrono::Duration::seconds(1);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let post: BlogPost = test::read_body_json(resp).await;
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.category, vec!["A", "B"]);
        assert_eq!(post.content, "line1\nline2");
        assert!(post.date >= before && post.date <= Utc::now());
    }

    #[actix_web::test]
    async fn test_created_post_is_readable() {
        let app = app!(AppState::in_memory());
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(valid_body())
            .to_request();
        let created: BlogPost = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", created.id))
            .to_request();
        let fetched: BlogPost = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get().uri("/posts").to_request();
        let listed: Vec<BlogPost> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![created]);
    }

    #[actix_web::test]
    async fn test_list_is_newest_first() {
        let state = AppState::in_memory();
        let app = app!(state.clone());
        for title in ["one", "two", "three"] {
            let mut body = valid_body();
            body["title"] = json!(title);
            let req = test::TestRequest::post().uri("/posts").set_json(body).to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/posts").to_request();
        let listed: Vec<BlogPost> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 3);
        assert!(
            listed
                .windows(2)
                .all(|w| (w[0].date, w[0].id) > (w[1].date, w[1].id))
        );
        assert_eq!(listed[0].title, "three");
    }

    #[actix_web::test]
    async fn test_empty_title_is_bad_request() {
        let app = app!(AppState::in_memory());
        let mut body = valid_body();
        body["title"] = json!("");

        let req = test::TestRequest::post().uri("/posts").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["field"], "title");
        assert_eq!(body["message"], "title must not be empty");
    }

    #[actix_web::test]
    async fn test_empty_content_is_created() {
        let app = app!(AppState::in_memory());
        let mut body = valid_body();
        body["content"] = json!("");

        let req = test::TestRequest::post().uri("/posts").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let post: BlogPost = test::read_body_json(resp).await;
        assert_eq!(post.content, "");
    }

    #[actix_web::test]
    async fn test_rejected_payload_is_not_stored() {
        let state = AppState::in_memory();
        let app = app!(state.clone());
        let mut body = valid_body();
        body["coverImage"] = json!("nope");

        let req = test::TestRequest::post().uri("/posts").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.posts.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(AppState::in_memory());
        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("field").is_none());
        assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_not_found() {
        let app = app!(AppState::in_memory());
        let req = test::TestRequest::get().uri("/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Invalid blog post id" }));
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let app = app!(AppState::in_memory());
        let req = test::TestRequest::get().uri("/posts/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Blog post with id 999 not found");
    }

    #[actix_web::test]
    async fn test_store_failure_is_internal_error() {
        let app = app!(AppState::new(Arc::new(FailingRepository)));

        let req = test::TestRequest::get().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(AppState::in_memory());
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }
}
