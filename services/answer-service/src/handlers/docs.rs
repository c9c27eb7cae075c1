use axum::response::{Html, Json, Redirect};
use serde_json::{json, Value};

pub async fn read_root() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn api_docs() -> Html<&'static str> {
    Html(API_DOCS_PAGE)
}

pub async fn openapi_spec() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "DocQA Answer Service",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/question_answer_by_chagpt/": {
                "post": {
                    "tags": ["ChatGPT"],
                    "summary": "Answer a question about one page of the document",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/x-www-form-urlencoded": {
                                "schema": {
                                    "type": "object",
                                    "required": ["page_number", "question"],
                                    "properties": {
                                        "page_number": { "type": "integer", "description": "Zero-based page index" },
                                        "question": { "type": "string" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Generated answer",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "question": { "type": "string" },
                                            "answer": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        },
                        "422": { "description": "Invalid form data or unreadable document" },
                        "502": { "description": "Completion API failure" }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Service health",
                    "responses": { "200": { "description": "Service is up" } }
                }
            }
        }
    }))
}

const API_DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>DocQA Answer Service</title>
</head>
<body>
  <h1>DocQA Answer Service</h1>
  <h2>POST /question_answer_by_chagpt/</h2>
  <p>Answers a question using the text of one page of the document.</p>
  <form method="post" action="/question_answer_by_chagpt/">
    <label>page_number <input name="page_number" type="number" value="0" min="0"></label>
    <label>question <input name="question" type="text" size="60"></label>
    <button type="submit">Ask</button>
  </form>
  <p>Returns <code>{"question": "...", "answer": "..."}</code>.</p>
  <h2>GET /health</h2>
  <p>Service status.</p>
  <p>Machine-readable description: <a href="/openapi.json">/openapi.json</a></p>
</body>
</html>
"#;
