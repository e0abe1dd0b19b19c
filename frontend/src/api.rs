#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
use serde::{Deserialize, Serialize};

use draftboard_shared::moderation::ModerationAction;
use draftboard_shared::Post;

#[cfg(feature = "mock")]
use crate::models;

// API base URL - 编译时从环境变量读取，默认本地开发地址
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("DRAFTBOARD_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5001/api",
};

/// Provider settings for the LLM pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub provider: String,
    pub model: String,
    pub api_base_url: String,
}

/// One prompt template as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
}

/// One pipeline action the LLM layer can run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmAction {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for creating a new post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPostRequest {
    pub working_title: String,
    pub author: String,
    pub concept: String,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct PostListResponse {
    posts: Vec<Post>,
}

// Two server generations answer moderation calls differently: the newer
// one with a bare status code, the older one with an explicit success
// flag plus a script log. Both are normalized to one boolean here.
#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct ModerationReply {
    success: Option<bool>,
    output: Option<String>,
}

#[cfg(not(feature = "mock"))]
fn reply_confirms_success(reply: Option<&ModerationReply>) -> bool {
    reply.and_then(|reply| reply.success).unwrap_or(true)
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct PromptsResponse {
    prompts: Vec<PromptTemplate>,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct ActionsResponse {
    actions: Vec<LlmAction>,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct TestReply {
    response: String,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Serialize)]
struct TestRequest<'a> {
    prompt: &'a str,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Serialize)]
struct PromptUpdateRequest<'a> {
    template_id: &'a str,
    content: &'a str,
}

/// Fetch the full post list for the admin index.
pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_posts());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/posts?_ts={}", API_BASE, Date::now() as u64);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let json_response: PostListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(json_response.posts)
    }
}

/// Fetch one post; `Ok(None)` when the server does not know the id.
pub async fn fetch_post_detail(id: &str) -> Result<Option<Post>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_posts().into_iter().find(|post| post.id == id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/posts/{}?_ts={}",
            API_BASE,
            urlencoding::encode(id),
            Date::now() as u64
        );

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if response.status() == 404 {
            return Ok(None);
        }

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let post: Post = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(Some(post))
    }
}

/// Ask the server to perform a moderation action on one post.
///
/// `Ok(())` means the server confirmed the transition; only then may the
/// caller update the local record. Any transport or application failure
/// comes back as `Err` and must leave local state untouched.
pub async fn moderate_post(id: &str, action: ModerationAction) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, action);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/posts/{}/{}",
            API_BASE,
            urlencoding::encode(id),
            action.slug()
        );

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let reply = response.json::<ModerationReply>().await.ok();
        if reply_confirms_success(reply.as_ref()) {
            Ok(())
        } else {
            let output = reply
                .and_then(|reply| reply.output)
                .unwrap_or_else(|| "no output".to_string());
            Err(format!("Server reported failure: {}", output))
        }
    }
}

/// Create a new post from the admin form.
pub async fn create_post(request: &NewPostRequest) -> Result<Post, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_created_post(request));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/posts", API_BASE);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// Store new LLM provider settings.
pub async fn update_llm_settings(settings: &LlmSettings) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = settings;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/llm/settings", API_BASE);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(settings)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        Ok(())
    }
}

/// Run a one-off prompt against the configured provider and return its
/// response text.
pub async fn test_llm(prompt: &str) -> Result<String, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_test_response(prompt));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/llm/test", API_BASE);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&TestRequest { prompt })
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let reply: TestReply = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(reply.response)
    }
}

/// Fetch the configured LLM pipeline actions.
pub async fn fetch_llm_actions() -> Result<Vec<LlmAction>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_actions());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/llm/actions?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let json_response: ActionsResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(json_response.actions)
    }
}

/// Fetch the prompt templates.
pub async fn fetch_llm_prompts() -> Result<Vec<PromptTemplate>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_prompts());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/llm/prompts?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let json_response: PromptsResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(json_response.prompts)
    }
}

/// Store new content for one prompt template.
pub async fn update_llm_prompt(template_id: &str, content: &str) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (template_id, content);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/llm/prompts", API_BASE);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&PromptUpdateRequest {
                template_id,
                content,
            })
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        Ok(())
    }
}

#[cfg(all(test, not(feature = "mock")))]
mod tests {
    use super::{reply_confirms_success, ModerationReply};

    fn reply(json: &str) -> ModerationReply {
        serde_json::from_str(json).expect("parse moderation reply")
    }

    #[test]
    fn a_bare_ok_response_counts_as_success() {
        // The newer server answers with just a status code; there is no
        // body to parse.
        assert!(reply_confirms_success(None));
    }

    #[test]
    fn an_explicit_success_flag_is_respected() {
        let ok = reply(r#"{"success": true, "output": "--- STDOUT ---"}"#);
        assert!(reply_confirms_success(Some(&ok)));

        let failed = reply(r#"{"success": false, "output": "script exited 1"}"#);
        assert!(!reply_confirms_success(Some(&failed)));
    }

    #[test]
    fn an_unrelated_body_counts_as_success() {
        let unrelated = reply(r#"{"slug": "post-1"}"#);
        assert!(reply_confirms_success(Some(&unrelated)));
    }
}
