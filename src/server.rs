use axum::{
    Json, Router,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::processor::TurnProcessor;
use crate::transcript::Transcript;

/// One chat exchange as posted by the web page.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Transcript,
}

/// Build an [`axum::Router`] exposing the chat page and its API routes.
///
/// - `GET /` serves the embedded single-page UI.
/// - `POST /api/chat` runs one exchange and returns the extended transcript.
/// - `POST /api/reset` returns the empty transcript.
pub fn router(processor: Arc<TurnProcessor>) -> Router {
    let chat = processor.clone();
    Router::new()
        .route("/", get(index))
        .route(
            "/api/chat",
            post(move |Json(req): Json<ChatRequest>| {
                let chat = chat.clone();
                async move { Json(chat.process(&req.message, &req.history).await) }
            }),
        )
        .route(
            "/api/reset",
            post(move || {
                let processor = processor.clone();
                async move { Json(processor.reset()) }
            }),
        )
}

async fn index() -> Html<&'static str> {
    Html(INDEX)
}

const INDEX: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Chat Assistant</title>
<style>
  body { font-family: sans-serif; max-width: 680px; margin: 2em auto; }
  #transcript { border: 1px solid #ccc; border-radius: 6px; height: 400px;
                overflow-y: auto; padding: 0.5em; }
  .user, .reply { margin: 0.4em 0; padding: 0.4em 0.7em; border-radius: 8px; }
  .user { background: #e3f0ff; text-align: right; }
  .reply { background: #f0f0f0; }
  #controls { display: flex; gap: 0.5em; margin-top: 0.5em; }
  #message { flex: 1; }
</style>
</head>
<body>
<h1>AI Chat Assistant</h1>
<p>This chatbot is tuned for engaging open-domain conversation.
Try asking questions or having a casual chat!</p>
<div id="transcript"></div>
<div id="controls">
  <textarea id="message" rows="2"
    placeholder="Type your message here and press Enter to send..."></textarea>
  <button id="send">Send</button>
</div>
<button id="clear">Clear Chat</button>
<p>Examples:</p>
<div id="examples">
  <button class="example">Hi, how are you today?</button>
  <button class="example">Can you tell me an interesting fact?</button>
  <button class="example">What's your favorite book and why?</button>
  <button class="example">How do you feel about artificial intelligence?</button>
</div>
<script>
let history = [];

function render() {
  const box = document.getElementById('transcript');
  box.innerHTML = '';
  for (const turn of history) {
    const u = document.createElement('div');
    u.className = 'user';
    u.textContent = turn.user;
    const r = document.createElement('div');
    r.className = 'reply';
    r.textContent = turn.reply;
    box.appendChild(u);
    box.appendChild(r);
  }
  box.scrollTop = box.scrollHeight;
}

async function send() {
  const input = document.getElementById('message');
  const message = input.value;
  input.value = '';
  const resp = await fetch('/api/chat', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ message, history }),
  });
  history = await resp.json();
  render();
}

async function clearChat() {
  const resp = await fetch('/api/reset', { method: 'POST' });
  history = await resp.json();
  render();
}

document.getElementById('send').addEventListener('click', send);
document.getElementById('clear').addEventListener('click', clearChat);
document.getElementById('message').addEventListener('keydown', (e) => {
  if (e.key === 'Enter' && !e.shiftKey) { e.preventDefault(); send(); }
});
for (const btn of document.querySelectorAll('.example')) {
  btn.addEventListener('click', () => {
    document.getElementById('message').value = btn.textContent;
  });
}
</script>
</body>
</html>
"##;
