//! Chat page rendering.
//!
//! One server-rendered page, assembled from string templates the way the
//! rest of the app logs and serves things: no asset pipeline, no CDN. The
//! client-side behavior lives in one inline script seeded from
//! [`Preferences::default`], with the theme re-read from browser storage at
//! load.

use super::state::{FontSize, Message, Preferences, Theme};

/// Render the complete chat page.
#[must_use]
pub fn chat_page() -> String {
    html_shell("Chat", &chat_content(), &page_script())
}

/// Generate the HTML shell for the application.
fn html_shell(title: &str, content: &str, script: &str) -> String {
    let styles = STYLES;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="BUddy - a minimal web chat client">
    <title>{title} - BUddy</title>
    <style>{styles}</style>
</head>
<body>
{content}
<script>{script}</script>
</body>
</html>"#
    )
}

/// Chat page content.
fn chat_content() -> String {
    let font_min = FontSize::MIN;
    let font_max = FontSize::MAX;
    let font_default = FontSize::default().get();
    format!(
        r#"<div class="app-container">
    <button id="sidebar-toggle" class="sidebar-toggle" type="button" aria-label="Toggle settings">&#9776;</button>
    <aside id="sidebar" class="sidebar">
        <h2>Settings</h2>
        <div class="setting">
            <span>Theme</span>
            <button id="theme-toggle" type="button">Dark</button>
        </div>
        <div class="setting">
            <label for="font-size">Font size</label>
            <input id="font-size" type="range" min="{font_min}" max="{font_max}" value="{font_default}" step="1">
        </div>
        <ul class="sidebar-meta">
            <li>Model: Llama-3.1</li>
        </ul>
    </aside>
    <div class="chat-container">
        <header class="chat-header">
            <h1 class="app-header">BUddy: Your AI Guide</h1>
            <button id="links-toggle" type="button">Quick links</button>
        </header>
        <nav id="links-panel" class="links-panel">
            <a href="https://www.hkbu.edu.hk" target="_blank" rel="noreferrer">University home</a>
            <a href="https://library.hkbu.edu.hk" target="_blank" rel="noreferrer">Library</a>
            <a href="https://ar.hkbu.edu.hk" target="_blank" rel="noreferrer">Academic registry</a>
        </nav>
        <div id="chat-window" class="chat-window"></div>
        <div id="typing-indicator" class="typing-indicator" hidden>BUddy is typing&#8230;</div>
        <div class="input-area">
            <textarea id="chat-input" rows="1" placeholder="Ask me anything about HKBU..."></textarea>
            <button id="send-button" type="button" aria-label="Send">&#10148;</button>
        </div>
        <p class="hint">Press Enter to send, Shift+Enter for new line</p>
    </div>
</div>"#
    )
}

/// Inline behavior script with the initial store and theme strings injected.
fn page_script() -> String {
    SCRIPT
        .replace("__INITIAL_STORE__", &initial_store())
        .replace("__THEME_KEY__", Theme::STORAGE_KEY)
        .replace("__THEME_LIGHT__", Theme::Light.as_str())
        .replace("__THEME_DARK__", Theme::Dark.as_str())
}

/// Serialize the initial client store: default preferences, empty transcript.
fn initial_store() -> String {
    let store = serde_json::json!({
        "prefs": Preferences::default(),
        "messages": Vec::<Message>::new(),
    });
    store.to_string()
}

const STYLES: &str = r#"
:root {
    --bg: #f4f5f7;
    --surface: #ffffff;
    --text: #1c1c1e;
    --muted: #6b7280;
    --accent: #2563eb;
    --bubble-user: #2563eb;
    --bubble-user-text: #ffffff;
    --bubble-bot: #e5e7eb;
    --bubble-bot-text: #1c1c1e;
    --border: #d1d5db;
}
html[data-theme="dark"] {
    --bg: #111418;
    --surface: #1b1f24;
    --text: #e5e7eb;
    --muted: #9ca3af;
    --accent: #3b82f6;
    --bubble-user: #3b82f6;
    --bubble-user-text: #ffffff;
    --bubble-bot: #2a2f36;
    --bubble-bot-text: #e5e7eb;
    --border: #374151;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    background: var(--bg);
    color: var(--text);
}
.app-container { display: flex; height: 100vh; }
.sidebar-toggle {
    position: fixed;
    top: 12px;
    left: 12px;
    z-index: 20;
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    border-radius: 8px;
    padding: 6px 10px;
    cursor: pointer;
    font-size: 18px;
}
.sidebar {
    position: fixed;
    top: 0;
    left: -260px;
    width: 240px;
    height: 100vh;
    padding: 56px 16px 16px;
    background: var(--surface);
    border-right: 1px solid var(--border);
    transition: left 0.2s ease;
    z-index: 10;
}
.sidebar.open { left: 0; }
.sidebar h2 { margin: 0 0 16px; font-size: 18px; }
.setting {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 8px;
    margin-bottom: 14px;
    font-size: 14px;
}
.setting button {
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    border-radius: 6px;
    padding: 4px 12px;
    cursor: pointer;
}
.sidebar-meta {
    margin: 20px 0 0;
    padding: 0;
    list-style: none;
    font-size: 13px;
    color: var(--muted);
}
.chat-container {
    flex: 1;
    display: flex;
    flex-direction: column;
    max-width: 760px;
    margin: 0 auto;
    padding: 0 16px 16px;
    width: 100%;
}
.chat-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 0 8px 48px;
}
.app-header { font-size: 20px; margin: 0; }
#links-toggle {
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    border-radius: 6px;
    padding: 4px 10px;
    font-size: 13px;
    cursor: pointer;
}
.links-panel {
    display: none;
    gap: 12px;
    padding: 8px 0;
    font-size: 13px;
}
.links-panel.open { display: flex; }
.links-panel a { color: var(--accent); text-decoration: none; }
.chat-window {
    flex: 1;
    overflow-y: auto;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 16px;
    font-size: 16px;
}
.message { display: flex; margin-bottom: 10px; }
.message.user { justify-content: flex-end; }
.message.bot { justify-content: flex-start; }
.message-bubble {
    max-width: 75%;
    padding: 10px 14px;
    border-radius: 14px;
    white-space: pre-wrap;
    word-break: break-word;
}
.message.user .message-bubble { background: var(--bubble-user); color: var(--bubble-user-text); }
.message.bot .message-bubble { background: var(--bubble-bot); color: var(--bubble-bot-text); }
.typing-indicator { font-size: 13px; color: var(--muted); padding: 6px 2px; }
.input-area { display: flex; gap: 8px; margin-top: 8px; }
#chat-input {
    flex: 1;
    resize: none;
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 10px 12px;
    font: inherit;
    background: var(--surface);
    color: var(--text);
}
#send-button {
    border: none;
    background: var(--accent);
    color: #fff;
    border-radius: 10px;
    padding: 0 16px;
    font-size: 18px;
    cursor: pointer;
}
.hint { font-size: 12px; color: var(--muted); text-align: center; margin: 8px 0 0; }
"#;

const SCRIPT: &str = r#"
const store = __INITIAL_STORE__;

const chatWindow = document.getElementById('chat-window');
const input = document.getElementById('chat-input');
const sendButton = document.getElementById('send-button');
const typingIndicator = document.getElementById('typing-indicator');
const sidebar = document.getElementById('sidebar');
const sidebarToggle = document.getElementById('sidebar-toggle');
const linksPanel = document.getElementById('links-panel');
const linksToggle = document.getElementById('links-toggle');
const themeToggle = document.getElementById('theme-toggle');
const fontInput = document.getElementById('font-size');

let pending = 0;

function applyTheme() {
    document.documentElement.dataset.theme = store.prefs.theme;
    themeToggle.textContent = store.prefs.theme === '__THEME_DARK__' ? 'Light' : 'Dark';
}

function setTheme(theme) {
    store.prefs.theme = theme;
    localStorage.setItem('__THEME_KEY__', theme);
    applyTheme();
}

function appendMessage(text, sender) {
    store.messages.push({ text: text, sender: sender });
    const row = document.createElement('div');
    row.className = 'message ' + sender;
    const bubble = document.createElement('div');
    bubble.className = 'message-bubble';
    bubble.textContent = text;
    row.appendChild(bubble);
    chatWindow.appendChild(row);
    chatWindow.scrollTop = chatWindow.scrollHeight;
}

function setPending(on) {
    pending += on ? 1 : -1;
    typingIndicator.hidden = pending === 0;
}

async function handleSend() {
    const message = input.value;
    if (!message.trim()) return;

    appendMessage(message, 'user');
    input.value = '';
    setPending(true);

    try {
        const res = await fetch('/api/chat', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ message: message })
        });
        if (!res.ok) throw new Error('HTTP ' + res.status);
        const data = await res.json();
        appendMessage(data.response, 'bot');
    } catch (error) {
        const detail = error && error.message ? ' (' + error.message + ')' : '';
        appendMessage('Sorry, something went wrong.' + detail, 'bot');
    } finally {
        setPending(false);
    }
}

sendButton.addEventListener('click', handleSend);
input.addEventListener('keydown', (e) => {
    // Shift+Enter falls through and inserts a newline
    if (e.key === 'Enter' && !e.shiftKey) {
        e.preventDefault();
        handleSend();
    }
});

sidebarToggle.addEventListener('click', () => {
    store.prefs.sidebarOpen = !store.prefs.sidebarOpen;
    sidebar.classList.toggle('open', store.prefs.sidebarOpen);
});

linksToggle.addEventListener('click', () => {
    store.prefs.linksOpen = !store.prefs.linksOpen;
    linksPanel.classList.toggle('open', store.prefs.linksOpen);
});

themeToggle.addEventListener('click', () => {
    setTheme(store.prefs.theme === '__THEME_DARK__' ? '__THEME_LIGHT__' : '__THEME_DARK__');
});

fontInput.addEventListener('input', () => {
    store.prefs.fontSize = Number(fontInput.value);
    chatWindow.style.fontSize = store.prefs.fontSize + 'px';
});

const stored = localStorage.getItem('__THEME_KEY__');
if (stored === '__THEME_LIGHT__' || stored === '__THEME_DARK__') {
    store.prefs.theme = stored;
}
applyTheme();
chatWindow.style.fontSize = store.prefs.fontSize + 'px';
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_font_bounds() {
        let page = chat_page();
        assert!(page.contains(r#"min="12""#));
        assert!(page.contains(r#"max="22""#));
        assert!(page.contains(r#"value="16""#));
    }

    #[test]
    fn page_wires_theme_storage_key() {
        let page = chat_page();
        assert!(page.contains("localStorage.getItem('theme')"));
        assert!(page.contains("localStorage.setItem('theme'"));
        assert!(page.contains("stored === 'light' || stored === 'dark'"));
        assert!(!page.contains("__THEME_"));
    }

    #[test]
    fn page_seeds_initial_store() {
        let page = chat_page();
        assert!(page.contains(r#""messages":[]"#));
        assert!(page.contains(r#""theme":"light""#));
        assert!(!page.contains("__INITIAL_STORE__"));
    }

    #[test]
    fn page_guards_submission() {
        let page = chat_page();
        // Shift+Enter never submits; trimmed-empty input is a no-op.
        assert!(page.contains("!e.shiftKey"));
        assert!(page.contains("if (!message.trim()) return;"));
    }
}
