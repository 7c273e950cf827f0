//! Server-rendered HTML pages.
//!
//! Plain `format!`-built markup, no template engine. These pages are
//! presentation only; every invariant lives in the services they call.

use chrono::{DateTime, Utc};

use gitshelf_core::traits::source::{EntryKind, EntrySummary, RepoSummary};
use gitshelf_core::types::VirtualPath;
use gitshelf_entity::share::ShareRecord;
use gitshelf_service::editor::EditableFile;

/// Escape text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shared page skeleton.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
  body {{ font-family: system-ui, sans-serif; background: #f3f9fd; margin: 0; padding: 20px; color: #333; }}
  a {{ color: #0078d4; text-decoration: none; }}
  a:hover {{ text-decoration: underline; }}
  .container {{ max-width: 960px; margin: 0 auto; }}
  .toolbar {{ background: #fff; padding: 12px 16px; border-radius: 8px; margin-bottom: 16px;
             display: flex; justify-content: space-between; align-items: center;
             box-shadow: 0 2px 8px rgba(0,0,0,0.05); }}
  table {{ width: 100%; background: #fff; border-radius: 8px; border-collapse: collapse;
          box-shadow: 0 2px 8px rgba(0,0,0,0.05); }}
  th, td {{ text-align: left; padding: 10px 14px; border-bottom: 1px solid #eee; }}
  th {{ background: #fafafa; color: #666; }}
  button {{ cursor: pointer; padding: 4px 10px; border: 1px solid #ccc; border-radius: 4px; background: #fff; }}
  button:hover {{ border-color: #0078d4; color: #0078d4; }}
  .ok {{ color: #107c10; }}
  .dead {{ color: #c42b1c; }}
</style>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>"#,
        title = escape(title),
        body = body,
    )
}

/// The re-authentication prompt shown to unauthorized browser requests.
pub fn auth_prompt() -> String {
    layout(
        "Access denied",
        r#"<div class="toolbar"><strong>Access denied</strong></div>
<form method="get" style="background:#fff;padding:16px;border-radius:8px;">
  <p>This instance requires an access token.</p>
  <input type="text" name="token" placeholder="Access token" style="padding:6px;width:240px;">
  <button type="submit">Continue</button>
</form>"#,
    )
}

/// The repository listing page (`GET /`).
pub fn repositories(repos: &[RepoSummary], token_query: &str) -> String {
    let mut rows = String::new();
    for repo in repos {
        let updated = repo
            .updated_at
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        rows.push_str(&format!(
            r#"<tr><td>{lock} <a href="/{name}{tq}">{name}</a></td><td>{updated}</td></tr>
"#,
            lock = if repo.private { "&#128274;" } else { "&#127760;" },
            name = escape(&repo.name),
            tq = token_query,
            updated = updated,
        ));
    }

    let body = format!(
        r#"<div class="toolbar"><strong>Repositories</strong>
<a href="/admin/shares{tq}">Share manager</a></div>
<table><thead><tr><th>Name</th><th>Updated</th></tr></thead><tbody>
{rows}</tbody></table>"#,
        tq = token_query,
        rows = rows,
    );
    layout("Repositories", &body)
}

/// A directory listing page.
///
/// Directories sort before files, each group alphabetically.
pub fn listing(path: &VirtualPath, entries: &[EntrySummary], token_query: &str) -> String {
    let mut sorted: Vec<&EntrySummary> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        let a_dir = a.kind == EntryKind::Dir;
        let b_dir = b.kind == EntryKind::Dir;
        b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
    });

    let mut rows = format!(
        r#"<tr><td colspan="3"><a href="{parent}{tq}">&#8679; up</a></td></tr>
"#,
        parent = path.parent_url_path(),
        tq = token_query,
    );
    for entry in sorted {
        let href = format!("/{}/{}", path.repository, entry.path);
        let actions = if entry.kind == EntryKind::File {
            let edit_sep = if token_query.is_empty() { "?" } else { "&" };
            format!(
                r#"<a href="{href}{tq}{sep}edit=true">edit</a>
<button onclick="share('{full}', this)">share</button>"#,
                href = href,
                tq = token_query,
                sep = edit_sep,
                full = escape(&format!("{}/{}", path.repository, entry.path)),
            )
        } else {
            String::new()
        };
        rows.push_str(&format!(
            r#"<tr><td>{icon} <a href="{href}{tq}">{name}</a></td><td>{size}</td><td>{actions}</td></tr>
"#,
            icon = match entry.kind {
                EntryKind::Dir => "&#128193;",
                EntryKind::File => "&#128196;",
                EntryKind::Other => "&#128279;",
            },
            href = href,
            tq = token_query,
            name = escape(&entry.name),
            size = if entry.kind == EntryKind::Dir {
                "-".to_string()
            } else {
                entry.size.to_string()
            },
            actions = actions,
        ));
    }

    let body = format!(
        r#"<div class="toolbar"><strong>{path}</strong>
<span><a href="/{tq_root}">Repositories</a> &middot; <a href="/admin/shares{tq}">Share manager</a></span></div>
<table><thead><tr><th>Name</th><th>Size</th><th></th></tr></thead><tbody>
{rows}</tbody></table>
<script>
async function share(fullPath, btn) {{
  const value = prompt('Share ' + fullPath + ' for how many days? (0 = forever)', '1');
  if (value === null) return;
  const body = value === '0'
    ? {{ fullPath: fullPath, unit: 'forever', value: 1 }}
    : {{ fullPath: fullPath, unit: 'day', value: parseInt(value) }};
  const res = await fetch('/api/share/create{tq}', {{
    method: 'POST',
    headers: {{'Content-Type': 'application/json'}},
    body: JSON.stringify(body)
  }});
  const data = await res.json();
  if (data.success) prompt('Share link:', data.url);
  else alert(data.message || 'Share creation failed');
}}
</script>"#,
        path = escape(&path.to_string()),
        tq_root = token_query,
        tq = token_query,
        rows = rows,
    );
    layout(&path.to_string(), &body)
}

/// The editor page for a single file.
pub fn editor(path: &VirtualPath, file: &EditableFile, token_query: &str) -> String {
    let body = format!(
        r#"<div class="toolbar"><strong>Editing {name}</strong>
<span><span id="msg"></span>
<button onclick="history.back()">Back</button>
<button id="save">Save</button></span></div>
<textarea id="code" spellcheck="false"
  style="width:100%;height:70vh;font-family:monospace;font-size:14px;box-sizing:border-box;"></textarea>
<script>
document.getElementById('code').value = {content};
document.getElementById('save').addEventListener('click', async () => {{
  const msg = document.getElementById('msg');
  const res = await fetch('/api/file/update{tq}', {{
    method: 'POST',
    headers: {{'Content-Type': 'application/json'}},
    body: JSON.stringify({{
      repo: {repo},
      path: {rel_path},
      sha: {sha},
      content: document.getElementById('code').value
    }})
  }});
  const data = await res.json();
  if (data.success) {{
    msg.textContent = 'Saved';
    msg.className = 'ok';
    setTimeout(() => location.reload(), 800);
  }} else {{
    msg.textContent = data.message || 'Save failed';
    msg.className = 'dead';
  }}
}});
</script>"#,
        name = escape(&file.name),
        content = js_string(&file.content),
        tq = token_query,
        repo = js_string(&path.repository),
        rel_path = js_string(&path.relative_path),
        sha = js_string(&file.sha),
    );
    layout(&format!("Edit {}", file.name), &body)
}

/// The share manager page (`GET /admin/shares`).
pub fn share_manager(records: &[ShareRecord], token_query: &str) -> String {
    let now = Utc::now();
    let mut rows = String::new();
    for record in records {
        let expires = record
            .expire_at
            .map(format_date)
            .unwrap_or_else(|| "never".to_string());
        let status = if record.is_resolvable_at(now) {
            r#"<span class="ok">valid</span>"#
        } else {
            r#"<span class="dead">invalid</span>"#
        };
        rows.push_str(&format!(
            r#"<tr id="row-{id}">
<td><a href="/s/{id}" target="_blank">{name}</a></td>
<td>{expires}</td><td>{status}</td><td>{visits}</td>
<td><button onclick="toggle('{id}', {next_active})">{toggle_label}</button>
<button onclick="del('{id}')">delete</button></td></tr>
"#,
            id = escape(&record.id),
            name = escape(record.file_name()),
            expires = expires,
            status = status,
            visits = record.visits,
            next_active = !record.active,
            toggle_label = if record.active { "disable" } else { "enable" },
        ));
    }
    if records.is_empty() {
        rows.push_str(r#"<tr><td colspan="5">No shares yet</td></tr>"#);
    }

    let body = format!(
        r#"<div class="toolbar"><strong>Share manager</strong>
<a href="/{tq}">Repositories</a></div>
<table><thead><tr><th>File</th><th>Expires</th><th>Status</th><th>Visits</th><th></th></tr></thead>
<tbody>
{rows}</tbody></table>
<script>
async function toggle(id, active) {{
  await fetch('/api/share/toggle{tq}', {{
    method: 'POST',
    headers: {{'Content-Type': 'application/json'}},
    body: JSON.stringify({{id, active}})
  }});
  location.reload();
}}
async function del(id) {{
  if (!confirm('Delete this share?')) return;
  await fetch('/api/share/delete{tq}', {{
    method: 'POST',
    headers: {{'Content-Type': 'application/json'}},
    body: JSON.stringify({{id}})
  }});
  document.getElementById('row-' + id).remove();
}}
</script>"#,
        tq = token_query,
        rows = rows,
    );
    layout("Share manager", &body)
}

/// Embed a string as a JavaScript literal inside an inline script tag.
///
/// `</` must not appear verbatim or the HTML parser ends the script early.
fn js_string(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}
