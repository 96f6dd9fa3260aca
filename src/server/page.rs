use crate::{config::PanelConfig, panel::PanelView};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
  body { font-family: sans-serif; background: #f4f6f8; }
  .card { width: 75vw; margin: 2rem auto; padding: 1.5rem; background: #fff; border-radius: 8px; }
  label { display: block; font-weight: bold; margin-top: 1rem; }
  textarea { width: 100%; height: 25vh; box-sizing: border-box; }
  button { margin-top: 1rem; padding: 0.5rem 1.5rem; }
</style>
</head>
<body>
<div class="card">
  <h2>{{title}}</h2>
  <label for="input">{{input_label}}</label>
  <textarea id="input" placeholder="{{placeholder}}">{{input_text}}</textarea>
  <button id="submit" data-busy-label="{{busy_label}}"{{disabled}}>{{submit_label}}</button>
  <label for="response">{{output_label}}</label>
  <textarea id="response" readonly>{{output_text}}</textarea>
</div>
<script>
const input = document.getElementById("input");
const button = document.getElementById("submit");
const output = document.getElementById("response");
function render(view) {
  output.value = view.output_text;
  button.disabled = !view.submit_enabled;
  button.textContent = view.submit_label;
}
// Input updates are sent one at a time, in typing order.
let inputSync = Promise.resolve();
input.addEventListener("input", () => {
  const text = input.value;
  inputSync = inputSync
    .then(() => fetch("/api/panel/input", {
      method: "PUT",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ text }),
    }))
    .catch(() => {});
});
button.addEventListener("click", async () => {
  button.disabled = true;
  button.textContent = button.dataset.busyLabel;
  await inputSync;
  try {
    const res = await fetch("/api/panel/submit", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ text: input.value }),
    });
    if (res.ok) {
      render(await res.json());
      return;
    }
  } catch (e) {}
  const res = await fetch("/api/panel");
  render(await res.json());
});
</script>
</body>
</html>
"#;

/// Renders the panel page with the current view baked in.
///
/// Placeholders are substituted in one pass over the template, so text that
/// looks like a placeholder inside a substituted value is left alone.
pub fn render_page(config: &PanelConfig, view: &PanelView) -> String {
    let mut html = String::with_capacity(PAGE_TEMPLATE.len() + view.output_text.len());
    let mut rest = PAGE_TEMPLATE;

    while let Some(start) = rest.find("{{") {
        html.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        match name {
            "title" => html.push_str(&escape_html(&config.title)),
            "input_label" => html.push_str(&escape_html(&config.input_label)),
            "placeholder" => html.push_str(&escape_html(&config.placeholder)),
            "output_label" => html.push_str(&escape_html(&config.output_label)),
            "busy_label" => html.push_str(&escape_html(&config.busy_label)),
            "submit_label" => html.push_str(&escape_html(&view.submit_label)),
            "disabled" => {
                if !view.submit_enabled {
                    html.push_str(" disabled");
                }
            }
            "input_text" => html.push_str(&escape_html(&view.input_text)),
            "output_text" => html.push_str(&escape_html(&view.output_text)),
            other => {
                html.push_str("{{");
                html.push_str(other);
                html.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    html.push_str(rest);
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
