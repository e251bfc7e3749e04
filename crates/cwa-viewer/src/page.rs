//! HTML rendering for the forecast page.

use std::{path::Path, sync::Arc};

use tera::{Context, Tera};

use crate::{Result, view::PageState};

const INDEX: &str = "index.html";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <style>
    body  { font-family: sans-serif; margin: 2rem; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 0.4rem 0.8rem; text-align: left; }
    th    { background: #f4f4f4; cursor: pointer; user-select: none; }
    th[aria-sort="ascending"]::after  { content: " \25B2"; }
    th[aria-sort="descending"]::after { content: " \25BC"; }
    .alert   { padding: 0.8rem 1rem; border-radius: 4px; }
    .error   { background: #fdecea; color: #611a15; }
    .warning { background: #fff4e5; color: #663c00; }
    .caption { color: #666; font-size: 0.9rem; }
  </style>
</head>
<body>
  <h1>{{ title }}</h1>
  <hr>
{% if state.kind == "missing_database" %}
  <div class="alert error">Database file "{{ state.path }}" not found. Run cwa-load to create it.</div>
{% elif state.kind == "unreadable" %}
  <div class="alert error">Failed to read the database: {{ state.message }}</div>
{% elif state.kind == "empty" %}
  <div class="alert warning">The weather table has no rows.</div>
{% else %}
  <h3>Table: weather (read from {{ store_path }})</h3>
  <table class="sortable">
    <thead>
      <tr>{% for column in state.columns %}<th data-column="{{ loop.index0 }}">{{ column }}</th>{% endfor %}</tr>
    </thead>
    <tbody>
{% for row in state.rows %}      <tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{% endfor %}    </tbody>
  </table>
  <p class="caption">{{ state.rows | length }} location{{ state.rows | length | pluralize }} loaded. Click a column header to sort.</p>
  <script>
    document.querySelectorAll("table.sortable").forEach(function (table) {
      var headers = table.querySelectorAll("th[data-column]");
      headers.forEach(function (th) {
        th.addEventListener("click", function () {
          var col = Number(th.dataset.column);
          var asc = th.getAttribute("aria-sort") !== "ascending";
          headers.forEach(function (other) { other.removeAttribute("aria-sort"); });
          th.setAttribute("aria-sort", asc ? "ascending" : "descending");
          var body = table.tBodies[0];
          var rows = Array.from(body.rows);
          rows.sort(function (a, b) {
            var x = a.cells[col].textContent;
            var y = b.cells[col].textContent;
            var nx = parseFloat(x);
            var ny = parseFloat(y);
            var cmp = (isNaN(nx) || isNaN(ny)) ? x.localeCompare(y) : nx - ny;
            return asc ? cmp : -cmp;
          });
          rows.forEach(function (row) { body.appendChild(row); });
        });
      });
    });
  </script>
{% endif %}
</body>
</html>
"#;

/// Embedded templates, compiled once at startup.
///
/// Cheap to clone; the compiled templates are shared.
#[derive(Clone)]
pub struct PageRenderer {
  tera: Arc<Tera>,
}

impl PageRenderer {
  pub fn new() -> Result<Self> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);
    tera.add_raw_template(INDEX, INDEX_TEMPLATE)?;
    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  pub fn render(&self, title: &str, store_path: &Path, state: &PageState) -> Result<String> {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx.insert("store_path", &store_path.display().to_string());
    ctx.insert("state", state);
    Ok(self.tera.render(INDEX, &ctx)?)
  }
}
