//! HTML rendering
//!
//! The presentation layer consumes exactly two view contracts and renders
//! complete pages with embedded styles. Everything that originates upstream
//! is escaped before it reaches the page.

use std::collections::HashMap;

/// View contract for the record table
#[derive(Debug)]
pub struct ListView {
    pub title: String,
    pub columns: Vec<String>,
    pub records: Vec<HashMap<String, String>>,
    pub error: Option<String>,
}

/// View contract for the create form
#[derive(Debug)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<String>,
    pub error: Option<String>,
}

/// Render the record table page.
pub fn list_page(view: &ListView) -> String {
    let header_cells: String = view
        .columns
        .iter()
        .map(|column| format!("<th>{}</th>", escape(column)))
        .collect();

    let body_rows: String = if view.records.is_empty() {
        format!(
            r#"<tr><td class="empty" colspan="{}">No records found.</td></tr>"#,
            view.columns.len().max(1)
        )
    } else {
        view.records
            .iter()
            .map(|record| {
                let cells: String = view
                    .columns
                    .iter()
                    .map(|column| {
                        let value = record.get(column).map(String::as_str).unwrap_or("");
                        format!("<td>{}</td>", escape(value))
                    })
                    .collect();
                format!("<tr>{cells}</tr>")
            })
            .collect()
    };

    let body = format!(
        r#"{banner}
<div class="toolbar">
    <a class="button" href="/update-cobj">New record</a>
</div>
<table>
    <thead><tr>{header_cells}</tr></thead>
    <tbody>{body_rows}</tbody>
</table>"#,
        banner = error_banner(view.error.as_deref()),
    );

    layout(&view.title, &body)
}

/// Render the create-form page.
pub fn form_page(view: &FormView) -> String {
    let inputs: String = view
        .fields
        .iter()
        .map(|field| {
            format!(
                r#"<label for="{attr}">{label}</label>
<input type="text" id="{attr}" name="{attr}">"#,
                attr = escape_attr(field),
                label = escape(field),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"{banner}
<form method="post" action="/update-cobj">
{inputs}
    <div class="toolbar">
        <button type="submit" class="button">Create</button>
        <a class="link" href="/">Back to list</a>
    </div>
</form>"#,
        banner = error_banner(view.error.as_deref()),
    );

    layout(&view.title, &body)
}

/// Render a standalone message page, used for configuration failures.
pub fn message_page(title: &str, message: &str) -> String {
    let body = error_banner(Some(message));
    layout(title, &body)
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<div class="error">{}</div>"#, escape(message)),
        None => String::new(),
    }
}

fn escape(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --bg: #f6f7f9;
            --panel: #ffffff;
            --border: #d9dce1;
            --text: #1f2430;
            --muted: #6b7280;
            --accent: #2563eb;
            --error-bg: #fdecec;
            --error-border: #e5484d;
        }}
        * {{ box-sizing: border-box; }}
        body {{
            margin: 0;
            padding: 2rem 1rem;
            background: var(--bg);
            color: var(--text);
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
        }}
        main {{
            max-width: 56rem;
            margin: 0 auto;
            background: var(--panel);
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 1.5rem 2rem 2rem;
        }}
        h1 {{ font-size: 1.4rem; margin: 0 0 1rem; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{
            text-align: left;
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid var(--border);
        }}
        th {{ color: var(--muted); font-weight: 600; text-transform: uppercase; font-size: 0.75rem; }}
        td.empty {{ color: var(--muted); text-align: center; padding: 1.5rem; }}
        label {{ display: block; margin: 0.75rem 0 0.25rem; font-weight: 600; }}
        input[type="text"] {{
            width: 100%;
            padding: 0.5rem 0.6rem;
            border: 1px solid var(--border);
            border-radius: 6px;
            font-size: 0.95rem;
        }}
        .toolbar {{ margin: 1rem 0; display: flex; gap: 0.75rem; align-items: center; }}
        .button {{
            display: inline-block;
            background: var(--accent);
            color: #ffffff;
            border: none;
            border-radius: 6px;
            padding: 0.5rem 1rem;
            font-size: 0.95rem;
            text-decoration: none;
            cursor: pointer;
        }}
        .link {{ color: var(--accent); }}
        .error {{
            background: var(--error-bg);
            border: 1px solid var(--error-border);
            border-radius: 6px;
            padding: 0.75rem 1rem;
            margin-bottom: 1rem;
        }}
    </style>
</head>
<body>
    <main>
        <h1>{title}</h1>
        {body}
    </main>
</body>
</html>"##,
        title = escape(title),
        body = body,
    )
}
