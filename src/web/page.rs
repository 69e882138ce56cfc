//! The single HTML page: the upload form, plus the preview once a banner exists

/// Values rendered into the page
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// Base64-encoded PNG of the last generated banner
    pub image_data: Option<&'a str>,
    /// Caption to pre-fill the textarea with
    pub text_input: &'a str,
    /// Font size to pre-fill the number field with
    pub font_size: u32,
}

/// Escape a string for use in HTML text and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the page
pub fn render(ctx: &PageContext<'_>) -> String {
    let preview = match ctx.image_data {
        Some(data) => format!(
            r#"
    <section class="preview">
      <h2>Preview</h2>
      <img src="data:image/png;base64,{data}" alt="Generated banner">
      <p><a href="data:image/png;base64,{data}" download="banner.png">Download PNG</a></p>
    </section>"#
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Banner Generator</title>
  <style>
    body {{ font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }}
    label {{ display: block; margin-top: 1rem; font-weight: bold; }}
    textarea {{ width: 100%; min-height: 6rem; }}
    .preview img {{ max-width: 100%; border: 1px solid #ccc; }}
  </style>
</head>
<body>
  <main>
    <h1>Banner Generator</h1>
    <form action="/generate" method="post" enctype="multipart/form-data">
      <label for="logo">Logo</label>
      <input type="file" id="logo" name="logo" accept="image/*" required>

      <label for="main_image">Main image</label>
      <input type="file" id="main_image" name="main_image" accept="image/*" required>

      <label for="text_input">Text</label>
      <textarea id="text_input" name="text_input" required>{text}</textarea>

      <label for="font_size">Font size</label>
      <input type="number" id="font_size" name="font_size" min="1" value="{font_size}">

      <p><button type="submit">Generate</button></p>
    </form>{preview}
  </main>
</body>
</html>
"#,
        text = escape_html(ctx.text_input),
        font_size = ctx.font_size,
        preview = preview,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("simple"), "simple");
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
        assert_eq!(escape_html("line\nbreak"), "line\nbreak");
    }

    #[test]
    fn test_form_only_without_image() {
        let html = render(&PageContext { image_data: None, text_input: "", font_size: 50 });
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(html.contains(r#"name="font_size" min="1" value="50""#));
        assert!(!html.contains("data:image/png"));
    }

    #[test]
    fn test_preview_and_echo() {
        let html = render(&PageContext {
            image_data: Some("iVBORw0KGgo="),
            text_input: "Hello <World>",
            font_size: 64,
        });
        assert!(html.contains("data:image/png;base64,iVBORw0KGgo="));
        assert!(html.contains("Hello &lt;World&gt;</textarea>"));
        assert!(html.contains(r#"value="64""#));
    }
}
