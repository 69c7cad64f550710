use std::fmt::Write;

use estimator::{AREA, BEDROOMS, Estimator, Field, WASHROOMS};

/// Everything up to the form controls: markup, styling, headings.
const HEAD: &str = "\
<!doctype html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>Hyderabad House Rent Predictor</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; color: #0f172a; }
h1 { text-align: center; }
.subtitle { text-align: center; color: #1e293b; margin-bottom: 2rem; }
form { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
label { display: flex; flex-direction: column; font-weight: 700; gap: 0.25rem; }
input, select { padding: 0.4rem; border-radius: 8px; border: 1px solid #94a3b8; }
button { grid-column: 1 / -1; height: 3rem; border: none; border-radius: 10px; background: #1e40af; color: white; font-size: 1.1rem; font-weight: 700; }
#result { text-align: center; font-size: 1.6rem; font-weight: 800; color: #0b3c91; margin-top: 2rem; }
#status { text-align: center; color: #166534; }
.footer { text-align: center; color: #1e293b; margin-top: 3rem; font-size: 0.85rem; }
</style>
</head>
<body>
<h1>\u{1f3e0} Hyderabad House Rent Predictor</h1>
<div class=\"subtitle\">AI-Based Monthly Rental Estimation</div>
<form id=\"estimate-form\">
";

/// Everything after the form controls: trigger, result line, script.
const TAIL: &str = "\
<button type=\"submit\">Predict Rent</button>
</form>
<div id=\"result\"></div>
<div id=\"status\"></div>
<script>
const form = document.getElementById(\"estimate-form\");
const result = document.getElementById(\"result\");
const note = document.getElementById(\"status\");

form.addEventListener(\"submit\", async (event) => {
  event.preventDefault();
  const fields = new FormData(form);
  const payload = {
    bedrooms: Number(fields.get(\"bedrooms\")),
    washrooms: Number(fields.get(\"washrooms\")),
    area: Number(fields.get(\"area\")),
    furnishing: fields.get(\"furnishing\"),
    tennants: fields.get(\"tennants\"),
    locality: fields.get(\"locality\"),
  };

  const resp = await fetch(\"/api/estimate\", {
    method: \"POST\",
    headers: { \"content-type\": \"application/json\" },
    body: JSON.stringify(payload),
  });
  const data = await resp.json();

  if (resp.ok) {
    result.textContent = data.display;
    note.textContent = \"Prediction Generated Successfully\";
  } else {
    result.textContent = data.error;
    note.textContent = \"\";
  }
});
</script>
<div class=\"footer\">Built with Machine Learning</div>
</body>
</html>
";

/// Renders the single page, with the dropdowns populated from the fitted
/// encoder vocabularies.
pub(crate) fn render(estimator: &Estimator) -> String {
    let encoders = estimator.encoders();
    let mut page = String::with_capacity(4096);

    page.push_str(HEAD);
    push_number(&mut page, "Bedrooms", &BEDROOMS);
    push_number(&mut page, "Washrooms", &WASHROOMS);
    push_number(&mut page, "Area (sqft)", &AREA);
    push_select(&mut page, "Furnishing Type", "furnishing", encoders.furnishing.classes());
    push_select(&mut page, "Preferred Tennants", "tennants", encoders.tennants.classes());
    push_select(&mut page, "Locality", "locality", encoders.locality.classes());
    page.push_str(TAIL);

    page
}

fn push_number(page: &mut String, label: &str, field: &Field) {
    let _ = writeln!(
        page,
        "<label>{label}<input type=\"number\" name=\"{}\" min=\"{}\" max=\"{}\" value=\"{}\" required></label>",
        field.name, field.min, field.max, field.default,
    );
}

fn push_select(page: &mut String, label: &str, name: &str, classes: &[String]) {
    let _ = write!(page, "<label>{label}<select name=\"{name}\">");
    for class in classes {
        let _ = write!(page, "<option>{}</option>", escape(class));
    }
    page.push_str("</select></label>\n");
}

/// Escapes a vocabulary label for embedding in markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
