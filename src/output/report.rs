use super::OutputRecord;

fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}

/// Self-contained HTML export: the record data is embedded as JSON and a
/// small script renders the card grid and detail dialog client-side.
pub fn render_html(records: &[OutputRecord]) -> Vec<u8> {
    let json = serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());
    let json = json_for_script_tag(&json);

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>Certfolio Report</title>
  <style>
    :root {{ --bg: #0f172a; --panel: #112240; --ink: #e2e8f0; --dim: #94a3b8; --accent: #4ade80; }}
    body {{ background: var(--bg); color: var(--ink); font-family: 'Inter', sans-serif; margin: 0; padding: 2rem; }}
    h1 {{ color: var(--accent); text-align: center; }}
    p.sub {{ color: var(--dim); text-align: center; margin-bottom: 2rem; }}
    .grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; max-width: 72rem; margin: 0 auto; }}
    .card {{ background: var(--panel); border-radius: 0.5rem; padding: 1.5rem; cursor: pointer; border: 2px solid transparent; }}
    .card:hover {{ border-color: var(--accent); }}
    .card h3 {{ color: var(--accent); margin: 0 0 0.25rem 0; }}
    .card .issuer {{ color: var(--dim); font-size: 0.85rem; }}
    .card .desc {{ color: var(--dim); display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; }}
    .badge {{ float: right; color: #0f172a; font-weight: 700; font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 9999px; }}
    .badge.green {{ background: #22c55e; }} .badge.yellow {{ background: #eab308; }} .badge.blue {{ background: #3b82f6; }}
    #overlay {{ position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: none; align-items: center; justify-content: center; padding: 1rem; }}
    #overlay.open {{ display: flex; }}
    #dialog {{ background: #1e293b; border-radius: 0.75rem; max-width: 42rem; width: 100%; padding: 2rem; position: relative; }}
    #dialog h2 {{ color: var(--accent); margin-top: 0; }}
    #dialog ul {{ list-style: none; padding: 0; }}
    #dialog li::before {{ content: '\2714  '; color: var(--accent); }}
    #dialog a {{ color: var(--accent); }}
    #close {{ position: absolute; top: 1rem; right: 1rem; background: none; border: none; color: var(--dim); font-size: 1.25rem; cursor: pointer; }}
  </style>
</head>
<body>
  <script type="application/json" id="records-data">{json}</script>
  <h1>Professional Certifications</h1>
  <p class="sub">Showcasing Expertise in Cybersecurity and Ethical Hacking</p>
  <div class="grid" id="grid"></div>
  <div id="overlay">
    <div id="dialog">
      <button id="close">&#10005;</button>
      <div id="dialog-body"></div>
    </div>
  </div>
  <script>
    const records = JSON.parse(document.getElementById('records-data').textContent);
    const grid = document.getElementById('grid');
    const overlay = document.getElementById('overlay');
    const dialogBody = document.getElementById('dialog-body');

    const esc = (s) => String(s).replace(/[&<>"']/g, (c) => ({{
      '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
    }}[c]));

    records.forEach((record, index) => {{
      const card = document.createElement('div');
      card.className = 'card';
      card.innerHTML = `
        <span class="badge ${{esc(record.badge)}}">${{esc(record.status)}}</span>
        <h3>${{esc(record.title)}}</h3>
        <div class="issuer">${{esc(record.issuer)}}</div>
        <p class="desc">${{esc(record.description)}}</p>`;
      card.addEventListener('click', () => show(index));
      grid.appendChild(card);
    }});

    function show(index) {{
      const record = records[index];
      dialogBody.innerHTML = `
        <span class="badge ${{esc(record.badge)}}">${{esc(record.status)}}</span>
        <h2>${{esc(record.title)}}</h2>
        <div class="issuer">${{esc(record.issuer)}} | ${{esc(record.date)}}</div>
        <p>${{esc(record.description)}}</p>
        <h4>Key Highlights</h4>
        <ul>${{record.details.map((d) => `<li>${{esc(d)}}</li>`).join('')}}</ul>
        <a href="${{esc(record.verification_link)}}" target="_blank" rel="noopener noreferrer">Verify Certification</a>`;
      overlay.classList.add('open');
    }}

    // The close action lives on the overlay and the button; clicks inside
    // the dialog never reach it.
    overlay.addEventListener('click', (e) => {{
      if (e.target === overlay) overlay.classList.remove('open');
    }});
    document.getElementById('close').addEventListener('click', () => overlay.classList.remove('open'));
  </script>
</body>
</html>
"####
    );

    html.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::build_records;

    #[test]
    fn html_report_embeds_every_record() {
        let records = build_records(&crate::catalog::built_in_certifications());
        let html = String::from_utf8(render_html(&records)).unwrap();
        assert!(html.contains("records-data"));
        for record in &records {
            assert!(html.contains(&record.issuer));
        }
    }

    #[test]
    fn script_tag_payload_cannot_close_the_tag() {
        assert_eq!(json_for_script_tag("x</script>"), "x<\\/script>");
    }
}
