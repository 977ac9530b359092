//! Embedded single-page front end for `dialscope --serve`.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Dialscope</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <main>
    <h1>Dialscope</h1>
    <form id="lookup-form">
      <input id="number" type="text" placeholder="+14155552671" autocomplete="off" autofocus>
      <button type="submit">Search</button>
    </form>
    <p id="error" class="error" hidden></p>
    <dl id="result" hidden>
      <dt>Country</dt><dd id="country"></dd>
      <dt>Carrier</dt><dd id="carrier"></dd>
      <dt>Time zones</dt><dd id="zones"></dd>
      <dt>Local time</dt><dd id="local-time"></dd>
      <dt>Coordinates</dt><dd id="coords"></dd>
      <dt>City</dt><dd id="city"></dd>
      <dt>State</dt><dd id="state"></dd>
    </dl>
    <p><a id="map-link" target="_blank" rel="noopener" hidden>Show on map</a></p>
    <section>
      <h2>History</h2>
      <ul id="history"></ul>
      <button id="clear-history">Clear</button>
      <a href="/api/history/export" download>Export CSV</a>
    </section>
  </main>
  <script src="/app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = r#"body {
  font-family: system-ui, sans-serif;
  background: #f0f2f5;
  color: #1f2933;
  margin: 0;
}
main {
  max-width: 40rem;
  margin: 3rem auto;
  padding: 2rem;
  background: #fff;
  border-radius: 8px;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15);
}
form {
  display: flex;
  gap: 0.5rem;
}
input {
  flex: 1;
  padding: 0.5rem;
  font-size: 1rem;
}
button {
  padding: 0.5rem 1rem;
  cursor: pointer;
}
dl {
  display: grid;
  grid-template-columns: max-content 1fr;
  gap: 0.25rem 1rem;
}
dt {
  font-weight: 600;
}
dd {
  margin: 0;
}
.error {
  color: #b00020;
}
#history li {
  cursor: pointer;
}
"#;

pub const APP_JS: &str = r#"const form = document.getElementById('lookup-form');
const numberInput = document.getElementById('number');
const errorEl = document.getElementById('error');
const resultEl = document.getElementById('result');
const mapLink = document.getElementById('map-link');
const historyEl = document.getElementById('history');

async function refreshHistory() {
  const res = await fetch('/api/history');
  const body = await res.json();
  historyEl.innerHTML = '';
  for (const entry of body.entries) {
    const li = document.createElement('li');
    li.textContent = entry;
    li.onclick = () => { numberInput.value = entry; lookup(entry); };
    historyEl.appendChild(li);
  }
}

async function lookup(number) {
  errorEl.hidden = true;
  const res = await fetch('/api/lookup?number=' + encodeURIComponent(number));
  const body = await res.json();
  if (!res.ok) {
    resultEl.hidden = true;
    mapLink.hidden = true;
    errorEl.textContent = body.error;
    errorEl.hidden = false;
    return;
  }
  document.getElementById('country').textContent = body.country_description;
  document.getElementById('carrier').textContent = body.carrier_name || '—';
  document.getElementById('zones').textContent = body.time_zones.join(', ') || '—';
  document.getElementById('local-time').textContent = body.local_time_display;
  document.getElementById('coords').textContent =
    body.latitude !== null ? body.latitude + ', ' + body.longitude : 'Unknown';
  document.getElementById('city').textContent = body.city;
  document.getElementById('state').textContent = body.state;
  if (body.map_url) {
    mapLink.href = body.map_url;
    mapLink.hidden = false;
  } else {
    mapLink.hidden = true;
  }
  resultEl.hidden = false;
  refreshHistory();
}

form.onsubmit = (e) => {
  e.preventDefault();
  const number = numberInput.value.trim();
  if (number) lookup(number);
};

document.getElementById('clear-history').onclick = async () => {
  await fetch('/api/history/clear', { method: 'POST' });
  refreshHistory();
};

refreshHistory();
"#;
