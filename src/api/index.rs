use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>MoodTunes</title>
<style>
  body { font-family: system-ui, sans-serif; background: #14171f; color: #e8eaf0; margin: 0; padding: 2rem; }
  h1 { margin-top: 0; font-size: 1.6rem; }
  .panel { max-width: 860px; margin: 0 auto; }
  label { display: block; margin: 0.8rem 0 0.25rem; font-size: 0.85rem; color: #9aa3b5; }
  input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; border-radius: 6px; border: 1px solid #2a3040; background: #1c2130; color: inherit; }
  .chips { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-top: 0.4rem; }
  .chip { padding: 0.3rem 0.8rem; border-radius: 999px; border: 1px solid #2a3040; background: #1c2130; color: inherit; cursor: pointer; }
  .chip.active { background: #3b82f6; border-color: #3b82f6; }
  button.primary { margin-top: 1.2rem; padding: 0.6rem 1.6rem; border-radius: 6px; border: none; background: #3b82f6; color: white; cursor: pointer; font-size: 1rem; }
  #notice { margin-top: 1rem; color: #fbbf24; }
  #results { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; margin-top: 1.5rem; }
  .card { background: #1c2130; border-radius: 8px; padding: 0.8rem; }
  .card img { width: 100%; border-radius: 6px; }
  .card .title { font-weight: 600; margin: 0.5rem 0 0.15rem; }
  .card .meta { font-size: 0.8rem; color: #9aa3b5; }
  .card .actions { margin-top: 0.5rem; display: flex; gap: 0.6rem; font-size: 0.8rem; }
  .card a, .card button { color: #3b82f6; background: none; border: none; padding: 0; cursor: pointer; text-decoration: none; font-size: 0.8rem; }
  #more { display: none; margin: 1.5rem auto 0; }
  #player { position: fixed; right: 1rem; bottom: 1rem; width: 320px; }
  #player iframe { width: 100%; aspect-ratio: 16 / 9; border: 0; border-radius: 8px; }
</style>
</head>
<body>
<div class="panel">
  <h1>MoodTunes</h1>
  <label for="mood">How are you feeling?</label>
  <textarea id="mood" rows="2" placeholder="e.g. rainy afternoon, need something warm"></textarea>
  <div class="chips" id="chips"></div>
  <label for="song">A song you love</label>
  <input id="song" placeholder="song name">
  <label for="artist">Its artist</label>
  <input id="artist" placeholder="artist name">
  <label for="instruments">Instruments you enjoy (comma separated)</label>
  <input id="instruments" placeholder="piano, cello">
  <label for="genre">Genre</label>
  <input id="genre" placeholder="jazz">
  <label for="profile">Social profile URL</label>
  <input id="profile" placeholder="https://...">
  <button class="primary" id="go">Find my tunes</button>
  <div id="notice"></div>
  <div id="results"></div>
  <button class="primary" id="more">Load more</button>
  <div id="player"></div>
</div>
<script>
let current = null;
let moodId = "";

async function loadMoods() {
  const res = await fetch("/api/moods");
  const profiles = await res.json();
  const chips = document.getElementById("chips");
  for (const p of profiles) {
    const b = document.createElement("button");
    b.className = "chip";
    b.textContent = p.name;
    b.onclick = () => {
      moodId = moodId === p.id ? "" : p.id;
      for (const c of chips.children) c.classList.remove("active");
      if (moodId) b.classList.add("active");
    };
    chips.appendChild(b);
  }
}

function payload() {
  return {
    moodText: document.getElementById("mood").value,
    moodId: moodId,
    songName: document.getElementById("song").value,
    artistName: document.getElementById("artist").value,
    instruments: document.getElementById("instruments").value,
    genre: document.getElementById("genre").value,
    profileUrl: document.getElementById("profile").value || null,
  };
}

function card(song) {
  const div = document.createElement("div");
  div.className = "card";
  const img = document.createElement("img");
  img.src = song.albumArtUrl;
  img.alt = song.artHint || song.albumName;
  div.appendChild(img);
  const title = document.createElement("div");
  title.className = "title";
  title.textContent = song.title;
  div.appendChild(title);
  const meta = document.createElement("div");
  meta.className = "meta";
  meta.textContent = song.artistName + " - " + song.albumName;
  div.appendChild(meta);
  const actions = document.createElement("div");
  actions.className = "actions";
  const play = document.createElement("button");
  play.textContent = "Play video";
  play.onclick = () => playVideo(song);
  actions.appendChild(play);
  for (const [label, href] of [["Spotify", song.links.spotify], ["YouTube", song.links.youtube], ["Apple", song.links.appleMusic]]) {
    if (!href) continue;
    const a = document.createElement("a");
    a.href = href;
    a.target = "_blank";
    a.textContent = label;
    actions.appendChild(a);
  }
  div.appendChild(actions);
  return div;
}

function render(outcome, append) {
  const results = document.getElementById("results");
  if (!append) results.innerHTML = "";
  document.getElementById("notice").textContent = outcome.notice || "";
  for (const song of outcome.songs) results.appendChild(card(song));
  current = outcome;
  const shown = results.children.length;
  document.getElementById("more").style.display =
    outcome.total > shown ? "block" : "none";
}

async function discover() {
  const res = await fetch("/api/search", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(payload()),
  });
  const body = await res.json();
  if (!res.ok) {
    document.getElementById("notice").textContent = body.error || "Something went wrong.";
    return;
  }
  render(body, false);
}

async function loadMore() {
  if (!current) return;
  const res = await fetch("/api/search/more", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({
      intent: current.intent,
      offset: current.offset + current.limit,
      limit: current.limit,
    }),
  });
  const body = await res.json();
  if (!res.ok) {
    document.getElementById("notice").textContent = body.error || "Something went wrong.";
    return;
  }
  render(body, true);
}

async function playVideo(song) {
  const q = encodeURIComponent(song.title + " " + song.artistName);
  const res = await fetch("/api/video?q=" + q);
  const body = await res.json();
  if (res.ok && body.videoId) {
    document.getElementById("player").innerHTML =
      '<iframe src="https://www.youtube.com/embed/' + body.videoId +
      '?autoplay=1" allow="autoplay; encrypted-media" allowfullscreen></iframe>';
  } else if (song.links.youtube) {
    window.open(song.links.youtube, "_blank");
  }
}

document.getElementById("go").onclick = discover;
document.getElementById("more").onclick = loadMore;
loadMoods();
</script>
</body>
</html>
"#;
