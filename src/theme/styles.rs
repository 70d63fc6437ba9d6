//! Global CSS styles for Posterwall.
//!
//! Slate gradient backdrop with shadowed poster rows.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --slate-dark: #475569;
  --slate-light: #94a3b8;

  /* POSTERS */
  --poster-shadow: rgba(63, 63, 70, 0.6);
  --poster-placeholder: rgba(24, 24, 27, 0.35);

  /* TEXT */
  --text-primary: #f5f5f5;

  /* SEMANTIC */
  --warning-bg: rgba(255, 159, 0, 0.15);
  --warning-border: #ff9f00;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  min-height: 100vh;
  background: linear-gradient(to left, var(--slate-dark), var(--slate-light));
  color: var(--text-primary);
  font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
}

/* === Page layout === */
.page {
  position: relative;
  padding: 3rem 0;
}

.page-content {
  padding: 0 2rem;
}

/* === Collection stack === */
.collection-stack > * + * {
  margin-top: 2rem;
}

.collection-title {
  margin: 0 0 1rem;
  font-size: 1.25rem;
  font-weight: 700;
}

.poster-row {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-start;
}

.poster {
  display: inline-block;
  height: 15rem;
  margin: 0.5rem;
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px -3px var(--poster-shadow), 0 4px 6px -4px var(--poster-shadow);
}

.poster-lead {
  margin: 0.375rem;
}

.poster-missing {
  width: 10rem;
  background: var(--poster-placeholder);
  box-shadow: none;
}

/* === Fetch failure banner === */
.fetch-banner {
  margin: 0 0.5rem 1rem;
  padding: 0.5rem 1rem;
  border-left: 3px solid var(--warning-border);
  background: var(--warning-bg);
  font-size: 0.875rem;
}
"#;
