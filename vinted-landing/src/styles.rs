//! CSS for the landing page.
//!
//! A single inline stylesheet: centered column, responsive feature grid
//! (one column on narrow screens, three from 768px up), bordered cards and
//! a primary call-to-action button. Light and dark palettes follow
//! `prefers-color-scheme`.

/// Complete stylesheet, inlined into the document `<head>`.
pub const LANDING_CSS: &str = r#"
:root {
    --background: #ffffff;
    --foreground: #0a0a0a;
    --muted-foreground: #737373;
    --border: #e5e5e5;
    --primary: #171717;
    --primary-foreground: #fafafa;
    --ring: #a3a3a3;
    --radius: 0.5rem;
    --font-mono: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
}

@media (prefers-color-scheme: dark) {
    :root {
        --background: #0a0a0a;
        --foreground: #fafafa;
        --muted-foreground: #a3a3a3;
        --border: #262626;
        --primary: #fafafa;
        --primary-foreground: #171717;
        --ring: #525252;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: system-ui, sans-serif;
}

.landing {
    display: flex;
    min-height: 100vh;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 6rem;
}

.landing-inner {
    width: 100%;
    max-width: 64rem;
    font-family: var(--font-mono);
    font-size: 0.875rem;
}

.landing-title {
    margin: 0 0 2rem;
    text-align: center;
    font-size: 2.25rem;
    font-weight: 700;
}

.landing-tagline {
    margin: 0 0 2rem;
    text-align: center;
}

.muted {
    color: var(--muted-foreground);
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(1, minmax(0, 1fr));
    gap: 1rem;
}

@media (min-width: 768px) {
    .feature-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}

.feature-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
}

.feature-card h2 {
    margin: 0 0 0.5rem;
    font-size: 1.25rem;
    font-weight: 600;
}

.feature-card p {
    margin: 0;
}

.cta {
    margin-top: 2rem;
    text-align: center;
}

.btn-primary {
    display: inline-flex;
    height: 2.5rem;
    align-items: center;
    justify-content: center;
    padding: 0.5rem 1rem;
    border-radius: calc(var(--radius) - 2px);
    background: var(--primary);
    color: var(--primary-foreground);
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    transition: opacity 150ms;
}

.btn-primary:hover {
    opacity: 0.9;
}

.btn-primary:focus-visible {
    outline: 2px solid var(--ring);
    outline-offset: 2px;
}

@media (max-width: 640px) {
    .landing {
        padding: 2rem 1rem;
    }
}
"#;
