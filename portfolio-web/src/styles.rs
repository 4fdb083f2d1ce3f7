pub const PORTFOLIO_STYLES: &str = r#"
/* Theme palettes */
:root,
:root[data-theme="dark"] {
    --page-bg: #000000;
    --text-title: #ffffff;
    --text-subtitle: #f3f4f6;
    --text-body: #e5e7eb;
    --text-detail: #d1d5db;
    --text-date: #9ca3af;
    --text-location: #9ca3af;
    --link: #60a5fa;
    --link-hover: #93c5fd;
    --pill-bg: #374151;
    --pill-text: #e5e7eb;
    --card-border: #374151;
    --enter-border: #ffffff;
    --enter-shadow: rgba(0, 0, 0, 0.1);
    --mode-transition: 0.8s;
    --ease-smooth: cubic-bezier(0.16, 1, 0.3, 1);
}

:root[data-theme="light"] {
    --page-bg: #ffffff;
    --text-title: #111827;
    --text-subtitle: #1f2937;
    --text-body: #374151;
    --text-detail: #374151;
    --text-date: #6b7280;
    --text-location: #4b5563;
    --link: #16a34a;
    --link-hover: #166534;
    --pill-bg: #e5e7eb;
    --pill-text: #1f2937;
    --card-border: #e5e7eb;
    --enter-border: #000000;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
}

.portfolio {
    min-height: 100vh;
    background-color: var(--page-bg);
    color: var(--text-title);
    transition: background-color var(--mode-transition) var(--ease-smooth),
        color var(--mode-transition) var(--ease-smooth);
}

/* Hero */
.hero {
    position: relative;
    width: 100%;
    height: 100vh;
    overflow: hidden;
}

.hero-content {
    position: relative;
    z-index: 20;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    height: 100%;
    padding: 0 1.5rem;
    text-align: center;
}

.hero-name {
    margin: 0;
    font-family: ui-serif, Georgia, serif;
    font-size: 3rem;
    font-weight: 400;
    letter-spacing: 0.1em;
    text-transform: lowercase;
    text-shadow: 0 10px 8px rgba(0, 0, 0, 0.04);
    animation: drop-in 0.8s var(--ease-smooth) both;
}

.hero-tagline {
    margin: 1rem 0 0;
    font-size: 1.125rem;
    animation: fade-in 0.8s ease 0.2s both;
}

.mode-toggle {
    margin-top: 0.5rem;
    padding: 0;
    border: none;
    background: none;
    color: inherit;
    font: inherit;
    font-size: 0.875rem;
    cursor: pointer;
    animation: fade-in 0.8s ease 0.4s both, soft-pulse 2s ease-in-out 1.2s infinite;
}

.enter-button {
    margin-top: 2.5rem;
    padding: 0.5rem 2rem;
    border: 1px solid var(--enter-border);
    border-radius: 9999px;
    background: transparent;
    color: var(--enter-border);
    font: inherit;
    cursor: pointer;
    transition: transform 0.2s var(--ease-smooth), box-shadow 0.2s var(--ease-smooth),
        color var(--mode-transition) var(--ease-smooth),
        border-color var(--mode-transition) var(--ease-smooth);
    animation: pop-in 0.4s var(--ease-smooth) both;
}

.enter-button:hover {
    transform: scale(1.1);
    box-shadow: 0 10px 25px var(--enter-shadow);
}

.enter-button:active {
    transform: scale(0.95);
    box-shadow: 0 5px 10px var(--enter-shadow);
}

/* Trail canvas */
.mouse-trail {
    position: fixed;
    inset: 0;
    width: 100%;
    height: 100%;
    pointer-events: none;
    z-index: 10;
}

/* Ambient background */
.ambient-layer {
    position: absolute;
    inset: 0;
    overflow: hidden;
    z-index: 0;
}

.ambient-fill {
    position: absolute;
    inset: 0;
    transition: background-color var(--mode-transition) var(--ease-smooth);
}

.bokeh {
    position: absolute;
    border-radius: 9999px;
    opacity: var(--bokeh-base);
    animation-name: bokeh-pulse;
    animation-timing-function: ease-in-out;
    animation-iteration-count: infinite;
    transition: background-color var(--mode-transition) var(--ease-smooth),
        filter var(--mode-transition) var(--ease-smooth);
}

.paper-texture {
    position: absolute;
    inset: 0;
    opacity: 0.03;
    background-image: radial-gradient(rgba(128, 128, 128, 0.6) 1px, transparent 1px);
    background-size: 3px 3px;
    pointer-events: none;
}

@keyframes bokeh-pulse {
    0%, 100% { opacity: var(--bokeh-base); }
    50% { opacity: var(--bokeh-peak); }
}

@keyframes drop-in {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes pop-in {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes soft-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

/* Resume sections */
.resume-section {
    width: 100%;
    max-width: 48rem;
    margin: 0 auto;
    padding: 3rem 1rem;
}

.section-title {
    margin: 0 0 1.5rem;
    font-family: ui-serif, Georgia, serif;
    font-size: 1.875rem;
    font-weight: 400;
    color: var(--text-title);
}

.section-body {
    line-height: 1.625;
    color: var(--text-body);
}

.entry-list {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.entry-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--text-subtitle);
}

.entry-subtitle {
    margin: 0;
    font-weight: 500;
    color: var(--text-detail);
}

.entry-meta {
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-size: 0.875rem;
}

.entry-date {
    color: var(--text-date);
}

.entry-location {
    color: var(--text-location);
}

.entry-details {
    margin: 0.5rem 0 0;
    padding-left: 1.25rem;
    color: var(--text-detail);
}

.entry-tech {
    margin: 0;
    font-style: italic;
    color: var(--text-detail);
}

.entry-description {
    margin: 0.25rem 0 0;
    color: var(--text-body);
}

.entry-link {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    color: var(--link);
    text-decoration: none;
}

.entry-link:hover {
    color: var(--link-hover);
    text-decoration: underline;
}

.publication-card {
    padding: 1rem;
    border: 1px solid var(--card-border);
    border-radius: 0.5rem;
}

.publication-authors {
    margin: 0.25rem 0 0;
    font-size: 0.875rem;
    color: var(--text-detail);
}

.publication-venue {
    font-style: italic;
    color: var(--text-detail);
}

.skill-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.skill-pill {
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    background: var(--pill-bg);
    color: var(--pill-text);
}

.section-title,
.section-body,
.entry-title,
.entry-subtitle,
.entry-date,
.entry-location,
.entry-details,
.entry-tech,
.entry-description,
.entry-link,
.publication-card,
.publication-authors,
.publication-venue,
.skill-pill {
    transition: color var(--mode-transition) var(--ease-smooth),
        background-color var(--mode-transition) var(--ease-smooth),
        border-color var(--mode-transition) var(--ease-smooth);
}

@media (min-width: 768px) {
    .hero-name {
        font-size: 3.75rem;
    }

    .resume-section {
        padding: 4rem 2rem;
    }
}
"#;
