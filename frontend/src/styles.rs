// Page-wide styles, injected once by the app shell. Per-frame values
// (transforms, opacity, timeline height) are set inline by the sections.
pub const PAGE_STYLES: &str = r#"
:root {
    --brand-primary: #4d64ff;
    --brand-dark: #1c1d20;
    --page-bg: #f5f5f5;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: "Inter", system-ui, sans-serif;
    background: var(--page-bg);
    color: #0b1220;
}

.page { background: var(--page-bg); }

.skip-link {
    position: absolute;
    left: -9999px;
    top: 1rem;
    z-index: 100;
    padding: 0.5rem 1rem;
    background: var(--brand-primary);
    color: white;
    border-radius: 999px;
}
.skip-link:focus { left: 1rem; }

/* Preloader */
.preloader {
    position: fixed;
    inset: 0;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--brand-dark);
}
.preloader-greeting {
    color: white;
    font-size: clamp(32px, 6vw, 64px);
    font-weight: 500;
}

/* Hero */
.hero {
    position: relative;
    height: 100vh;
    overflow: hidden;
    background: #999d9e;
    color: white;
}
.hero-nav {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 2rem 3rem;
}
.hero-nav-links { display: flex; gap: 0.75rem; }
.nav-pill {
    padding: 0.5rem 1.25rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.25);
    color: white;
    text-decoration: none;
    backdrop-filter: blur(8px);
}
.signature-full { display: none; }
.hero-signature:hover .signature-short { display: none; }
.hero-signature:hover .signature-full { display: inline; }
.hero-image { position: absolute; inset: 0; }
.hero-image img { width: 100%; height: 100%; object-fit: cover; }
.hero-image-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent 60%);
}
.hero-location {
    position: absolute;
    left: 0;
    top: 40%;
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding: 1.5rem 1.5rem 1.5rem 3rem;
    background: var(--brand-dark);
    border-radius: 0 999px 999px 0;
}
.hero-globe { font-size: 2rem; }
.hero-tagline {
    position: absolute;
    right: 8%;
    top: 38%;
    font-size: clamp(20px, 2.5vw, 32px);
}
.hero-scroll-hint {
    position: absolute;
    right: 8%;
    top: 30%;
    font-size: 1.5rem;
}
.hero-marquee {
    position: absolute;
    bottom: 4%;
    left: 0;
    width: 100%;
    overflow: hidden;
}
.hero-marquee-strip {
    white-space: nowrap;
    font-size: clamp(80px, 14vw, 220px);
    font-weight: 500;
    will-change: transform;
}

/* About */
.about-section {
    padding: 20vh 8%;
    display: grid;
    gap: 3rem;
}
.about-headline { font-size: clamp(28px, 4vw, 48px); max-width: 900px; margin: 0; }
.about-copy { display: grid; gap: 1.5rem; max-width: 640px; justify-self: end; }
.about-copy p { font-size: 1.125rem; line-height: 1.7; color: #4b5563; margin: 0; }
.reveal-block { transition: transform 0.9s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.9s ease-out; }

/* Services */
.services-section { position: relative; }
.services-sticky {
    position: sticky;
    top: 0;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}
.services-stage { position: relative; width: 88%; height: 78vh; }
.service-card {
    position: absolute;
    inset: 0;
    border-radius: 2rem;
    overflow: hidden;
    transform-origin: center top;
    will-change: transform, opacity;
}
.service-card-inner {
    display: grid;
    grid-template-columns: 1fr 1fr;
    height: 100%;
    gap: 2rem;
    padding: 3rem;
}
.service-copy h2 { font-size: clamp(28px, 3.5vw, 48px); margin: 0 0 1.5rem; }
.service-copy p { font-size: 1.125rem; line-height: 1.7; }
.service-visual { position: relative; }
.service-visual img { width: 100%; height: 100%; object-fit: cover; border-radius: 1.5rem; }
.service-number {
    position: absolute;
    right: 1.5rem;
    bottom: 1rem;
    font-size: 4rem;
    font-weight: 700;
    color: rgba(255, 255, 255, 0.8);
}
.details-pill {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1.5rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.15);
    border: 1px solid rgba(255, 255, 255, 0.3);
    color: inherit;
    font-size: 0.875rem;
}
.details-pill.dark { background: rgba(0, 0, 0, 0.7); color: white; }

/* Features */
.features-section { position: relative; width: 100%; }
.timeline-track {
    position: absolute;
    top: 0;
    left: 50%;
    width: 2px;
    height: 100%;
    background: #d1d5db;
    transform: translateX(-50%);
    z-index: 1;
}
.timeline-fill {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    background: linear-gradient(to bottom, var(--brand-primary), var(--brand-dark));
}
.timeline-dot {
    position: absolute;
    left: 50%;
    width: 1rem;
    height: 1rem;
    border-radius: 50%;
    background: var(--brand-primary);
    transform: translateX(-50%);
    box-shadow: 0 0 15px rgba(77, 100, 255, 0.6);
    z-index: 3;
}
.feature-slide {
    display: grid;
    grid-template-columns: 1fr 8px 1fr;
    align-items: center;
    height: 100vh;
    padding: 0 6%;
}
.feature-slide.reversed .slide-img { order: 3; }
.feature-slide.reversed .slide-text { order: 1; }
.slide-divider { order: 2; width: 2px; height: 60%; margin: 0 auto; background: #d1d5db; }
.slide-img, .slide-text { transition: transform 1s cubic-bezier(0.22, 1, 0.36, 1), opacity 1s ease-out; }
.slide-img { display: flex; justify-content: center; }
.slide-img img {
    width: 90%;
    max-width: 500px;
    height: 400px;
    object-fit: cover;
    border-radius: 1rem;
    box-shadow: 0 8px 32px rgba(77, 100, 255, 0.15);
}
.slide-text { padding: 0 2.5rem; order: 3; }
.slide-text h2 { font-size: clamp(32px, 5vw, 56px); margin: 0 0 1.5rem; }
.slide-text p { font-size: 1.125rem; line-height: 1.7; color: #4b5563; max-width: 480px; }
.highlight { color: var(--brand-primary); }

/* Modal */
.modal-trigger { background: none; border: none; padding: 0; cursor: pointer; color: inherit; }
.modal-backdrop { position: fixed; inset: 0; z-index: 900; background: rgba(0, 0, 0, 0.6); backdrop-filter: blur(4px); }
.modal-frame {
    position: fixed;
    inset: 0;
    z-index: 901;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.modal-panel {
    position: relative;
    width: 100%;
    max-width: 42rem;
    max-height: 85vh;
    overflow-y: auto;
    padding: 2.5rem;
    border-radius: 1.5rem;
    background: rgba(28, 29, 32, 0.92);
    color: white;
}
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.3);
    background: transparent;
    color: white;
    cursor: pointer;
}
.modal-rule { height: 1px; margin: 1.5rem 0; background: rgba(255, 255, 255, 0.2); }
.detail-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; }
.detail-list li { display: flex; gap: 0.75rem; line-height: 1.6; }
.detail-bullet { color: rgba(255, 255, 255, 0.6); }

/* Contact */
.contact-section { position: relative; background: var(--brand-dark); color: white; padding: 12vh 8% 2rem; }
.contact-heading-row { display: flex; align-items: center; gap: 1.5rem; }
.contact-avatar { width: 5rem; height: 5rem; border-radius: 50%; object-fit: cover; }
.contact-heading { font-size: clamp(40px, 7vw, 96px); margin: 0; }
.contact-divider { position: relative; margin: 4rem 0; }
.contact-line {
    height: 1px;
    background: rgba(255, 255, 255, 0.25);
    transform: scaleX(0);
    transform-origin: left;
    transition: transform 1.2s cubic-bezier(0.22, 1, 0.36, 1);
}
.contact-line.revealed { transform: scaleX(1); }
.magnetic-slot { position: absolute; right: 10%; top: 50%; }
.magnetic-button {
    width: 11rem;
    height: 11rem;
    border-radius: 50%;
    border: none;
    background: var(--brand-primary);
    color: white;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 0.3s ease-out;
}
.magnetic-button.compact { width: auto; height: auto; padding: 1rem 2rem; border-radius: 999px; }
.contact-links { display: flex; flex-wrap: wrap; gap: 1rem; }
.pill-link {
    padding: 1.25rem 2rem;
    border-radius: 999px;
    border: 1px solid rgba(255, 255, 255, 0.25);
    color: white;
    text-decoration: none;
}
.contact-footer {
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1rem;
    margin-top: 6rem;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.6);
}
.footer-meta, .footer-socials { display: flex; gap: 2rem; }
.footer-socials a { color: white; text-decoration: none; }
.contact-overlay {
    position: fixed;
    inset: 0;
    z-index: 950;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.85);
}
.contact-overlay-inner { position: relative; width: 100%; max-width: 36rem; padding: 2rem; }
.contact-overlay-close {
    position: absolute;
    top: 0;
    right: 0;
    background: none;
    border: none;
    color: white;
    font-size: 2rem;
    cursor: pointer;
}
.form-field { display: grid; gap: 0.5rem; margin-bottom: 1.25rem; }
.form-field input, .form-field textarea {
    padding: 0.875rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: rgba(255, 255, 255, 0.05);
    color: white;
    font: inherit;
}
.form-actions { display: flex; justify-content: flex-end; }
.form-submit:disabled { opacity: 0.5; cursor: not-allowed; }
.form-status { margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.75rem; }
.form-status.success { background: rgba(34, 197, 94, 0.15); color: #86efac; }
.form-status.error { background: rgba(239, 68, 68, 0.15); color: #fca5a5; }

.not-found { min-height: 100vh; display: grid; place-content: center; text-align: center; gap: 1rem; }

@media (max-width: 900px) {
    .service-card-inner, .feature-slide { grid-template-columns: 1fr; height: auto; padding: 80px 6%; }
    .feature-slide.reversed .slide-img, .feature-slide.reversed .slide-text, .slide-text { order: unset; text-align: center; }
    .slide-divider, .timeline-track, .timeline-dot { display: none; }
    .magnetic-slot { position: static; margin-top: 2rem; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal-block, .slide-img, .slide-text, .contact-line, .magnetic-button { transition: none; }
}
"#;
